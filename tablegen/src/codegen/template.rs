//! Named-slot templates
//!
//! A template is parsed once into literal text and `{slot}` references.
//! Rendering walks the parsed segments and writes each slot's value exactly
//! once, so a value that itself contains `{table_name}` is never expanded.

use std::path::Path;
use tracing::warn;

use crate::error::{CodegenError, Result};

/// Built-in model file template
pub const DEFAULT_TEMPLATE: &str = r#"package {package_name}
{imports}
// {table_comment}
type {table_name_title} struct {
{table_fields}}

func (table *{table_name_title}) TableName() string {
	return "{table_name}"
}

func (table *{table_name_title}) Get(id int) (*{table_name_title}, error) {
	var m {table_name_title}
	return &m, nil
}

func (table *{table_name_title}) List() ([]*{table_name_title}, int64, error) {
	var list []*{table_name_title}
	var count int64
	var err error
	return list, count, err
}

func (table *{table_name_title}) Save(m *{table_name_title}) error {
	return nil
}

func (table *{table_name_title}) Delete(m *{table_name_title}) error {
	return nil
}
"#;

/// A value a template can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    PackageName,
    Imports,
    TableComment,
    TableFields,
    /// Comment line plus the whole struct declaration
    TableStruct,
    TableNameTitle,
    TableName,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Slot::PackageName,
        Slot::Imports,
        Slot::TableComment,
        Slot::TableFields,
        Slot::TableStruct,
        Slot::TableNameTitle,
        Slot::TableName,
    ];

    /// Name written between the braces
    pub fn name(self) -> &'static str {
        match self {
            Slot::PackageName => "package_name",
            Slot::Imports => "imports",
            Slot::TableComment => "table_comment",
            Slot::TableFields => "table_fields",
            Slot::TableStruct => "table_struct",
            Slot::TableNameTitle => "table_name_title",
            Slot::TableName => "table_name",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

/// Values substituted for each slot of one table
#[derive(Debug, Clone, Default)]
pub struct SlotValues {
    pub package_name: String,
    pub imports: String,
    pub table_comment: String,
    pub table_fields: String,
    pub table_struct: String,
    pub table_name_title: String,
    pub table_name: String,
}

impl SlotValues {
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::PackageName => &self.package_name,
            Slot::Imports => &self.imports,
            Slot::TableComment => &self.table_comment,
            Slot::TableFields => &self.table_fields,
            Slot::TableStruct => &self.table_struct,
            Slot::TableNameTitle => &self.table_name_title,
            Slot::TableName => &self.table_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A parsed template
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text.
    ///
    /// Braces that do not enclose a known slot name are literal text. The
    /// template must reference `{table_fields}` or `{table_struct}`.
    pub fn parse(text: &str) -> Result<Self> {
        let template = Self {
            segments: parse_segments(text),
        };
        if !template.uses(Slot::TableFields) && !template.uses(Slot::TableStruct) {
            return Err(CodegenError::TemplateError(
                "template must reference {table_fields} or {table_struct}".into(),
            ));
        }
        Ok(template)
    }

    /// The built-in template
    pub fn builtin() -> Self {
        Self {
            segments: parse_segments(DEFAULT_TEMPLATE),
        }
    }

    /// Read and parse a template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::TemplateError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&text).map_err(|e| match e {
            CodegenError::TemplateError(msg) => {
                CodegenError::TemplateError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Whether the template references `slot`
    pub fn uses(&self, slot: Slot) -> bool {
        self.segments.contains(&Segment::Slot(slot))
    }

    /// Substitute every slot in a single pass
    pub fn render(&self, values: &SlotValues) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => out.push_str(values.get(*slot)),
            }
        }
        out
    }
}

fn looks_like_slot(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn parse_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        literal.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let slot = after.find('}').and_then(|close| {
            let name = &after[..close];
            match Slot::from_name(name) {
                Some(slot) => Some((slot, close)),
                None => {
                    if looks_like_slot(name) {
                        warn!("Unknown template slot {{{}}} left as is", name);
                    }
                    None
                }
            }
        });

        match slot {
            Some((slot, close)) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Slot(slot));
                rest = &after[close + 1..];
            }
            None => {
                literal.push('{');
                rest = after;
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

//! Naming utilities for code generation

use std::path::Path;

use crate::config::defaults;

/// Upper-case the first character of every `_`-separated segment and join
/// the segments: `order_item` -> `OrderItem`, `id` -> `Id`.
///
/// Only the first character of a segment is touched, so `userID` stays
/// `UserID`. Applying it again to its own output changes nothing.
pub fn title(name: &str) -> String {
    name.split('_').map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Struct tag binding a field to its column for `encoding/json` and GORM
pub fn field_tag(column: &str) -> String {
    let column = escape_tag_value(column);
    format!("`json:\"{0}\" gorm:\"column:{0}\"`", column)
}

// Tag values live in a Go raw string, so a backtick cannot be expressed
// and is dropped; quotes and backslashes are escaped for reflect.StructTag.
fn escape_tag_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '`' => {}
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Flatten a catalog comment onto one line so it stays behind its `//`
pub fn sanitize_comment(comment: &str) -> String {
    comment
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}

/// Package clause for files written to `output_dir`: its last path segment,
/// else the canonical directory's name, else `model`.
pub fn package_name_for(output_dir: &Path) -> String {
    let segment = output_dir
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .or_else(|| {
            output_dir
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|s| s.to_string_lossy().into_owned()))
        });

    segment
        .map(|s| to_identifier(&s))
        .filter(|s| !s.is_empty() && !s.starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or_else(|| defaults::PACKAGE_NAME.to_string())
}

fn to_identifier(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        assert_eq!(title("order_item"), "OrderItem");
        assert_eq!(title("id"), "Id");
        assert_eq!(title("user_id"), "UserId");
        assert_eq!(title("user"), "User");
        assert_eq!(title("userID"), "UserID");
        assert_eq!(title("_private__x"), "PrivateX");
        assert_eq!(title(""), "");
    }

    #[test]
    fn test_title_is_idempotent() {
        for name in ["order_item", "id", "user_id", "a_b_c", "already_Title", "x1_y2"] {
            let once = title(name);
            assert_eq!(title(&once), once);
        }
    }

    #[test]
    fn test_field_tag() {
        assert_eq!(field_tag("user_name"), r#"`json:"user_name" gorm:"column:user_name"`"#);
        assert_eq!(field_tag("we\"ird`"), r#"`json:"we\"ird" gorm:"column:we\"ird"`"#);
    }

    #[test]
    fn test_sanitize_comment() {
        assert_eq!(sanitize_comment("line one\nline two\r\nthree"), "line one line two three");
        assert_eq!(sanitize_comment("{table_name}"), "{table_name}");
    }

    #[test]
    fn test_package_name_for() {
        assert_eq!(package_name_for(Path::new("usr/workspace/model")), "model");
        assert_eq!(package_name_for(Path::new("usr/workspace/model/")), "model");
        assert_eq!(package_name_for(Path::new("out/my-models")), "my_models");
        assert_eq!(package_name_for(Path::new("out/2024")), "model");
    }

    #[test]
    fn test_package_name_for_current_dir() {
        let dir = tempfile::Builder::new().prefix("entity").tempdir().unwrap();
        let here = dir.path().join(".");
        let name = package_name_for(&here);
        assert!(name.starts_with("entity"), "{}", name);
    }
}

//! Writes rendered model files, never overwriting existing ones

use serde::Serialize;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::catalog::TableGroup;
use crate::error::{CodegenError, Result};

use super::renderer::Renderer;

/// What happened to one table's file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TableOutcome {
    Written { path: PathBuf },
    /// The destination already existed and was left untouched
    Skipped { path: PathBuf },
    /// Dry run: would have been written
    Planned { path: PathBuf },
    Failed { path: PathBuf, reason: String },
}

impl TableOutcome {
    pub fn path(&self) -> &Path {
        match self {
            TableOutcome::Written { path }
            | TableOutcome::Skipped { path }
            | TableOutcome::Planned { path }
            | TableOutcome::Failed { path, .. } => path,
        }
    }
}

/// Outcomes of one run, in table order
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmitReport {
    pub tables: Vec<(String, TableOutcome)>,
}

impl EmitReport {
    fn count(&self, pred: impl Fn(&TableOutcome) -> bool) -> usize {
        self.tables.iter().filter(|(_, o)| pred(o)).count()
    }

    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, TableOutcome::Written { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, TableOutcome::Skipped { .. }))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, TableOutcome::Planned { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TableOutcome::Failed { .. }))
    }

    pub fn outcome(&self, table: &str) -> Option<&TableOutcome> {
        self.tables.iter().find(|(t, _)| t == table).map(|(_, o)| o)
    }
}

impl fmt::Display for EmitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tables: {} written, {} skipped, {} planned, {} failed",
            self.tables.len(),
            self.written(),
            self.skipped(),
            self.planned(),
            self.failed()
        )
    }
}

/// Places one file per table in an existing directory
pub struct Emitter {
    output_dir: PathBuf,
    extension: String,
    dry_run: bool,
}

impl Emitter {
    pub fn new(output_dir: impl AsRef<Path>, extension: &str) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            extension: extension.to_string(),
            dry_run: false,
        }
    }

    /// Only compute outcomes; nothing is created
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The output directory must exist before anything else happens
    pub fn check_output_dir(&self) -> Result<()> {
        if !self.output_dir.is_dir() {
            return Err(CodegenError::OutputDirNotFound(self.output_dir.clone()));
        }
        Ok(())
    }

    /// `<output_dir>/<table>.<ext>`
    pub fn destination(&self, table: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", table, self.extension))
    }

    /// Emit every table of `group`. A table whose file cannot be written is
    /// reported as failed and the remaining tables are still processed.
    pub fn emit(&self, group: &TableGroup, renderer: &Renderer<'_>) -> EmitReport {
        let mut report = EmitReport::default();

        for (table, fields) in group.iter() {
            let path = self.destination(table);

            let outcome = if !is_plain_file_name(table) {
                error!("Refusing to write table {:?}: not a plain file name", table);
                TableOutcome::Failed {
                    path,
                    reason: "table name is not a plain file name".into(),
                }
            } else if path.exists() {
                debug!("{} exists, skipping", path.display());
                TableOutcome::Skipped { path }
            } else if self.dry_run {
                debug!("Would write {}", path.display());
                TableOutcome::Planned { path }
            } else {
                let content = renderer.render(table, fields);
                match write_new(&path, &content) {
                    Ok(()) => {
                        info!("Wrote {} ({} fields)", path.display(), fields.len());
                        TableOutcome::Written { path }
                    }
                    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                        debug!("{} appeared meanwhile, skipping", path.display());
                        TableOutcome::Skipped { path }
                    }
                    Err(e) => {
                        error!("Failed to write {}: {}", path.display(), e);
                        TableOutcome::Failed {
                            path,
                            reason: e.to_string(),
                        }
                    }
                }
            };

            report.tables.push((table.to_string(), outcome));
        }

        report
    }
}

fn is_plain_file_name(table: &str) -> bool {
    !table.is_empty() && table != "." && table != ".." && !table.contains(['/', '\\'])
}

fn write_new(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Err(e) = file.write_all(content.as_bytes()) {
        drop(file);
        // A half-written file would be skipped forever after
        let _ = fs::remove_file(path);
        return Err(e);
    }
    Ok(())
}

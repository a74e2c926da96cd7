//! tablegen: Generate Go model files from MySQL or PostgreSQL catalog metadata
//!
//! This crate provides both a CLI tool and a library. It reads column
//! metadata from `information_schema` (MySQL) or `pg_catalog` (PostgreSQL)
//! and writes one file per table containing:
//!
//! - A struct with one field per column, tagged for `encoding/json` and GORM
//! - A `TableName()` accessor and empty `Get`/`List`/`Save`/`Delete` stubs
//!
//! Existing files are never overwritten, so hand edits survive re-runs.
//!
//! # Library Usage
//!
//! ```rust,ignore
//! use tablegen::{CodegenBuilder, Dialect};
//!
//! # async fn run() -> tablegen::Result<()> {
//! let report = CodegenBuilder::new(Dialect::Mysql, "shop")
//!     .user("root")
//!     .password("secret")
//!     .include_tables(&["user", "order_item"])
//!     .output_dir("./model")
//!     .generate()
//!     .await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! tablegen --dialect postgres --database shop --output ./model generate
//! ```

pub mod catalog;
pub mod codegen;
pub mod config;
pub mod error;
pub mod typemap;

use std::path::Path;

use tracing::{debug, info};

pub use catalog::{ColumnRow, FieldDescriptor, SchemaSource, TableGroup};
pub use codegen::{EmitReport, TableOutcome, Template};
pub use config::{CodegenConfig, Dialect};
pub use error::{CodegenError, Result};
pub use typemap::GoType;

use codegen::{Emitter, Renderer};

/// Main entry point for code generation
///
/// Checks the output directory, connects to the configured catalog and
/// emits one file per table.
pub async fn generate(config: &CodegenConfig) -> Result<EmitReport> {
    config.validate()?;
    let template = load_template(config)?;
    let emitter = emitter_for(config);
    emitter.check_output_dir()?;

    let source = catalog::connect(config).await?;
    run(source.as_ref(), config, &template, &emitter).await
}

/// Like [`generate`], reading from an already constructed source
pub async fn generate_with_source(
    source: &dyn SchemaSource,
    config: &CodegenConfig,
) -> Result<EmitReport> {
    config.validate()?;
    let template = load_template(config)?;
    let emitter = emitter_for(config);
    emitter.check_output_dir()?;

    run(source, config, &template, &emitter).await
}

async fn run(
    source: &dyn SchemaSource,
    config: &CodegenConfig,
    template: &Template,
    emitter: &Emitter,
) -> Result<EmitReport> {
    let group = read_tables(source, config).await?;

    let package_name = package_name(config);
    debug!("Package name: {}", package_name);
    let renderer = Renderer::new(template, source.type_map(), &package_name);

    info!(
        "Emitting {} tables into {}",
        group.len(),
        config.output_dir.display()
    );
    let report = emitter.emit(&group, &renderer);
    info!("Code generation complete: {}", report);
    Ok(report)
}

/// Read the configured tables and group their columns
pub async fn read_tables(source: &dyn SchemaSource, config: &CodegenConfig) -> Result<TableGroup> {
    let schema = config.effective_schema();
    let requested = config.requested_tables();
    info!("Reading {} catalog, schema {:?}", source.dialect(), schema);

    let rows = source.list_columns(&schema, &requested).await?;
    let excluded = config.excluded_tables();
    let group: TableGroup = rows
        .into_iter()
        .filter(|row| !excluded.contains(&row.table_name))
        .collect();

    info!("Found {} tables ({} columns)", group.len(), group.field_count());
    for name in &requested {
        if group.get(name).is_none() && !excluded.contains(name) {
            debug!("Requested table {} has no columns in the catalog", name);
        }
    }
    Ok(group)
}

/// The configured template file, or the built-in template
pub fn load_template(config: &CodegenConfig) -> Result<Template> {
    match &config.template_file {
        Some(path) => {
            info!("Using template {}", path.display());
            Template::from_file(path)
        }
        None => Ok(Template::builtin()),
    }
}

/// Package clause for generated files
pub fn package_name(config: &CodegenConfig) -> String {
    match &config.package_name {
        Some(name) => name.clone(),
        None => codegen::package_name_for(&config.output_dir),
    }
}

fn emitter_for(config: &CodegenConfig) -> Emitter {
    Emitter::new(&config.output_dir, &config.file_extension).dry_run(config.dry_run)
}

/// Builder for configuring a run programmatically
pub struct CodegenBuilder {
    config: CodegenConfig,
}

impl CodegenBuilder {
    /// Create a new builder for the given dialect and database
    pub fn new(dialect: Dialect, database: &str) -> Self {
        Self {
            config: CodegenConfig::new(dialect, database),
        }
    }

    pub fn host(mut self, host: &str) -> Self {
        self.config.host = host.to_string();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = Some(port);
        self
    }

    pub fn user(mut self, user: &str) -> Self {
        self.config.user = user.to_string();
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.config.password = password.to_string();
        self
    }

    /// Schema (MySQL) or namespace (PostgreSQL) to read
    pub fn schema(mut self, schema: &str) -> Self {
        self.config.schema = Some(schema.to_string());
        self
    }

    /// Set tables to include
    pub fn include_tables(mut self, tables: &[&str]) -> Self {
        self.config.include_tables = tables.join(",");
        self
    }

    /// Set tables to exclude
    pub fn exclude_tables(mut self, tables: &[&str]) -> Self {
        self.config.exclude_tables = tables.join(",");
        self
    }

    /// Emit models for views as well as tables
    pub fn include_views(mut self) -> Self {
        self.config.include_views = true;
        self
    }

    /// Set the output directory; it must already exist
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn package_name(mut self, name: &str) -> Self {
        self.config.package_name = Some(name.to_string());
        self
    }

    pub fn file_extension(mut self, ext: &str) -> Self {
        self.config.file_extension = ext.to_string();
        self
    }

    pub fn template_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config.template_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable dry run mode (report without writing files)
    pub fn dry_run(mut self) -> Self {
        self.config.dry_run = true;
        self
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    pub fn into_config(self) -> CodegenConfig {
        self.config
    }

    /// Connect and generate
    pub async fn generate(self) -> Result<EmitReport> {
        generate(&self.config).await
    }
}

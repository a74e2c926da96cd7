//! Configuration settings for tablegen

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tablegen_db::ConnectOptions;

use super::defaults;
use crate::error::{CodegenError, Result};
use crate::typemap::{self, TypeMap};

/// Catalog engine family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Mysql,
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Postgres => "postgres",
        }
    }

    /// Port used when none is configured
    pub fn default_port(self) -> u16 {
        match self {
            Dialect::Mysql => defaults::MYSQL_PORT,
            Dialect::Postgres => defaults::POSTGRES_PORT,
        }
    }

    /// Native-type table for this engine
    pub fn type_map(self) -> &'static TypeMap {
        match self {
            Dialect::Mysql => &typemap::MYSQL,
            Dialect::Postgres => &typemap::POSTGRES,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::Mysql),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            other => Err(CodegenError::ConfigError(format!(
                "unknown dialect `{}` (expected mysql or postgres)",
                other
            ))),
        }
    }
}

/// Main configuration struct for code generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Catalog engine
    #[serde(default)]
    pub dialect: Dialect,

    /// Catalog host
    #[serde(default = "default_host")]
    pub host: String,

    /// Catalog port; the dialect's well-known port when unset
    #[serde(default)]
    pub port: Option<u16>,

    /// Catalog user
    #[serde(default = "default_user")]
    pub user: String,

    /// Catalog password
    #[serde(default)]
    pub password: String,

    /// Database to connect to
    #[serde(default)]
    pub database: String,

    /// Schema to read. MySQL: the database name. PostgreSQL: every user
    /// namespace when unset or blank.
    #[serde(default)]
    pub schema: Option<String>,

    /// Tables to include (comma-separated, or "*" for all)
    #[serde(default = "default_include_tables")]
    pub include_tables: String,

    /// Tables to exclude (comma-separated)
    #[serde(default = "default_exclude_tables")]
    pub exclude_tables: String,

    /// Also emit models for views
    #[serde(default = "default_include_views")]
    pub include_views: bool,

    /// Directory the model files are written to; must already exist
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Package clause of generated files; derived from `output_dir` when unset
    #[serde(default)]
    pub package_name: Option<String>,

    /// Extension of generated files, without the dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Template replacing the built-in one
    #[serde(default)]
    pub template_file: Option<PathBuf>,

    /// Dry run mode - report what would be written without writing
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_host() -> String {
    defaults::HOST.to_string()
}
fn default_user() -> String {
    defaults::USER.to_string()
}
fn default_include_tables() -> String {
    defaults::INCLUDE_TABLES.to_string()
}
fn default_exclude_tables() -> String {
    defaults::EXCLUDE_TABLES.to_string()
}
fn default_include_views() -> bool {
    defaults::INCLUDE_VIEWS
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_DIR)
}
fn default_file_extension() -> String {
    defaults::FILE_EXTENSION.to_string()
}
fn default_dry_run() -> bool {
    defaults::DRY_RUN
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            host: default_host(),
            port: None,
            user: default_user(),
            password: String::new(),
            database: String::new(),
            schema: None,
            include_tables: default_include_tables(),
            exclude_tables: default_exclude_tables(),
            include_views: default_include_views(),
            output_dir: default_output_dir(),
            package_name: None,
            file_extension: default_file_extension(),
            template_file: None,
            dry_run: default_dry_run(),
            log_level: None,
        }
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn is_package_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl CodegenConfig {
    /// Create a default config for the given dialect and database
    pub fn new(dialect: Dialect, database: &str) -> Self {
        Self {
            dialect,
            database: database.to_string(),
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CodegenConfig = toml::from_str(&content).map_err(|e| {
            CodegenError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            builder = builder.add_source(File::with_name(defaults::CONFIG_FILE).required(false));
        }

        // TABLEGEN_OUTPUT_DIR, TABLEGEN_DIALECT, ...
        builder = builder.add_source(
            Environment::with_prefix(defaults::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: CodegenConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Port to connect to
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.dialect.default_port())
    }

    /// Schema (MySQL database / PostgreSQL namespace) to read.
    ///
    /// An empty string for PostgreSQL reads every non-system namespace.
    pub fn effective_schema(&self) -> String {
        match self.schema.as_deref().map(str::trim) {
            Some(schema) if !schema.is_empty() => schema.to_string(),
            _ => match self.dialect {
                Dialect::Mysql => self.database.clone(),
                Dialect::Postgres => String::new(),
            },
        }
    }

    /// Connection parameters for the catalog pool
    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions::new(&self.host, self.effective_port(), &self.user, &self.database)
            .password(&self.password)
    }

    /// Explicitly requested tables, in configuration order; empty means all
    pub fn requested_tables(&self) -> Vec<String> {
        let include = self.include_tables.trim();
        if include.is_empty() || include == "*" {
            return Vec::new();
        }
        let mut seen = HashSet::new();
        split_list(include)
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    /// Tables dropped after the catalog read
    pub fn excluded_tables(&self) -> HashSet<String> {
        split_list(&self.exclude_tables).map(str::to_string).collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(CodegenError::ValidationError("database is required".into()));
        }

        if self.port == Some(0) {
            return Err(CodegenError::ValidationError("port must not be 0".into()));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(CodegenError::ValidationError(
                "output_dir is required".into(),
            ));
        }

        let ext = &self.file_extension;
        if ext.is_empty() || ext.contains(['.', '/', '\\']) {
            return Err(CodegenError::ValidationError(format!(
                "file_extension must be a bare extension like `go`, got `{}`",
                ext
            )));
        }

        if let Some(name) = &self.package_name {
            if !is_package_ident(name) {
                return Err(CodegenError::ValidationError(format!(
                    "package_name `{}` is not a valid identifier",
                    name
                )));
            }
        }

        Ok(())
    }
}

//! CLI entry point for tablegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tablegen::codegen::DEFAULT_TEMPLATE;
use tablegen::config::{CodegenConfig, Dialect};
use tablegen::{GoType, TableGroup, TableOutcome};

#[derive(Parser)]
#[command(name = "tablegen")]
#[command(about = "Generate Go model files from MySQL or PostgreSQL catalog metadata")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog dialect: mysql or postgres
    #[arg(long)]
    dialect: Option<Dialect>,

    /// Database host
    #[arg(long)]
    host: Option<String>,

    /// Database port (defaults to 3306 / 5432 by dialect)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database user
    #[arg(short, long)]
    user: Option<String>,

    /// Database password
    #[arg(long)]
    password: Option<String>,

    /// Database name
    #[arg(short, long)]
    database: Option<String>,

    /// Schema to read (MySQL: the database, PostgreSQL: all user namespaces)
    #[arg(short, long)]
    schema: Option<String>,

    /// Tables to include, comma-separated ("*" for all)
    #[arg(short, long)]
    tables: Option<String>,

    /// Tables to exclude, comma-separated
    #[arg(long)]
    exclude: Option<String>,

    /// Emit models for views as well as tables
    #[arg(long)]
    include_views: bool,

    /// Output directory (must exist)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Package name of generated files (defaults to the output directory name)
    #[arg(long)]
    package: Option<String>,

    /// Template file replacing the built-in template
    #[arg(long)]
    template_file: Option<PathBuf>,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one model file per table (default)
    Generate,
    /// Inspect the catalog (show tables, columns and mapped types)
    Inspect {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in template
    Template,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Template) = cli.command {
        print!("{}", DEFAULT_TEMPLATE);
        return Ok(());
    }

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = CodegenConfig::load(cli.config.as_deref())?;

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    // stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    // Apply CLI overrides
    if let Some(dialect) = cli.dialect {
        config.dialect = dialect;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = Some(port);
    }
    if let Some(user) = cli.user {
        config.user = user;
    }
    if let Some(password) = cli.password {
        config.password = password;
    }
    if let Some(database) = cli.database {
        config.database = database;
    }
    if let Some(schema) = cli.schema {
        config.schema = Some(schema);
    }
    if let Some(tables) = cli.tables {
        config.include_tables = tables;
    }
    if let Some(exclude) = cli.exclude {
        config.exclude_tables = exclude;
    }
    if cli.include_views {
        config.include_views = true;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if let Some(package) = cli.package {
        config.package_name = Some(package);
    }
    if let Some(template_file) = cli.template_file {
        config.template_file = Some(template_file);
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    // Validate configuration
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Some(Commands::Inspect { json }) => runtime.block_on(inspect_catalog(&config, json)),
        _ => {
            info!(
                "Generating {} models from {}",
                config.dialect, config.database
            );
            let report = runtime.block_on(tablegen::generate(&config))?;

            if config.dry_run {
                println!("Dry run mode - would generate:");
                for (table, outcome) in &report.tables {
                    if let TableOutcome::Planned { path } = outcome {
                        println!("  {}: {}", table, path.display());
                    }
                }
            }
            if report.failed() > 0 {
                anyhow::bail!("{} of {} tables failed", report.failed(), report.tables.len());
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct InspectedTable<'a> {
    name: &'a str,
    comment: &'a str,
    columns: Vec<InspectedColumn<'a>>,
}

#[derive(Serialize)]
struct InspectedColumn<'a> {
    name: &'a str,
    native_type: &'a str,
    go_type: GoType,
    not_null: bool,
    comment: &'a str,
}

async fn inspect_catalog(config: &CodegenConfig, json: bool) -> Result<()> {
    let source = tablegen::catalog::connect(config).await?;
    let group = tablegen::read_tables(source.as_ref(), config).await?;
    let tables = describe(&group, |native| source.map_type(native));

    if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    println!("Found {} tables ({}):\n", tables.len(), config.dialect);
    for table in &tables {
        println!("Table: {}", table.name);
        if !table.comment.is_empty() {
            println!("  Comment: {}", table.comment);
        }
        println!("  Columns:");
        for col in &table.columns {
            let nullable = if col.not_null { "NOT NULL" } else { "NULL" };
            println!(
                "    - {} {} -> {} {}",
                col.name, col.native_type, col.go_type, nullable
            );
            if !col.comment.is_empty() {
                println!("      // {}", col.comment);
            }
        }
        println!();
    }

    Ok(())
}

fn describe<'a>(group: &'a TableGroup, map_type: impl Fn(&str) -> GoType) -> Vec<InspectedTable<'a>> {
    group
        .iter()
        .map(|(name, fields)| InspectedTable {
            name,
            comment: group.comment(name).unwrap_or_default(),
            columns: fields
                .iter()
                .map(|f| InspectedColumn {
                    name: &f.name,
                    native_type: &f.native_type,
                    go_type: map_type(&f.native_type),
                    not_null: f.not_null,
                    comment: &f.comment,
                })
                .collect(),
        })
        .collect()
}

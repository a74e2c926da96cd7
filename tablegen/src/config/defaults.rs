//! Default configuration values - single source of truth

/// Default catalog host
pub const HOST: &str = "127.0.0.1";

/// Default MySQL port
pub const MYSQL_PORT: u16 = 3306;

/// Default PostgreSQL port
pub const POSTGRES_PORT: u16 = 5432;

/// Default catalog user
pub const USER: &str = "root";

/// Default include tables pattern (all tables)
pub const INCLUDE_TABLES: &str = "*";

/// Default exclude tables pattern (none)
pub const EXCLUDE_TABLES: &str = "";

/// Default output directory for generated model files
pub const OUTPUT_DIR: &str = "./model";

/// Default extension of generated files, without the dot
pub const FILE_EXTENSION: &str = "go";

/// Package name used when none can be derived from the output directory
pub const PACKAGE_NAME: &str = "model";

/// Config file picked up from the working directory when `--config` is absent
pub const CONFIG_FILE: &str = "tablegen";

/// Prefix of environment variable overrides (`TABLEGEN_OUTPUT_DIR`, ...)
pub const ENV_PREFIX: &str = "TABLEGEN";

/// Views are skipped unless asked for
pub const INCLUDE_VIEWS: bool = false;

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;

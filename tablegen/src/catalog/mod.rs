//! Catalog introspection
//!
//! A [`SchemaSource`] knows how to ask one database engine for its column
//! metadata and how that engine's native types map to Go. [`connect`] picks
//! the right one for the configured dialect.

mod aggregate;
mod metadata;
mod mysql;
mod postgres;
#[cfg(test)]
pub(crate) mod testing;

pub use aggregate::TableGroup;
pub use metadata::{ColumnRow, FieldDescriptor};
pub use mysql::MySqlSource;
pub use postgres::PostgresSource;

use async_trait::async_trait;
use tablegen_db::{MySqlPool, PgPool, Pool, Query};
use tracing::{debug, info};

use crate::config::{CodegenConfig, Dialect};
use crate::error::{CodegenError, Result};
use crate::typemap::{GoType, TypeMap};

/// Column metadata reader for one database engine
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Engine this source talks to
    fn dialect(&self) -> Dialect;

    /// Read every column of every table in `schema`, restricted to `tables`
    /// unless it is empty. Rows come back ordered by table, then column
    /// position.
    async fn list_columns(&self, schema: &str, tables: &[String]) -> Result<Vec<ColumnRow>>;

    fn type_map(&self) -> &'static TypeMap {
        self.dialect().type_map()
    }

    /// Go type for a native column type; unknown types map to `string`
    fn map_type(&self, native_type: &str) -> GoType {
        self.type_map().map(native_type)
    }
}

/// Open a pool for the configured dialect and verify it answers.
pub async fn connect(config: &CodegenConfig) -> Result<Box<dyn SchemaSource>> {
    let options = config.connect_options();
    info!(
        "Connecting to {} at {}:{}/{}",
        config.dialect, options.host, options.port, options.database
    );

    match config.dialect {
        Dialect::Mysql => {
            let pool = MySqlPool::from_options(&options);
            probe(&pool).await?;
            Ok(Box::new(
                MySqlSource::new(pool).include_views(config.include_views),
            ))
        }
        Dialect::Postgres => {
            let pool = PgPool::from_options(&options)
                .map_err(|e| CodegenError::Connection(e.to_string()))?;
            probe(&pool).await?;
            Ok(Box::new(
                PostgresSource::new(pool).include_views(config.include_views),
            ))
        }
    }
}

async fn probe<P: Pool>(pool: &P) -> Result<()> {
    let one: i64 = Query::new("SELECT 1")
        .fetch_scalar(pool)
        .await
        .map_err(|e| CodegenError::Connection(e.to_string()))?;
    debug!("Connection probe returned {}", one);
    Ok(())
}

/// `?, ?, ?` for MySQL
fn question_marks(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// `$first, $first+1, ...` for PostgreSQL
fn numbered_placeholders(first: usize, n: usize) -> String {
    (first..first + n)
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

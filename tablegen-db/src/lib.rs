//! tablegen-db - catalog query layer for tablegen
//!
//! A small database abstraction over `mysql_async` and `tokio-postgres`
//! used to read catalog metadata (`information_schema`, `pg_catalog`) into
//! plain Rust structs.
//!
//! # Features
//!
//! - **One Pool trait, two engines**: [`MySqlPool`] and [`PgPool`] both implement [`Pool`]
//! - **Clean Query API**: Fluent query builder with `.bind()` chaining
//! - **Derive Macro**: `#[derive(FromRow)]` for mapping rows to structs
//! - **Bound parameters**: values travel as parameters, never spliced into SQL
//!
//! # Example
//!
//! ```ignore
//! use tablegen_db::{FromRow, MySqlPool, Pool, Query};
//!
//! #[derive(FromRow)]
//! pub struct TableName {
//!     pub table_name: String,
//! }
//!
//! async fn tables(pool: &impl Pool, schema: &str) -> tablegen_db::Result<Vec<TableName>> {
//!     Query::new("SELECT TABLE_NAME AS table_name FROM information_schema.TABLES WHERE TABLE_SCHEMA = ?")
//!         .bind(schema)
//!         .fetch_all(pool)
//!         .await
//! }
//! ```

pub mod error;
pub mod mysql;
pub mod options;
pub mod postgres;
pub mod query;
pub mod traits;
pub mod value;

// Re-export the derive macro
pub use tablegen_derive::FromRow;

// Re-export main types
pub use error::{Error, Result};
pub use mysql::{MySqlPool, MySqlRow};
pub use options::ConnectOptions;
pub use postgres::{PgPool, PgRow};
pub use query::{DynamicQuery, Query};
pub use traits::{ExecuteResult, FromRow, FromValue, Pool, Row, RowExt, ToValue};
pub use value::Value;

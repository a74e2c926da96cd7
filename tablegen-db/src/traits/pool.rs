//! Pool trait for database connection pools

use crate::error::Result;
use crate::traits::FromRow;
use crate::value::Value;
use async_trait::async_trait;

/// Result of a statement execution
#[derive(Debug, Clone)]
pub struct ExecuteResult {
    /// Number of rows affected by the statement
    pub rows_affected: u64,
}

/// Trait for database connection pools.
///
/// This trait abstracts over the MySQL and PostgreSQL backends so the same
/// catalog reader can run against either engine. Parameters are bound
/// positionally; the placeholder syntax (`?` or `$n`) is the caller's
/// business since it is part of the SQL text.
#[async_trait]
pub trait Pool: Send + Sync {
    /// Execute a statement and return the number of affected rows.
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecuteResult>;

    /// Fetch all rows matching the query.
    async fn fetch_all<T: FromRow + Send>(&self, sql: &str, params: Vec<Value>) -> Result<Vec<T>>;

    /// Fetch a single optional row.
    async fn fetch_optional<T: FromRow + Send>(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<T>>;

    /// Fetch a scalar value (first column of first row).
    async fn fetch_scalar<T: crate::FromValue + Send>(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<T>;
}

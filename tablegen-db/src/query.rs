//! Query builders for tablegen-db

use crate::error::Result;
use crate::traits::{ExecuteResult, FromRow, Pool, ToValue};
use crate::value::Value;

/// A query builder over static SQL that supports fluent parameter binding.
///
/// # Example
///
/// ```ignore
/// use tablegen_db::{Query, Pool};
///
/// async fn column_count(pool: &impl Pool, schema: &str) -> tablegen_db::Result<i64> {
///     Query::new("SELECT COUNT(*) FROM information_schema.COLUMNS WHERE TABLE_SCHEMA = ?")
///         .bind(schema)
///         .fetch_scalar(pool)
///         .await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Query<'q> {
    sql: &'q str,
    params: Vec<Value>,
}

impl<'q> Query<'q> {
    /// Create a new query with the given SQL.
    pub fn new(sql: &'q str) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    /// Bind a single value to the query.
    ///
    /// Values are bound in order, replacing `?` (MySQL) or `$n` (PostgreSQL)
    /// placeholders.
    pub fn bind<T: ToValue>(mut self, value: T) -> Self {
        self.params.push(value.to_value());
        self
    }

    /// Get the SQL string.
    pub fn sql(&self) -> &str {
        self.sql
    }

    /// Get the bound parameters.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Execute the statement and return the result.
    pub async fn execute<P: Pool>(self, pool: &P) -> Result<ExecuteResult> {
        pool.execute(self.sql, self.params).await
    }

    /// Fetch all matching rows.
    pub async fn fetch_all<T: FromRow + Send, P: Pool>(self, pool: &P) -> Result<Vec<T>> {
        pool.fetch_all(self.sql, self.params).await
    }

    /// Fetch a single optional row.
    pub async fn fetch_optional<T: FromRow + Send, P: Pool>(self, pool: &P) -> Result<Option<T>> {
        pool.fetch_optional(self.sql, self.params).await
    }

    /// Fetch a scalar value (first column of first row).
    pub async fn fetch_scalar<T: crate::FromValue + Send, P: Pool>(self, pool: &P) -> Result<T> {
        pool.fetch_scalar(self.sql, self.params).await
    }
}

/// A query builder for SQL assembled at runtime.
///
/// Use this when the number of placeholders depends on input, e.g. an
/// `IN (...)` list with one placeholder per table name. Only placeholders
/// are ever appended to the SQL text; the values go through [`bind`](Self::bind)
/// or [`bind_all`](Self::bind_all).
#[derive(Debug, Clone)]
pub struct DynamicQuery {
    sql: String,
    params: Vec<Value>,
}

impl DynamicQuery {
    /// Create a new dynamic query with the given SQL.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append raw SQL text.
    pub fn push_sql(mut self, sql: &str) -> Self {
        self.sql.push_str(sql);
        self
    }

    /// Bind a single value to the query.
    pub fn bind<T: ToValue>(mut self, value: T) -> Self {
        self.params.push(value.to_value());
        self
    }

    /// Bind multiple values to the query.
    pub fn bind_all<T: ToValue>(mut self, values: &[T]) -> Self {
        for value in values {
            self.params.push(value.to_value());
        }
        self
    }

    /// Number of parameters bound so far.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Get the SQL string.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Get the bound parameters.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Execute the statement and return the result.
    pub async fn execute<P: Pool>(self, pool: &P) -> Result<ExecuteResult> {
        pool.execute(&self.sql, self.params).await
    }

    /// Fetch all matching rows.
    pub async fn fetch_all<T: FromRow + Send, P: Pool>(self, pool: &P) -> Result<Vec<T>> {
        pool.fetch_all(&self.sql, self.params).await
    }

    /// Fetch a single optional row.
    pub async fn fetch_optional<T: FromRow + Send, P: Pool>(self, pool: &P) -> Result<Option<T>> {
        pool.fetch_optional(&self.sql, self.params).await
    }

    /// Fetch a scalar value (first column of first row).
    pub async fn fetch_scalar<T: crate::FromValue + Send, P: Pool>(self, pool: &P) -> Result<T> {
        pool.fetch_scalar(&self.sql, self.params).await
    }
}

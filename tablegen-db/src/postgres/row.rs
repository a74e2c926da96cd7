//! PostgreSQL row implementation

use crate::error::{Error, Result};
use crate::traits::Row;
use crate::value::Value;
use std::collections::HashMap;

use super::types::from_pg_column;

/// A PostgreSQL database row.
///
/// Values are decoded eagerly from the `tokio_postgres::Row` so the row can
/// be read by column name like [`MySqlRow`](crate::MySqlRow).
pub struct PgRow {
    values: HashMap<String, Value>,
}

impl PgRow {
    /// Create a new PgRow from a tokio-postgres Row.
    pub fn from_pg_row(row: &tokio_postgres::Row) -> Result<Self> {
        let mut values = HashMap::with_capacity(row.len());
        for (i, column) in row.columns().iter().enumerate() {
            values.insert(column.name().to_string(), from_pg_column(row, i)?);
        }
        Ok(Self { values })
    }
}

impl Row for PgRow {
    fn get_value(&self, column: &str) -> Result<Value> {
        self.values
            .get(column)
            .cloned()
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }
}

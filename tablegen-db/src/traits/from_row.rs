//! FromRow trait for mapping database rows to Rust structs

use crate::error::Result;
use crate::value::Value;

/// A database row that can be queried by column name.
///
/// Implemented by [`MySqlRow`](crate::MySqlRow) and [`PgRow`](crate::PgRow),
/// so the same `FromRow` implementations work with both backends.
pub trait Row {
    /// Get a value from the row by column name as a dynamic Value.
    ///
    /// Returns an error if the column doesn't exist.
    fn get_value(&self, column: &str) -> Result<Value>;
}

/// Extension trait for typed access to row values.
pub trait RowExt: Row {
    /// Get a typed value from the row by column name.
    fn get<T: crate::FromValue>(&self, column: &str) -> Result<T> {
        let value = self.get_value(column)?;
        T::from_value(value)
    }
}

impl<R: Row> RowExt for R {}

/// Trait for types that can be constructed from a database row.
///
/// This trait is typically implemented via the `#[derive(FromRow)]` macro,
/// which reads every named field from the column of the same name.
///
/// # Manual Implementation
///
/// ```ignore
/// use tablegen_db::{FromRow, Row, RowExt, Result};
///
/// pub struct Column {
///     pub name: String,
///     pub not_null: bool,
/// }
///
/// impl FromRow for Column {
///     fn from_row<R: Row>(row: &R) -> Result<Self> {
///         Ok(Self {
///             name: row.get("name")?,
///             not_null: row.get("not_null")?,
///         })
///     }
///
///     fn column_names() -> &'static [&'static str] {
///         &["name", "not_null"]
///     }
/// }
/// ```
pub trait FromRow: Sized {
    /// Construct an instance of this type from a database row.
    fn from_row<R: Row>(row: &R) -> Result<Self>;

    /// Get the column names that this type reads from.
    fn column_names() -> &'static [&'static str];
}

//! Derive macro for the tablegen-db catalog layer
//!
//! Provides `#[derive(FromRow)]`, re-exported from `tablegen_db`, so users
//! normally never depend on this crate directly.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod from_row;

/// Derive macro for mapping catalog rows to Rust structs.
///
/// Generates an implementation of `tablegen_db::FromRow` that reads each
/// named field from the column of the same name.
///
/// # Attributes
///
/// - `#[tablegen(rename = "COLUMN_NAME")]` - read from a differently named column
/// - `#[tablegen(default)]` - use `Default::default()` when the column is NULL
/// - `#[tablegen(skip)]` - never read; always `Default::default()`
///
/// # Example
///
/// ```ignore
/// use tablegen_db::FromRow;
///
/// #[derive(FromRow)]
/// pub struct ColumnRow {
///     #[tablegen(rename = "TABLE_NAME")]
///     pub table_name: String,
///     #[tablegen(rename = "COLUMN_COMMENT", default)]
///     pub field_comment: String,
/// }
/// ```
#[proc_macro_derive(FromRow, attributes(tablegen))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_row::derive_from_row_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

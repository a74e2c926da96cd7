//! Row shapes produced by the catalog queries

use serde::Serialize;
use tablegen_db::FromRow;

/// One (table, column) pair as normalized by either catalog query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ColumnRow {
    pub table_name: String,
    #[tablegen(default)]
    pub table_comment: String,
    pub field_name: String,
    /// Native, dialect-specific type name
    pub field_type: String,
    #[tablegen(default)]
    pub field_comment: String,
    pub not_null: bool,
}

/// A column of a table, detached from the table name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub table_comment: String,
    pub name: String,
    pub native_type: String,
    pub comment: String,
    pub not_null: bool,
}

impl ColumnRow {
    /// Split off the table name
    pub fn into_parts(self) -> (String, FieldDescriptor) {
        let field = FieldDescriptor {
            table_comment: self.table_comment,
            name: self.field_name,
            native_type: self.field_type,
            comment: self.field_comment,
            not_null: self.not_null,
        };
        (self.table_name, field)
    }
}

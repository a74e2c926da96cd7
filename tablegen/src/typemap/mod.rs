//! Native column type to Go type mapping
//!
//! Each dialect owns one immutable lookup table. Lookups are exact and
//! case-sensitive; anything the table does not know maps to `string`.

mod mysql;
mod postgres;

pub use mysql::MYSQL;
pub use postgres::POSTGRES;

use serde::{Serialize, Serializer};
use std::fmt;

/// Scalar Go type a column is declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoType {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Bool,
    Float32,
    Float64,
    String,
    Time,
}

impl GoType {
    /// Spelling used in generated source
    pub const fn as_str(self) -> &'static str {
        match self {
            GoType::Int => "int",
            GoType::Int8 => "int8",
            GoType::Int16 => "int16",
            GoType::Int32 => "int32",
            GoType::Int64 => "int64",
            GoType::Uint => "uint",
            GoType::Uint8 => "uint8",
            GoType::Uint16 => "uint16",
            GoType::Uint32 => "uint32",
            GoType::Uint64 => "uint64",
            GoType::Bool => "bool",
            GoType::Float32 => "float32",
            GoType::Float64 => "float64",
            GoType::String => "string",
            GoType::Time => "time.Time",
        }
    }

    /// Whether a file declaring this type must import `time`
    pub fn needs_time_import(self) -> bool {
        matches!(self, GoType::Time)
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GoType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Static native-type table of one dialect
#[derive(Debug)]
pub struct TypeMap {
    name: &'static str,
    entries: &'static [(&'static str, GoType)],
}

impl TypeMap {
    pub(crate) const fn new(name: &'static str, entries: &'static [(&'static str, GoType)]) -> Self {
        Self { name, entries }
    }

    /// Dialect name this table belongs to
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Exact lookup, `None` on a miss
    pub fn lookup(&self, native_type: &str) -> Option<GoType> {
        self.entries
            .iter()
            .find(|(native, _)| *native == native_type)
            .map(|(_, go_type)| *go_type)
    }

    /// Map a native type, falling back to `string`
    pub fn map(&self, native_type: &str) -> GoType {
        self.lookup(native_type).unwrap_or(GoType::String)
    }

    /// All documented entries
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, GoType)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_miss_falls_back_to_string() {
        for map in [&MYSQL, &POSTGRES] {
            assert_eq!(map.map("geometry"), GoType::String);
            assert_eq!(map.map(""), GoType::String);
            assert!(!map.map("no such type").as_str().is_empty());
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(MYSQL.lookup("bigint"), Some(GoType::Int64));
        assert_eq!(MYSQL.lookup("BIGINT"), None);
        assert_eq!(MYSQL.map("BIGINT"), GoType::String);
    }

    #[test]
    fn test_tables_have_unique_keys() {
        for map in [&MYSQL, &POSTGRES] {
            let mut seen = HashSet::new();
            for (native, _) in map.entries() {
                assert!(seen.insert(native), "{} listed twice in {}", native, map.name());
            }
        }
    }

    #[test]
    fn test_time_import() {
        assert!(GoType::Time.needs_time_import());
        assert!(!GoType::Int64.needs_time_import());
        assert_eq!(GoType::Time.to_string(), "time.Time");
    }
}

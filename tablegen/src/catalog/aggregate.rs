//! Grouping of flat catalog rows into per-table field lists

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use super::metadata::{ColumnRow, FieldDescriptor};

/// Fields of each table, keyed by table name in first-seen order
///
/// Field order within a table is row-arrival order. Names are used exactly
/// as the catalog returned them; nothing is deduplicated.
#[derive(Debug, Clone, Default)]
pub struct TableGroup {
    tables: Vec<(String, Vec<FieldDescriptor>)>,
    index: HashMap<String, usize>,
}

impl TableGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row under its table
    pub fn push(&mut self, row: ColumnRow) {
        let (table, field) = row.into_parts();
        match self.index.get(&table) {
            Some(&i) => self.tables[i].1.push(field),
            None => {
                self.index.insert(table.clone(), self.tables.len());
                self.tables.push((table, vec![field]));
            }
        }
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Fields of a table, if any rows were seen for it
    pub fn get(&self, table: &str) -> Option<&[FieldDescriptor]> {
        self.index.get(table).map(|&i| self.tables[i].1.as_slice())
    }

    /// Tables in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldDescriptor])> {
        self.tables
            .iter()
            .map(|(name, fields)| (name.as_str(), fields.as_slice()))
    }

    /// Table names in first-seen order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(name, _)| name.as_str())
    }

    /// Total number of fields across all tables
    pub fn field_count(&self) -> usize {
        self.tables.iter().map(|(_, fields)| fields.len()).sum()
    }

    /// Table comment, taken from the table's first field
    pub fn comment(&self, table: &str) -> Option<&str> {
        self.get(table)
            .and_then(|fields| fields.first())
            .map(|f| f.table_comment.as_str())
    }
}

impl FromIterator<ColumnRow> for TableGroup {
    fn from_iter<I: IntoIterator<Item = ColumnRow>>(iter: I) -> Self {
        let mut group = TableGroup::new();
        for row in iter {
            group.push(row);
        }
        group
    }
}

impl Serialize for TableGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for (name, fields) in &self.tables {
            map.serialize_entry(name, fields)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(table: &str, field: &str) -> ColumnRow {
        ColumnRow {
            table_name: table.to_string(),
            table_comment: format!("{} table", table),
            field_name: field.to_string(),
            field_type: "int".to_string(),
            field_comment: String::new(),
            not_null: false,
        }
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let rows = vec![
            row("user", "id"),
            row("order", "id"),
            row("user", "name"),
            row("order", "user_id"),
            row("user", "email"),
        ];
        let count = rows.len();
        let group: TableGroup = rows.into_iter().collect();

        assert_eq!(group.len(), 2);
        assert_eq!(group.field_count(), count);
        assert_eq!(group.table_names().collect::<Vec<_>>(), vec!["user", "order"]);

        let names: Vec<&str> = group
            .get("user")
            .unwrap()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "name", "email"]);
        assert_eq!(group.comment("order"), Some("order table"));
    }

    #[test]
    fn test_keys_are_not_normalized() {
        let group: TableGroup = vec![row("User", "id"), row("user", "id"), row("user", "id")]
            .into_iter()
            .collect();
        assert_eq!(group.len(), 2);
        assert_eq!(group.get("user").unwrap().len(), 2);
        assert!(group.get("USER").is_none());
    }

    #[test]
    fn test_empty_input() {
        let group: TableGroup = Vec::<ColumnRow>::new().into_iter().collect();
        assert!(group.is_empty());
        assert_eq!(group.field_count(), 0);
        assert_eq!(group.comment("user"), None);
    }
}

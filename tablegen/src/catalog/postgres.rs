//! PostgreSQL-family catalog reader over `pg_catalog`

use async_trait::async_trait;
use tablegen_db::{DynamicQuery, PgPool, Pool};
use tracing::debug;

use super::{numbered_placeholders, ColumnRow, SchemaSource};
use crate::config::Dialect;
use crate::error::Result;

// System tables, system namespaces (including pg_toast and pg_temp_N),
// system columns and dropped columns are filtered out; `build_query` appends
// the relation kinds. Names are cast to text so every driver decodes them
// as strings.
const COLUMNS_SQL: &str = r"SELECT c.relname::text AS table_name,
    COALESCE(obj_description(c.oid, 'pg_class'), '') AS table_comment,
    a.attname::text AS field_name,
    t.typname::text AS field_type,
    COALESCE(d.description, '') AS field_comment,
    a.attnotnull AS not_null
FROM pg_class c
JOIN pg_namespace n ON n.oid = c.relnamespace
JOIN pg_attribute a ON a.attrelid = c.oid
JOIN pg_type t ON t.oid = a.atttypid
LEFT JOIN pg_description d
    ON d.objoid = a.attrelid AND d.objsubid = a.attnum AND d.classoid = 'pg_class'::regclass
WHERE c.relname NOT LIKE 'pg\_%'
    AND c.relname NOT LIKE 'sql\_%'
    AND n.nspname NOT LIKE 'pg\_%'
    AND n.nspname <> 'information_schema'
    AND a.attnum > 0
    AND NOT a.attisdropped";

const ORDINARY_TABLES: &str = "\n    AND c.relkind = 'r'";
const TABLES_AND_VIEWS: &str = "\n    AND c.relkind IN ('r', 'v')";

// Same-named tables of different namespaces stay in contiguous runs
const ORDER_BY: &str = "\nORDER BY c.relname, n.nspname, a.attnum";

/// Reads column metadata from a PostgreSQL server
pub struct PostgresSource<P = PgPool> {
    pool: P,
    include_views: bool,
}

impl<P: Pool> PostgresSource<P> {
    pub fn new(pool: P) -> Self {
        Self {
            pool,
            include_views: false,
        }
    }

    /// Read view columns too
    pub fn include_views(mut self, include_views: bool) -> Self {
        self.include_views = include_views;
        self
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Build the column query. An empty schema reads every user namespace.
    pub fn build_query(&self, schema: &str, tables: &[String]) -> DynamicQuery {
        let relations = if self.include_views {
            TABLES_AND_VIEWS
        } else {
            ORDINARY_TABLES
        };
        let mut query = DynamicQuery::new(COLUMNS_SQL).push_sql(relations);
        if !schema.is_empty() {
            let placeholder = numbered_placeholders(query.param_count() + 1, 1);
            query = query
                .push_sql("\n    AND n.nspname = ")
                .push_sql(&placeholder)
                .bind(schema);
        }
        if !tables.is_empty() {
            let placeholders = numbered_placeholders(query.param_count() + 1, tables.len());
            query = query
                .push_sql("\n    AND c.relname IN (")
                .push_sql(&placeholders)
                .push_sql(")")
                .bind_all(tables);
        }
        query.push_sql(ORDER_BY)
    }
}

#[async_trait]
impl<P: Pool> SchemaSource for PostgresSource<P> {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn list_columns(&self, schema: &str, tables: &[String]) -> Result<Vec<ColumnRow>> {
        let query = self.build_query(schema, tables);
        debug!("Reading columns of namespace {:?} ({} tables requested)", schema, tables.len());
        let rows: Vec<ColumnRow> = query.fetch_all(&self.pool).await?;
        debug!("Catalog returned {} column rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{catalog_row, RecordingPool};
    use crate::typemap::GoType;
    use tablegen_db::Value;

    fn source() -> PostgresSource<RecordingPool> {
        PostgresSource::new(RecordingPool::default())
    }

    #[test]
    fn test_placeholders_are_numbered_after_schema() {
        let tables = vec!["user".to_string(), "order_item".to_string()];
        let query = source().build_query("public", &tables);
        assert!(query.sql().contains("AND n.nspname = $1"));
        assert!(query.sql().contains("AND c.relname IN ($2, $3)"));
        assert!(query.sql().ends_with("ORDER BY c.relname, n.nspname, a.attnum"));
        assert_eq!(query.param_count(), 3);
    }

    #[test]
    fn test_empty_schema_reads_all_namespaces() {
        let tables = vec!["user".to_string()];
        let query = source().build_query("", &tables);
        assert!(!query.sql().contains("n.nspname = $"));
        assert!(query.sql().contains("c.relname IN ($1)"));
        assert_eq!(query.params(), &[Value::String("user".into())]);
    }

    #[test]
    fn test_system_tables_are_excluded_literally() {
        let query = source().build_query("public", &[]);
        assert!(query.sql().contains(r"NOT LIKE 'pg\_%'"));
        assert!(query.sql().contains(r"NOT LIKE 'sql\_%'"));
        assert!(query.sql().contains("c.relkind = 'r'"));
    }

    #[test]
    fn test_views_on_request() {
        let query = source().include_views(true).build_query("", &[]);
        assert!(query.sql().contains("c.relkind IN ('r', 'v')"));
        assert!(query.params().is_empty());
    }

    #[tokio::test]
    async fn test_list_columns_decodes_native_bool() {
        let pool = RecordingPool::with_rows(vec![
            catalog_row("account", "id", "int8", Some("key"), Value::Bool(true)),
            catalog_row("account", "created", "timestamptz", None, Value::Bool(false)),
        ]);
        let source = PostgresSource::new(pool);

        let rows = source.list_columns("public", &[]).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].not_null);
        assert!(!rows[1].not_null);
        assert_eq!(source.map_type(&rows[0].field_type), GoType::Int64);
        assert_eq!(source.map_type(&rows[1].field_type), GoType::Time);
        assert_eq!(source.pool().calls()[0].1, vec![Value::String("public".into())]);
    }
}

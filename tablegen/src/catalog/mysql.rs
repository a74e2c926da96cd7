//! MySQL-family catalog reader over `information_schema`

use async_trait::async_trait;
use tablegen_db::{DynamicQuery, MySqlPool, Pool};
use tracing::debug;

use super::{question_marks, ColumnRow, SchemaSource};
use crate::config::Dialect;
use crate::error::Result;

// Unsigned integer columns get " unsigned" appended so they hit the
// unsigned entries of the type map. Other unsigned numerics keep their
// plain DATA_TYPE.
const COLUMNS_SQL: &str = "SELECT c.TABLE_NAME AS table_name, \
COALESCE(t.TABLE_COMMENT, '') AS table_comment, \
c.COLUMN_NAME AS field_name, \
CASE WHEN c.DATA_TYPE IN ('tinyint', 'smallint', 'mediumint', 'int', 'integer', 'bigint') \
AND c.COLUMN_TYPE LIKE '%unsigned%' \
THEN CONCAT(c.DATA_TYPE, ' unsigned') ELSE c.DATA_TYPE END AS field_type, \
COALESCE(c.COLUMN_COMMENT, '') AS field_comment, \
IF(c.IS_NULLABLE = 'NO', 1, 0) AS not_null \
FROM information_schema.COLUMNS c \
JOIN information_schema.TABLES t \
ON t.TABLE_SCHEMA = c.TABLE_SCHEMA AND t.TABLE_NAME = c.TABLE_NAME \
WHERE c.TABLE_SCHEMA = ?";

const BASE_TABLES: &str = " AND t.TABLE_TYPE = 'BASE TABLE'";
const TABLES_AND_VIEWS: &str = " AND t.TABLE_TYPE IN ('BASE TABLE', 'VIEW')";

const ORDER_BY: &str = " ORDER BY c.TABLE_NAME, c.ORDINAL_POSITION";

/// Reads column metadata from a MySQL or MariaDB server
pub struct MySqlSource<P = MySqlPool> {
    pool: P,
    include_views: bool,
}

impl<P: Pool> MySqlSource<P> {
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

    /// Build the column query; schema and table names are bound, never inlined
    pub fn build_query(&self, schema: &str, tables: &[String]) -> DynamicQuery {
        let relations = if self.include_views {
            TABLES_AND_VIEWS
        } else {
            BASE_TABLES
        };
        let mut query = DynamicQuery::new(COLUMNS_SQL).bind(schema).push_sql(relations);
        if !tables.is_empty() {
            query = query
                .push_sql(" AND c.TABLE_NAME IN (")
                .push_sql(&question_marks(tables.len()))
                .push_sql(")")
                .bind_all(tables);
        }
        query.push_sql(ORDER_BY)
    }
}

#[async_trait]
impl<P: Pool> SchemaSource for MySqlSource<P> {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    async fn list_columns(&self, schema: &str, tables: &[String]) -> Result<Vec<ColumnRow>> {
        let query = self.build_query(schema, tables);
        debug!("Reading columns of schema {} ({} tables requested)", schema, tables.len());
        let rows: Vec<ColumnRow> = query.fetch_all(&self.pool).await?;
        debug!("Catalog returned {} column rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{catalog_row, RecordingPool};
    use crate::error::CodegenError;
    use crate::typemap::GoType;
    use tablegen_db::Value;

    fn source() -> MySqlSource<RecordingPool> {
        MySqlSource::new(RecordingPool::default())
    }

    #[test]
    fn test_query_without_table_filter() {
        let query = source().build_query("test", &[]);
        assert!(query.sql().contains("c.TABLE_SCHEMA = ?"));
        assert!(query.sql().contains("t.TABLE_TYPE = 'BASE TABLE'"));
        assert!(!query.sql().contains(" IN ("));
        assert!(query.sql().ends_with("ORDER BY c.TABLE_NAME, c.ORDINAL_POSITION"));
        assert_eq!(query.params(), &[Value::String("test".into())]);
    }

    #[test]
    fn test_table_names_are_bound() {
        let tables = vec!["user".to_string(), "x') OR ('1'='1".to_string()];
        let query = source().build_query("test", &tables);
        assert!(query.sql().contains("c.TABLE_NAME IN (?, ?)"));
        assert!(!query.sql().contains("OR ('1'"));
        assert_eq!(query.param_count(), 3);
        assert_eq!(query.params()[2], Value::String(tables[1].clone()));
    }

    #[test]
    fn test_views_on_request() {
        let query = source().include_views(true).build_query("test", &[]);
        assert!(query.sql().contains("t.TABLE_TYPE IN ('BASE TABLE', 'VIEW')"));
        assert_eq!(query.param_count(), 1);
    }

    #[test]
    fn test_unsigned_suffix_only_for_integers() {
        let query = source().build_query("test", &[]);
        let sql = query.sql();
        let case = &sql[sql.find("CASE WHEN").unwrap()..sql.find("AS field_type").unwrap()];
        assert!(case.contains("c.DATA_TYPE IN ('tinyint', 'smallint', 'mediumint', 'int', 'integer', 'bigint')"));
        assert!(case.contains("CONCAT(c.DATA_TYPE, ' unsigned')"));
        assert!(!case.contains("decimal"));
    }

    #[tokio::test]
    async fn test_list_columns_decodes_rows() {
        let pool = RecordingPool::with_rows(vec![
            catalog_row("user", "id", "tinyint", None, Value::I64(1)),
            catalog_row("user", "user_name", "varchar", Some("login"), Value::I64(0)),
        ]);
        let source = MySqlSource::new(pool);

        let rows = source
            .list_columns("test", &["user".to_string()])
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].not_null);
        assert_eq!(rows[0].field_comment, "");
        assert_eq!(rows[1].field_comment, "login");
        assert!(!rows[1].not_null);
        assert_eq!(source.map_type(&rows[0].field_type), GoType::Int8);

        let calls = source.pool().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1.len(), 2);
    }

    #[tokio::test]
    async fn test_query_failure_is_surfaced() {
        let source = MySqlSource::new(RecordingPool::failing());
        let err = source.list_columns("test", &[]).await.unwrap_err();
        assert!(matches!(err, CodegenError::Catalog(_)));
    }
}

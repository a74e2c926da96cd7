//! In-memory pool for exercising catalog SQL without a server

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tablegen_db::{Error, ExecuteResult, FromRow, FromValue, Pool, Result, Row, Value};

pub(crate) struct MapRow(HashMap<String, Value>);

impl Row for MapRow {
    fn get_value(&self, column: &str) -> Result<Value> {
        self.0
            .get(column)
            .cloned()
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }
}

/// Records every statement and answers `fetch_all` with canned rows
#[derive(Default)]
pub(crate) struct RecordingPool {
    rows: Vec<HashMap<String, Value>>,
    fail: bool,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl RecordingPool {
    pub fn with_rows(rows: Vec<HashMap<String, Value>>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, params: Vec<Value>) -> Result<()> {
        self.calls.lock().unwrap().push((sql.to_string(), params));
        if self.fail {
            return Err(Error::Query("relation does not exist".into()));
        }
        Ok(())
    }
}

/// A catalog row with every column the readers select
pub(crate) fn catalog_row(
    table: &str,
    field: &str,
    native_type: &str,
    comment: Option<&str>,
    not_null: Value,
) -> HashMap<String, Value> {
    let mut row = HashMap::new();
    row.insert("table_name".into(), Value::String(table.into()));
    row.insert("table_comment".into(), Value::Null);
    row.insert("field_name".into(), Value::String(field.into()));
    row.insert("field_type".into(), Value::String(native_type.into()));
    row.insert(
        "field_comment".into(),
        comment.map_or(Value::Null, |c| Value::String(c.into())),
    );
    row.insert("not_null".into(), not_null);
    row
}

#[async_trait]
impl Pool for RecordingPool {
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecuteResult> {
        self.record(sql, params)?;
        Ok(ExecuteResult { rows_affected: 0 })
    }

    async fn fetch_all<T: FromRow + Send>(&self, sql: &str, params: Vec<Value>) -> Result<Vec<T>> {
        self.record(sql, params)?;
        self.rows
            .iter()
            .map(|r| T::from_row(&MapRow(r.clone())))
            .collect()
    }

    async fn fetch_optional<T: FromRow + Send>(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<T>> {
        self.record(sql, params)?;
        self.rows
            .first()
            .map(|r| T::from_row(&MapRow(r.clone())))
            .transpose()
    }

    async fn fetch_scalar<T: FromValue + Send>(&self, sql: &str, params: Vec<Value>) -> Result<T> {
        self.record(sql, params)?;
        T::from_value(Value::I64(1))
    }
}

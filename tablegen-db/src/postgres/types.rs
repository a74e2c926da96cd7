//! Type conversion utilities for PostgreSQL

use bytes::BytesMut;
use tokio_postgres::types::{to_sql_checked, IsNull, ToSql, Type};

use crate::error::{Error, Result};
use crate::value::Value;

type BoxError = Box<dyn std::error::Error + Sync + Send>;

/// Decode one column of a tokio-postgres Row into a tablegen-db Value
///
/// Dispatches on the column's type name. Anything without a dedicated arm
/// is read as text, which covers `name`, `text`, `varchar` and friends.
pub fn from_pg_column(row: &tokio_postgres::Row, idx: usize) -> Result<Value> {
    let ty = row.columns()[idx].type_();
    let value = match ty.name() {
        "bool" => row.try_get::<_, Option<bool>>(idx)?.map(Value::Bool),
        "int2" => row
            .try_get::<_, Option<i16>>(idx)?
            .map(|v| Value::I64(v.into())),
        "int4" => row
            .try_get::<_, Option<i32>>(idx)?
            .map(|v| Value::I64(v.into())),
        "int8" => row.try_get::<_, Option<i64>>(idx)?.map(Value::I64),
        "oid" => row
            .try_get::<_, Option<u32>>(idx)?
            .map(|v| Value::U64(v.into())),
        "float4" => row
            .try_get::<_, Option<f32>>(idx)?
            .map(|v| Value::F64(v.into())),
        "float8" => row.try_get::<_, Option<f64>>(idx)?.map(Value::F64),
        "bytea" => row.try_get::<_, Option<Vec<u8>>>(idx)?.map(Value::Bytes),
        // single-byte catalog codes such as pg_class.relkind
        "char" => row
            .try_get::<_, Option<i8>>(idx)?
            .map(|v| Value::String(char::from(v as u8).to_string())),
        _ => row
            .try_get::<_, Option<String>>(idx)
            .map_err(|e| {
                Error::RowDecode(format!(
                    "column {} of type {}: {}",
                    row.columns()[idx].name(),
                    ty,
                    e
                ))
            })?
            .map(Value::String),
    };
    Ok(value.unwrap_or(Value::Null))
}

fn int_to_sql(v: i64, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError> {
    match ty.name() {
        "int2" => i16::try_from(v)?.to_sql(ty, out),
        "int4" => i32::try_from(v)?.to_sql(ty, out),
        "oid" => u32::try_from(v)?.to_sql(ty, out),
        _ => v.to_sql(ty, out),
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql(ty, out),
            Value::I64(v) => int_to_sql(*v, ty, out),
            Value::U64(v) => int_to_sql(i64::try_from(*v)?, ty, out),
            Value::F64(v) => match ty.name() {
                "float4" => (*v as f32).to_sql(ty, out),
                _ => v.to_sql(ty, out),
            },
            Value::String(v) => v.as_str().to_sql(ty, out),
            Value::Bytes(v) => v.as_slice().to_sql(ty, out),
        }
    }

    // The server infers parameter types from the statement; the arms above
    // narrow integers and floats to whatever width it asked for.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_narrow_to_parameter_type() {
        let mut out = BytesMut::new();
        Value::I64(7).to_sql(&Type::INT4, &mut out).unwrap();
        assert_eq!(out.len(), 4);

        let mut out = BytesMut::new();
        Value::U64(7).to_sql(&Type::INT8, &mut out).unwrap();
        assert_eq!(out.len(), 8);

        let mut out = BytesMut::new();
        assert!(Value::I64(i64::MAX).to_sql(&Type::INT2, &mut out).is_err());
    }

    #[test]
    fn test_null_and_text() {
        let mut out = BytesMut::new();
        assert!(matches!(
            Value::Null.to_sql(&Type::TEXT, &mut out).unwrap(),
            IsNull::Yes
        ));

        let mut out = BytesMut::new();
        Value::String("user".into())
            .to_sql(&Type::NAME, &mut out)
            .unwrap();
        assert_eq!(&out[..], b"user");
    }
}

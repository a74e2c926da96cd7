//! Type conversion utilities for MySQL

use crate::value::Value;
use mysql_async::Value as MySqlValue;

/// Convert a tablegen-db Value to a mysql_async Value
pub fn to_mysql_value(value: &Value) -> MySqlValue {
    match value {
        Value::Null => MySqlValue::NULL,
        Value::Bool(v) => MySqlValue::from(*v),
        Value::I64(v) => MySqlValue::from(*v),
        Value::U64(v) => MySqlValue::from(*v),
        Value::F64(v) => MySqlValue::from(*v),
        Value::String(v) => MySqlValue::from(v.as_str()),
        Value::Bytes(v) => MySqlValue::from(v.as_slice()),
    }
}

/// Convert a mysql_async Value to a tablegen-db Value
///
/// Temporal values never show up in catalog rows we select, but a caller may
/// still run an arbitrary query; they are rendered as MySQL literal text.
pub fn from_mysql_value(value: MySqlValue) -> Value {
    match value {
        MySqlValue::NULL => Value::Null,
        // information_schema text columns arrive as bytes
        MySqlValue::Bytes(v) => match String::from_utf8(v) {
            Ok(s) => Value::String(s),
            Err(e) => Value::Bytes(e.into_bytes()),
        },
        MySqlValue::Int(v) => Value::I64(v),
        MySqlValue::UInt(v) => Value::U64(v),
        MySqlValue::Float(v) => Value::F64(v.into()),
        MySqlValue::Double(v) => Value::F64(v),
        MySqlValue::Date(year, month, day, hour, min, sec, micro) => Value::String(format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
            year, month, day, hour, min, sec, micro
        )),
        MySqlValue::Time(is_neg, days, hours, mins, secs, micro) => Value::String(format!(
            "{}{}:{:02}:{:02}.{:06}",
            if is_neg { "-" } else { "" },
            days * 24 + u32::from(hours),
            mins,
            secs,
            micro
        )),
    }
}

use super::{GoType, TypeMap};

/// `pg_type.typname` values.
pub static POSTGRES: TypeMap = TypeMap::new(
    "postgres",
    &[
        ("int2", GoType::Int16),
        ("int4", GoType::Int32),
        ("int8", GoType::Int64),
        ("serial2", GoType::Int16),
        ("serial4", GoType::Int32),
        ("serial8", GoType::Int64),
        ("float4", GoType::Float32),
        ("float8", GoType::Float64),
        ("decimal", GoType::Float64),
        ("numeric", GoType::Float64),
        ("money", GoType::Float64),
        ("bool", GoType::Bool),
        ("date", GoType::Time),
        ("time", GoType::Time),
        ("timetz", GoType::Time),
        ("timestamp", GoType::Time),
        ("timestamptz", GoType::Time),
        ("bit", GoType::String),
        ("varbit", GoType::String),
        ("bpchar", GoType::String),
        ("char", GoType::String),
        ("varchar", GoType::String),
        ("text", GoType::String),
        ("name", GoType::String),
        ("bytea", GoType::String),
        ("cidr", GoType::String),
        ("inet", GoType::String),
        ("macaddr", GoType::String),
        ("box", GoType::String),
        ("circle", GoType::String),
        ("line", GoType::String),
        ("lseg", GoType::String),
        ("path", GoType::String),
        ("point", GoType::String),
        ("polygon", GoType::String),
        ("json", GoType::String),
        ("jsonb", GoType::String),
        ("tsquery", GoType::String),
        ("tsvector", GoType::String),
        ("interval", GoType::String),
        ("txid_snapshot", GoType::String),
        ("uuid", GoType::String),
        ("xml", GoType::String),
    ],
);

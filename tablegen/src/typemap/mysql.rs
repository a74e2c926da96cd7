use super::{GoType, TypeMap};

/// `DATA_TYPE` values as reported by `information_schema.COLUMNS`, with
/// ` unsigned` appended for unsigned integer columns. The unsigned float
/// spellings cover sources that suffix every unsigned numeric.
pub static MYSQL: TypeMap = TypeMap::new(
    "mysql",
    &[
        ("int", GoType::Int),
        ("integer", GoType::Int),
        ("tinyint", GoType::Int8),
        ("smallint", GoType::Int16),
        ("mediumint", GoType::Int32),
        ("bigint", GoType::Int64),
        ("int unsigned", GoType::Uint),
        ("integer unsigned", GoType::Uint),
        ("tinyint unsigned", GoType::Uint8),
        ("smallint unsigned", GoType::Uint16),
        ("mediumint unsigned", GoType::Uint32),
        ("bigint unsigned", GoType::Uint64),
        ("bit", GoType::String),
        ("bool", GoType::Bool),
        ("enum", GoType::String),
        ("set", GoType::String),
        ("varchar", GoType::String),
        ("char", GoType::String),
        ("tinytext", GoType::String),
        ("mediumtext", GoType::String),
        ("text", GoType::String),
        ("longtext", GoType::String),
        ("blob", GoType::String),
        ("tinyblob", GoType::String),
        ("mediumblob", GoType::String),
        ("longblob", GoType::String),
        ("binary", GoType::String),
        ("varbinary", GoType::String),
        ("json", GoType::String),
        ("date", GoType::Time),
        ("datetime", GoType::Time),
        ("timestamp", GoType::Time),
        ("time", GoType::Time),
        ("float", GoType::Float64),
        ("double", GoType::Float64),
        ("decimal", GoType::Float64),
        ("numeric", GoType::Float64),
        ("real", GoType::Float64),
        ("float unsigned", GoType::Float64),
        ("double unsigned", GoType::Float64),
        ("decimal unsigned", GoType::Float64),
        ("numeric unsigned", GoType::Float64),
        ("real unsigned", GoType::Float64),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_types() {
        assert_eq!(MYSQL.map("tinyint"), GoType::Int8);
        assert_eq!(MYSQL.map("int"), GoType::Int);
        assert_eq!(MYSQL.map("bigint"), GoType::Int64);
        assert_eq!(MYSQL.map("bigint unsigned"), GoType::Uint64);
        assert_eq!(MYSQL.map("tinyint unsigned"), GoType::Uint8);
    }

    #[test]
    fn test_text_and_binary_types() {
        for native in ["varchar", "char", "longtext", "mediumblob", "enum", "set", "bit"] {
            assert_eq!(MYSQL.map(native), GoType::String, "{}", native);
        }
    }

    #[test]
    fn test_temporal_and_float_types() {
        assert_eq!(MYSQL.map("datetime"), GoType::Time);
        assert_eq!(MYSQL.map("time"), GoType::Time);
        assert_eq!(MYSQL.map("decimal"), GoType::Float64);
        assert_eq!(MYSQL.map("float"), GoType::Float64);
        assert_eq!(MYSQL.map("bool"), GoType::Bool);
    }

    #[test]
    fn test_unsigned_floats_stay_float64() {
        for native in ["decimal unsigned", "float unsigned", "double unsigned"] {
            assert_eq!(MYSQL.map(native), GoType::Float64, "{}", native);
        }
    }
}

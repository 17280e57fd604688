//! Database column type to Rust type mapping
//!
//! Two front ends feed the same conversion logic: the DDL parser hands
//! over lower-cased type names, the code-based front end numeric type
//! codes from [`crate::parser::type_code`]. Both resolve against static
//! tables built once at startup and shared read-only for the process
//! lifetime.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{CodegenError, Result};
use crate::parser::type_code;

/// Rust type used for timestamp-like columns.
pub const TIME_TYPE: &str = "chrono::NaiveDateTime";

/// Rust type used for decimal columns.
pub const DECIMAL_TYPE: &str = "rust_decimal::Decimal";

/// Signed integer type -> unsigned counterpart. Consulted only for
/// unsigned columns when strict typing is requested, or as a fallback
/// for nullable types with no wrapper entry.
static UNSIGNED_TYPES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("i8", "u8"),
        ("i16", "u16"),
        ("i32", "u32"),
        ("i64", "u64"),
    ])
});

/// Base type -> nullable wrapper. Intentionally covers only the types
/// that have a dedicated wrapper; everything else stays bare even when
/// the column's default is NULL.
static NULL_WRAPPER_TYPES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("i64", "Option<i64>"),
        ("i32", "Option<i32>"),
        ("f64", "Option<f64>"),
        ("bool", "Option<bool>"),
        ("String", "Option<String>"),
        (TIME_TYPE, "Option<chrono::NaiveDateTime>"),
        (DECIMAL_TYPE, "Option<rust_decimal::Decimal>"),
    ])
});

/// Numeric type code -> Rust type. The vocabulary is the fixed
/// enumeration in [`crate::parser::type_code`]; any other code fails.
static DATA_TYPES_BY_CODE: LazyLock<HashMap<i32, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // number
        (type_code::BIT, "u8"),
        (type_code::TINY_INT, "i8"),
        (type_code::SMALL_INT, "i16"),
        (type_code::MEDIUM_INT, "i32"),
        (type_code::INT, "i32"),
        (type_code::MIDDLE_INT, "i32"),
        (type_code::INT1, "i8"),
        (type_code::INT2, "i16"),
        (type_code::INT3, "i32"),
        (type_code::INT4, "i32"),
        (type_code::INT8, "i64"),
        (type_code::INTEGER, "i32"),
        (type_code::BIG_INT, "i64"),
        (type_code::FLOAT, "f64"),
        (type_code::FLOAT4, "f64"),
        (type_code::FLOAT8, "f64"),
        (type_code::DOUBLE, "f64"),
        (type_code::DECIMAL, DECIMAL_TYPE),
        (type_code::DEC, DECIMAL_TYPE),
        (type_code::FIXED, "f64"),
        (type_code::NUMERIC, "f64"),
        (type_code::REAL, "f64"),
        // date & time
        (type_code::DATE, TIME_TYPE),
        (type_code::DATE_TIME, TIME_TYPE),
        (type_code::TIMESTAMP, TIME_TYPE),
        (type_code::TIME, "String"),
        (type_code::YEAR, "i64"),
        // string
        (type_code::CHAR, "String"),
        (type_code::VAR_CHAR, "String"),
        (type_code::NVAR_CHAR, "String"),
        (type_code::NCHAR, "String"),
        (type_code::CHARACTER, "String"),
        (type_code::LONG_VAR_CHAR, "String"),
        (type_code::LINE_STRING, "String"),
        (type_code::MULTI_LINE_STRING, "String"),
        (type_code::BINARY, "Vec<u8>"),
        (type_code::VAR_BINARY, "Vec<u8>"),
        (type_code::TINY_TEXT, "String"),
        (type_code::TEXT, "String"),
        (type_code::MEDIUM_TEXT, "String"),
        (type_code::LONG_TEXT, "String"),
        (type_code::ENUM, "String"),
        (type_code::SET, "String"),
        (type_code::JSON, "String"),
        (type_code::BLOB, "Vec<u8>"),
        (type_code::LONG_BLOB, "Vec<u8>"),
        (type_code::MEDIUM_BLOB, "Vec<u8>"),
        (type_code::TINY_BLOB, "Vec<u8>"),
        // bool
        (type_code::BOOL, "bool"),
        (type_code::BOOLEAN, "bool"),
    ])
});

/// Lower-cased SQL type name -> Rust type. Underscore-prefixed names are
/// Postgres array column types and map to their array-carrier types.
static DATA_TYPES_BY_NAME: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // bool
        ("bool", "bool"),
        ("_bool", "Vec<bool>"),
        ("boolean", "bool"),
        // number
        ("tinyint", "i8"),
        ("smallint", "i16"),
        ("mediumint", "i32"),
        ("int", "i32"),
        ("int1", "i8"),
        ("int2", "i16"),
        ("_int2", "Vec<i64>"),
        ("int3", "i32"),
        ("int4", "i32"),
        ("_int4", "Vec<i64>"),
        ("int8", "i64"),
        ("_int8", "Vec<i64>"),
        ("integer", "i32"),
        ("_integer", "Vec<i64>"),
        ("bigint", "i64"),
        ("float", "f64"),
        ("float4", "f64"),
        ("_float4", "Vec<f64>"),
        ("float8", "f64"),
        ("_float8", "Vec<f64>"),
        ("double", "f64"),
        ("decimal", DECIMAL_TYPE),
        ("dec", DECIMAL_TYPE),
        ("numeric", "f64"),
        ("fixed", "f64"),
        ("real", "f64"),
        ("bit", "u8"),
        // date & time
        ("date", TIME_TYPE),
        ("datetime", TIME_TYPE),
        ("timestamp", TIME_TYPE),
        ("time", "String"),
        ("year", "i64"),
        // string
        ("linestring", "String"),
        ("multilinestring", "String"),
        ("nvarchar", "String"),
        ("nchar", "String"),
        ("char", "String"),
        ("bpchar", "String"),
        ("_char", "Vec<String>"),
        ("character", "String"),
        ("varchar", "String"),
        ("_varchar", "Vec<String>"),
        ("binary", "Vec<u8>"),
        ("bytea", "Vec<u8>"),
        ("longvarbinary", "Vec<u8>"),
        ("varbinary", "Vec<u8>"),
        ("tinytext", "String"),
        ("text", "String"),
        ("_text", "Vec<String>"),
        ("mediumtext", "String"),
        ("longtext", "String"),
        ("enum", "String"),
        ("set", "String"),
        ("json", "String"),
        ("jsonb", "String"),
        ("blob", "Vec<u8>"),
        ("longblob", "Vec<u8>"),
        ("mediumblob", "Vec<u8>"),
        ("tinyblob", "Vec<u8>"),
        ("ltree", "Vec<u8>"),
    ])
});

/// Convert a numeric column type code into a Rust type.
pub fn convert_data_type(
    type_code: i32,
    is_default_null: bool,
    unsigned: bool,
    strict: bool,
) -> Result<String> {
    let tp = DATA_TYPES_BY_CODE
        .get(&type_code)
        .ok_or_else(|| CodegenError::UnsupportedType(type_code.to_string()))?;

    Ok(may_convert_null_type(tp, is_default_null, unsigned, strict))
}

/// Convert a SQL column type name into a Rust type.
///
/// Lookup is case-insensitive. Names with the `_` array prefix resolve
/// to their array-carrier type and are returned as-is with the array
/// flag set: array columns never get a nullable wrapper or an unsigned
/// adjustment.
pub fn convert_string_data_type(
    data_type: &str,
    is_default_null: bool,
    unsigned: bool,
    strict: bool,
) -> Result<(String, bool)> {
    let tp = DATA_TYPES_BY_NAME
        .get(data_type.to_lowercase().as_str())
        .ok_or_else(|| CodegenError::UnsupportedType(data_type.to_string()))?;

    if data_type.starts_with('_') {
        return Ok((tp.to_string(), true));
    }

    Ok((
        may_convert_null_type(tp, is_default_null, unsigned, strict),
        false,
    ))
}

/// Null/unsigned resolution policy shared by both conversion entry points.
///
/// When the default is NULL the wrapper table takes priority over the
/// unsigned adjustment: a wrapper type already encodes optionality, and
/// the signed/unsigned distinction is lost inside it. The unsigned table
/// is consulted only for non-null strict columns, or as a fallback for
/// nullable types without a wrapper entry.
fn may_convert_null_type(
    rust_type: &str,
    is_default_null: bool,
    unsigned: bool,
    strict: bool,
) -> String {
    if !is_default_null {
        if unsigned && strict {
            if let Some(ret) = UNSIGNED_TYPES.get(rust_type) {
                return ret.to_string();
            }
        }
        return rust_type.to_string();
    }

    match NULL_WRAPPER_TYPES.get(rust_type) {
        Some(wrapper) => wrapper.to_string(),
        None => {
            if unsigned {
                if let Some(ret) = UNSIGNED_TYPES.get(rust_type) {
                    return ret.to_string();
                }
            }
            rust_type.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_by_code_base_types() {
        assert_eq!(
            convert_data_type(type_code::BIG_INT, false, false, false).unwrap(),
            "i64"
        );
        assert_eq!(
            convert_data_type(type_code::VAR_CHAR, false, false, false).unwrap(),
            "String"
        );
        assert_eq!(
            convert_data_type(type_code::DECIMAL, false, false, false).unwrap(),
            "rust_decimal::Decimal"
        );
        assert_eq!(
            convert_data_type(type_code::TIMESTAMP, false, false, false).unwrap(),
            "chrono::NaiveDateTime"
        );
        assert_eq!(
            convert_data_type(type_code::BLOB, false, false, false).unwrap(),
            "Vec<u8>"
        );
    }

    #[test]
    fn test_convert_by_code_unknown() {
        let err = convert_data_type(9999, false, false, false).unwrap_err();
        match err {
            CodegenError::UnsupportedType(raw) => assert_eq!(raw, "9999"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_convert_by_name_base_types() {
        let (tp, is_array) = convert_string_data_type("bigint", false, false, false).unwrap();
        assert_eq!(tp, "i64");
        assert!(!is_array);

        let (tp, _) = convert_string_data_type("jsonb", false, false, false).unwrap();
        assert_eq!(tp, "String");
    }

    #[test]
    fn test_convert_by_name_case_insensitive() {
        for name in ["VARCHAR", "varchar", "VarChar"] {
            let (tp, is_array) = convert_string_data_type(name, false, false, false).unwrap();
            assert_eq!(tp, "String");
            assert!(!is_array);
        }
    }

    #[test]
    fn test_convert_by_name_unknown() {
        let err = convert_string_data_type("geography", false, false, false).unwrap_err();
        match err {
            CodegenError::UnsupportedType(raw) => assert_eq!(raw, "geography"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_wrapper() {
        // Wrapper applies regardless of the unsigned flag
        assert_eq!(
            convert_data_type(type_code::BIG_INT, true, false, false).unwrap(),
            "Option<i64>"
        );
        assert_eq!(
            convert_data_type(type_code::BIG_INT, true, true, true).unwrap(),
            "Option<i64>"
        );
        assert_eq!(
            convert_data_type(type_code::INT, true, true, false).unwrap(),
            "Option<i32>"
        );
        assert_eq!(
            convert_string_data_type("varchar", true, false, false)
                .unwrap()
                .0,
            "Option<String>"
        );
        assert_eq!(
            convert_string_data_type("datetime", true, false, false)
                .unwrap()
                .0,
            "Option<chrono::NaiveDateTime>"
        );
        assert_eq!(
            convert_string_data_type("decimal", true, false, false)
                .unwrap()
                .0,
            "Option<rust_decimal::Decimal>"
        );
    }

    #[test]
    fn test_unsigned_strict() {
        assert_eq!(
            convert_data_type(type_code::INT, false, true, true).unwrap(),
            "u32"
        );
        // Without strict the base type is kept
        assert_eq!(
            convert_data_type(type_code::INT, false, true, false).unwrap(),
            "i32"
        );
        // Unsigned without a table entry falls through
        assert_eq!(
            convert_string_data_type("varchar", false, true, true)
                .unwrap()
                .0,
            "String"
        );
    }

    #[test]
    fn test_unsigned_fallback_for_nullable_without_wrapper() {
        // i16 has no wrapper entry, so the unsigned fallback applies
        assert_eq!(
            convert_string_data_type("smallint", true, true, false)
                .unwrap()
                .0,
            "u16"
        );
        // ... and without the unsigned flag the base type is kept
        assert_eq!(
            convert_string_data_type("smallint", true, false, false)
                .unwrap()
                .0,
            "i16"
        );
    }

    #[test]
    fn test_array_types_skip_null_and_unsigned() {
        let (tp, is_array) = convert_string_data_type("_int4", true, true, true).unwrap();
        assert_eq!(tp, "Vec<i64>");
        assert!(is_array);

        let (tp, is_array) = convert_string_data_type("_text", true, false, false).unwrap();
        assert_eq!(tp, "Vec<String>");
        assert!(is_array);

        let (tp, is_array) = convert_string_data_type("_bool", false, false, false).unwrap();
        assert_eq!(tp, "Vec<bool>");
        assert!(is_array);
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let a = convert_data_type(type_code::INT, true, true, true).unwrap();
        let b = convert_data_type(type_code::INT, true, true, true).unwrap();
        assert_eq!(a, b);

        let a = convert_string_data_type("_float8", true, true, false).unwrap();
        let b = convert_string_data_type("_float8", true, true, false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_code_resolves() {
        for code in type_code::BIT..=type_code::BOOLEAN {
            let tp = convert_data_type(code, false, false, false).unwrap();
            assert!(!tp.is_empty(), "code {code} resolved to empty type");
        }
    }
}

//! Numeric type codes for database column types
//!
//! The code-based front end identifies column types by these constants
//! rather than by name. The vocabulary is fixed: converters reject any
//! code outside it.

pub const BIT: i32 = 1;
pub const TINY_INT: i32 = 2;
pub const SMALL_INT: i32 = 3;
pub const MEDIUM_INT: i32 = 4;
pub const INT: i32 = 5;
pub const MIDDLE_INT: i32 = 6;
pub const INT1: i32 = 7;
pub const INT2: i32 = 8;
pub const INT3: i32 = 9;
pub const INT4: i32 = 10;
pub const INT8: i32 = 11;
pub const INTEGER: i32 = 12;
pub const BIG_INT: i32 = 13;
pub const FLOAT: i32 = 14;
pub const FLOAT4: i32 = 15;
pub const FLOAT8: i32 = 16;
pub const DOUBLE: i32 = 17;
pub const DECIMAL: i32 = 18;
pub const DEC: i32 = 19;
pub const FIXED: i32 = 20;
pub const NUMERIC: i32 = 21;
pub const REAL: i32 = 22;
pub const DATE: i32 = 23;
pub const DATE_TIME: i32 = 24;
pub const TIMESTAMP: i32 = 25;
pub const TIME: i32 = 26;
pub const YEAR: i32 = 27;
pub const CHAR: i32 = 28;
pub const VAR_CHAR: i32 = 29;
pub const NVAR_CHAR: i32 = 30;
pub const NCHAR: i32 = 31;
pub const CHARACTER: i32 = 32;
pub const LONG_VAR_CHAR: i32 = 33;
pub const LINE_STRING: i32 = 34;
pub const MULTI_LINE_STRING: i32 = 35;
pub const BINARY: i32 = 36;
pub const VAR_BINARY: i32 = 37;
pub const TINY_TEXT: i32 = 38;
pub const TEXT: i32 = 39;
pub const MEDIUM_TEXT: i32 = 40;
pub const LONG_TEXT: i32 = 41;
pub const ENUM: i32 = 42;
pub const SET: i32 = 43;
pub const JSON: i32 = 44;
pub const BLOB: i32 = 45;
pub const LONG_BLOB: i32 = 46;
pub const MEDIUM_BLOB: i32 = 47;
pub const TINY_BLOB: i32 = 48;
pub const BOOL: i32 = 49;
pub const BOOLEAN: i32 = 50;

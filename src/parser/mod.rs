//! SQL schema parser module using sqlparser-rs

mod metadata;
mod schema_parser;
pub mod type_code;

pub use metadata::*;
pub use schema_parser::*;

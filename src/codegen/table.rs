//! Converted table descriptor
//!
//! Bridges parsed schema metadata and the generators: each column's SQL
//! type is resolved to its Rust type here, and the flags the import
//! assembler needs are derived from the result.

use crate::error::Result;
use crate::parser::TableMetadata;

use super::naming::{escape_field_name, to_struct_name};
use super::type_resolver::{convert_string_data_type, DECIMAL_TYPE, TIME_TYPE};

/// A table with all column types resolved.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table name as written in the DDL
    pub name: String,

    /// Struct name for the generated model (PascalCase)
    pub struct_name: String,

    /// Converted columns, in DDL order
    pub fields: Vec<Field>,

    /// Whether any column resolved to an array-carrier type
    pub contains_array: bool,
}

/// A single converted column.
#[derive(Debug, Clone)]
pub struct Field {
    /// Column name as written in the DDL
    pub column: String,

    /// Rust field name (snake_case, keyword-escaped)
    pub name: String,

    /// Resolved Rust type
    pub data_type: String,

    /// Whether this column is an array type
    pub is_array: bool,

    /// Column comment (if any)
    pub comment: Option<String>,
}

impl Table {
    /// Resolve every column of `meta` into a converted descriptor.
    ///
    /// Fails with `UnsupportedType` when a column's type has no mapping
    /// entry; the caller decides whether that aborts the whole run.
    pub fn from_metadata(meta: &TableMetadata, strict: bool) -> Result<Self> {
        let mut fields = Vec::with_capacity(meta.columns.len());
        let mut contains_array = false;

        for col in &meta.columns {
            let type_name = base_type_name(&col.data_type);
            let (data_type, is_array) = convert_string_data_type(
                type_name,
                col.is_default_null(),
                col.is_unsigned,
                strict,
            )?;
            contains_array |= is_array;

            fields.push(Field {
                column: col.name.clone(),
                name: escape_field_name(&col.name),
                data_type,
                is_array,
                comment: col.comment.clone(),
            });
        }

        Ok(Self {
            name: meta.name.clone(),
            struct_name: to_struct_name(&meta.name),
            fields,
            contains_array,
        })
    }

    /// Whether any column resolved to the timestamp type.
    pub fn has_time(&self) -> bool {
        self.fields.iter().any(|f| f.data_type.contains(TIME_TYPE))
    }

    /// Whether any column resolved to the decimal type.
    pub fn has_decimal(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.data_type.contains(DECIMAL_TYPE))
    }
}

/// Strip length/precision arguments and modifiers from a DDL type so it
/// can be used as a lookup key: `VARCHAR(255)` -> `VARCHAR`,
/// `BIGINT UNSIGNED` -> `BIGINT`. The array-marker prefix survives.
fn base_type_name(data_type: &str) -> &str {
    let head = data_type.split('(').next().unwrap_or(data_type);
    head.split_whitespace().next().unwrap_or(head)
}

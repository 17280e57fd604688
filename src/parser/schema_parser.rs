//! SQL schema parser using sqlparser-rs

use sqlparser::ast::{
    ColumnOption, Expr, Ident, IndexColumn, ObjectName, PrimaryKeyConstraint, Statement,
    TableConstraint,
};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

use super::metadata::*;
use crate::error::Result;

/// Parse a SQL schema string into table metadata
pub fn parse_schema(sql: &str) -> Result<Vec<TableMetadata>> {
    let dialect = MySqlDialect {};
    let statements = Parser::parse_sql(&dialect, sql)?;

    let mut tables = Vec::new();

    for stmt in statements {
        if let Statement::CreateTable(create_table) = stmt {
            let table = extract_table_metadata(&create_table)?;
            tables.push(table);
        }
    }

    Ok(tables)
}

/// Extract table metadata from a CREATE TABLE statement
fn extract_table_metadata(create: &sqlparser::ast::CreateTable) -> Result<TableMetadata> {
    let name = extract_table_name(&create.name);

    let mut columns = Vec::new();
    let mut primary_key = None;

    for col_def in &create.columns {
        let (column, col_pk) = extract_column_metadata(col_def)?;

        // Column-level PRIMARY KEY
        if col_pk {
            primary_key = Some(PrimaryKey {
                columns: vec![column.name.clone()],
            });
        }

        columns.push(column);
    }

    // Table-level PRIMARY KEY constraint
    for constraint in &create.constraints {
        if let TableConstraint::PrimaryKey(PrimaryKeyConstraint {
            columns: pk_cols, ..
        }) = constraint
        {
            primary_key = Some(PrimaryKey {
                columns: pk_cols
                    .iter()
                    .map(extract_ident_from_index_column)
                    .collect(),
            });
            // PK columns are never nullable
            for pk_col in pk_cols {
                let col_name = extract_ident_from_index_column(pk_col);
                if let Some(col) = columns.iter_mut().find(|c| c.name == col_name) {
                    col.nullable = false;
                }
            }
        }
    }

    Ok(TableMetadata {
        name,
        comment: None, // sqlparser doesn't expose table comments directly
        columns,
        primary_key,
    })
}

/// Extract column metadata from a column definition
fn extract_column_metadata(col_def: &sqlparser::ast::ColumnDef) -> Result<(ColumnMetadata, bool)> {
    let name = extract_ident(&col_def.name);
    let data_type = format!("{}", col_def.data_type);
    let is_unsigned = data_type.to_uppercase().contains("UNSIGNED");

    let mut nullable = true; // Default to nullable
    let mut default_value = None;
    let mut col_is_primary = false;
    let mut comment = None;

    for option in &col_def.options {
        match &option.option {
            ColumnOption::NotNull => {
                nullable = false;
            }
            ColumnOption::Null => {
                nullable = true;
            }
            ColumnOption::Default(expr) => {
                default_value = Some(format!("{}", expr));
            }
            ColumnOption::PrimaryKey(_) => {
                col_is_primary = true;
                nullable = false;
            }
            ColumnOption::Comment(c) => {
                comment = Some(c.clone());
            }
            _ => {}
        }
    }

    let column = ColumnMetadata {
        name,
        data_type,
        nullable,
        default_value,
        is_unsigned,
        comment,
    };

    Ok((column, col_is_primary))
}

/// Extract a simple string from an ObjectName
fn extract_table_name(name: &ObjectName) -> String {
    name.0
        .last()
        .and_then(|part| part.as_ident())
        .map(|ident| ident.value.clone())
        .unwrap_or_default()
}

/// Extract a string from an Ident
fn extract_ident(ident: &Ident) -> String {
    ident.value.clone()
}

/// Extract a column name string from an IndexColumn
fn extract_ident_from_index_column(ic: &IndexColumn) -> String {
    match &ic.column.expr {
        Expr::Identifier(ident) => ident.value.clone(),
        other => format!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_table() {
        let sql = r#"
            CREATE TABLE users (
                id BIGINT PRIMARY KEY,
                username VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL
            );
        "#;

        let tables = parse_schema(sql).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "users");
        assert_eq!(tables[0].columns.len(), 3);
        assert!(tables[0].primary_key.is_some());
    }

    #[test]
    fn test_parse_nullable_and_defaults() {
        let sql = r#"
            CREATE TABLE posts (
                id BIGINT NOT NULL,
                title VARCHAR(255) NOT NULL DEFAULT 'untitled',
                summary TEXT DEFAULT NULL,
                views INT UNSIGNED NOT NULL
            );
        "#;

        let tables = parse_schema(sql).unwrap();
        let table = &tables[0];

        let title = table.get_column("title").unwrap();
        assert!(!title.nullable);
        assert!(!title.is_default_null());

        let summary = table.get_column("summary").unwrap();
        assert!(summary.nullable);
        assert!(summary.is_default_null());

        let views = table.get_column("views").unwrap();
        assert!(views.is_unsigned);
        assert!(!views.is_default_null());
    }

    #[test]
    fn test_parse_composite_primary_key() {
        let sql = r#"
            CREATE TABLE order_items (
                order_id BIGINT NOT NULL,
                product_id BIGINT NOT NULL,
                quantity INT NOT NULL,
                PRIMARY KEY (order_id, product_id)
            );
        "#;

        let tables = parse_schema(sql).unwrap();
        let pk = tables[0].primary_key.as_ref().unwrap();
        assert_eq!(pk.columns.len(), 2);
        assert_eq!(pk.columns[0], "order_id");
        assert_eq!(pk.columns[1], "product_id");
        assert!(tables[0].is_primary_key_column("order_id"));
        assert!(!tables[0].is_primary_key_column("quantity"));
    }

    #[test]
    fn test_parse_column_comment() {
        let sql = r#"
            CREATE TABLE users (
                id BIGINT PRIMARY KEY,
                status TINYINT NOT NULL COMMENT 'account status'
            );
        "#;

        let tables = parse_schema(sql).unwrap();
        let status = tables[0].get_column("status").unwrap();
        assert_eq!(status.comment.as_deref(), Some("account status"));
    }
}

//! modelgen: Generate Rust model structs from SQL schema DDL
//!
//! This crate provides both a CLI tool and a library for generating Rust
//! model code from SQL schema files. It parses CREATE TABLE DDL using
//! `sqlparser-rs`, converts every column's database type into a Rust type
//! (handling nullability, unsigned integers, and Postgres array columns),
//! and renders one model file per table. The import/header section of
//! each file comes from a template that can be overridden on disk.
//!
//! # Library usage
//!
//! ```rust,ignore
//! use modelgen::CodegenConfig;
//!
//! let mut config = CodegenConfig::default_with_schema("schema.sql".into());
//! config.output_dir = "src/generated/models".into();
//! modelgen::generate(&config)?;
//! ```
//!
//! # CLI usage
//!
//! ```bash
//! modelgen --schema schema.sql --output ./src/generated/models generate
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod parser;
pub mod template;

use std::collections::HashSet;

use tracing::{debug, info};

pub use config::CodegenConfig;
pub use error::{CodegenError, Result};

/// Main entry point for code generation
pub fn generate(config: &CodegenConfig) -> Result<()> {
    info!("Parsing schema: {:?}", config.schema_file);
    let schema_sql = std::fs::read_to_string(&config.schema_file)?;
    let tables = parser::parse_schema(&schema_sql)?;
    info!("Found {} tables", tables.len());

    let tables = filter_tables(tables, &config.include_tables, &config.exclude_tables);
    debug!(
        "After filtering: {} tables (include={}, exclude={})",
        tables.len(),
        config.include_tables,
        config.exclude_tables
    );

    info!("Generating models in {:?}", config.output_dir);
    codegen::generate_models(&tables, config)?;

    info!("Code generation complete");
    Ok(())
}

/// Filter tables based on include/exclude patterns
fn filter_tables(
    tables: Vec<parser::TableMetadata>,
    include: &str,
    exclude: &str,
) -> Vec<parser::TableMetadata> {
    let include_all = include.trim() == "*" || include.trim().is_empty();
    let include_set: HashSet<String> = if include_all {
        HashSet::new()
    } else {
        include.split(',').map(|s| s.trim().to_string()).collect()
    };
    let exclude_set: HashSet<String> = exclude
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    tables
        .into_iter()
        .filter(|t| {
            let name = &t.name;
            let included = include_all || include_set.contains(name);
            let excluded = exclude_set.contains(name);
            included && !excluded
        })
        .collect()
}

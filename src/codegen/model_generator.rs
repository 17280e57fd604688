//! Model generator - writes one Rust source file per table

use std::fs;

use tracing::debug;

use crate::config::CodegenConfig;
use crate::error::Result;
use crate::parser::TableMetadata;

use super::imports::gen_imports;
use super::table::Table;

/// Generate model files for all tables
pub fn generate_models(tables: &[TableMetadata], config: &CodegenConfig) -> Result<()> {
    let output_dir = &config.output_dir;
    fs::create_dir_all(output_dir)?;

    let mut mod_content = String::new();
    mod_content.push_str("// Generated model structs\n\n");

    for table in tables {
        let file_name = heck::AsSnakeCase(&table.name).to_string();
        mod_content.push_str(&format!("mod {};\n", file_name));
        mod_content.push_str(&format!("pub use {}::*;\n", file_name));
    }

    let mod_path = output_dir.join("mod.rs");
    fs::write(&mod_path, mod_content)?;

    for table in tables {
        generate_model_file(table, config)?;
    }

    Ok(())
}

/// Generate a single model file for a table
fn generate_model_file(meta: &TableMetadata, config: &CodegenConfig) -> Result<()> {
    let table = Table::from_metadata(meta, config.strict)?;
    let file_name = format!("{}.rs", heck::AsSnakeCase(&table.name));
    debug!("Generating model {} -> {}", table.struct_name, file_name);

    let mut code = gen_imports(
        &table,
        config.template_home.as_deref(),
        config.with_cache,
        table.has_time(),
        table.has_decimal(),
    )?;

    code.push('\n');
    code.push_str(&generate_struct(meta, &table));

    if config.with_cache {
        code.push('\n');
        code.push_str(&generate_cache_alias(&table));
    }

    let file_path = config.output_dir.join(&file_name);
    fs::write(&file_path, code)?;
    super::format_file(&file_path);
    Ok(())
}

/// Render the struct definition for a converted table
fn generate_struct(meta: &TableMetadata, table: &Table) -> String {
    let mut code = String::new();

    code.push_str(&format!("/// Database table: `{}`\n", table.name));
    if let Some(comment) = &meta.comment {
        if !comment.is_empty() {
            code.push_str(&format!("///\n/// {}\n", comment));
        }
    }

    code.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]\n");
    code.push_str(&format!("pub struct {} {{\n", table.struct_name));

    for field in &table.fields {
        code.push_str(&format!("    /// Column: `{}`", field.column));
        if meta.is_primary_key_column(&field.column) {
            code.push_str(" (PRIMARY KEY)");
        }
        if let Some(comment) = &field.comment {
            if !comment.is_empty() {
                code.push_str(&format!(" - {}", comment));
            }
        }
        code.push('\n');

        // serde rename keeps the wire name stable for escaped/renamed fields
        if field.name.trim_start_matches("r#") != field.column {
            code.push_str(&format!("    #[serde(rename = \"{}\")]\n", field.column));
        }

        code.push_str(&format!("    pub {}: {},\n", field.name, field.data_type));
    }

    code.push_str("}\n");
    code
}

/// Render the cache type alias emitted for cache-aware models
fn generate_cache_alias(table: &Table) -> String {
    format!(
        "/// Row cache for `{}`, keyed by the formatted primary key\npub type {}Cache = Cache<String, Arc<{}>>;\n",
        table.name, table.struct_name, table.struct_name
    )
}

//! CLI entry point for modelgen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use modelgen::config::CodegenConfig;

#[derive(Parser)]
#[command(name = "modelgen")]
#[command(about = "Generate Rust model structs from SQL schema DDL")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to SQL schema file (overrides config)
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Generate cache-aware models (overrides config)
    #[arg(long)]
    with_cache: bool,

    /// Map unsigned columns to unsigned Rust types (overrides config)
    #[arg(long)]
    strict: bool,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model files
    Generate,
    /// Inspect schema (show parsed tables for debugging)
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = if let Some(config_path) = &cli.config {
        CodegenConfig::from_file(config_path)?
    } else {
        CodegenConfig::default()
    };

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    // Apply CLI overrides
    if let Some(schema) = cli.schema {
        config.schema_file = schema;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if cli.with_cache {
        config.with_cache = true;
    }
    if cli.strict {
        config.strict = true;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    if let Some(Commands::Inspect) = &cli.command {
        return inspect_schema(&config);
    }

    // Validate configuration
    config.validate()?;

    info!("Generating models from schema: {:?}", config.schema_file);

    if config.dry_run {
        println!("Dry run mode - would generate:");
        let schema_sql = std::fs::read_to_string(&config.schema_file)?;
        let tables = modelgen::parser::parse_schema(&schema_sql)?;
        for table in &tables {
            println!("  Model: {}/{}.rs", config.output_dir.display(), table.name);
        }
        return Ok(());
    }

    modelgen::generate(&config)?;

    info!("Code generation completed successfully");
    Ok(())
}

fn inspect_schema(config: &CodegenConfig) -> Result<()> {
    let schema_sql = std::fs::read_to_string(&config.schema_file)?;
    let tables = modelgen::parser::parse_schema(&schema_sql)?;

    println!("Parsed {} tables:\n", tables.len());
    for table in &tables {
        println!("Table: {}", table.name);
        println!("  Columns:");
        for col in &table.columns {
            let nullable = if col.nullable { "NULL" } else { "NOT NULL" };
            let unsigned = if col.is_unsigned { " UNSIGNED" } else { "" };
            println!(
                "    - {} {} {}{}",
                col.name, col.data_type, nullable, unsigned
            );
            if let Some(default) = &col.default_value {
                println!("      DEFAULT {}", default);
            }
        }
        if let Some(pk) = &table.primary_key {
            println!("  Primary Key: {:?}", pk.columns);
        }
        println!();
    }

    Ok(())
}

//! Default configuration values - single source of truth

/// Default include tables pattern (all tables)
pub const INCLUDE_TABLES: &str = "*";

/// Default exclude tables pattern (none)
pub const EXCLUDE_TABLES: &str = "";

/// Default output directory for generated models
pub const OUTPUT_DIR: &str = "./generated/models";

/// Whether generated models carry a row cache by default
pub const WITH_CACHE: bool = false;

/// Whether unsigned columns get unsigned Rust types by default
pub const STRICT: bool = false;

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;

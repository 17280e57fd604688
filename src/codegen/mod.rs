//! Code generation module

mod imports;
mod model_generator;
mod naming;
mod table;
mod type_resolver;

pub use imports::gen_imports;
pub use model_generator::generate_models;
pub use naming::*;
pub use table::{Field, Table};
pub use type_resolver::*;

use std::path::Path;

/// Best-effort rustfmt on a generated file.
pub(crate) fn format_file(path: &Path) {
    let _ = std::process::Command::new("rustfmt").arg(path).status();
}

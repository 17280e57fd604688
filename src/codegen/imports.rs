//! Import/header section assembly for generated model files

use std::path::Path;

use crate::error::Result;
use crate::template::{self, Context, Template};

use super::table::Table;

/// Template category under the override root.
const CATEGORY: &str = "model";

/// Override file name for the cache-aware import template.
const IMPORTS_TEMPLATE_FILE: &str = "import.tpl";

/// Override file name for the no-cache import template.
const IMPORTS_NO_CACHE_TEMPLATE_FILE: &str = "import-no-cache.tpl";

/// Rendering context for the import templates: exactly the four values
/// the templates may reference.
struct ImportsContext<'a> {
    time: bool,
    contains_array: bool,
    table: &'a Table,
    decimal: bool,
}

impl Context for ImportsContext<'_> {
    fn flag(&self, key: &str) -> Option<bool> {
        match key {
            "time" => Some(self.time),
            "contains_array" => Some(self.contains_array),
            "decimal" => Some(self.decimal),
            _ => None,
        }
    }

    fn value(&self, key: &str) -> Option<String> {
        match key {
            "table" => Some(self.table.name.clone()),
            "struct" => Some(self.table.struct_name.clone()),
            _ => None,
        }
    }
}

/// Render the import section for one table.
///
/// `with_cache` is the only branch: it picks which template is loaded.
/// Everything else is context assembly; the `contains_array` flag comes
/// from the table descriptor, not from the caller. Template load and
/// render failures propagate untouched.
pub fn gen_imports(
    table: &Table,
    template_home: Option<&Path>,
    with_cache: bool,
    time_import: bool,
    decimal_import: bool,
) -> Result<String> {
    let (file, embedded) = if with_cache {
        (IMPORTS_TEMPLATE_FILE, template::IMPORTS)
    } else {
        (IMPORTS_NO_CACHE_TEMPLATE_FILE, template::IMPORTS_NO_CACHE)
    };

    let text = template::load_template(template_home, CATEGORY, file, embedded)?;

    let ctx = ImportsContext {
        time: time_import,
        contains_array: table.contains_array,
        table,
        decimal: decimal_import,
    };

    Template::parse("import", &text)?.render(&ctx)
}

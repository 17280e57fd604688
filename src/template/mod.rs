//! Template loading and rendering
//!
//! Generated-file headers are produced from small text templates. Each
//! template ships as an embedded default and can be overridden by a file
//! at `<template_home>/<category>/<file>`. The syntax is deliberately
//! tiny: `{{key}}` substitutes a value, `{{if key}}...{{end}}` renders a
//! block when a boolean flag is set.

use std::path::Path;

use tracing::debug;

use crate::error::{CodegenError, Result};

/// Embedded default for the cache-aware import template.
pub const IMPORTS: &str = r#"// Code generated for table `{{table}}`. DO NOT EDIT.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
{{if time}}use chrono::NaiveDateTime;
{{end}}{{if decimal}}use rust_decimal::Decimal;
{{end}}
"#;

/// Embedded default for the no-cache import template.
pub const IMPORTS_NO_CACHE: &str = r#"// Code generated for table `{{table}}`. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
{{if time}}use chrono::NaiveDateTime;
{{end}}{{if decimal}}use rust_decimal::Decimal;
{{end}}
"#;

/// Values a template can pull out of its rendering context.
pub trait Context {
    /// Boolean flags, used by `{{if key}}` sections.
    fn flag(&self, key: &str) -> Option<bool>;

    /// Text values, used by `{{key}}` substitutions.
    fn value(&self, key: &str) -> Option<String>;
}

/// Load a template, preferring an override file under `root` when one
/// exists, falling back to the embedded default.
pub fn load_template(
    root: Option<&Path>,
    category: &str,
    file: &str,
    embedded_default: &str,
) -> Result<String> {
    let Some(root) = root else {
        return Ok(embedded_default.to_string());
    };

    let path = root.join(category).join(file);
    if !path.exists() {
        return Ok(embedded_default.to_string());
    }

    debug!("Loading template override from {}", path.display());
    std::fs::read_to_string(&path).map_err(|e| {
        CodegenError::TemplateLoad(format!("{}: {}", path.display(), e))
    })
}

/// A parsed template, ready to render against a [`Context`].
#[derive(Debug)]
pub struct Template {
    name: String,
    nodes: Vec<Node>,
}

#[derive(Debug)]
enum Node {
    Text(String),
    Value(String),
    Section { key: String, children: Vec<Node> },
}

impl Template {
    /// Parse template text. Fails on unbalanced `{{if}}`/`{{end}}` pairs
    /// or unterminated tags.
    pub fn parse(name: &str, text: &str) -> Result<Self> {
        let mut stack: Vec<(String, Vec<Node>)> = Vec::new();
        let mut current: Vec<Node> = Vec::new();
        let mut rest = text;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                current.push(Node::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| {
                CodegenError::TemplateExecution(format!("template {name}: unterminated tag"))
            })?;
            let tag = after[..end].trim();
            rest = &after[end + 2..];

            if let Some(key) = tag.strip_prefix("if ") {
                stack.push((key.trim().to_string(), std::mem::take(&mut current)));
            } else if tag == "end" {
                let (key, parent) = stack.pop().ok_or_else(|| {
                    CodegenError::TemplateExecution(format!(
                        "template {name}: {{{{end}}}} without matching {{{{if}}}}"
                    ))
                })?;
                let children = std::mem::replace(&mut current, parent);
                current.push(Node::Section { key, children });
            } else {
                current.push(Node::Value(tag.to_string()));
            }
        }

        if let Some((key, _)) = stack.last() {
            return Err(CodegenError::TemplateExecution(format!(
                "template {name}: unclosed {{{{if {key}}}}}"
            )));
        }
        if !rest.is_empty() {
            current.push(Node::Text(rest.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            nodes: current,
        })
    }

    /// Render the template against the given context. A key the context
    /// doesn't know is an error, not an empty substitution.
    pub fn render(&self, ctx: &dyn Context) -> Result<String> {
        let mut out = String::new();
        render_nodes(&self.name, &self.nodes, ctx, &mut out)?;
        Ok(out)
    }
}

fn render_nodes(name: &str, nodes: &[Node], ctx: &dyn Context, out: &mut String) -> Result<()> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Value(key) => {
                let value = ctx
                    .value(key)
                    .or_else(|| ctx.flag(key).map(|b| b.to_string()))
                    .ok_or_else(|| {
                        CodegenError::TemplateExecution(format!(
                            "template {name}: no value for key `{key}`"
                        ))
                    })?;
                out.push_str(&value);
            }
            Node::Section { key, children } => {
                let flag = ctx.flag(key).ok_or_else(|| {
                    CodegenError::TemplateExecution(format!(
                        "template {name}: no flag for key `{key}`"
                    ))
                })?;
                if flag {
                    render_nodes(name, children, ctx, out)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        time: bool,
        table: String,
    }

    impl Context for TestContext {
        fn flag(&self, key: &str) -> Option<bool> {
            match key {
                "time" => Some(self.time),
                _ => None,
            }
        }

        fn value(&self, key: &str) -> Option<String> {
            match key {
                "table" => Some(self.table.clone()),
                _ => None,
            }
        }
    }

    fn ctx(time: bool) -> TestContext {
        TestContext {
            time,
            table: "users".to_string(),
        }
    }

    #[test]
    fn test_value_substitution() {
        let tpl = Template::parse("t", "table: {{table}}").unwrap();
        assert_eq!(tpl.render(&ctx(false)).unwrap(), "table: users");
    }

    #[test]
    fn test_conditional_section() {
        let tpl = Template::parse("t", "a{{if time}}X{{end}}b").unwrap();
        assert_eq!(tpl.render(&ctx(true)).unwrap(), "aXb");
        assert_eq!(tpl.render(&ctx(false)).unwrap(), "ab");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let tpl = Template::parse("t", "{{nope}}").unwrap();
        assert!(matches!(
            tpl.render(&ctx(false)),
            Err(CodegenError::TemplateExecution(_))
        ));

        let tpl = Template::parse("t", "{{if nope}}x{{end}}").unwrap();
        assert!(matches!(
            tpl.render(&ctx(false)),
            Err(CodegenError::TemplateExecution(_))
        ));
    }

    #[test]
    fn test_unbalanced_blocks_rejected() {
        assert!(Template::parse("t", "{{if time}}x").is_err());
        assert!(Template::parse("t", "x{{end}}").is_err());
        assert!(Template::parse("t", "{{oops").is_err());
    }

    #[test]
    fn test_load_template_falls_back_to_default() {
        let text = load_template(None, "model", "import.tpl", IMPORTS).unwrap();
        assert_eq!(text, IMPORTS);

        let dir = tempfile::tempdir().unwrap();
        let text = load_template(Some(dir.path()), "model", "import.tpl", IMPORTS).unwrap();
        assert_eq!(text, IMPORTS);
    }

    #[test]
    fn test_load_template_override() {
        let dir = tempfile::tempdir().unwrap();
        let category = dir.path().join("model");
        std::fs::create_dir_all(&category).unwrap();
        std::fs::write(category.join("import.tpl"), "custom {{table}}").unwrap();

        let text = load_template(Some(dir.path()), "model", "import.tpl", IMPORTS).unwrap();
        assert_eq!(text, "custom {{table}}");
    }
}

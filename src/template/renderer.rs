//! Template source selection and rendering

use crate::errors::{LaunchError, Result};
use handlebars::Handlebars;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

/// Version number stamped into a freshly created memory file.
pub const INITIAL_VERSION: u32 = 1;

/// Default fallback template (used if TEMPLATE.md is absent).
pub const DEFAULT_TEMPLATE: &str = "\
# {{ .Project }} Memory
_v{{ .Version }} — {{ .Date }}_

## Context
-

## Goals / Next Up
-

## Decisions
-

## Links
- Repo:
- Issues / Boards:
- Docs:

## Notes
-
";

/// Render context for a new memory file.
///
/// Field names match the placeholders templates refer to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Details {
    pub project: String,
    pub version: u32,
    pub date: String,
}

impl Details {
    /// Context for a first-time creation: version is always 1.
    pub fn new(project: &str, date: &str) -> Self {
        Self {
            project: project.to_string(),
            version: INITIAL_VERSION,
            date: date.to_string(),
        }
    }
}

/// Pick the template source for a memory file.
///
/// Uses the file at `path` when it exists and is a regular file; falls back
/// to [`DEFAULT_TEMPLATE`] when it is absent (or is a directory). Any other
/// stat or read error is fatal.
pub fn load_source(path: &Path) -> Result<String> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_dir() => {
            fs::read_to_string(path).map_err(|source| LaunchError::TemplateRead {
                path: path.to_path_buf(),
                source,
            })
        }
        Ok(_) => Ok(DEFAULT_TEMPLATE.to_string()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(DEFAULT_TEMPLATE.to_string()),
        Err(source) => Err(LaunchError::TemplateRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Render a template source against the given details.
///
/// Strict mode: a reference to a field outside of [`Details`] is a render
/// error, not silent empty output. Escaping is disabled since the output is
/// Markdown.
pub fn render(source: &str, details: &Details) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string("memory", normalize_field_refs(source))
        .map_err(|err| LaunchError::TemplateParse(Box::new(err)))?;
    registry
        .render("memory", details)
        .map_err(|err| LaunchError::TemplateRender(Box::new(err)))
}

/// Rewrite Go `text/template` field references (`{{ .Project }}`) into
/// Handlebars paths (`{{Project}}`). Bare Handlebars references pass through
/// untouched, as does anything malformed (which then fails template parsing).
fn normalize_field_refs(source: &str) -> String {
    static FIELD_REF: OnceLock<Regex> = OnceLock::new();
    let re = FIELD_REF.get_or_init(|| {
        Regex::new(r"\{\{\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
            .expect("field reference pattern is valid")
    });
    re.replace_all(source, "{{$1}}").into_owned()
}

//! Template rendering for new memory files
//!
//! Template source chain:
//! 1. `TEMPLATE.md` in the memories directory (user override)
//! 2. Embedded fallback in code
//!
//! Templates use Handlebars syntax for field substitution; Go
//! `text/template`-style field references (`{{ .Project }}`) are also
//! accepted so pre-existing template files keep working.

pub mod renderer;

pub use renderer::{load_source, render, Details, DEFAULT_TEMPLATE, INITIAL_VERSION};

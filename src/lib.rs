//! memlaunch - Per-Project Memory Note Launcher
//!
//! Given a project name, memlaunch finds (or creates) that project's memory
//! note on disk, writes a one-line pointer file on first creation, renders
//! the initial content from `TEMPLATE.md` (or the built-in fallback), and
//! opens the note in the configured editor.
//!
//! # Flow
//!
//! path resolution, then the idempotent ensure step (pointer + template
//! render on first run only), then the editor launch.

// Module declarations
pub mod cli;
pub mod config;
pub mod editor;
pub mod errors;
pub mod memory;
pub mod paths;
pub mod pointer;
pub mod template;

// Re-export commonly used types
pub use errors::{LaunchError, Result};
pub use paths::FilePaths;

//! Pointer file writer
//!
//! The pointer is a one-line redirect left in the working directory that
//! records where the canonical memory document lives. It is only written
//! when the memory file itself is being created.

use crate::errors::{LaunchError, Result};
use std::fs;
use std::path::Path;

/// Hosted location the pointer line refers to.
const MEMORIES_REPO: &str = "github.com/nuchs/memories/blob/main";

/// Content of the pointer file for a project.
pub fn pointer_line(project: &str) -> String {
    format!("See: {MEMORIES_REPO}/{project}.md\n")
}

/// Write (or overwrite) the pointer file for a project.
pub fn write_pointer(path: &Path, project: &str) -> Result<()> {
    fs::write(path, pointer_line(project)).map_err(|source| LaunchError::PointerWrite {
        path: path.to_path_buf(),
        source,
    })
}

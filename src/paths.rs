//! Path resolution for the per-project files
//!
//! Pure path construction: no filesystem access happens here. The working
//! directory and any memories-dir override are resolved once by the caller
//! and passed in.

use std::path::{Path, PathBuf};

/// The three files a launch touches, resolved once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePaths {
    /// `<cwd>/<project>.pointer.txt` — always in the working directory
    pub pointer: PathBuf,
    /// `<memories_dir>/<project>.md` — the note the user edits
    pub memory: PathBuf,
    /// `<memories_dir>/TEMPLATE.md` — optional user-supplied template
    pub template: PathBuf,
}

impl FilePaths {
    /// Resolve all three paths for a project.
    ///
    /// The memories directory defaults to `cwd` when no override is given.
    /// The pointer file stays in `cwd` regardless of the override.
    pub fn resolve(project: &str, cwd: &Path, memories_dir: Option<&Path>) -> Self {
        let mem_dir = memories_dir.unwrap_or(cwd);
        Self {
            pointer: cwd.join(format!("{project}.pointer.txt")),
            memory: mem_dir.join(format!("{project}.md")),
            template: mem_dir.join("TEMPLATE.md"),
        }
    }

    /// Directory the memory file lives in.
    pub fn memory_dir(&self) -> &Path {
        // resolve() always joins at least a file name onto a directory
        self.memory.parent().unwrap_or_else(|| Path::new("."))
    }
}

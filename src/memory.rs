//! Memory file lifecycle
//!
//! Idempotently guarantees the per-project memory file exists, creating it
//! from the template (and dropping the pointer file) on the first run. The
//! memory file's existence is the sole idempotency gate: once present it is
//! never rewritten here.

use crate::errors::{LaunchError, Result};
use crate::paths::FilePaths;
use crate::pointer::write_pointer;
use crate::template::{self, Details};
use std::fs;
use std::io;

/// Outcome of an ensure pass, reported back for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryStatus {
    /// Memory file was already present; nothing was written.
    Existing,
    /// Memory file (and pointer) were created this run.
    Created,
}

/// Ensure the memory file for `project` exists, creating it if missing.
///
/// On first creation the pointer file is written first, then the template
/// is loaded, rendered with `date`, and written to the memory path. Any
/// failure aborts before later steps run; a render failure in particular
/// leaves the memory directory unchanged.
pub fn ensure_memory(paths: &FilePaths, project: &str, date: &str) -> Result<MemoryStatus> {
    let mem_dir = paths.memory_dir();
    fs::create_dir_all(mem_dir).map_err(|source| LaunchError::MemoryDir {
        path: mem_dir.to_path_buf(),
        source,
    })?;

    match fs::metadata(&paths.memory) {
        Ok(_) => return Ok(MemoryStatus::Existing),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(LaunchError::MemoryStat {
                path: paths.memory.clone(),
                source,
            })
        }
    }

    // Render before writing anything so a bad template leaves no artifacts.
    let source = template::load_source(&paths.template)?;
    let content = template::render(&source, &Details::new(project, date))?;

    write_pointer(&paths.pointer, project)?;

    fs::write(&paths.memory, content).map_err(|source| LaunchError::MemoryWrite {
        path: paths.memory.clone(),
        source,
    })?;

    Ok(MemoryStatus::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::pointer_line;
    use tempfile::tempdir;

    fn paths_in(dir: &std::path::Path) -> FilePaths {
        FilePaths::resolve("widget", dir, None)
    }

    #[test]
    fn test_first_run_creates_memory_and_pointer() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());

        let status = ensure_memory(&paths, "widget", "2024-06-01").unwrap();

        assert_eq!(status, MemoryStatus::Created);
        let memory = fs::read_to_string(&paths.memory).unwrap();
        assert!(memory.starts_with("# widget Memory\n"));
        assert!(memory.contains("_v1 — 2024-06-01_"));
        assert_eq!(
            fs::read_to_string(&paths.pointer).unwrap(),
            pointer_line("widget")
        );
    }

    #[test]
    fn test_second_run_is_noop() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());

        ensure_memory(&paths, "widget", "2024-06-01").unwrap();
        fs::write(&paths.memory, "user edits survive\n").unwrap();
        fs::remove_file(&paths.pointer).unwrap();

        let status = ensure_memory(&paths, "widget", "2024-06-02").unwrap();

        assert_eq!(status, MemoryStatus::Existing);
        assert_eq!(
            fs::read_to_string(&paths.memory).unwrap(),
            "user edits survive\n"
        );
        // Pointer is not recreated once the memory file exists.
        assert!(!paths.pointer.exists());
    }

    #[test]
    fn test_missing_memory_dir_is_created() {
        let dir = tempdir().unwrap();
        let mem_dir = dir.path().join("notes").join("deep");
        let paths = FilePaths::resolve("widget", dir.path(), Some(&mem_dir));

        ensure_memory(&paths, "widget", "2024-06-01").unwrap();

        assert!(paths.memory.exists());
        // Pointer stays in the working directory, not the memories dir.
        assert_eq!(paths.pointer.parent().unwrap(), dir.path());
        assert!(paths.pointer.exists());
    }

    #[test]
    fn test_template_file_overrides_default() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.template, "{{ .Project }} v{{ .Version }} on {{ .Date }}\n").unwrap();

        ensure_memory(&paths, "widget", "2024-06-01").unwrap();

        assert_eq!(
            fs::read_to_string(&paths.memory).unwrap(),
            "widget v1 on 2024-06-01\n"
        );
    }

    #[test]
    fn test_malformed_template_writes_nothing() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.template, "{{ .Project").unwrap();

        let err = ensure_memory(&paths, "widget", "2024-06-01").unwrap_err();

        assert!(matches!(err, LaunchError::TemplateParse(_)));
        assert!(!paths.memory.exists());
        assert!(!paths.pointer.exists());
    }

    #[test]
    fn test_unknown_field_writes_nothing() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.template, "{{ .Owner }}").unwrap();

        let err = ensure_memory(&paths, "widget", "2024-06-01").unwrap_err();

        assert!(matches!(err, LaunchError::TemplateRender(_)));
        assert!(!paths.memory.exists());
        assert!(!paths.pointer.exists());
    }
}

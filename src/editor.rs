//! Editor launching
//!
//! Spawns the configured editor on the memory file and blocks until it
//! exits. The child inherits the terminal's stdin/stdout/stderr so
//! full-screen editors work. The child's exit code is not interpreted;
//! only a failure to spawn or wait is an error.

use crate::errors::{LaunchError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Editor used when nothing is configured.
pub const DEFAULT_EDITOR: &str = "nvim";

/// Open `path` in `command`, waiting for the editor to close.
pub fn open_in_editor(command: &str, path: &Path) -> Result<()> {
    Command::new(command)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| LaunchError::Editor {
            command: command.to_string(),
            source,
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_editor_command_fails() {
        let err = open_in_editor("definitely-not-an-editor-9f2c", Path::new("x.md")).unwrap_err();
        assert!(matches!(err, LaunchError::Editor { .. }));
        assert!(err.to_string().contains("definitely-not-an-editor-9f2c"));
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_exit_code_is_not_interpreted() {
        // `false` exits non-zero; the launcher still reports success.
        open_in_editor("false", Path::new("x.md")).unwrap();
    }
}

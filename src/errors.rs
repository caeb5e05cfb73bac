//! Error types for memlaunch
//!
//! Every failure below `main` is wrapped in a `LaunchError` variant carrying
//! the path or context it happened on; `main` is the only place that prints
//! and maps errors to an exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the launcher
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Current working directory could not be determined
    #[error("failed to get current directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// Pointer file could not be written
    #[error("failed to write pointer {path}: {source}")]
    PointerWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Memory directory could not be created
    #[error("failed to ensure memory dir {path}: {source}")]
    MemoryDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Memory file existence check failed for a reason other than absence
    #[error("failed to stat memory file {path}: {source}")]
    MemoryStat {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Memory file could not be written
    #[error("failed to write memory file {path}: {source}")]
    MemoryWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Template file exists but could not be read
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Template text has malformed placeholder syntax
    #[error("failed to parse template: {0}")]
    TemplateParse(#[source] Box<handlebars::TemplateError>),

    /// Template referenced an unknown field or otherwise failed to render
    #[error("failed to render template: {0}")]
    TemplateRender(#[source] Box<handlebars::RenderError>),

    /// Editor process could not be spawned or waited on
    #[error("failed to run editor `{command}`: {source}")]
    Editor {
        command: String,
        source: std::io::Error,
    },

    /// Configuration file errors
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_write_display_includes_path() {
        let err = LaunchError::PointerWrite {
            path: PathBuf::from("/tmp/widget.pointer.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("widget.pointer.txt"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_editor_display_includes_command() {
        let err = LaunchError::Editor {
            command: "nvim".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("nvim"));
    }
}

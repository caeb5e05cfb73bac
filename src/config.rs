//! Configuration for memlaunch
//!
//! All ambient state is captured once at startup into an explicit `Config`
//! so the launcher components never read the environment themselves.
//! Precedence: CLI flag > environment variable > config file > default.
//! File location: ~/.memlaunch/config.toml

use crate::editor::DEFAULT_EDITOR;
use crate::errors::{LaunchError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the memories directory.
pub const MEMORIES_DIR_VAR: &str = "MYMEMORIES";

/// Environment variable naming the editor command.
pub const EDITOR_VAR: &str = "EDITOR";

/// Resolved configuration the launcher runs with.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding memory and template files; `None` means use the
    /// working directory.
    pub memories_dir: Option<PathBuf>,
    /// Editor command to open the memory file with.
    pub editor: String,
}

/// Optional overrides read from `~/.memlaunch/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub memories_dir: Option<PathBuf>,
    pub editor: Option<String>,
}

/// Environment overrides, captured once.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub memories_dir: Option<String>,
    pub editor: Option<String>,
}

impl EnvOverrides {
    /// Snapshot the relevant environment variables. Empty values count as
    /// unset.
    pub fn capture() -> Self {
        Self {
            memories_dir: env_non_empty(MEMORIES_DIR_VAR),
            editor: env_non_empty(EDITOR_VAR),
        }
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl FileConfig {
    /// Load the config file, if any.
    ///
    /// An explicitly requested file must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if required {
                return Err(LaunchError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|err| {
            LaunchError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        toml::from_str(&text).map_err(|err| {
            LaunchError::Config(format!("failed to parse {}: {err}", path.display()))
        })
    }

    /// Default config file location: `~/.memlaunch/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".memlaunch").join("config.toml"))
    }
}

impl Config {
    /// Merge the three override layers onto the defaults.
    pub fn resolve(
        cli_memories_dir: Option<PathBuf>,
        cli_editor: Option<String>,
        env: EnvOverrides,
        file: FileConfig,
    ) -> Self {
        let memories_dir = cli_memories_dir
            .or_else(|| env.memories_dir.map(PathBuf::from))
            .or(file.memories_dir);
        let editor = cli_editor
            .or(env.editor)
            .or(file.editor)
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        Self {
            memories_dir,
            editor,
        }
    }
}

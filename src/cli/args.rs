//! Command-line argument parsing for memlaunch

use clap::Parser;
use std::path::PathBuf;

/// memlaunch - Open a per-project memory note in your editor
#[derive(Parser, Debug)]
#[command(name = "memlaunch")]
#[command(version)]
#[command(about = "Open a per-project memory note, creating it from a template on first use", long_about = None)]
pub struct Args {
    /// Project name; used verbatim for the memory and pointer file names
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Directory holding memory files (overrides $MYMEMORIES; current
    /// directory by default)
    #[arg(long, value_name = "DIR")]
    pub memories_dir: Option<PathBuf>,

    /// Editor command (overrides $EDITOR; nvim by default)
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Prepare the memory file without launching the editor
    #[arg(long)]
    pub no_edit: bool,

    /// Verbose output (path resolution detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except errors)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

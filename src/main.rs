//! memlaunch - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use memlaunch::cli::{Args, Verbosity};
use memlaunch::config::{Config, EnvOverrides, FileConfig};
use memlaunch::editor;
use memlaunch::memory::{ensure_memory, MemoryStatus};
use memlaunch::paths::FilePaths;
use memlaunch::LaunchError;

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let verbosity = args.verbosity();

    let file = FileConfig::load(args.config.as_deref())?;
    let config = Config::resolve(
        args.memories_dir.clone(),
        args.editor.clone(),
        EnvOverrides::capture(),
        file,
    );

    let cwd = std::env::current_dir().map_err(LaunchError::WorkingDir)?;
    let paths = FilePaths::resolve(&args.project, &cwd, config.memories_dir.as_deref());

    if verbosity == Verbosity::Verbose {
        println!("{} pointer:  {}", "•".dimmed(), paths.pointer.display());
        println!("{} memory:   {}", "•".dimmed(), paths.memory.display());
        println!("{} template: {}", "•".dimmed(), paths.template.display());
        println!("{} editor:   {}", "•".dimmed(), config.editor);
    }

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let status = ensure_memory(&paths, &args.project, &date)?;

    if verbosity != Verbosity::Quiet {
        match status {
            MemoryStatus::Created => {
                println!(
                    "{} Created pointer {}",
                    "✓".green().bold(),
                    paths.pointer.display()
                );
                println!(
                    "{} Created memory file {}",
                    "✓".green().bold(),
                    paths.memory.display()
                );
            }
            MemoryStatus::Existing => {
                println!("Memory file exists: {}", paths.memory.display());
            }
        }
    }

    if args.no_edit {
        return Ok(());
    }

    editor::open_in_editor(&config.editor, &paths.memory)?;
    Ok(())
}

mod commands;
mod prompt;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use memorizer_lib::vocab::VocabStorage;

#[derive(Parser)]
#[command(name = "memorizer", about = "Personal vocabulary flashcard and review tool", version)]
struct Cli {
    /// Storage directory (default: the local data dir, created on demand)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the stored word lists and their sizes
    Lists,

    /// Show the lifetime memorized-word count
    Stats,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let storage = open_storage(cli.dir)?;

    match cli.command {
        // No subcommand: run the interactive session
        None => commands::menu::run(storage)?,
        Some(Command::Lists) => commands::lists::run(&storage)?,
        Some(Command::Stats) => commands::stats::run(&storage)?,
    }

    Ok(())
}

/// Resolve the storage directory. An explicitly supplied path must
/// already exist; the default data dir is created on demand.
fn open_storage(dir: Option<PathBuf>) -> Result<VocabStorage> {
    let dir = match dir {
        Some(dir) => dir,
        None => {
            let dir = VocabStorage::default_data_dir()
                .context("Failed to get data directory")?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            dir
        }
    };
    VocabStorage::new(dir).context("Invalid storage directory")
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use keyward::cli::{
    handle_backup, handle_config, handle_history, handle_init, handle_restore, handle_search,
    handle_show, handle_verify,
};
use keyward::config::KeywardPaths;

#[derive(Parser)]
#[command(
    name = "keyward",
    version,
    about = "Terminal-oriented encrypted secret store",
    long_about = "Keyward keeps credential entries organized under editable \
                  column schemes and stores them encrypted at rest. The data \
                  directory can be overridden with KEYWARD_DATA_DIR."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new vault
    Init,

    /// Render the vault contents
    Show,

    /// Fuzzy-search entry values
    Search {
        /// Text to search for
        query: String,
        /// Maximum number of matches to print
        #[arg(short = 'n', long, default_value_t = 5)]
        top: usize,
    },

    /// Write a backup snapshot
    Backup,

    /// Overwrite the vault from the backup snapshot
    Restore,

    /// Check a candidate master password
    Verify,

    /// Print the session log
    History,

    /// Show resolved paths and vault status
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = KeywardPaths::new()?;

    match cli.command {
        Commands::Init => handle_init(paths)?,
        Commands::Show => handle_show(paths)?,
        Commands::Search { query, top } => handle_search(paths, &query, top)?,
        Commands::Backup => handle_backup(paths)?,
        Commands::Restore => handle_restore(paths)?,
        Commands::Verify => handle_verify(paths)?,
        Commands::History => handle_history(paths)?,
        Commands::Config => handle_config(paths)?,
    }

    Ok(())
}

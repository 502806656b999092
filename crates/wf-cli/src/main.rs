//! CLI frontend for the Wegfinder text-adventure interpreter.

mod commands;
mod console;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "WF_LOG";

#[derive(Parser)]
#[command(
    name = "wf",
    about = "Wegfinder: play text adventures described in JSON",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world interactively on stdin/stdout
    Play {
        /// Directory containing locations.json, items.json and story.json
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// RNG seed for random effects (default: 42)
        #[arg(long)]
        seed: Option<u64>,

        /// Player name; skips the name prompt
        #[arg(long)]
        name: Option<String>,

        /// Keep playing after the game is won
        #[arg(long)]
        win_continues: bool,

        /// Log engine decisions to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Load a world and report broken references
    Check {
        /// Directory containing locations.json, items.json and story.json
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Play { verbose: true, .. });
    init_tracing(verbose);

    let result = match cli.command {
        Commands::Play {
            dir,
            seed,
            name,
            win_continues,
            verbose: _,
        } => commands::play::run(&dir, seed, name.as_deref(), win_continues),
        Commands::Check { dir } => commands::check::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

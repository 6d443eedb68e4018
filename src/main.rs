use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use classic_patterns::config::{IteratorDemoConfig, MementoDemoConfig};
use classic_patterns::{demo, logging};

#[derive(Parser, Debug)]
#[command(name = "classic-patterns", about = "Even/odd iterator and memento pattern demos")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print words with even positions first, then odd positions.
    Iterate {
        /// Words to traverse (defaults to the built-in sample list).
        words: Vec<String>,
    },
    /// Fire shots, back up the state after each, then undo.
    Memento {
        /// State before the first shot.
        #[arg(long, default_value = "Preparing ")]
        initial_state: String,
        /// Number of shots fired.
        #[arg(long, default_value_t = 3)]
        shots: usize,
        /// Number of undo steps.
        #[arg(long, default_value_t = 2)]
        undos: usize,
        /// Seed for reproducible shots.
        #[arg(long)]
        seed: Option<u64>,
        /// Milliseconds to wait before each backup.
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Iterate { words } => run_iterate(words),
        Commands::Memento {
            initial_state,
            shots,
            undos,
            seed,
            delay_ms,
        } => run_memento(MementoDemoConfig {
            initial_state,
            shots,
            undos,
            seed,
            backup_delay: Duration::from_millis(delay_ms),
            ..MementoDemoConfig::default()
        })?,
    }

    Ok(())
}

fn run_iterate(words: Vec<String>) {
    let config = if words.is_empty() {
        IteratorDemoConfig::default()
    } else {
        IteratorDemoConfig { words }
    };

    for line in demo::iterator_lines(&config) {
        println!("{}", line);
    }
}

fn run_memento(config: MementoDemoConfig) -> Result<()> {
    let lines = demo::memento_lines(&config).context("memento demo failed")?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

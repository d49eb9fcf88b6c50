//! Vemo Control - terminal chat client for the Vemo network assistant

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use vemo_common::VemoConfig;
use vemoctl::{commands, logging, repl::Repl, VERSION};

#[derive(Parser)]
#[command(name = "vemoctl")]
#[command(about = "Vemo - AI network engineer chat assistant", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Config file (default: $VEMO_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Never speak replies
    #[arg(long, global = true)]
    no_voice: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat (default)
    Chat {
        /// Seed the reply randomness for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,

        /// Print spoken sentences without holding for speaking time
        #[arg(long)]
        instant_voice: bool,
    },

    /// Classify one message and print the reply
    Ask {
        /// Message text
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,

        /// Print the reply as JSON
        #[arg(long)]
        json: bool,

        /// Seed the reply randomness
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run an action by id and print its result
    Action {
        /// Action id (e.g. status, security_scan, backup)
        id: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize text for speech and play it
    Speak {
        /// Text to speak
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,

        /// Only list the normalized sentences
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = VemoConfig::load(cli.config.as_deref()).context("loading config")?;
    if cli.no_voice {
        config.voice.enabled = false;
    }
    logging::init(&config.log.level);
    debug!("vemoctl v{} starting", VERSION);

    match cli.command.unwrap_or(Commands::Chat {
        seed: None,
        instant_voice: false,
    }) {
        Commands::Chat { seed, instant_voice } => Repl::new(config, seed, instant_voice).run().await,
        Commands::Ask { text, json, seed } => commands::ask(&config, &text.join(" "), json, seed),
        Commands::Action { id, json } => commands::action(&id, json),
        Commands::Speak { text, dry_run } => commands::speak(&config, &text.join(" "), dry_run).await,
        Commands::Config => commands::config(&config, cli.config.as_deref()),
    }
}

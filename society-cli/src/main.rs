use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod entry_cmd;
mod state;

use entry_cmd::ParseArgs;

#[derive(Parser, Debug)]
#[command(name = "society", version, about = "Society ledger quick entry")]
struct Cli {
    /// Debug logging on stderr (RUST_LOG wins when set)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn a sentence like "maintenance 5000 Rajesh A-101 15/01/2025" into a
    /// proposed transaction
    Parse {
        /// The sentence (quoted or as separate words)
        text: Vec<String>,

        /// Print the full parse result as JSON
        #[arg(long)]
        json: bool,

        /// Flat directory TOML for flat/party lookups (overrides config)
        #[arg(long)]
        flats: Option<PathBuf>,

        /// Date to use when the text has none (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Warn on impossible dates such as 31/02/2025
        #[arg(long)]
        validate_dates: bool,

        /// Attach placeholder flat-1 to any flat token when no directory is given
        #[arg(long)]
        legacy_placeholders: bool,
    },

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.society/config.toml with defaults
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG > --verbose > warn
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    match cli.command {
        Command::Parse {
            text,
            json,
            flats,
            today,
            validate_dates,
            legacy_placeholders,
        } => {
            let cfg = config::load_config()?;
            entry_cmd::run_parse(
                &cfg,
                ParseArgs {
                    text,
                    json,
                    flats,
                    today,
                    validate_dates,
                    legacy_placeholders,
                },
            )?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

//! Portal settings CLI
//!
//! Inspect the resolved public runtime configuration and build sqon links.
//!
//! Usage:
//!     portal config --file portal.toml --json
//!     portal sqon study ABC123

use clap::{Parser, Subcommand};
use portal_logging::{init_logging, LogConfig};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Data portal settings and link utilities")]
struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the resolved public runtime configuration
    Config {
        /// TOML or JSON file with public runtime config (.json selects JSON)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Ignore NEXT_PUBLIC_* / EGO_PUBLIC_KEY environment variables
        #[arg(long)]
        no_env: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a sqon query-string fragment filtering FIELD to VALUE
    Sqon {
        /// Field to filter on (embedded verbatim)
        field: String,

        /// Value the field must be in (embedded verbatim)
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn command_wants_json(command: &Commands) -> bool {
    match command {
        Commands::Config { json, .. } => *json,
        Commands::Sqon { json, .. } => *json,
    }
}

fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Config { file, no_env, json } => cli::config::run(cli::config::ConfigArgs {
            file,
            no_env,
            json,
        }),
        Commands::Sqon { field, value, json } => {
            cli::sqon::run(cli::sqon::SqonArgs { field, value, json })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = command_wants_json(&cli.command);

    if let Err(err) = init_logging(LogConfig {
        app_name: "portal",
        verbose: cli.verbose,
    }) {
        eprintln!("Warning: {}", err);
    }

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                cli::error::print_json_error(&err);
            } else {
                eprintln!("{:?}", err);
            }
            ExitCode::from(1)
        }
    }
}

mod commands;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-form")]
#[command(version, about = "Contact form - replay user input against the form rules", long_about = None)]
struct Cli {
    /// Config file (default: ./contact-form.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a JSON script of input/submit events and report the result
    Replay {
        /// Script file
        script: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },

    /// Print the markup of an empty form
    Render,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored human readable summary (default)
    Summary,
    /// Form state, errors and snapshot as JSON
    Json,
    /// Rendered form markup
    Html,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Replay { script, format } => {
            commands::replay::execute(&script, cli.config.as_deref(), format)?;
        }
        Commands::Render => {
            commands::render::execute(cli.config.as_deref())?;
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scheroku_cli::report::{self, Format};
use scheroku_cli::settings::Settings;
use scheroku_types::DynoSize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scheroku")]
#[command(about = "Scheroku: list and resolve Heroku dyno sizes")]
struct Cli {
    /// Path to a TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every dyno size
    List {
        /// Output format (overrides the settings file)
        #[arg(long, value_enum)]
        format: Option<Format>,
    },

    /// Resolve a size code ("1X") or variant name ("X1")
    Show {
        size: String,
    },

    /// Print the configured default size
    Default,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from '{}'", path.display()))?,
        None => Settings::default(),
    };

    match cli.command {
        Commands::List { format } => cmd_list(format.unwrap_or(settings.format)),
        Commands::Show { size } => cmd_show(&size),
        Commands::Default => {
            println!("{}", settings.default_size);
            Ok(())
        }
    }
}

fn cmd_list(format: Format) -> Result<()> {
    let out = report::render_list(format)?;
    match format {
        Format::Pretty => print!("{}", out),
        Format::Json => println!("{}", out),
    }
    Ok(())
}

fn cmd_show(input: &str) -> Result<()> {
    let size: DynoSize = input.parse()?;
    tracing::debug!(input, %size, "resolved dyno size");
    println!("{}", report::render_show(size));
    Ok(())
}

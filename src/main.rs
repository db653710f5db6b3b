//! mdtangle CLI - extract fenced code from a markdown document

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdtangle::commands;
use mdtangle::config::{self, Config, ConfigUpdate, SamePathPolicy};

#[derive(Parser)]
#[command(name = "mdtangle")]
#[command(author, version, about = "Extract fenced code blocks into a source file", long_about = None)]
struct Cli {
    /// Markdown document to tangle
    #[arg(value_name = "DOCUMENT")]
    document: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extension for the tangled file (without the dot)
    #[arg(short, long, value_name = "EXT")]
    extension: Option<String>,

    /// Fail instead of overwriting a document that has no .md extension
    #[arg(long)]
    refuse_same_path: bool,

    /// Dry run - show what would be done without doing it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Command line overrides, applied over the config file.
    fn overrides(&self) -> ConfigUpdate {
        ConfigUpdate {
            source_extension: self.extension.clone(),
            same_path: self.refuse_same_path.then_some(SamePathPolicy::Refuse),
            ..Default::default()
        }
    }
}

fn load_config(cli: &Cli) -> mdtangle::Result<Config> {
    let base = match cli.config {
        Some(ref path) => config::read_config_file(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            config::read_config(&cwd)?
        }
    };
    let overrides = cli.overrides();
    if overrides.is_empty() {
        return Ok(base);
    }
    tracing::debug!("Applying command line overrides: {:?}", overrides);
    Ok(overrides.merge_into(&base))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = load_config(&cli).and_then(|config| {
        let options = commands::TangleOptions {
            document: cli.document,
            dry_run: cli.dry_run,
        };
        commands::tangle(config, options)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

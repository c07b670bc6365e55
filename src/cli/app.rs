//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::build::{self, BuildOptions};
use super::output::{Output, OutputFormat};
use super::{inspect, logging};
use crate::storage::{Config, Site};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Render a personal portfolio page from JSON content")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global `default_format` setting)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new site with sample content
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Render the page once
    Build {
        /// Content directory or URL, overriding `content_root`
        #[arg(long, env = "FOLIO_CONTENT_ROOT")]
        content: Option<String>,

        /// Output file, overriding `output`
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Render the page, then again whenever content changes
    Watch {
        /// Content directory, overriding `content_root`
        #[arg(long, env = "FOLIO_CONTENT_ROOT")]
        content: Option<String>,

        /// Output file, overriding `output`
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Show the section order from config.json
    Sections {
        /// Content directory or URL, overriding `content_root`
        #[arg(long, env = "FOLIO_CONTENT_ROOT")]
        content: Option<String>,
    },

    /// Check that every content document loads
    Check {
        /// Content directory or URL, overriding `content_root`
        #[arg(long, env = "FOLIO_CONTENT_ROOT")]
        content: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let format = match cli.format {
        Some(format) => format,
        None => Config::load()
            .map(|config| OutputFormat::from(config.global.default_format))
            .unwrap_or_default(),
    };
    let output = Output::new(format);

    tracing::debug!("folio starting");

    match cli.command {
        Commands::Init { path } => {
            tracing::debug!(path = %path, "initializing site");
            let site = Site::init(&path)?;
            if output.is_json() {
                output.data(&serde_json::json!({
                    "root": site.root().display().to_string(),
                    "content_root": site.content_root(),
                    "output": site.output_path().display().to_string(),
                }));
            } else {
                output.success(&format!("Initialized folio site at {}", site.root().display()));
            }
        }

        Commands::Build { content, out } => build::build(&output, BuildOptions { content, out })?,
        Commands::Watch { content, out } => build::watch(&output, BuildOptions { content, out })?,

        Commands::Sections { content } => inspect::sections(&output, content.as_deref())?,
        Commands::Check { content } => inspect::check(&output, content.as_deref())?,
    }

    tracing::debug!("command completed");
    Ok(())
}

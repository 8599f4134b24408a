//! Glyphic CLI - icon catalog and documentation toolkit.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "glyphic")]
#[command(about = "Icon catalog and documentation toolkit")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to glyphic.toml config file
    #[arg(short, long, default_value = "glyphic.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the icon catalog from an icon set's metadata document
    Catalog {
        /// Path to the upstream metadata.json
        #[arg(short, long)]
        metadata: Option<PathBuf>,

        /// Output path for the catalog document
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Refresh the local SVG mirror from the remote source
    Sync {
        /// Mirror directory (defaults to config or "icons")
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Regenerate the static documentation pages
    Docs {
        /// Output directory (defaults to config or "docs")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Search the icon catalog
    Find {
        /// Search query
        query: String,

        /// Restrict results to one category
        #[arg(short = 'C', long)]
        category: Option<String>,
    },

    /// Print the markup for one icon
    Render {
        /// Icon name
        name: String,

        /// Pixel size
        #[arg(short, long, default_value = "24")]
        size: u32,

        /// Extra CSS class
        #[arg(long, default_value = "")]
        class: String,

        /// Rendering style: plain, high-quality, or original
        #[arg(long, default_value = "plain")]
        style: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = config::load(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Catalog { metadata, output } => {
            commands::catalog::run(&config, metadata, output).await?;
        }
        Commands::Sync { dir } => {
            commands::sync::run(&config, dir).await?;
        }
        Commands::Docs { output } => {
            commands::docs::run(&config, output).await?;
        }
        Commands::Find { query, category } => {
            commands::find::run(&config, &query, category.as_deref()).await?;
        }
        Commands::Render {
            name,
            size,
            class,
            style,
        } => {
            commands::render::run(&config, &name, size, &class, &style).await?;
        }
    }

    Ok(())
}

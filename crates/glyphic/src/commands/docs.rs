//! Documentation regeneration command.

use std::path::PathBuf;

use anyhow::Result;

use glyphic_docs::{DocsConfig, DocsGenerator, PageSpec};

use crate::config::ConfigFile;

/// Run the docs command.
pub async fn run(config: &ConfigFile, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Regenerating documentation...");

    let pages = config
        .docs
        .pages
        .iter()
        .map(|entry| PageSpec {
            source: PathBuf::from(&entry.source),
            title: entry.title.clone(),
        })
        .collect();

    let docs_config = DocsConfig {
        pages,
        guides_dir: config.docs.guides_dir.as_ref().map(PathBuf::from),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&config.docs.output)),
        site_title: config.docs.title.clone(),
    };

    let result = DocsGenerator::new(docs_config).generate()?;

    tracing::info!(
        "Generated {} pages in {}ms ({} failed)",
        result.pages,
        result.duration_ms,
        result.failed
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

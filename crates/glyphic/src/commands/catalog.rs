//! Catalog extraction from an icon set's metadata document.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use glyphic_catalog::{classify, display_name, Category, IconMetadata};

use crate::config::ConfigFile;

/// Upstream metadata document shape.
#[derive(Debug, Deserialize)]
struct UpstreamMetadata {
    icons: Vec<UpstreamIcon>,
}

#[derive(Debug, Deserialize)]
struct UpstreamIcon {
    name: String,

    #[serde(default)]
    keywords: Vec<String>,
}

/// Run the catalog command.
pub async fn run(
    config: &ConfigFile,
    metadata: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let metadata_path = metadata.unwrap_or_else(|| PathBuf::from(&config.icons.metadata));
    let output_path = output.unwrap_or_else(|| PathBuf::from(&config.icons.catalog));

    let content = fs::read_to_string(&metadata_path)
        .with_context(|| format!("Failed to read {}", metadata_path.display()))?;

    let upstream: UpstreamMetadata = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", metadata_path.display()))?;

    let catalog: Vec<IconMetadata> = upstream
        .icons
        .into_iter()
        .map(|icon| {
            let display_name = display_name(&icon.name);
            let category = classify(&icon.name);
            let description = format!("{} icon", display_name);
            IconMetadata {
                name: icon.name,
                display_name,
                description,
                category,
                keywords: icon.keywords,
            }
        })
        .collect();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;
    fs::write(&output_path, json)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    tracing::info!(
        "Extracted {} icons to {}",
        catalog.len(),
        output_path.display()
    );

    // Per-category counts, largest first.
    let mut counts: HashMap<Category, usize> = HashMap::new();
    for icon in &catalog {
        *counts.entry(icon.category).or_default() += 1;
    }

    let mut counts: Vec<(Category, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.as_str().cmp(b.0.as_str())));

    for (category, count) in counts {
        tracing::info!("  {}: {} icons", category, count);
    }

    Ok(())
}

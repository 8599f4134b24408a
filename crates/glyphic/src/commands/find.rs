//! Catalog search command.

use anyhow::Result;

use glyphic_catalog::Catalog;

use crate::config::ConfigFile;

/// Run the find command.
pub async fn run(config: &ConfigFile, query: &str, category: Option<&str>) -> Result<()> {
    let catalog = Catalog::load(&config.icons.catalog);

    let results = match category {
        Some(category) => catalog
            .by_category(category)
            .into_iter()
            .filter(|icon| icon.matches(query))
            .collect(),
        None => catalog.search(query),
    };

    if results.is_empty() {
        tracing::info!("No icons match \"{}\"", query);
        return Ok(());
    }

    for icon in &results {
        println!(
            "{:<24} {:<24} {}",
            icon.name, icon.display_name, icon.category
        );
    }

    tracing::info!("{} icons match \"{}\"", results.len(), query);

    Ok(())
}

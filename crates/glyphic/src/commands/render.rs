//! Single-icon rendering command.

use std::sync::Arc;

use anyhow::Result;

use glyphic_icons::{HttpSource, IconService, RenderStyle};

use crate::config::ConfigFile;

/// Run the render command.
pub async fn run(
    config: &ConfigFile,
    name: &str,
    size: u32,
    class: &str,
    style: &str,
) -> Result<()> {
    let Some(style) = RenderStyle::from_name(style) else {
        anyhow::bail!(
            "Unknown style \"{}\" (expected plain, high-quality, or original)",
            style
        );
    };

    let service = IconService::new(Arc::new(HttpSource::new(config.icons.base_url.as_str())));
    let markup = service.render(name, size, class, style).await;

    println!("{markup}");

    Ok(())
}

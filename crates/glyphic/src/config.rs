//! Configuration file loading (glyphic.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (glyphic.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub icons: IconsConfig,

    #[serde(default)]
    pub docs: DocsSettings,
}

#[derive(Debug, Deserialize)]
pub struct IconsConfig {
    /// Remote base URL serving one SVG file per icon name
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Catalog document consumed by `find`
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Upstream metadata document consumed by `catalog`
    #[serde(default = "default_metadata")]
    pub metadata: String,

    /// Local SVG mirror directory refreshed by `sync`
    #[serde(default = "default_mirror")]
    pub dir: String,
}

#[derive(Debug, Deserialize)]
pub struct DocsSettings {
    /// Output directory for generated pages
    #[serde(default = "default_docs_output")]
    pub output: String,

    /// Site title
    #[serde(default = "default_site_title")]
    pub title: String,

    /// Explicitly listed pages
    #[serde(default = "default_pages")]
    pub pages: Vec<PageEntry>,

    /// Directory of guide files converted wholesale
    pub guides_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    pub source: String,
    pub title: Option<String>,
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/gravity-ui/icons/main/svgs".to_string()
}
fn default_catalog() -> String {
    "icons/all-icons.json".to_string()
}
fn default_metadata() -> String {
    "metadata.json".to_string()
}
fn default_mirror() -> String {
    "icons".to_string()
}
fn default_docs_output() -> String {
    "docs".to_string()
}
fn default_site_title() -> String {
    "Glyphic".to_string()
}
fn default_pages() -> Vec<PageEntry> {
    vec![
        PageEntry {
            source: "README.md".to_string(),
            title: Some("README".to_string()),
        },
        PageEntry {
            source: "MILESTONE.md".to_string(),
            title: Some("MILESTONE".to_string()),
        },
    ]
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            catalog: default_catalog(),
            metadata: default_metadata(),
            dir: default_mirror(),
        }
    }
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            output: default_docs_output(),
            title: default_site_title(),
            pages: default_pages(),
            guides_dir: None,
        }
    }
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

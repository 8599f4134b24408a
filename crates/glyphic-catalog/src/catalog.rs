//! Catalog loading and queries.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::category::Category;
use crate::metadata::IconMetadata;

/// Errors that can occur when loading a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// The loaded icon catalog.
///
/// Owns the metadata entries in document order plus a category index built
/// in a single pass at construction; both are read-only afterward.
#[derive(Debug, Default)]
pub struct Catalog {
    icons: Vec<IconMetadata>,
    by_category: HashMap<Category, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog from already-parsed entries.
    pub fn new(icons: Vec<IconMetadata>) -> Self {
        let mut by_category: HashMap<Category, Vec<usize>> = HashMap::new();
        for (idx, icon) in icons.iter().enumerate() {
            by_category.entry(icon.category).or_default().push(idx);
        }
        Self { icons, by_category }
    }

    /// Load a catalog document (a JSON array of metadata entries).
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let icons: Vec<IconMetadata> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self::new(icons))
    }

    /// Load a catalog document, degrading to an empty catalog on failure.
    ///
    /// A missing or malformed document is logged and produces a catalog for
    /// which every query legitimately reports zero results.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path.as_ref()) {
            Ok(catalog) => {
                tracing::info!(
                    "Loaded {} icons from {}",
                    catalog.len(),
                    path.as_ref().display()
                );
                catalog
            }
            Err(e) => {
                tracing::warn!("{}; continuing with an empty catalog", e);
                Self::default()
            }
        }
    }

    /// All entries, in catalog order.
    pub fn icons(&self) -> &[IconMetadata] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Look up one icon by its unique name.
    pub fn get(&self, name: &str) -> Option<&IconMetadata> {
        self.icons.iter().find(|icon| icon.name == name)
    }

    /// Search icons by name, display name, or keyword.
    ///
    /// Case-insensitive substring match; results keep catalog order and are
    /// not ranked.
    pub fn search(&self, query: &str) -> Vec<&IconMetadata> {
        self.icons.iter().filter(|icon| icon.matches(query)).collect()
    }

    /// Icons in a category, in catalog order.
    pub fn icons_in(&self, category: Category) -> Vec<&IconMetadata> {
        self.by_category
            .get(&category)
            .map(|indices| indices.iter().map(|&idx| &self.icons[idx]).collect())
            .unwrap_or_default()
    }

    /// Icons in a category given by name. Unknown names yield no results.
    pub fn by_category(&self, category: &str) -> Vec<&IconMetadata> {
        match Category::parse(category) {
            Some(category) => self.icons_in(category),
            None => Vec::new(),
        }
    }

    /// Categories present in the catalog, sorted by name.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.by_category.keys().copied().collect();
        categories.sort_by_key(|category| category.as_str());
        categories
    }
}

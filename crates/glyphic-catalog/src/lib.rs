//! Icon catalog: metadata model, category classification, and search.
//!
//! This crate loads the precomputed icon index (a JSON array of metadata
//! entries), groups it by category once at load time, and answers
//! name/keyword queries over it.

pub mod catalog;
pub mod category;
pub mod metadata;

pub use catalog::{Catalog, CatalogError};
pub use category::{classify, Category};
pub use metadata::{display_name, IconMetadata};

//! CLI subcommand implementations.

pub mod catalog;
pub mod docs;
pub mod find;
pub mod render;
pub mod sync;

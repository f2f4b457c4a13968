//! Content loaders for reading game data from files.
//!
//! Loaders convert RON/TOML files into core types and oracle
//! implementations. All loaders use gloam-core types directly with serde.

pub mod config;
pub mod item;

pub use config::ConfigLoader;
pub use item::{ItemCatalog, ItemLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

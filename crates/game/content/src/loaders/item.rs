//! Item catalog loader.

use std::path::Path;

use gloam_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItemOracle;
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load raw item definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }

    /// Load and validate a catalog into an oracle.
    pub fn load_oracle(path: &Path) -> LoadResult<CatalogItemOracle> {
        let definitions = Self::load(path)?;
        CatalogItemOracle::from_definitions(definitions)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog {}: {}", path.display(), e))
    }
}

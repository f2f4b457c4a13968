//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and provides loaders for
//! RON/TOML data files:
//! - Item catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed through the core's oracle traits and never appears
//! in game state. All loaders use gloam-core types directly with serde.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogError, CatalogItemOracle};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ItemCatalog, ItemLoader};

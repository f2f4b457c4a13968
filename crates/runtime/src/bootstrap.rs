//! Session assembly from shipped content files.

use std::path::Path;
use std::sync::Arc;

use gloam_content::loaders::{ConfigLoader, ItemLoader};

use crate::session::GameSession;

/// Builds a session from a content directory.
///
/// The directory is expected to contain:
/// ```text
/// data_dir/
/// ├── config.toml
/// └── items.ron
/// ```
pub fn session_from_content(data_dir: &Path) -> anyhow::Result<GameSession> {
    let config = ConfigLoader::load(&data_dir.join("config.toml"))?;
    let oracle = ItemLoader::load_oracle(&data_dir.join("items.ron"))?;

    tracing::info!(
        data_dir = %data_dir.display(),
        items = oracle.len(),
        "content loaded"
    );

    Ok(GameSession::new(config, Arc::new(oracle))?)
}

//! Catalog-backed item oracle.

use std::collections::HashMap;

use gloam_core::{ItemDefinition, ItemDefinitionError, ItemId, ItemOracle};

/// Validation failures raised while building a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Definition(#[from] ItemDefinitionError),

    #[error("duplicate item id {id:?}")]
    DuplicateId { id: ItemId },
}

/// Validated, indexed item catalog implementing [`ItemOracle`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogItemOracle {
    items: HashMap<ItemId, ItemDefinition>,
}

impl CatalogItemOracle {
    /// Builds an oracle from raw definitions, enforcing the authoring
    /// invariants and id uniqueness.
    pub fn from_definitions(
        definitions: Vec<ItemDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut items = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            definition.validate()?;
            let id = definition.id;
            if items.insert(id, definition).is_some() {
                return Err(CatalogError::DuplicateId { id });
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for CatalogItemOracle {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition> {
        self.items.get(&id).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        let mut definitions: Vec<_> = self.items.values().cloned().collect();
        definitions.sort_by_key(|definition| definition.id);
        definitions
    }
}

//! Item definitions and lookup.
//!
//! Definitions are authored as static content and shared by handle: slots,
//! equip references and events carry an [`ItemId`], and anything that needs
//! the full template resolves it through an [`ItemOracle`].

/// Reference to an item definition (lookup via an [`ItemOracle`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// Item definition with common fields and category-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds the fields every item has (identity, icon, stacking)
/// - `kind` holds the category payload (restorative effect, lantern stats, ...)
///
/// # Stacking
///
/// `max_stack` is meaningful only when `stackable` is set; non-stackable
/// items always occupy exactly one unit per slot. Use [`stack_limit`] for
/// the effective per-slot bound.
///
/// [`stack_limit`]: ItemDefinition::stack_limit
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Asset key for the panel/HUD icon.
    pub icon: String,
    pub kind: ItemKind,
    pub stackable: bool,
    pub max_stack: u16,
    /// Asset key for the physical pickup/equip object, when one exists.
    pub world_model: Option<String>,
}

impl ItemDefinition {
    /// Effective per-slot count bound: `max_stack` for stackable items,
    /// always 1 otherwise.
    pub fn stack_limit(&self) -> u16 {
        if self.stackable { self.max_stack.max(1) } else { 1 }
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    /// Checks the authoring invariants a definition must satisfy before it
    /// can enter a catalog.
    pub fn validate(&self) -> Result<(), ItemDefinitionError> {
        if self.name.is_empty() {
            return Err(ItemDefinitionError::EmptyName { id: self.id });
        }
        if self.stackable && self.max_stack == 0 {
            return Err(ItemDefinitionError::ZeroMaxStack { id: self.id });
        }
        if let ItemKind::LightEquipment(data) = &self.kind {
            if data.efficiency == 0 || data.max_fuel == 0 {
                return Err(ItemDefinitionError::DegenerateLightEquipment { id: self.id });
            }
        }
        Ok(())
    }
}

/// Category payload for an item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Consumable that adjusts a vital or refuels a lantern.
    Restorative(RestorativeData),

    /// Equippable light source (lanterns).
    LightEquipment(LightEquipmentData),

    /// Equippable totem carrying a passive effect tag.
    Totem(TotemData),

    /// Inert pickup with no use effect.
    Misc,
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Restorative(_) => ItemCategory::Restorative,
            ItemKind::LightEquipment(_) => ItemCategory::LightEquipment,
            ItemKind::Totem(_) => ItemCategory::Totem,
            ItemKind::Misc => ItemCategory::Misc,
        }
    }
}

/// Payload-free category tag, used for guards and display.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Restorative,
    LightEquipment,
    Totem,
    Misc,
}

/// Restorative-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestorativeData {
    pub target: RestorativeKind,
    pub amount: u16,
}

/// What a restorative replenishes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RestorativeKind {
    Health,
    Hunger,
    /// Routed to the equipped lantern as fuel.
    Light,
}

/// Light-equipment-specific data. Values scale linearly against the
/// baselines in [`GameConfig`](crate::GameConfig) when a lantern is equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightEquipmentData {
    pub efficiency: u16,
    pub brightness: u16,
    pub max_fuel: u16,
}

/// Totem-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TotemData {
    pub effect: String,
}

/// Authoring invariant violations caught at catalog load.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemDefinitionError {
    #[error("item {id:?} has an empty name")]
    EmptyName { id: ItemId },

    #[error("item {id:?} is stackable with max_stack = 0")]
    ZeroMaxStack { id: ItemId },

    #[error("light equipment {id:?} has zero efficiency or max_fuel")]
    DegenerateLightEquipment { id: ItemId },
}

/// Read-only lookup for item definitions.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition>;

    /// Returns all definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

//! Engine-independent gameplay core for Gloam.
//!
//! `gloam-core` defines the canonical item, inventory, vitals and lantern
//! rules and exposes pure APIs reused by the runtime and offline tools.
//! Notifications are synchronous [`Signal`]s, static data comes in through
//! the [`ItemOracle`] seam, and nothing here touches an engine, a thread, or
//! the filesystem.
pub mod config;
pub mod equipment;
pub mod events;
pub mod inventory;
pub mod items;
pub mod lantern;
pub mod vitals;

pub use config::GameConfig;
pub use equipment::{EquipmentEvent, EquipmentManager};
pub use events::{Signal, Subscription};
pub use inventory::{Inventory, InventoryChanged, InventorySlot};
pub use items::{
    ItemCategory, ItemDefinition, ItemDefinitionError, ItemId, ItemKind, ItemOracle,
    LightEquipmentData, RestorativeData, RestorativeKind, TotemData,
};
pub use lantern::{FuelReceiver, Lantern, LanternEvent};
pub use vitals::{ResourceMeter, VitalsEvent, VitalsTracker};

//! Player vitals: clamped health and hunger meters plus equip references.

use crate::config::GameConfig;
use crate::events::Signal;
use crate::items::{ItemCategory, ItemDefinition};

/// A resource pool clamped to `[0, max]`.
///
/// Mutations are expressed as deltas; callers observe the realized (possibly
/// truncated) delta, never the requested one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    max: u32,
}

impl ResourceMeter {
    /// Creates a full meter.
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Creates a meter at a given level, clamped into `[0, max]`.
    pub fn with_current(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Applies a signed delta, clamping into `[0, max]`.
    /// Returns the realized delta (`new - old`).
    pub fn apply(&mut self, delta: i32) -> i32 {
        let old = self.current as i64;
        let new = (old + delta as i64).clamp(0, self.max as i64);
        self.current = new as u32;
        (new - old) as i32
    }

    /// Fill level in `[0, 1]` for display.
    pub fn normalized(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current == self.max
    }
}

/// Change notification payload for vitals meters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VitalsEvent {
    HealthChanged { current: u32, max: u32, delta: i32 },
    HungerChanged { current: u32, max: u32, delta: i32 },
}

/// Health/hunger state for the player, plus the equipped item references.
///
/// The tracker holds only references to equipped item definitions — the
/// physical and behavioral lantern state lives with the
/// [`EquipmentManager`](crate::EquipmentManager), which observes
/// [`lantern_equip_requested`](VitalsTracker::lantern_equip_requested).
#[derive(Debug)]
pub struct VitalsTracker {
    health: ResourceMeter,
    hunger: ResourceMeter,
    lantern_item: Option<ItemDefinition>,
    totem_item: Option<ItemDefinition>,

    /// Fires after any meter mutation with a non-zero realized delta.
    pub changed: Signal<VitalsEvent>,

    /// Fires when a lantern reference is equipped, so an external binder can
    /// instantiate the in-world lantern.
    pub lantern_equip_requested: Signal<ItemDefinition>,
}

impl VitalsTracker {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            health: ResourceMeter::new(config.max_health),
            hunger: ResourceMeter::new(config.max_hunger),
            lantern_item: None,
            totem_item: None,
            changed: Signal::new(),
            lantern_equip_requested: Signal::new(),
        }
    }

    pub fn health(&self) -> ResourceMeter {
        self.health
    }

    pub fn hunger(&self) -> ResourceMeter {
        self.hunger
    }

    pub fn health_normalized(&self) -> f32 {
        self.health.normalized()
    }

    pub fn hunger_normalized(&self) -> f32 {
        self.hunger.normalized()
    }

    /// Applies a clamped health delta; returns the realized delta.
    /// Notifies only when the realized delta is non-zero.
    pub fn apply_health(&mut self, delta: i32) -> i32 {
        let realized = self.health.apply(delta);
        if realized != 0 {
            self.changed.emit(&VitalsEvent::HealthChanged {
                current: self.health.current(),
                max: self.health.max(),
                delta: realized,
            });
        }
        realized
    }

    /// Applies a clamped hunger delta; returns the realized delta.
    /// Notifies only when the realized delta is non-zero.
    pub fn apply_hunger(&mut self, delta: i32) -> i32 {
        let realized = self.hunger.apply(delta);
        if realized != 0 {
            self.changed.emit(&VitalsEvent::HungerChanged {
                current: self.hunger.current(),
                max: self.hunger.max(),
                delta: realized,
            });
        }
        realized
    }

    /// Stores the equipped lantern reference and raises the equip-requested
    /// notification. Wrong-category items are a logged no-op.
    pub fn equip_lantern_reference(&mut self, item: &ItemDefinition) {
        if item.category() != ItemCategory::LightEquipment {
            tracing::warn!(
                item = %item.name,
                category = %item.category(),
                "rejected lantern equip reference: wrong category"
            );
            return;
        }
        self.lantern_item = Some(item.clone());
        self.lantern_equip_requested.emit(item);
    }

    /// Stores the equipped totem reference. Wrong-category items are a
    /// logged no-op.
    pub fn equip_totem_reference(&mut self, item: &ItemDefinition) {
        if item.category() != ItemCategory::Totem {
            tracing::warn!(
                item = %item.name,
                category = %item.category(),
                "rejected totem equip reference: wrong category"
            );
            return;
        }
        tracing::debug!(item = %item.name, "totem reference equipped");
        self.totem_item = Some(item.clone());
    }

    pub fn lantern_item(&self) -> Option<&ItemDefinition> {
        self.lantern_item.as_ref()
    }

    pub fn totem_item(&self) -> Option<&ItemDefinition> {
        self.totem_item.as_ref()
    }
}

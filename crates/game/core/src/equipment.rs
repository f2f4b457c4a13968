//! Equipment binding: one live lantern driven by vitals equip requests.
//!
//! The manager is the external binder for the vitals tracker's
//! equip-requested notification: it owns the single instantiated
//! [`Lantern`], replaces it when a new one is requested, and republishes
//! equipped/unequipped notifications for presentation observers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::GameConfig;
use crate::events::{Signal, Subscription};
use crate::items::ItemDefinition;
use crate::lantern::{FuelReceiver, Lantern};
use crate::vitals::VitalsTracker;

/// Equipment lifecycle notification payload.
#[derive(Clone, Debug, PartialEq)]
pub enum EquipmentEvent {
    Equipped(ItemDefinition),
    /// Fires before the previous lantern instance is destroyed.
    Unequipped(ItemDefinition),
}

/// Binds at most one lantern instance to the owner.
#[derive(Debug)]
pub struct EquipmentManager {
    config: GameConfig,
    lantern: Option<Lantern>,
    equipped_item: Option<ItemDefinition>,

    /// Fires on equip/unequip; `Unequipped` always precedes teardown.
    pub events: Signal<EquipmentEvent>,
}

impl EquipmentManager {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            lantern: None,
            equipped_item: None,
            events: Signal::new(),
        }
    }

    /// Subscribes `manager` to the tracker's equip-requested notification.
    ///
    /// The handler holds a weak reference, so dropping the manager turns the
    /// binding into a no-op; keep the returned subscription to detach
    /// eagerly.
    pub fn attach(manager: &Rc<RefCell<Self>>, vitals: &mut VitalsTracker) -> Subscription {
        let weak = Rc::downgrade(manager);
        vitals.lantern_equip_requested.subscribe(move |item| {
            if let Some(manager) = weak.upgrade() {
                manager.borrow_mut().equip(item);
            }
        })
    }

    /// Instantiates a lantern for `item`, unconditionally tearing down any
    /// previous one first.
    pub fn equip(&mut self, item: &ItemDefinition) {
        let Some(lantern) = Lantern::from_item(item, &self.config) else {
            tracing::warn!(item = %item.name, "equip request rejected");
            return;
        };

        if let Some(previous) = self.equipped_item.take() {
            self.events.emit(&EquipmentEvent::Unequipped(previous));
            self.lantern = None;
        }

        tracing::debug!(item = %item.name, "lantern equipped");
        self.lantern = Some(lantern);
        self.equipped_item = Some(item.clone());
        self.events.emit(&EquipmentEvent::Equipped(item.clone()));
    }

    /// Tears down the bound lantern, if any.
    pub fn unequip(&mut self) {
        if let Some(previous) = self.equipped_item.take() {
            self.events.emit(&EquipmentEvent::Unequipped(previous));
            self.lantern = None;
        }
    }

    pub fn lantern(&self) -> Option<&Lantern> {
        self.lantern.as_ref()
    }

    pub fn lantern_mut(&mut self) -> Option<&mut Lantern> {
        self.lantern.as_mut()
    }

    pub fn equipped_item(&self) -> Option<&ItemDefinition> {
        self.equipped_item.as_ref()
    }

    pub fn turn_on(&mut self) {
        match self.lantern.as_mut() {
            Some(lantern) => lantern.turn_on(),
            None => tracing::debug!("turn_on with no lantern equipped"),
        }
    }

    pub fn turn_off(&mut self) {
        match self.lantern.as_mut() {
            Some(lantern) => lantern.turn_off(),
            None => tracing::debug!("turn_off with no lantern equipped"),
        }
    }

    pub fn toggle(&mut self) {
        match self.lantern.as_mut() {
            Some(lantern) => lantern.toggle(),
            None => tracing::debug!("toggle with no lantern equipped"),
        }
    }

    /// Per-frame drain for the bound lantern.
    pub fn tick(&mut self, elapsed_secs: f32) {
        if let Some(lantern) = self.lantern.as_mut() {
            lantern.tick(elapsed_secs);
        }
    }
}

impl FuelReceiver for EquipmentManager {
    fn receive_fuel(&mut self, amount: u32) -> bool {
        match self.lantern.as_mut() {
            Some(lantern) => lantern.add_fuel(amount),
            None => false,
        }
    }
}

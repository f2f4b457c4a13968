//! Slot-based inventory with stacking.
//!
//! The slot sequence is dense and ordered: stacking always tops off the
//! earliest under-full slot before opening a new one, and removal drains
//! from the end toward the front. Both rules are arbitrary but must stay
//! stable so slot identity survives panel paging.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::events::Signal;
use crate::items::{ItemDefinition, ItemId, ItemKind, RestorativeKind};
use crate::lantern::FuelReceiver;
use crate::vitals::VitalsTracker;

/// One occupied inventory slot. `count` is always ≥ 1 — a slot that reaches
/// zero is removed from the sequence, never persisted empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: ItemId,
    pub count: u16,
}

impl InventorySlot {
    pub fn new(item: ItemId, count: u16) -> Self {
        Self { item, count }
    }
}

/// Change notification payload. Observers re-read the slot sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryChanged;

/// Ordered, capacity-bounded collection of item slots.
#[derive(Debug)]
pub struct Inventory {
    slots: ArrayVec<InventorySlot, { GameConfig::MAX_INVENTORY_SLOTS }>,
    capacity: usize,

    /// Fires after any mutation that placed or removed at least one unit.
    pub changed: Signal<InventoryChanged>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: ArrayVec::new(),
            capacity: capacity.min(GameConfig::MAX_INVENTORY_SLOTS),
            changed: Signal::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at a global index (derived paging view; indexes past the dense
    /// sequence are empty, not errors).
    pub fn slot(&self, global_index: usize) -> Option<&InventorySlot> {
        self.slots.get(global_index)
    }

    /// Total units of `item` across all slots.
    pub fn count_of(&self, item: ItemId) -> u32 {
        self.slots
            .iter()
            .filter(|slot| slot.item == item)
            .map(|slot| slot.count as u32)
            .sum()
    }

    /// Number of panel pages: `ceil(capacity / slots_per_page)`, at least 1.
    pub fn page_count(&self, slots_per_page: usize) -> usize {
        if slots_per_page == 0 {
            tracing::warn!("slots_per_page = 0; clamping page count to 1");
            return 1;
        }
        self.capacity.div_ceil(slots_per_page).max(1)
    }

    /// Attempts to place `amount` units of `item`.
    ///
    /// Stackable items top off existing under-full slots in slot order
    /// first, then new slots open (each up to the stack limit) while
    /// capacity allows. Returns true iff the entire amount was placed;
    /// partial placement is kept on failure. Notifies iff at least one unit
    /// was placed.
    pub fn add(&mut self, item: &ItemDefinition, amount: u32) -> bool {
        let stack_limit = item.stack_limit() as u32;
        let mut remaining = amount;
        let mut placed_any = false;

        if item.stackable {
            for slot in self.slots.iter_mut().filter(|slot| slot.item == item.id) {
                if remaining == 0 {
                    break;
                }
                let space = stack_limit.saturating_sub(slot.count as u32);
                let take = space.min(remaining);
                if take > 0 {
                    slot.count += take as u16;
                    remaining -= take;
                    placed_any = true;
                }
            }
        }

        while remaining > 0 && self.slots.len() < self.capacity {
            let take = remaining.min(stack_limit);
            self.slots.push(InventorySlot::new(item.id, take as u16));
            remaining -= take;
            placed_any = true;
        }

        if remaining > 0 {
            tracing::warn!(
                item = %item.name,
                requested = amount,
                placed = amount - remaining,
                "inventory full; kept partial placement"
            );
        }
        if placed_any {
            self.changed.emit(&InventoryChanged);
        }
        remaining == 0
    }

    /// Attempts to remove `amount` units of `item`, draining slots in
    /// reverse order and deleting any slot that reaches zero.
    ///
    /// Returns true iff the full amount was removed; partial removal is kept
    /// on failure. Notifies iff any unit was removed.
    pub fn remove(&mut self, item: &ItemDefinition, amount: u32) -> bool {
        let mut remaining = amount;
        let mut removed_any = false;

        for index in (0..self.slots.len()).rev() {
            if remaining == 0 {
                break;
            }
            if self.slots[index].item != item.id {
                continue;
            }
            let take = (self.slots[index].count as u32).min(remaining);
            self.slots[index].count -= take as u16;
            remaining -= take;
            removed_any |= take > 0;
            if self.slots[index].count == 0 {
                self.slots.remove(index);
            }
        }

        if remaining > 0 {
            tracing::warn!(
                item = %item.name,
                requested = amount,
                removed = amount - remaining,
                "not enough units to remove; kept partial removal"
            );
        }
        if removed_any {
            self.changed.emit(&InventoryChanged);
        }
        remaining == 0
    }

    /// Consumes exactly one unit of `item` and applies its category effect.
    ///
    /// The removal is atomic: if no unit is available the whole operation
    /// fails. Restoratives adjust the vitals tracker, or route their amount
    /// to `fuel_receiver` for the Light kind — when no receiver can take it
    /// the unit is still consumed and the effect is dropped (logged).
    /// Equipment categories set the tracker's equip references. `Misc` items
    /// are not usable and are left untouched.
    pub fn use_item(
        &mut self,
        item: &ItemDefinition,
        vitals: &mut VitalsTracker,
        fuel_receiver: Option<&mut dyn FuelReceiver>,
    ) -> bool {
        if matches!(item.kind, ItemKind::Misc) {
            tracing::warn!(item = %item.name, "item has no use effect");
            return false;
        }
        if !self.remove(item, 1) {
            tracing::warn!(item = %item.name, "cannot use an item that is not held");
            return false;
        }

        match &item.kind {
            ItemKind::Restorative(data) => match data.target {
                RestorativeKind::Health => {
                    vitals.apply_health(data.amount as i32);
                }
                RestorativeKind::Hunger => {
                    vitals.apply_hunger(data.amount as i32);
                }
                RestorativeKind::Light => {
                    let delivered = match fuel_receiver {
                        Some(receiver) => receiver.receive_fuel(data.amount as u32),
                        None => false,
                    };
                    if !delivered {
                        tracing::warn!(
                            item = %item.name,
                            "no lantern receiver; light restorative effect dropped"
                        );
                    }
                }
            },
            ItemKind::LightEquipment(_) => vitals.equip_lantern_reference(item),
            ItemKind::Totem(_) => vitals.equip_totem_reference(item),
            // Rejected before the removal above.
            ItemKind::Misc => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{LightEquipmentData, RestorativeData};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn stackable(id: u32, max_stack: u16) -> ItemDefinition {
        ItemDefinition {
            id: ItemId(id),
            name: format!("item-{id}"),
            description: String::new(),
            icon: String::new(),
            kind: ItemKind::Misc,
            stackable: true,
            max_stack,
            world_model: None,
        }
    }

    fn health_draught(amount: u16) -> ItemDefinition {
        ItemDefinition {
            id: ItemId(100),
            name: "Health Draught".into(),
            description: String::new(),
            icon: "icons/draught".into(),
            kind: ItemKind::Restorative(RestorativeData {
                target: RestorativeKind::Health,
                amount,
            }),
            stackable: true,
            max_stack: 9,
            world_model: None,
        }
    }

    fn lamp_oil(amount: u16) -> ItemDefinition {
        ItemDefinition {
            id: ItemId(101),
            name: "Lamp Oil".into(),
            description: String::new(),
            icon: "icons/oil".into(),
            kind: ItemKind::Restorative(RestorativeData {
                target: RestorativeKind::Light,
                amount,
            }),
            stackable: true,
            max_stack: 9,
            world_model: None,
        }
    }

    fn wick_lantern() -> ItemDefinition {
        ItemDefinition {
            id: ItemId(102),
            name: "Wick Lantern".into(),
            description: String::new(),
            icon: "icons/lantern".into(),
            kind: ItemKind::LightEquipment(LightEquipmentData {
                efficiency: 10,
                brightness: 10,
                max_fuel: 100,
            }),
            stackable: false,
            max_stack: 1,
            world_model: Some("props/lantern".into()),
        }
    }

    fn slot_counts(inventory: &Inventory) -> Vec<u16> {
        inventory.slots().iter().map(|slot| slot.count).collect()
    }

    #[test]
    fn stacking_fills_earliest_slot_then_opens_new_ones() {
        let item = stackable(1, 5);
        let mut inventory = Inventory::new(2);

        assert!(inventory.add(&item, 3));
        assert_eq!(slot_counts(&inventory), vec![3]);

        assert!(inventory.add(&item, 4));
        assert_eq!(slot_counts(&inventory), vec![5, 2]);

        // Both slots reachable but capacity-bound: top off the second only.
        assert!(inventory.add(&item, 3));
        assert_eq!(slot_counts(&inventory), vec![5, 5]);

        // Full on both axes: nothing placed, state unchanged.
        assert!(!inventory.add(&item, 1));
        assert_eq!(slot_counts(&inventory), vec![5, 5]);
    }

    #[test]
    fn failed_add_keeps_partial_placement() {
        let item = stackable(1, 5);
        let mut inventory = Inventory::new(1);

        assert!(!inventory.add(&item, 8));
        assert_eq!(slot_counts(&inventory), vec![5]);
        assert_eq!(inventory.count_of(item.id), 5);
    }

    #[test]
    fn non_stackable_items_occupy_one_unit_per_slot() {
        let mut item = stackable(2, 40);
        item.stackable = false;
        let mut inventory = Inventory::new(3);

        assert!(inventory.add(&item, 2));
        assert_eq!(slot_counts(&inventory), vec![1, 1]);
        assert!(!inventory.add(&item, 2));
        assert_eq!(slot_counts(&inventory), vec![1, 1, 1]);
    }

    #[test]
    fn removal_drains_from_the_end() {
        let item = stackable(1, 5);
        let mut inventory = Inventory::new(3);
        assert!(inventory.add(&item, 12));
        assert_eq!(slot_counts(&inventory), vec![5, 5, 2]);

        assert!(inventory.remove(&item, 4));
        assert_eq!(slot_counts(&inventory), vec![5, 3]);

        // add-then-remove of the same amount restores the layout.
        assert!(inventory.add(&item, 4));
        assert!(inventory.remove(&item, 4));
        assert_eq!(slot_counts(&inventory), vec![5, 3]);
    }

    #[test]
    fn failed_remove_keeps_partial_removal() {
        let item = stackable(1, 5);
        let other = stackable(9, 5);
        let mut inventory = Inventory::new(3);
        assert!(inventory.add(&item, 3));
        assert!(inventory.add(&other, 2));

        assert!(!inventory.remove(&item, 5));
        assert_eq!(inventory.count_of(item.id), 0);
        assert_eq!(inventory.count_of(other.id), 2);
    }

    #[test]
    fn no_slot_ever_exceeds_stack_limit_or_reaches_zero() {
        let item = stackable(1, 5);
        let mut inventory = Inventory::new(4);

        for (add, remove) in [(7u32, 3u32), (2, 6), (11, 1), (4, 9)] {
            inventory.add(&item, add);
            inventory.remove(&item, remove);
            for slot in inventory.slots() {
                assert!(slot.count >= 1);
                assert!(slot.count <= item.max_stack);
            }
            let occupied = inventory.len() as u32;
            assert!(inventory.count_of(item.id) <= occupied * item.max_stack as u32);
        }
    }

    #[test]
    fn change_notification_fires_only_when_units_move() {
        let item = stackable(1, 5);
        let mut inventory = Inventory::new(1);
        let fired = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&fired);
        inventory
            .changed
            .subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(inventory.add(&item, 5));
        assert_eq!(*fired.borrow(), 1);

        // Full inventory: nothing placed, no notification.
        assert!(!inventory.add(&item, 1));
        assert_eq!(*fired.borrow(), 1);

        assert!(inventory.remove(&item, 2));
        assert_eq!(*fired.borrow(), 2);

        let absent = stackable(8, 5);
        assert!(!inventory.remove(&absent, 1));
        assert_eq!(*fired.borrow(), 2);
    }

    #[test]
    fn using_a_health_restorative_heals_and_consumes() {
        let item = health_draught(20);
        let mut inventory = Inventory::new(2);
        let mut vitals = VitalsTracker::new(&GameConfig::default());
        vitals.apply_health(-50);
        assert!(inventory.add(&item, 2));

        assert!(inventory.use_item(&item, &mut vitals, None));
        assert_eq!(vitals.health().current(), 70);
        assert_eq!(inventory.count_of(item.id), 1);

        assert!(inventory.use_item(&item, &mut vitals, None));
        assert!(!inventory.use_item(&item, &mut vitals, None));
        assert_eq!(vitals.health().current(), 90);
    }

    #[test]
    fn light_restorative_without_receiver_is_still_consumed() {
        let item = lamp_oil(25);
        let mut inventory = Inventory::new(1);
        let mut vitals = VitalsTracker::new(&GameConfig::default());
        assert!(inventory.add(&item, 1));

        assert!(inventory.use_item(&item, &mut vitals, None));
        assert_eq!(inventory.count_of(item.id), 0);
    }

    #[test]
    fn light_restorative_routes_to_receiver() {
        struct Tank(u32);
        impl FuelReceiver for Tank {
            fn receive_fuel(&mut self, amount: u32) -> bool {
                self.0 += amount;
                true
            }
        }

        let item = lamp_oil(25);
        let mut inventory = Inventory::new(1);
        let mut vitals = VitalsTracker::new(&GameConfig::default());
        let mut tank = Tank(0);
        assert!(inventory.add(&item, 1));

        assert!(inventory.use_item(&item, &mut vitals, Some(&mut tank)));
        assert_eq!(tank.0, 25);
    }

    #[test]
    fn using_equipment_sets_the_equip_reference() {
        let item = wick_lantern();
        let mut inventory = Inventory::new(1);
        let mut vitals = VitalsTracker::new(&GameConfig::default());
        assert!(inventory.add(&item, 1));

        assert!(inventory.use_item(&item, &mut vitals, None));
        assert_eq!(vitals.lantern_item().map(|def| def.id), Some(item.id));
        assert_eq!(inventory.count_of(item.id), 0);
    }

    #[test]
    fn misc_items_are_not_usable_and_not_consumed() {
        let item = stackable(1, 5);
        let mut inventory = Inventory::new(1);
        let mut vitals = VitalsTracker::new(&GameConfig::default());
        assert!(inventory.add(&item, 3));

        assert!(!inventory.use_item(&item, &mut vitals, None));
        assert_eq!(inventory.count_of(item.id), 3);
    }

    #[test]
    fn paging_view_is_derived_from_capacity() {
        let inventory = Inventory::new(24);
        assert_eq!(inventory.page_count(8), 3);
        assert_eq!(inventory.page_count(10), 3);
        assert_eq!(inventory.page_count(0), 1);
        assert!(inventory.slot(0).is_none());
    }
}

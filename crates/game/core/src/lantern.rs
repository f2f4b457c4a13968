//! Equippable lantern: fuel accumulator and lit-state machine.
//!
//! Two independent facts compose into the lit state: player intent
//! (`requested_on`) and remaining fuel. Draining to empty extinguishes the
//! lantern without clearing intent, and refueling never re-ignites on its
//! own — only an explicit [`turn_on`](Lantern::turn_on) or
//! [`toggle`](Lantern::toggle) lights it again.

use crate::config::GameConfig;
use crate::events::Signal;
use crate::items::{ItemDefinition, ItemKind};

/// Fuel sink resolved by capability lookup at use time.
///
/// Light restoratives route their amount through this handle; callers pass
/// whichever receiver is currently equipped (or none).
pub trait FuelReceiver {
    /// Accepts `amount` fuel units. Returns false when nothing could take
    /// them, in which case the caller decides what happens to the payload.
    fn receive_fuel(&mut self, amount: u32) -> bool;
}

/// Lantern notification payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanternEvent {
    /// Fired on every integer-level fuel change.
    FuelChanged { current: u32, max: u32 },

    /// Fired on every flip of the lit state.
    LitChanged(bool),

    /// Fired exactly once per transition into empty.
    Depleted,
}

/// Behavioral state of the equipped lantern.
///
/// Fuel is kept fractional internally to support sub-unit-per-tick drain;
/// observers see the floored integer level.
#[derive(Debug)]
pub struct Lantern {
    fuel: f32,
    max_fuel: f32,
    requested_on: bool,
    lit: bool,
    consumption_per_second: f32,
    efficiency_multiplier: f32,
    brightness_multiplier: f32,

    pub events: Signal<LanternEvent>,
}

impl Lantern {
    /// Builds a lantern from a light-equipment definition, deriving the
    /// brightness and efficiency multipliers linearly against the config
    /// baselines and seeding a small starting charge.
    ///
    /// Returns `None` (logged) for non-light-equipment items or degenerate
    /// payloads that slipped past catalog validation.
    pub fn from_item(item: &ItemDefinition, config: &GameConfig) -> Option<Self> {
        let ItemKind::LightEquipment(data) = &item.kind else {
            tracing::warn!(item = %item.name, "cannot build a lantern from a non-light item");
            return None;
        };
        if data.efficiency == 0 || data.max_fuel == 0 || config.efficiency_baseline == 0 {
            tracing::warn!(item = %item.name, "degenerate light equipment payload");
            return None;
        }

        let max_fuel = data.max_fuel as f32;
        let mut lantern = Self {
            fuel: 0.0,
            max_fuel,
            requested_on: false,
            lit: false,
            consumption_per_second: config.lantern_consumption_per_second,
            efficiency_multiplier: data.efficiency as f32 / config.efficiency_baseline as f32,
            brightness_multiplier: if config.brightness_baseline == 0 {
                1.0
            } else {
                data.brightness as f32 / config.brightness_baseline as f32
            },
            events: Signal::new(),
        };
        // A freshly equipped lantern starts with a small usable charge.
        if lantern.fuel <= 0.0 {
            lantern.fuel = config.initial_fuel_seed.clamp(0.0, max_fuel);
        }
        Some(lantern)
    }

    /// Remaining fuel, floored for observers.
    pub fn fuel(&self) -> u32 {
        self.fuel as u32
    }

    pub fn max_fuel(&self) -> u32 {
        self.max_fuel as u32
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn requested_on(&self) -> bool {
        self.requested_on
    }

    pub fn brightness_multiplier(&self) -> f32 {
        self.brightness_multiplier
    }

    pub fn efficiency_multiplier(&self) -> f32 {
        self.efficiency_multiplier
    }

    /// Player intent: light the lantern. An empty lantern cannot be lit;
    /// the request is dropped and intent is cleared.
    pub fn turn_on(&mut self) {
        if self.fuel <= 0.0 {
            tracing::warn!("cannot light an empty lantern");
            self.requested_on = false;
            self.set_lit(false);
            return;
        }
        self.requested_on = true;
        self.set_lit(true);
    }

    /// Player intent: extinguish the lantern.
    pub fn turn_off(&mut self) {
        self.requested_on = false;
        self.set_lit(false);
    }

    pub fn toggle(&mut self) {
        if self.requested_on {
            self.turn_off();
        } else {
            self.turn_on();
        }
    }

    /// Adds fuel, clamped to `max_fuel`. Refueling an extinguished lantern
    /// does not light it. Returns false for a zero amount.
    pub fn add_fuel(&mut self, amount: u32) -> bool {
        if amount == 0 {
            tracing::warn!("ignored zero-amount refuel");
            return false;
        }
        let before = self.fuel();
        self.fuel = (self.fuel + amount as f32).clamp(0.0, self.max_fuel);
        if self.fuel() != before {
            self.events.emit(&LanternEvent::FuelChanged {
                current: self.fuel(),
                max: self.max_fuel(),
            });
        }
        true
    }

    /// Per-frame drain. Burns fuel only while lit; crossing into empty
    /// fires `Depleted` once and extinguishes without clearing intent.
    pub fn tick(&mut self, elapsed_secs: f32) {
        if !self.lit || elapsed_secs <= 0.0 {
            return;
        }
        let before = self.fuel();
        let drain = (self.consumption_per_second / self.efficiency_multiplier) * elapsed_secs;
        self.fuel = (self.fuel - drain).max(0.0);

        if self.fuel() != before {
            self.events.emit(&LanternEvent::FuelChanged {
                current: self.fuel(),
                max: self.max_fuel(),
            });
        }
        if self.fuel <= 0.0 {
            tracing::debug!("lantern fuel depleted");
            self.events.emit(&LanternEvent::Depleted);
            self.set_lit(false);
        }
    }

    fn set_lit(&mut self, lit: bool) {
        if self.lit != lit {
            self.lit = lit;
            self.events.emit(&LanternEvent::LitChanged(lit));
        }
    }
}

impl FuelReceiver for Lantern {
    fn receive_fuel(&mut self, amount: u32) -> bool {
        self.add_fuel(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemId, LightEquipmentData};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn lantern_item(efficiency: u16, max_fuel: u16) -> ItemDefinition {
        ItemDefinition {
            id: ItemId(1),
            name: "Wick Lantern".into(),
            description: String::new(),
            icon: "icons/lantern".into(),
            kind: ItemKind::LightEquipment(LightEquipmentData {
                efficiency,
                brightness: 15,
                max_fuel,
            }),
            stackable: false,
            max_stack: 1,
            world_model: None,
        }
    }

    fn lit_lantern_with_full_tank() -> Lantern {
        let mut lantern =
            Lantern::from_item(&lantern_item(10, 100), &GameConfig::default()).unwrap();
        lantern.add_fuel(100);
        lantern.turn_on();
        lantern
    }

    #[test]
    fn initialize_derives_multipliers_and_seeds_fuel() {
        let config = GameConfig::default();
        let lantern = Lantern::from_item(&lantern_item(20, 100), &config).unwrap();

        assert_eq!(lantern.fuel(), config.initial_fuel_seed as u32);
        assert_eq!(lantern.max_fuel(), 100);
        assert!((lantern.efficiency_multiplier() - 2.0).abs() < f32::EPSILON);
        assert!((lantern.brightness_multiplier() - 1.5).abs() < f32::EPSILON);
        assert!(!lantern.is_lit());

        assert!(Lantern::from_item(&lantern_item(0, 100), &config).is_none());
    }

    #[test]
    fn turn_on_with_empty_tank_clears_intent() {
        let mut lantern = lit_lantern_with_full_tank();
        lantern.turn_off();

        // Drain everything out of band, then try to light it.
        lantern.turn_on();
        for _ in 0..200 {
            lantern.tick(1.0);
        }
        assert_eq!(lantern.fuel(), 0);

        lantern.turn_on();
        assert!(!lantern.is_lit());
        assert!(!lantern.requested_on());
    }

    #[test]
    fn hundred_seconds_at_baseline_depletes_exactly_once() {
        let mut lantern = lit_lantern_with_full_tank();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        lantern
            .events
            .subscribe(move |event: &LanternEvent| sink.borrow_mut().push(*event));

        for _ in 0..100 {
            lantern.tick(1.0);
        }

        assert_eq!(lantern.fuel(), 0);
        assert!(!lantern.is_lit());
        {
            let seen = events.borrow();
            let depleted = seen
                .iter()
                .filter(|event| matches!(event, LanternEvent::Depleted))
                .count();
            let lit_flips = seen
                .iter()
                .filter(|event| matches!(event, LanternEvent::LitChanged(false)))
                .count();
            assert_eq!(depleted, 1);
            assert_eq!(lit_flips, 1);
        }

        // Further ticks on an empty, extinguished lantern fire nothing.
        let seen_before = events.borrow().len();
        lantern.tick(1.0);
        assert_eq!(events.borrow().len(), seen_before);
    }

    #[test]
    fn fuel_is_monotone_while_lit_and_stays_in_range() {
        let mut lantern = lit_lantern_with_full_tank();
        let mut previous = lantern.fuel();
        for _ in 0..400 {
            lantern.tick(0.37);
            let current = lantern.fuel();
            assert!(current <= previous);
            assert!(current <= lantern.max_fuel());
            previous = current;
        }
        assert_eq!(lantern.fuel(), 0);
    }

    #[test]
    fn refuel_after_depletion_requires_explicit_turn_on() {
        let mut lantern = lit_lantern_with_full_tank();
        for _ in 0..100 {
            lantern.tick(1.0);
        }
        assert!(!lantern.is_lit());

        assert!(lantern.add_fuel(30));
        assert_eq!(lantern.fuel(), 30);
        // Refueling enables a later turn_on but never re-ignites by itself.
        assert!(!lantern.is_lit());

        lantern.turn_on();
        assert!(lantern.is_lit());
    }

    #[test]
    fn add_fuel_clamps_to_max_and_rejects_zero() {
        let mut lantern =
            Lantern::from_item(&lantern_item(10, 100), &GameConfig::default()).unwrap();
        assert!(!lantern.add_fuel(0));
        assert!(lantern.add_fuel(500));
        assert_eq!(lantern.fuel(), 100);
    }

    #[test]
    fn half_efficiency_drains_twice_as_fast() {
        let config = GameConfig::default();
        let mut slow = Lantern::from_item(&lantern_item(20, 100), &config).unwrap();
        let mut fast = Lantern::from_item(&lantern_item(5, 100), &config).unwrap();
        slow.add_fuel(100);
        fast.add_fuel(100);
        slow.turn_on();
        fast.turn_on();

        slow.tick(10.0);
        fast.tick(10.0);

        // Baseline is 1 fuel/s: efficiency 20 burns 5, efficiency 5 burns 20.
        assert_eq!(slow.fuel(), 95);
        assert_eq!(fast.fuel(), 80);
    }
}

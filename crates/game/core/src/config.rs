/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of inventory slots available to the owner.
    /// Clamped to [`GameConfig::MAX_INVENTORY_SLOTS`] at inventory creation.
    pub inventory_capacity: usize,

    /// Slots shown per page by the inventory panel.
    pub slots_per_page: usize,

    /// Upper bound for the health meter.
    pub max_health: u32,

    /// Upper bound for the hunger meter.
    pub max_hunger: u32,

    /// Fuel units a lantern burns per second at baseline efficiency.
    pub lantern_consumption_per_second: f32,

    /// Efficiency payload value that maps to a 1.0 drain multiplier.
    pub efficiency_baseline: u16,

    /// Brightness payload value that maps to a 1.0 brightness multiplier.
    pub brightness_baseline: u16,

    /// Fuel seeded into a freshly equipped lantern that would otherwise start empty.
    pub initial_fuel_seed: f32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Hard upper bound on inventory slots; runtime capacity may be lower.
    pub const MAX_INVENTORY_SLOTS: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 24;
    pub const DEFAULT_SLOTS_PER_PAGE: usize = 8;
    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_MAX_HUNGER: u32 = 100;
    pub const DEFAULT_LANTERN_CONSUMPTION_PER_SECOND: f32 = 1.0;
    pub const DEFAULT_EFFICIENCY_BASELINE: u16 = 10;
    pub const DEFAULT_BRIGHTNESS_BASELINE: u16 = 10;
    pub const DEFAULT_INITIAL_FUEL_SEED: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            inventory_capacity: Self::DEFAULT_INVENTORY_CAPACITY,
            slots_per_page: Self::DEFAULT_SLOTS_PER_PAGE,
            max_health: Self::DEFAULT_MAX_HEALTH,
            max_hunger: Self::DEFAULT_MAX_HUNGER,
            lantern_consumption_per_second: Self::DEFAULT_LANTERN_CONSUMPTION_PER_SECOND,
            efficiency_baseline: Self::DEFAULT_EFFICIENCY_BASELINE,
            brightness_baseline: Self::DEFAULT_BRIGHTNESS_BASELINE,
            initial_fuel_seed: Self::DEFAULT_INITIAL_FUEL_SEED,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Player session: component ownership and the command surface.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gloam_core::{
    EquipmentManager, GameConfig, Inventory, ItemId, ItemKind, ItemOracle, RestorativeKind,
    Subscription, VitalsTracker,
};

/// Configuration problems that prevent a session from starting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("inventory capacity must be at least 1")]
    ZeroInventoryCapacity,

    #[error("slots_per_page must be at least 1")]
    ZeroSlotsPerPage,

    #[error("efficiency baseline must be non-zero")]
    ZeroEfficiencyBaseline,
}

/// One player's live gameplay state.
///
/// Owns the inventory, vitals tracker and equipment manager; the manager
/// sits behind a shared single-threaded handle because the vitals
/// equip-requested signal drives it.
pub struct GameSession {
    config: GameConfig,
    items: Arc<dyn ItemOracle>,
    inventory: Inventory,
    vitals: VitalsTracker,
    equipment: Rc<RefCell<EquipmentManager>>,
    _equip_binding: Subscription,
}

impl GameSession {
    pub fn new(config: GameConfig, items: Arc<dyn ItemOracle>) -> Result<Self, SessionError> {
        if config.inventory_capacity == 0 {
            return Err(SessionError::ZeroInventoryCapacity);
        }
        if config.slots_per_page == 0 {
            return Err(SessionError::ZeroSlotsPerPage);
        }
        if config.efficiency_baseline == 0 {
            return Err(SessionError::ZeroEfficiencyBaseline);
        }

        let inventory = Inventory::new(config.inventory_capacity);
        let mut vitals = VitalsTracker::new(&config);
        let equipment = Rc::new(RefCell::new(EquipmentManager::new(config.clone())));
        let equip_binding = EquipmentManager::attach(&equipment, &mut vitals);

        Ok(Self {
            config,
            items,
            inventory,
            vitals,
            equipment,
            _equip_binding: equip_binding,
        })
    }

    // ========================================================================
    // Commands (input/UI callbacks)
    // ========================================================================

    /// World pickup flow: resolve the definition and add to the inventory.
    pub fn pickup(&mut self, item: ItemId, amount: u32) -> bool {
        let Some(definition) = self.items.definition(item) else {
            tracing::warn!(?item, "pickup of unknown item id");
            return false;
        };
        self.inventory.add(&definition, amount)
    }

    /// Drops units back into the world (the despawn side is the engine's).
    pub fn drop_item(&mut self, item: ItemId, amount: u32) -> bool {
        let Some(definition) = self.items.definition(item) else {
            tracing::warn!(?item, "drop of unknown item id");
            return false;
        };
        self.inventory.remove(&definition, amount)
    }

    /// Panel "use" flow for the selected item.
    pub fn use_item(&mut self, item: ItemId) -> bool {
        let Some(definition) = self.items.definition(item) else {
            tracing::warn!(?item, "use of unknown item id");
            return false;
        };

        // The equipment manager doubles as the fuel receiver, but its handle
        // is also held by the equip-requested binding. Borrow it only on the
        // fuel path, where that signal cannot fire.
        let routes_fuel = matches!(
            &definition.kind,
            ItemKind::Restorative(data) if data.target == RestorativeKind::Light
        );
        if routes_fuel {
            let mut equipment = self.equipment.borrow_mut();
            self.inventory
                .use_item(&definition, &mut self.vitals, Some(&mut *equipment))
        } else {
            self.inventory.use_item(&definition, &mut self.vitals, None)
        }
    }

    pub fn toggle_lantern(&mut self) {
        self.equipment.borrow_mut().toggle();
    }

    pub fn lantern_on(&mut self) {
        self.equipment.borrow_mut().turn_on();
    }

    pub fn lantern_off(&mut self) {
        self.equipment.borrow_mut().turn_off();
    }

    /// Per-frame update. Drain happens before this returns, so observers of
    /// the lantern signals refresh within the same frame.
    pub fn tick(&mut self, elapsed_secs: f32) {
        self.equipment.borrow_mut().tick(elapsed_secs);
    }

    // ========================================================================
    // Read surface (HUD / panel binders)
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn items(&self) -> &Arc<dyn ItemOracle> {
        &self.items
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access, primarily for observers subscribing to `changed`.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn vitals(&self) -> &VitalsTracker {
        &self.vitals
    }

    pub fn vitals_mut(&mut self) -> &mut VitalsTracker {
        &mut self.vitals
    }

    /// Shared handle to the equipment manager (lantern HUD binders clone it).
    pub fn equipment(&self) -> Rc<RefCell<EquipmentManager>> {
        Rc::clone(&self.equipment)
    }

    /// Inventory panel page count for the configured page size.
    pub fn page_count(&self) -> usize {
        self.inventory.page_count(self.config.slots_per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloam_content::CatalogItemOracle;
    use gloam_core::{ItemDefinition, LightEquipmentData, RestorativeData};

    fn oracle() -> Arc<dyn ItemOracle> {
        let definitions = vec![
            ItemDefinition {
                id: ItemId(1),
                name: "Health Draught".into(),
                description: String::new(),
                icon: "icons/draught".into(),
                kind: ItemKind::Restorative(RestorativeData {
                    target: RestorativeKind::Health,
                    amount: 25,
                }),
                stackable: true,
                max_stack: 9,
                world_model: None,
            },
            ItemDefinition {
                id: ItemId(10),
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
            },
        ];
        Arc::new(CatalogItemOracle::from_definitions(definitions).unwrap())
    }

    #[test]
    fn rejects_degenerate_configuration() {
        let mut config = GameConfig::default();
        config.slots_per_page = 0;
        assert_eq!(
            GameSession::new(config, oracle()).err(),
            Some(SessionError::ZeroSlotsPerPage)
        );
    }

    #[test]
    fn unknown_ids_are_logged_no_ops() {
        let mut session = GameSession::new(GameConfig::default(), oracle()).unwrap();
        assert!(!session.pickup(ItemId(404), 1));
        assert!(!session.use_item(ItemId(404)));
        assert!(!session.drop_item(ItemId(404), 1));
        assert!(session.inventory().is_empty());
    }

    #[test]
    fn using_the_lantern_equips_it_through_the_binding() {
        let mut session = GameSession::new(GameConfig::default(), oracle()).unwrap();
        assert!(session.pickup(ItemId(10), 1));
        assert!(session.use_item(ItemId(10)));

        let equipment = session.equipment();
        assert_eq!(
            equipment
                .borrow()
                .equipped_item()
                .map(|definition| definition.id),
            Some(ItemId(10))
        );
        assert_eq!(session.inventory().count_of(ItemId(10)), 0);
    }

    #[test]
    fn page_count_tracks_configured_capacity() {
        let mut config = GameConfig::default();
        config.inventory_capacity = 10;
        config.slots_per_page = 4;
        let session = GameSession::new(config, oracle()).unwrap();
        assert_eq!(session.page_count(), 3);
    }
}

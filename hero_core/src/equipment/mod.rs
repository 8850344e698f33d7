//! Equipment resolution: effective stats and equip/unequip transitions
//!
//! Both transitions work on a copy of the character, so a failure leaves the
//! input untouched and nothing is ever destroyed.

use crate::character::Character;
use crate::error::{EngineError, EngineResult};
use catalog_core::{EquipmentSlot, Item, Stats};
use tracing::debug;

/// Base stats plus the bonus of every equipped item
pub fn effective_stats(character: &Character) -> Stats {
    character
        .equipment
        .iter()
        .fold(character.stats, |total, (_, item)| total + item.bonus_stats())
}

/// Move one `item` from the inventory into its slot
///
/// Whatever occupied the slot goes back to the inventory first.
pub fn equip(character: &Character, item: &Item) -> EngineResult<Character> {
    let slot = item.equip_slot().ok_or_else(|| EngineError::InvalidSlot {
        item_id: item.id.clone(),
    })?;

    let mut next = character.clone();
    let owned = next.take(&item.id, 1)?;
    // The owned copy decides where it goes
    if owned.equip_slot() != Some(slot) {
        return Err(EngineError::InvalidSlot {
            item_id: item.id.clone(),
        });
    }

    if let Some(previous) = next.equipment.take(slot) {
        next.store(previous, 1)?;
    }
    next.equipment.put(slot, owned);

    debug!(character = %character.id, item = %item.id, %slot, "Equipped item");
    Ok(next)
}

/// Return the item in `slot` to the inventory. An empty slot is a no-op.
pub fn unequip(character: &Character, slot: EquipmentSlot) -> EngineResult<Character> {
    let mut next = character.clone();
    let Some(item) = next.equipment.take(slot) else {
        return Ok(next);
    };

    let item_id = item.id.clone();
    next.store(item, 1)?;

    debug!(character = %character.id, item = %item_id, %slot, "Unequipped item");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSettings;
    use crate::ledger::{add_item, create_character};
    use catalog_core::{Catalog, CharacterClass, StatBonus, DEFAULT_CATALOG_SEED};

    fn setup() -> (Catalog, Character) {
        let catalog = Catalog::builtin(DEFAULT_CATALOG_SEED).unwrap();
        let hero = create_character(
            "c1",
            "u1",
            "Aria",
            CharacterClass::Warrior,
            &catalog,
            &GameSettings::default(),
        )
        .unwrap();
        (catalog, hero)
    }

    fn give(catalog: &Catalog, hero: &Character, item_id: &str, quantity: u32) -> Character {
        add_item(hero, catalog.item(item_id).unwrap(), quantity).unwrap()
    }

    #[test]
    fn test_effective_stats_sums_bonuses() {
        let (catalog, hero) = setup();
        let hero = give(&catalog, &hero, "iron-sword", 1);
        let hero = give(&catalog, &hero, "strength-ring", 1);
        let hero = equip(&hero, catalog.item("iron-sword").unwrap()).unwrap();
        let hero = equip(&hero, catalog.item("strength-ring").unwrap()).unwrap();

        let stats = effective_stats(&hero);
        assert_eq!(stats.strength, 15 + 5 + 3);
        assert_eq!(stats.intelligence, 8);
        // Base stats are untouched
        assert_eq!(hero.stats.strength, 15);
    }

    #[test]
    fn test_equip_consumes_inventory() {
        let (catalog, hero) = setup();
        let hero = give(&catalog, &hero, "iron-sword", 2);
        let hero = equip(&hero, catalog.item("iron-sword").unwrap()).unwrap();

        assert_eq!(hero.quantity_of("iron-sword"), 1);
        assert_eq!(
            hero.equipment.get(EquipmentSlot::Weapon).map(|i| i.id.as_str()),
            Some("iron-sword")
        );
    }

    #[test]
    fn test_equip_swaps_previous_item_back() {
        let (catalog, hero) = setup();
        let hero = give(&catalog, &hero, "iron-sword", 1);
        let hero = give(&catalog, &hero, "magic-staff", 1);
        let hero = equip(&hero, catalog.item("iron-sword").unwrap()).unwrap();
        let hero = equip(&hero, catalog.item("magic-staff").unwrap()).unwrap();

        assert_eq!(hero.quantity_of("iron-sword"), 1);
        assert_eq!(hero.quantity_of("magic-staff"), 0);
        assert_eq!(effective_stats(&hero).intelligence, 8 + 8);
        assert_eq!(effective_stats(&hero).strength, 15);
    }

    #[test]
    fn test_equip_consumable_is_invalid_slot() {
        let (catalog, hero) = setup();
        let hero = give(&catalog, &hero, "health-potion", 1);
        let result = equip(&hero, catalog.item("health-potion").unwrap());
        assert_eq!(
            result,
            Err(EngineError::InvalidSlot {
                item_id: "health-potion".to_string()
            })
        );
    }

    #[test]
    fn test_equip_rejects_owned_copy_with_other_slot() {
        let (catalog, hero) = setup();
        let mut hero = give(&catalog, &hero, "iron-sword", 1);
        let entry = hero
            .inventory
            .iter_mut()
            .find(|entry| entry.item.id == "iron-sword")
            .unwrap();
        entry.item.slot = Some(EquipmentSlot::Ring1);

        let result = equip(&hero, catalog.item("iron-sword").unwrap());
        assert_eq!(
            result,
            Err(EngineError::InvalidSlot {
                item_id: "iron-sword".to_string()
            })
        );
        assert_eq!(hero.quantity_of("iron-sword"), 1);
    }

    #[test]
    fn test_equip_requires_ownership() {
        let (catalog, hero) = setup();
        let result = equip(&hero, catalog.item("iron-sword").unwrap());
        assert!(matches!(result, Err(EngineError::NotOwned { .. })));
    }

    #[test]
    fn test_swap_into_full_inventory_is_atomic() {
        let (catalog, mut hero) = setup();
        hero.inventory_size = 2;
        let hero = give(&catalog, &hero, "iron-sword", 1);
        let hero = equip(&hero, catalog.item("iron-sword").unwrap()).unwrap();
        // Two stacks of the staff would stay behind, so the sword has nowhere to go
        let hero = give(&catalog, &hero, "magic-staff", 2);
        let hero = give(&catalog, &hero, "health-potion", 1);

        let result = equip(&hero, catalog.item("magic-staff").unwrap());
        assert!(matches!(result, Err(EngineError::InventoryFull { .. })));
        assert_eq!(hero.quantity_of("magic-staff"), 2);
        assert_eq!(
            hero.equipment.get(EquipmentSlot::Weapon).map(|i| i.id.as_str()),
            Some("iron-sword")
        );
    }

    #[test]
    fn test_unequip_empty_slot_is_noop() {
        let (_, hero) = setup();
        let next = unequip(&hero, EquipmentSlot::Boots).unwrap();
        assert_eq!(next, hero);
    }

    #[test]
    fn test_unequip_full_inventory_fails() {
        let (catalog, mut hero) = setup();
        hero.inventory_size = 1;
        let hero = give(&catalog, &hero, "iron-sword", 1);
        let hero = equip(&hero, catalog.item("iron-sword").unwrap()).unwrap();
        let hero = give(&catalog, &hero, "health-potion", 1);

        let result = unequip(&hero, EquipmentSlot::Weapon);
        assert_eq!(
            result,
            Err(EngineError::InventoryFull {
                item_id: "iron-sword".to_string(),
                capacity: 1
            })
        );
    }

    #[test]
    fn test_equipment_without_bonus() {
        let (_, hero) = setup();
        let plain = Item::equipment(
            "cloth-gloves",
            "Cloth Gloves",
            EquipmentSlot::Gloves,
            StatBonus::default(),
        );
        let hero = add_item(&hero, &plain, 1).unwrap();
        let hero = equip(&hero, &plain).unwrap();
        assert_eq!(effective_stats(&hero), hero.stats);
    }
}

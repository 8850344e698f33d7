//! Character record: stats, inventory, equipment and quest bookkeeping

use crate::error::{EngineError, EngineResult};
use catalog_core::{CharacterClass, EquipmentSlot, Item, Quest, Stats};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stack of identical items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item: Item,
    pub quantity: u32,
}

/// Equipped items keyed by slot. At most one item per slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Equipment(BTreeMap<EquipmentSlot, Item>);

impl Equipment {
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.0.get(&slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        self.0.iter().map(|(slot, item)| (*slot, item))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn put(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        self.0.insert(slot, item)
    }

    pub(crate) fn take(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.0.remove(&slot)
    }
}

/// A player's hero
///
/// Stored as a camelCase JSON document by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    /// Base stats, without equipment
    pub stats: Stats,
    /// Experience toward the next level
    pub experience: u64,
    pub wins: u32,
    pub losses: u32,
    pub gold: u64,
    pub inventory: Vec<InventoryItem>,
    /// Maximum number of inventory stacks
    pub inventory_size: usize,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_quest: Option<Quest>,
    #[serde(default)]
    pub completed_quests: Vec<String>,
    /// Unix seconds of the last duel this character took part in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_duel_at: Option<u64>,
    /// Day number (unix seconds / 86400) that `quests_started_today` counts
    #[serde(default)]
    pub quest_day: u64,
    #[serde(default)]
    pub quests_started_today: u32,
    /// Bumped by the repository on each successful save
    #[serde(default)]
    pub revision: u64,
}

impl Character {
    /// Get the stack holding `item_id`
    pub fn stack(&self, item_id: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|s| s.item.id == item_id)
    }

    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.stack(item_id).map(|s| s.quantity).unwrap_or(0)
    }

    pub fn inventory_full(&self) -> bool {
        self.inventory.len() >= self.inventory_size
    }

    /// Whether one more `item_id` fits, either on an existing stack or in a free slot
    pub fn can_store(&self, item_id: &str) -> bool {
        self.stack(item_id).is_some() || !self.inventory_full()
    }

    /// Merge into an existing stack or append a new one
    pub(crate) fn store(&mut self, item: Item, quantity: u32) -> EngineResult<()> {
        if quantity == 0 {
            return Ok(());
        }
        if let Some(stack) = self.inventory.iter_mut().find(|s| s.item.id == item.id) {
            stack.quantity = stack.quantity.saturating_add(quantity);
            return Ok(());
        }
        if self.inventory_full() {
            return Err(EngineError::InventoryFull {
                item_id: item.id,
                capacity: self.inventory_size,
            });
        }
        self.inventory.push(InventoryItem { item, quantity });
        Ok(())
    }

    /// Remove `quantity` of `item_id`, dropping the stack when it empties
    ///
    /// Returns the stored item so callers keep its exact identity.
    pub(crate) fn take(&mut self, item_id: &str, quantity: u32) -> EngineResult<Item> {
        let position = self
            .inventory
            .iter()
            .position(|s| s.item.id == item_id && s.quantity >= quantity.max(1))
            .ok_or_else(|| EngineError::NotOwned {
                item_id: item_id.to_string(),
            })?;

        let stack = &mut self.inventory[position];
        stack.quantity -= quantity;
        if stack.quantity == 0 {
            Ok(self.inventory.remove(position).item)
        } else {
            Ok(stack.item.clone())
        }
    }
}

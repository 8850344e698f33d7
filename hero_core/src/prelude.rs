//! Prelude module for convenient imports
//!
//! ```rust
//! use hero_core::prelude::*;
//! ```

// Core types
pub use crate::character::{Character, Equipment, InventoryItem};
pub use crate::error::{EngineError, EngineResult, LevelCapReached};

// Engine operations
pub use crate::combat::{duel, fight_monster, CombatResult, DuelOutcome, MonsterFight};
pub use crate::equipment::{effective_stats, equip, unequip};
pub use crate::ledger::{create_character, new_character_id, CharacterRepository, InMemoryRepository};
pub use crate::progression::{add_experience, ProgressionOutcome};
pub use crate::quest::{advance_step, available_quests, quest_state, start_quest, QuestState, StepOutcome};

// Config
pub use crate::config::{CombatConstants, GameSettings};

// Re-exports from catalog_core
pub use catalog_core::{
    Catalog, CharacterClass, EquipmentSlot, Item, Monster, Quest, Stats, DEFAULT_CATALOG_SEED,
};

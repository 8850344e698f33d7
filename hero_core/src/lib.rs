//! hero_core - Character progression, quest and combat engine
//!
//! This library provides:
//! - Character: the ledger record for a player's hero
//! - Equipment resolution: effective stats and equip/unequip transitions
//! - Progression: experience, level thresholds and stat growth
//! - Quests: ordered monster encounters with a completion reward
//! - Combat: seeded turn-based fights against monsters and other characters
//!
//! Every operation takes a character by reference and returns a new value,
//! leaving persistence to the caller.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hero_core::prelude::*;
//! use rand::SeedableRng;
//!
//! let settings = GameSettings::default();
//! let catalog = Catalog::builtin(DEFAULT_CATALOG_SEED)?;
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
//!
//! let hero = create_character(new_character_id(), "user-1", "Aria", CharacterClass::Warrior, &catalog, &settings)?;
//! let hero = start_quest(&hero, &catalog, &settings, now, &mut rng)?;
//! let monster = hero.active_quest.as_ref().and_then(|q| q.pending_monster()).cloned().unwrap();
//! let (hero, fight) = fight_monster(&hero, &monster, &catalog, &settings, &mut rng)?;
//! for line in &fight.combat.log {
//!     println!("{}", line);
//! }
//! ```

pub mod character;
pub mod combat;
pub mod config;
pub mod equipment;
pub mod error;
pub mod ledger;
pub mod prelude;
pub mod progression;
pub mod quest;

// Core API - what most users need
pub use character::{Character, Equipment, InventoryItem};
pub use combat::{
    duel, fight_monster, resolve_combat, CombatEnd, CombatResult, Combatant, DuelOutcome,
    LootAward, MonsterFight, Side,
};
pub use equipment::{effective_stats, equip, unequip};
pub use error::{EngineError, EngineResult, LevelCapReached};
pub use ledger::{
    add_gold, add_item, create_character, new_character_id, parse_class, record_loss, record_win,
    remove_item, CharacterRepository, InMemoryRepository, RepoError,
};
pub use progression::{add_experience, level_up_threshold, ProgressionOutcome};
pub use quest::{advance_step, available_quests, quest_state, start_quest, QuestState, StepOutcome};

// Configuration
pub use config::{CombatConstants, ConfigError, GameSettings};

// Re-export commonly needed catalog types
pub use catalog_core::{Catalog, CharacterClass, EquipmentSlot, Item, Monster, Quest, Stats};

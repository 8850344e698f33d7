//! catalog_core - Immutable game content
//!
//! Everything here is pure data loaded once at startup:
//! - [`Stats`] and [`StatBonus`]: the four core attributes
//! - [`Item`]: equipment and consumables with optional stat bonuses
//! - [`ClassTemplate`]: base stats per [`CharacterClass`]
//! - [`MonsterTemplate`] / [`Monster`]: enemies and their loot tables
//! - [`Quest`] / [`QuestTemplate`]: ordered monster encounters
//!
//! ```rust,ignore
//! use catalog_core::Catalog;
//!
//! let catalog = Catalog::load(Path::new("content/"), 12345)?;
//! let sword = catalog.item("iron-sword").unwrap();
//! ```

mod catalog;
mod config;
mod item;
mod monster;
mod quest;
pub mod types;

pub use catalog::{Catalog, DEFAULT_CATALOG_SEED};
pub use config::{CatalogFileConfig, MonsterConfig, QuestConfig, StepConfig};
pub use item::Item;
pub use monster::{Monster, MonsterTemplate};
pub use quest::{Quest, QuestStep, QuestTemplate};
pub use types::{
    Attribute, CharacterClass, ClassTemplate, EquipmentSlot, ItemKind, Rarity, StatBonus, Stats,
    UnknownClass,
};

pub use loot_tables::{GoldRange, LootRoll, LootTable};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading catalog content
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Catalog validation failed: {0}")]
    Validation(String),
}

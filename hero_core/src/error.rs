//! Engine error types
//!
//! Every variant is an expected domain condition the caller can recover from.

use catalog_core::UnknownClass;
use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Typed failure of an engine operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Item '{item_id}' cannot be equipped: it has no equipment slot")]
    InvalidSlot { item_id: String },

    #[error("Item '{item_id}' is not in the inventory")]
    NotOwned { item_id: String },

    #[error("Inventory is full ({capacity} stacks), cannot store '{item_id}'")]
    InventoryFull { item_id: String, capacity: usize },

    #[error("No quest available at level {level}")]
    NoQuestAvailable { level: u32 },

    #[error("No active quest step: {0}")]
    NoActiveQuest(String),

    #[error(transparent)]
    InvalidCharacterClass(#[from] UnknownClass),

    #[error("Daily quest limit of {limit} reached")]
    DailyQuestLimit { limit: u32 },

    #[error("Duel cooldown active for another {remaining_secs}s")]
    DuelCooldown { remaining_secs: u64 },

    #[error("A character cannot duel itself")]
    SelfDuel,

    #[error("Catalog has no item '{0}'")]
    UnknownItem(String),
}

/// Informational notice: the character sits at the level cap and experience was discarded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Level cap {max_level} reached, {discarded} experience discarded")]
pub struct LevelCapReached {
    pub max_level: u32,
    pub discarded: u64,
}

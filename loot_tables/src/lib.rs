//! loot_tables - What a defeated monster leaves behind
//!
//! A [`LootTable`] pairs a gold range with a list of item drops. Each drop is
//! rolled independently against its own chance, so a single kill can yield
//! any subset of the listed items.
//!
//! ```rust,ignore
//! use loot_tables::{GoldRange, LootTable};
//!
//! let table = LootTable::new(GoldRange::new(10, 30)?)
//!     .with_drop("health-potion", 0.3)?;
//! let roll = table.roll(&mut rng);
//! println!("{} gold, {} items", roll.gold, roll.items.len());
//! ```

mod config;
mod roll;
mod table;

pub use config::{DropConfig, GoldConfig, LootTableConfig};
pub use roll::LootRoll;
pub use table::{DropChance, GoldRange, LootTable};

use thiserror::Error;

/// Error building a loot table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LootError {
    #[error("Gold range is inverted: min {min} > max {max}")]
    InvertedGoldRange { min: u64, max: u64 },
    #[error("Drop chance for '{item_id}' must be within [0, 1], got {chance}")]
    InvalidChance { item_id: String, chance: f64 },
    #[error("Item '{0}' is listed more than once")]
    DuplicateDrop(String),
}

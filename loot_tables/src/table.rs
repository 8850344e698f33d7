use crate::config::{DropConfig, GoldConfig, LootTableConfig};
use crate::roll::LootRoll;
use crate::LootError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A loot table with a gold range and independent per-item drops
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "LootTableConfig", into = "LootTableConfig")]
pub struct LootTable {
    gold: GoldRange,
    drops: Vec<DropChance>,
}

/// Inclusive gold range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoldRange {
    min: u64,
    max: u64,
}

/// An item id and the probability it drops on a single kill
#[derive(Debug, Clone, PartialEq)]
pub struct DropChance {
    pub item_id: String,
    pub chance: f64,
}

impl GoldRange {
    pub fn new(min: u64, max: u64) -> Result<Self, LootError> {
        if min > max {
            return Err(LootError::InvertedGoldRange { min, max });
        }
        Ok(GoldRange { min, max })
    }

    /// A range that always yields exactly `amount`
    pub fn fixed(amount: u64) -> Self {
        GoldRange {
            min: amount,
            max: amount,
        }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> u64 {
        if self.min == self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

impl LootTable {
    /// Create a table that only drops gold
    pub fn new(gold: GoldRange) -> Self {
        LootTable {
            gold,
            drops: Vec::new(),
        }
    }

    /// Parse a loot table from config
    pub fn from_config(config: LootTableConfig) -> Result<Self, LootError> {
        let gold = GoldRange::new(config.gold.min(), config.gold.max())?;
        config
            .drops
            .into_iter()
            .try_fold(LootTable::new(gold), |table, drop| {
                table.with_drop(drop.item, drop.chance)
            })
    }

    /// Add an item drop, validating its chance
    pub fn with_drop(mut self, item_id: impl Into<String>, chance: f64) -> Result<Self, LootError> {
        let item_id = item_id.into();
        if !(0.0..=1.0).contains(&chance) {
            return Err(LootError::InvalidChance { item_id, chance });
        }
        if self.drops.iter().any(|d| d.item_id == item_id) {
            return Err(LootError::DuplicateDrop(item_id));
        }
        self.drops.push(DropChance { item_id, chance });
        Ok(self)
    }

    pub fn gold(&self) -> GoldRange {
        self.gold
    }

    pub fn drops(&self) -> &[DropChance] {
        &self.drops
    }

    /// Item ids this table can ever produce
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.drops.iter().map(|d| d.item_id.as_str())
    }

    /// Roll gold, then every drop independently in table order
    pub fn roll<R: Rng>(&self, rng: &mut R) -> LootRoll {
        let gold = self.gold.sample(rng);
        let items = self
            .drops
            .iter()
            .filter(|drop| rng.gen::<f64>() < drop.chance)
            .map(|drop| drop.item_id.clone())
            .collect();

        LootRoll { gold, items }
    }
}

impl TryFrom<LootTableConfig> for LootTable {
    type Error = LootError;

    fn try_from(config: LootTableConfig) -> Result<Self, Self::Error> {
        LootTable::from_config(config)
    }
}

impl From<LootTable> for LootTableConfig {
    fn from(table: LootTable) -> Self {
        let gold = if table.gold.min == table.gold.max {
            GoldConfig::Single(table.gold.min)
        } else {
            GoldConfig::Range([table.gold.min, table.gold.max])
        };
        LootTableConfig {
            gold,
            drops: table
                .drops
                .into_iter()
                .map(|d| DropConfig {
                    item: d.item_id,
                    chance: d.chance,
                })
                .collect(),
        }
    }
}

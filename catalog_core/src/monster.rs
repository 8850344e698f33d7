use crate::config::MonsterConfig;
use crate::types::Stats;
use loot_tables::{GoldRange, LootError, LootTable};
use serde::{Deserialize, Serialize};

/// A concrete monster at a fixed level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub level: u32,
    pub stats: Stats,
    /// Free-form type tag (e.g. `Humanoid`, `Undead`)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub loot: LootTable,
}

impl Monster {
    pub fn new(name: impl Into<String>, level: u32, stats: Stats, kind: impl Into<String>) -> Self {
        Monster {
            name: name.into(),
            level: level.max(1),
            stats,
            kind: kind.into(),
            loot: LootTable::default(),
        }
    }

    pub fn with_loot(mut self, loot: LootTable) -> Self {
        self.loot = loot;
        self
    }
}

/// A monster blueprint that can be spawned at any level
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterTemplate {
    pub name: String,
    pub kind: String,
    pub base_stats: Stats,
    /// Per-level stat growth factor
    pub level_multiplier: f64,
    loot: LootTable,
}

impl MonsterTemplate {
    /// Build a template, turning the shared drop chance into one entry per possible drop
    pub fn from_config(config: MonsterConfig) -> Result<Self, LootError> {
        let gold = GoldRange::new(config.gold_drop.min(), config.gold_drop.max())?;
        let loot = config
            .possible_drops
            .into_iter()
            .try_fold(LootTable::new(gold), |table, item_id| {
                table.with_drop(item_id, config.drop_chance)
            })?;

        Ok(MonsterTemplate {
            name: config.name,
            kind: config.kind,
            base_stats: config.base_stats,
            level_multiplier: config.level_multiplier,
            loot,
        })
    }

    pub fn loot(&self) -> &LootTable {
        &self.loot
    }

    /// Spawn at `level`: stats grow by `level_multiplier^(level - 1)`, floored
    pub fn spawn(&self, level: u32) -> Monster {
        let level = level.max(1);
        let exponent = (level - 1).min(i32::MAX as u32) as i32;
        let factor = self.level_multiplier.powi(exponent);
        Monster {
            name: self.name.clone(),
            level,
            stats: self.base_stats.scaled(factor),
            kind: self.kind.clone(),
            loot: self.loot.clone(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// TOML/JSON shape of a loot table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LootTableConfig {
    #[serde(default)]
    pub gold: GoldConfig,
    #[serde(default)]
    pub drops: Vec<DropConfig>,
}

/// A single drop entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropConfig {
    pub item: String,
    pub chance: f64,
}

/// Gold can be a single value or a range [min, max]
///
/// This allows `gold = 5` instead of `gold = [5, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoldConfig {
    Single(u64),
    Range([u64; 2]),
}

impl Default for GoldConfig {
    fn default() -> Self {
        GoldConfig::Single(0)
    }
}

impl GoldConfig {
    pub fn min(&self) -> u64 {
        match self {
            GoldConfig::Single(v) => *v,
            GoldConfig::Range([min, _]) => *min,
        }
    }

    pub fn max(&self) -> u64 {
        match self {
            GoldConfig::Single(v) => *v,
            GoldConfig::Range([_, max]) => *max,
        }
    }
}

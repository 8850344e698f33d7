use crate::item::Item;
use crate::quest::QuestTemplate;
use crate::types::{ClassTemplate, Stats};
use loot_tables::GoldConfig;
use serde::Deserialize;

/// TOML configuration for one catalog file
///
/// Every section is optional so content can be split across files freely.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFileConfig {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub classes: Vec<ClassTemplate>,
    #[serde(default)]
    pub monsters: Vec<MonsterConfig>,
    #[serde(default)]
    pub quests: Vec<QuestConfig>,
    #[serde(default)]
    pub quest_templates: Vec<QuestTemplate>,
}

impl CatalogFileConfig {
    /// Append another file's content after this one
    pub fn merge(&mut self, other: CatalogFileConfig) {
        self.items.extend(other.items);
        self.classes.extend(other.classes);
        self.monsters.extend(other.monsters);
        self.quests.extend(other.quests);
        self.quest_templates.extend(other.quest_templates);
    }
}

/// Configuration for a monster template
#[derive(Debug, Clone, Deserialize)]
pub struct MonsterConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub base_stats: Stats,
    #[serde(default = "default_level_multiplier")]
    pub level_multiplier: f64,
    #[serde(default)]
    pub gold_drop: GoldConfig,
    #[serde(default)]
    pub possible_drops: Vec<String>,
    #[serde(default)]
    pub drop_chance: f64,
}

fn default_level_multiplier() -> f64 {
    1.0
}

/// Configuration for a hand-authored quest
#[derive(Debug, Clone, Deserialize)]
pub struct QuestConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_min_level")]
    pub min_level: u32,
    pub experience_reward: u64,
    pub steps: Vec<StepConfig>,
}

fn default_min_level() -> u32 {
    1
}

/// A quest step referencing a monster template by name
#[derive(Debug, Clone, Deserialize)]
pub struct StepConfig {
    pub monster: String,
    #[serde(default = "default_min_level")]
    pub level: u32,
}

//! Game settings: progression tunables and combat constants

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// Tunable game settings
///
/// Passed by reference into every engine operation that needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Multiplier applied to every experience gain
    #[serde(default = "default_experience_multiplier")]
    pub experience_multiplier: f64,
    /// Experience needed to leave level 1
    #[serde(default = "default_level_up_experience_base")]
    pub level_up_experience_base: u64,
    /// Growth of the threshold per level
    #[serde(default = "default_level_up_experience_multiplier")]
    pub level_up_experience_multiplier: f64,
    /// Added to every stat on each level up
    #[serde(default = "default_level_up_stat_increment")]
    pub level_up_stat_increment: u32,
    #[serde(default = "default_max_level")]
    pub max_level: u32,
    #[serde(default = "default_max_quests_per_day")]
    pub max_quests_per_day: u32,
    #[serde(default = "default_pvp_cooldown_minutes")]
    pub pvp_cooldown_minutes: u64,
    /// Inventory stack capacity given to new characters
    #[serde(default = "default_inventory_size")]
    pub inventory_size: usize,
    #[serde(default)]
    pub combat: CombatConstants,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            experience_multiplier: default_experience_multiplier(),
            level_up_experience_base: default_level_up_experience_base(),
            level_up_experience_multiplier: default_level_up_experience_multiplier(),
            level_up_stat_increment: default_level_up_stat_increment(),
            max_level: default_max_level(),
            max_quests_per_day: default_max_quests_per_day(),
            pvp_cooldown_minutes: default_pvp_cooldown_minutes(),
            inventory_size: default_inventory_size(),
            combat: CombatConstants::default(),
        }
    }
}

impl GameSettings {
    /// Load settings from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: GameSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would break progression or combat termination
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |message: &str| Err(ConfigError::ValidationError(message.to_string()));

        if !(self.experience_multiplier >= 0.0) {
            return fail("experience_multiplier must be >= 0");
        }
        if self.level_up_experience_base == 0 {
            return fail("level_up_experience_base must be >= 1");
        }
        if !(self.level_up_experience_multiplier >= 1.0) {
            return fail("level_up_experience_multiplier must be >= 1");
        }
        if self.max_level == 0 {
            return fail("max_level must be >= 1");
        }
        if self.max_quests_per_day == 0 {
            return fail("max_quests_per_day must be >= 1");
        }
        if self.inventory_size == 0 {
            return fail("inventory_size must be >= 1");
        }
        self.combat.validate()
    }
}

fn default_experience_multiplier() -> f64 {
    1.0
}
fn default_level_up_experience_base() -> u64 {
    1000
}
fn default_level_up_experience_multiplier() -> f64 {
    1.5
}
fn default_level_up_stat_increment() -> u32 {
    2
}
fn default_max_level() -> u32 {
    50
}
fn default_max_quests_per_day() -> u32 {
    10
}
fn default_pvp_cooldown_minutes() -> u64 {
    30
}
fn default_inventory_size() -> usize {
    20
}

/// Combat formula constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Safety valve: maximum number of actions before the fight is decided on health
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    /// Formula: hp = hp_base + constitution * hp_per_constitution + level * hp_per_level
    #[serde(default = "default_hp_base")]
    pub hp_base: u32,
    #[serde(default = "default_hp_per_constitution")]
    pub hp_per_constitution: u32,
    #[serde(default = "default_hp_per_level")]
    pub hp_per_level: u32,
    /// Upper bound of the random bonus as a fraction of attack power
    #[serde(default = "default_damage_variance")]
    pub damage_variance: f64,
    #[serde(default = "default_crit_chance_per_dexterity")]
    pub crit_chance_per_dexterity: f64,
    #[serde(default = "default_max_crit_chance")]
    pub max_crit_chance: f64,
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    /// Defense = constitution / defense_divisor
    #[serde(default = "default_defense_divisor")]
    pub defense_divisor: u32,
    /// Floor for every hit
    #[serde(default = "default_min_damage")]
    pub min_damage: u32,
    /// Experience per level of the defeated side
    #[serde(default = "default_experience_per_level")]
    pub experience_per_level: u64,
    /// Scale change per level of difference (defeated - winner)
    #[serde(default = "default_level_difference_step")]
    pub level_difference_step: f64,
    #[serde(default = "default_min_experience_scale")]
    pub min_experience_scale: f64,
    #[serde(default = "default_max_experience_scale")]
    pub max_experience_scale: f64,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            max_rounds: default_max_rounds(),
            hp_base: default_hp_base(),
            hp_per_constitution: default_hp_per_constitution(),
            hp_per_level: default_hp_per_level(),
            damage_variance: default_damage_variance(),
            crit_chance_per_dexterity: default_crit_chance_per_dexterity(),
            max_crit_chance: default_max_crit_chance(),
            crit_multiplier: default_crit_multiplier(),
            defense_divisor: default_defense_divisor(),
            min_damage: default_min_damage(),
            experience_per_level: default_experience_per_level(),
            level_difference_step: default_level_difference_step(),
            min_experience_scale: default_min_experience_scale(),
            max_experience_scale: default_max_experience_scale(),
        }
    }
}

impl CombatConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |message: &str| Err(ConfigError::ValidationError(message.to_string()));

        if self.max_rounds == 0 {
            return fail("combat.max_rounds must be >= 1");
        }
        if self.min_damage == 0 {
            return fail("combat.min_damage must be >= 1");
        }
        if self.defense_divisor == 0 {
            return fail("combat.defense_divisor must be >= 1");
        }
        if self.hp_base == 0 {
            return fail("combat.hp_base must be >= 1");
        }
        if !(0.0..=1.0).contains(&self.max_crit_chance) {
            return fail("combat.max_crit_chance must be within [0, 1]");
        }
        if !(self.damage_variance >= 0.0) || !(self.crit_multiplier >= 1.0) {
            return fail("combat.damage_variance must be >= 0 and crit_multiplier >= 1");
        }
        if !(self.min_experience_scale <= self.max_experience_scale) {
            return fail("combat.min_experience_scale must not exceed max_experience_scale");
        }
        Ok(())
    }
}

fn default_max_rounds() -> u32 {
    100
}
fn default_hp_base() -> u32 {
    50
}
fn default_hp_per_constitution() -> u32 {
    5
}
fn default_hp_per_level() -> u32 {
    10
}
fn default_damage_variance() -> f64 {
    0.25
}
fn default_crit_chance_per_dexterity() -> f64 {
    0.01
}
fn default_max_crit_chance() -> f64 {
    0.5
}
fn default_crit_multiplier() -> f64 {
    1.5
}
fn default_defense_divisor() -> u32 {
    2
}
fn default_min_damage() -> u32 {
    1
}
fn default_experience_per_level() -> u64 {
    100
}
fn default_level_difference_step() -> f64 {
    0.1
}
fn default_min_experience_scale() -> f64 {
    0.1
}
fn default_max_experience_scale() -> f64 {
    2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert!((settings.experience_multiplier - 1.0).abs() < f64::EPSILON);
        assert_eq!(settings.level_up_experience_base, 1000);
        assert!((settings.level_up_experience_multiplier - 1.5).abs() < f64::EPSILON);
        assert_eq!(settings.max_level, 50);
        assert_eq!(settings.max_quests_per_day, 10);
        assert_eq!(settings.pvp_cooldown_minutes, 30);
        assert_eq!(settings.inventory_size, 20);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_settings() {
        let toml = r#"
experience_multiplier = 2.0
max_level = 10

[combat]
max_rounds = 40
"#;

        let settings = GameSettings::from_toml_str(toml).unwrap();
        assert!((settings.experience_multiplier - 2.0).abs() < f64::EPSILON);
        assert_eq!(settings.max_level, 10);
        assert_eq!(settings.level_up_experience_base, 1000);
        assert_eq!(settings.combat.max_rounds, 40);
        assert_eq!(settings.combat.hp_base, 50);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let result = GameSettings::from_toml_str("level_up_experience_multiplier = 0.5");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let result = GameSettings::from_toml_str("[combat]\nmin_damage = 0");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"inventory_size = 30\npvp_cooldown_minutes = 5\n")
            .unwrap();

        let settings = GameSettings::load_from_path(file.path()).unwrap();
        assert_eq!(settings.inventory_size, 30);
        assert_eq!(settings.pvp_cooldown_minutes, 5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = GameSettings::load_from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}

//! Core value types shared by every catalog entry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

/// The four core attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Intelligence,
    Dexterity,
    Constitution,
}

impl Attribute {
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Intelligence,
            Attribute::Dexterity,
            Attribute::Constitution,
        ]
    }
}

/// A full set of attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub intelligence: u32,
    #[serde(default)]
    pub dexterity: u32,
    #[serde(default)]
    pub constitution: u32,
}

impl Stats {
    pub const fn new(strength: u32, intelligence: u32, dexterity: u32, constitution: u32) -> Self {
        Stats {
            strength,
            intelligence,
            dexterity,
            constitution,
        }
    }

    /// Same value in every attribute
    pub const fn uniform(value: u32) -> Self {
        Stats::new(value, value, value, value)
    }

    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
        }
    }

    /// Multiply every attribute, flooring the result
    pub fn scaled(&self, factor: f64) -> Stats {
        let scale = |v: u32| (v as f64 * factor).floor().max(0.0) as u32;
        Stats::new(
            scale(self.strength),
            scale(self.intelligence),
            scale(self.dexterity),
            scale(self.constitution),
        )
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats::new(
            self.strength.saturating_add(rhs.strength),
            self.intelligence.saturating_add(rhs.intelligence),
            self.dexterity.saturating_add(rhs.dexterity),
            self.constitution.saturating_add(rhs.constitution),
        )
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        *self = *self + rhs;
    }
}

impl Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Stats {
        iter.fold(Stats::default(), Add::add)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "STR {} / INT {} / DEX {} / CON {}",
            self.strength, self.intelligence, self.dexterity, self.constitution
        )
    }
}

/// Partial stats granted by an item. Missing fields contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBonus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constitution: Option<u32>,
}

impl StatBonus {
    pub fn as_stats(&self) -> Stats {
        Stats::new(
            self.strength.unwrap_or(0),
            self.intelligence.unwrap_or(0),
            self.dexterity.unwrap_or(0),
            self.constitution.unwrap_or(0),
        )
    }
}

/// Item rarity, ordered from least to most valuable
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Equipment,
    Consumable,
}

/// Equipment slot for gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Helmet,
    Chest,
    Legs,
    Boots,
    Gloves,
    Weapon,
    Necklace,
    Ring1,
    Ring2,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Helmet,
            EquipmentSlot::Chest,
            EquipmentSlot::Legs,
            EquipmentSlot::Boots,
            EquipmentSlot::Gloves,
            EquipmentSlot::Weapon,
            EquipmentSlot::Necklace,
            EquipmentSlot::Ring1,
            EquipmentSlot::Ring2,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Helmet => "helmet",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Legs => "legs",
            EquipmentSlot::Boots => "boots",
            EquipmentSlot::Gloves => "gloves",
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Necklace => "necklace",
            EquipmentSlot::Ring1 => "ring1",
            EquipmentSlot::Ring2 => "ring2",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playable classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
}

impl CharacterClass {
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Rogue,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A class name that does not match any playable class
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown character class: {0}")]
pub struct UnknownClass(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::all()
            .iter()
            .copied()
            .find(|class| class.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownClass(s.to_string()))
    }
}

/// Starting stats and flavour for a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTemplate {
    pub class: CharacterClass,
    #[serde(default)]
    pub description: String,
    pub base_stats: Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_sum() {
        let total: Stats = [Stats::new(1, 2, 3, 4), Stats::uniform(1), Stats::default()]
            .into_iter()
            .sum();
        assert_eq!(total, Stats::new(2, 3, 4, 5));
    }

    #[test]
    fn test_bonus_missing_fields_are_zero() {
        let bonus = StatBonus {
            strength: Some(5),
            ..StatBonus::default()
        };
        assert_eq!(bonus.as_stats(), Stats::new(5, 0, 0, 0));
    }

    #[test]
    fn test_scaled_floors() {
        assert_eq!(Stats::new(8, 6, 12, 8).scaled(1.2), Stats::new(9, 7, 14, 9));
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_class_from_str() {
        assert_eq!("warrior".parse::<CharacterClass>(), Ok(CharacterClass::Warrior));
        assert_eq!(" Mage ".parse::<CharacterClass>(), Ok(CharacterClass::Mage));
        assert_eq!(
            "Paladin".parse::<CharacterClass>(),
            Err(UnknownClass("Paladin".to_string()))
        );
    }

    #[test]
    fn test_slot_serde_names() {
        let text = toml::to_string(&ClassTemplate {
            class: CharacterClass::Rogue,
            description: String::new(),
            base_stats: Stats::new(10, 12, 16, 10),
        })
        .unwrap();
        assert!(text.contains("class = \"Rogue\""));

        #[derive(Deserialize)]
        struct Wrapper {
            slot: EquipmentSlot,
        }
        let parsed: Wrapper = toml::from_str("slot = \"ring2\"").unwrap();
        assert_eq!(parsed.slot, EquipmentSlot::Ring2);
    }
}

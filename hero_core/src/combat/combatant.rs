//! Combat participants derived from characters and monsters

use crate::character::Character;
use crate::config::CombatConstants;
use crate::equipment::effective_stats;
use catalog_core::{CharacterClass, Monster, Stats};
use std::fmt;

/// Which side of a fight. The challenger is the player side and wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Challenger,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Challenger => Side::Opponent,
            Side::Opponent => Side::Challenger,
        }
    }
}

/// How attack power is derived from stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackStyle {
    /// Strength
    Physical,
    /// Intelligence
    Magic,
    /// 70% dexterity, 30% strength
    Finesse,
}

impl AttackStyle {
    pub fn for_class(class: CharacterClass) -> Self {
        match class {
            CharacterClass::Warrior => AttackStyle::Physical,
            CharacterClass::Mage => AttackStyle::Magic,
            CharacterClass::Rogue => AttackStyle::Finesse,
        }
    }

    /// Monsters hit with whichever of strength and intelligence is higher
    pub fn for_monster(stats: &Stats) -> Self {
        if stats.intelligence > stats.strength {
            AttackStyle::Magic
        } else {
            AttackStyle::Physical
        }
    }

    pub fn power(self, stats: &Stats) -> u32 {
        match self {
            AttackStyle::Physical => stats.strength,
            AttackStyle::Magic => stats.intelligence,
            AttackStyle::Finesse => {
                let weighted = 7 * stats.dexterity as u64 + 3 * stats.strength as u64;
                (weighted / 10) as u32
            }
        }
    }

    pub(crate) fn verb(self) -> &'static str {
        match self {
            AttackStyle::Physical => "strikes",
            AttackStyle::Magic => "blasts",
            AttackStyle::Finesse => "slashes",
        }
    }
}

impl fmt::Display for AttackStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttackStyle::Physical => "physical",
            AttackStyle::Magic => "magic",
            AttackStyle::Finesse => "finesse",
        };
        f.write_str(name)
    }
}

/// A fighter as the resolver sees it: effective stats, level and attack style
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    pub name: String,
    pub level: u32,
    pub stats: Stats,
    pub style: AttackStyle,
}

impl Combatant {
    /// Uses effective stats, so equipment counts
    pub fn from_character(character: &Character) -> Self {
        Combatant {
            name: character.name.clone(),
            level: character.level,
            stats: effective_stats(character),
            style: AttackStyle::for_class(character.class),
        }
    }

    pub fn from_monster(monster: &Monster) -> Self {
        Combatant {
            name: monster.name.clone(),
            level: monster.level,
            stats: monster.stats,
            style: AttackStyle::for_monster(&monster.stats),
        }
    }

    pub fn attack_power(&self) -> u32 {
        self.style.power(&self.stats)
    }

    pub fn max_hit_points(&self, constants: &CombatConstants) -> u32 {
        constants
            .hp_base
            .saturating_add(self.stats.constitution.saturating_mul(constants.hp_per_constitution))
            .saturating_add(self.level.saturating_mul(constants.hp_per_level))
    }

    pub fn defense(&self, constants: &CombatConstants) -> u32 {
        self.stats.constitution / constants.defense_divisor.max(1)
    }

    pub fn crit_chance(&self, constants: &CombatConstants) -> f64 {
        (self.stats.dexterity as f64 * constants.crit_chance_per_dexterity)
            .min(constants.max_crit_chance)
    }
}

//! Progression: experience thresholds, level ups and stat growth

use crate::character::Character;
use crate::config::GameSettings;
use crate::error::LevelCapReached;
use catalog_core::Stats;
use tracing::{debug, info};

/// What a call to [`add_experience`] changed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressionOutcome {
    /// Experience after the global multiplier
    pub experience_gained: u64,
    pub levels_gained: u32,
    /// Total added to base stats by the level ups
    pub stat_increase: Stats,
    /// Set when the character sits at the level cap and experience was thrown away
    pub level_cap: Option<LevelCapReached>,
}

impl ProgressionOutcome {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Experience needed to advance from `level` to `level + 1`
///
/// `floor(base * multiplier^(level - 1))`, never below 1.
pub fn level_up_threshold(level: u32, settings: &GameSettings) -> u64 {
    let exponent = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    let threshold = settings.level_up_experience_base as f64
        * settings.level_up_experience_multiplier.powi(exponent);
    (threshold.floor() as u64).max(1)
}

/// Grant experience, leveling up as many times as it covers
///
/// Carry-over is kept. At `max_level` the remainder is discarded and
/// reported through [`ProgressionOutcome::level_cap`].
pub fn add_experience(
    character: &Character,
    amount: u64,
    settings: &GameSettings,
) -> (Character, ProgressionOutcome) {
    let gained = (amount as f64 * settings.experience_multiplier).floor() as u64;

    let mut next = character.clone();
    let mut outcome = ProgressionOutcome {
        experience_gained: gained,
        ..ProgressionOutcome::default()
    };
    next.experience = next.experience.saturating_add(gained);

    while next.level < settings.max_level {
        let threshold = level_up_threshold(next.level, settings);
        if next.experience < threshold {
            break;
        }
        next.experience -= threshold;
        next.level += 1;
        next.stats += Stats::uniform(settings.level_up_stat_increment);
        outcome.levels_gained += 1;
        outcome.stat_increase += Stats::uniform(settings.level_up_stat_increment);

        info!(character = %next.id, level = next.level, "Level up");
    }

    if next.level >= settings.max_level && next.experience > 0 {
        let discarded = std::mem::take(&mut next.experience);
        debug!(
            character = %next.id,
            max_level = settings.max_level,
            discarded,
            "Experience discarded at level cap"
        );
        outcome.level_cap = Some(LevelCapReached {
            max_level: settings.max_level,
            discarded,
        });
    }

    (next, outcome)
}

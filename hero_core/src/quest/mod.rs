//! Quest engine: Idle -> InProgress -> Completed -> Idle
//!
//! A quest is a fixed, ordered list of monster encounters. Steps clear
//! strictly in order and the reward is paid when the last one falls.

use crate::character::Character;
use crate::config::GameSettings;
use crate::error::{EngineError, EngineResult};
use crate::progression::{add_experience, ProgressionOutcome};
use catalog_core::{Catalog, Monster, Quest};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Where a character stands in the quest lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestState {
    Idle,
    InProgress {
        quest_id: String,
        /// Index of the next encounter
        next_step: usize,
        total_steps: usize,
    },
}

/// Result of clearing one quest step
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    StepCleared {
        quest_id: String,
        step: usize,
        remaining: usize,
    },
    QuestCompleted {
        quest_id: String,
        experience_reward: u64,
        progression: ProgressionOutcome,
    },
}

impl StepOutcome {
    pub fn quest_id(&self) -> &str {
        match self {
            StepOutcome::StepCleared { quest_id, .. } => quest_id,
            StepOutcome::QuestCompleted { quest_id, .. } => quest_id,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::QuestCompleted { .. })
    }
}

pub fn quest_state(character: &Character) -> QuestState {
    match &character.active_quest {
        None => QuestState::Idle,
        Some(quest) => QuestState::InProgress {
            quest_id: quest.id.clone(),
            next_step: quest.pending_step_index().unwrap_or(quest.steps.len()),
            total_steps: quest.steps.len(),
        },
    }
}

/// Quests the character may start, lowest minimum level first
///
/// Excludes completed quests and the active one. Equal minimum levels keep
/// catalog order.
pub fn available_quests<'a>(character: &Character, catalog: &'a Catalog) -> Vec<&'a Quest> {
    let active_id = character.active_quest.as_ref().map(|q| q.id.as_str());

    let mut quests: Vec<&Quest> = catalog
        .quests()
        .iter()
        .filter(|q| q.min_level <= character.level)
        .filter(|q| !character.completed_quests.contains(&q.id))
        .filter(|q| Some(q.id.as_str()) != active_id)
        .collect();
    quests.sort_by_key(|q| q.min_level);
    quests
}

/// Assign a random available quest
///
/// A character already on a quest is returned unchanged. `now` is unix
/// seconds and only feeds the daily quest limit.
pub fn start_quest(
    character: &Character,
    catalog: &Catalog,
    settings: &GameSettings,
    now: u64,
    rng: &mut impl Rng,
) -> EngineResult<Character> {
    if let Some(quest) = &character.active_quest {
        debug!(character = %character.id, quest = %quest.id, "Resuming active quest");
        return Ok(character.clone());
    }

    let available = available_quests(character, catalog);
    let no_quest = || EngineError::NoQuestAvailable {
        level: character.level,
    };
    if available.is_empty() {
        warn!(character = %character.id, level = character.level, "No quest available");
        return Err(no_quest());
    }

    let day = now / SECONDS_PER_DAY;
    let started_today = if character.quest_day == day {
        character.quests_started_today
    } else {
        0
    };
    if started_today >= settings.max_quests_per_day {
        warn!(character = %character.id, started_today, "Daily quest limit reached");
        return Err(EngineError::DailyQuestLimit {
            limit: settings.max_quests_per_day,
        });
    }

    let quest = available.choose(rng).ok_or_else(no_quest)?;

    let mut next = character.clone();
    next.active_quest = Some(quest.fresh_copy());
    next.quest_day = day;
    next.quests_started_today = started_today + 1;

    info!(character = %character.id, quest = %quest.id, steps = quest.steps.len(), "Quest started");
    Ok(next)
}

/// The active quest and its pending step index, if `monster` is that step's monster
pub(crate) fn pending_step<'a>(
    character: &'a Character,
    monster: &Monster,
) -> EngineResult<(&'a Quest, usize)> {
    let quest = character
        .active_quest
        .as_ref()
        .ok_or_else(|| EngineError::NoActiveQuest("no quest in progress".to_string()))?;

    let index = quest.pending_step_index().ok_or_else(|| {
        EngineError::NoActiveQuest(format!("quest '{}' has no pending step", quest.id))
    })?;

    if &quest.steps[index].monster != monster {
        return Err(EngineError::NoActiveQuest(format!(
            "{} (level {}) is not the next encounter of '{}'",
            monster.name, monster.level, quest.id
        )));
    }

    Ok((quest, index))
}

/// Mark the pending step cleared, completing the quest on the last one
pub fn advance_step(
    character: &Character,
    monster: &Monster,
    settings: &GameSettings,
) -> EngineResult<(Character, StepOutcome)> {
    let (quest, index) = pending_step(character, monster)?;
    let mut quest = quest.clone();
    quest.steps[index].completed = true;

    let mut next = character.clone();
    let remaining = quest.steps.len() - quest.completed_steps();

    if remaining > 0 {
        debug!(character = %character.id, quest = %quest.id, step = index, remaining, "Quest step cleared");
        let outcome = StepOutcome::StepCleared {
            quest_id: quest.id.clone(),
            step: index,
            remaining,
        };
        next.active_quest = Some(quest);
        return Ok((next, outcome));
    }

    next.active_quest = None;
    if !next.completed_quests.contains(&quest.id) {
        next.completed_quests.push(quest.id.clone());
    }
    let (next, progression) = add_experience(&next, quest.experience_reward, settings);

    info!(
        character = %character.id,
        quest = %quest.id,
        reward = quest.experience_reward,
        "Quest completed"
    );
    Ok((
        next,
        StepOutcome::QuestCompleted {
            quest_id: quest.id,
            experience_reward: quest.experience_reward,
            progression,
        },
    ))
}

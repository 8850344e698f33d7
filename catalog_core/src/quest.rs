use crate::monster::{Monster, MonsterTemplate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Experience granted per monster level when a quest is generated from a template
pub const QUEST_EXPERIENCE_PER_MONSTER_LEVEL: u64 = 100;

/// One monster encounter inside a quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestStep {
    pub monster: Monster,
    #[serde(default)]
    pub completed: bool,
}

/// An ordered series of encounters with an experience reward at the end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub min_level: u32,
    pub steps: Vec<QuestStep>,
    pub experience_reward: u64,
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    /// Copy with every step and the quest itself marked incomplete
    pub fn fresh_copy(&self) -> Quest {
        let mut quest = self.clone();
        quest.completed = false;
        for step in &mut quest.steps {
            step.completed = false;
        }
        quest
    }

    /// Index of the first incomplete step. Steps are cleared strictly in order.
    pub fn pending_step_index(&self) -> Option<usize> {
        self.steps.iter().position(|s| !s.completed)
    }

    pub fn pending_monster(&self) -> Option<&Monster> {
        self.pending_step_index().map(|i| &self.steps[i].monster)
    }

    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }
}

/// A quest blueprint: a number of steps drawn from eligible monster types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub min_level: u32,
    pub steps: u32,
    pub monster_types: Vec<String>,
    #[serde(default = "default_experience_multiplier")]
    pub experience_multiplier: f64,
}

fn default_experience_multiplier() -> f64 {
    1.0
}

impl QuestTemplate {
    /// Quest id derived from the name: lowercase, whitespace runs become `-`
    pub fn quest_id(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Monster templates whose type tag this quest accepts
    pub fn eligible<'a>(&self, monsters: &'a [MonsterTemplate]) -> Vec<&'a MonsterTemplate> {
        monsters
            .iter()
            .filter(|m| self.monster_types.iter().any(|t| t == &m.kind))
            .collect()
    }

    /// Build a concrete quest. Step `i` spawns a random eligible monster at `min_level + i`.
    ///
    /// Returns `None` when the template has no steps or no monster template
    /// matches the quest's types.
    pub fn instantiate<R: Rng>(&self, monsters: &[MonsterTemplate], rng: &mut R) -> Option<Quest> {
        let eligible = self.eligible(monsters);
        if self.steps == 0 || eligible.is_empty() {
            return None;
        }

        let mut steps = Vec::with_capacity(self.steps as usize);
        for i in 0..self.steps {
            let template = eligible.choose(rng)?;
            steps.push(QuestStep {
                monster: template.spawn(self.min_level.max(1) + i),
                completed: false,
            });
        }

        let level_total: u64 = steps.iter().map(|s| s.monster.level as u64).sum();
        let experience_reward = ((level_total * QUEST_EXPERIENCE_PER_MONSTER_LEVEL) as f64
            * self.experience_multiplier)
            .floor() as u64;

        Some(Quest {
            id: self.quest_id(),
            name: self.name.clone(),
            description: self.description.clone(),
            min_level: self.min_level,
            steps,
            experience_reward,
            completed: false,
        })
    }
}

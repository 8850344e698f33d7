//! Character ledger: creation, bookkeeping transitions and snapshots

mod repository;

pub use repository::{CharacterRepository, InMemoryRepository, RepoError};

use crate::character::{Character, Equipment};
use crate::config::GameSettings;
use crate::error::{EngineError, EngineResult};
use catalog_core::{Catalog, CharacterClass, Item, UnknownClass};
use tracing::{debug, info};
use uuid::Uuid;

/// Fresh random character id
pub fn new_character_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parse a class name, accepting any case
pub fn parse_class(name: &str) -> EngineResult<CharacterClass> {
    Ok(name.parse::<CharacterClass>()?)
}

/// Create a level 1 character with the class template's base stats
pub fn create_character(
    id: impl Into<String>,
    user_id: impl Into<String>,
    name: impl Into<String>,
    class: CharacterClass,
    catalog: &Catalog,
    settings: &GameSettings,
) -> EngineResult<Character> {
    let template = catalog
        .class_template(class)
        .ok_or_else(|| EngineError::InvalidCharacterClass(UnknownClass(class.to_string())))?;

    let character = Character {
        id: id.into(),
        user_id: user_id.into(),
        name: name.into(),
        class,
        level: 1,
        stats: template.base_stats,
        experience: 0,
        wins: 0,
        losses: 0,
        gold: 0,
        inventory: Vec::new(),
        inventory_size: settings.inventory_size,
        equipment: Equipment::default(),
        active_quest: None,
        completed_quests: Vec::new(),
        last_duel_at: None,
        quest_day: 0,
        quests_started_today: 0,
        revision: 0,
    };

    info!(character = %character.id, user = %character.user_id, %class, "Created character");
    Ok(character)
}

pub fn add_gold(character: &Character, amount: u64) -> Character {
    let mut next = character.clone();
    next.gold = next.gold.saturating_add(amount);
    next
}

/// Add `quantity` of `item`, merging into an existing stack when possible
pub fn add_item(character: &Character, item: &Item, quantity: u32) -> EngineResult<Character> {
    let mut next = character.clone();
    next.store(item.clone(), quantity)?;
    debug!(character = %character.id, item = %item.id, quantity, "Added item");
    Ok(next)
}

pub fn remove_item(character: &Character, item_id: &str, quantity: u32) -> EngineResult<Character> {
    let mut next = character.clone();
    next.take(item_id, quantity)?;
    Ok(next)
}

pub fn record_win(character: &Character) -> Character {
    let mut next = character.clone();
    next.wins = next.wins.saturating_add(1);
    next
}

pub fn record_loss(character: &Character) -> Character {
    let mut next = character.clone();
    next.losses = next.losses.saturating_add(1);
    next
}

/// camelCase JSON document for storage
pub fn to_json(character: &Character) -> Result<String, serde_json::Error> {
    serde_json::to_string(character)
}

pub fn from_json(json: &str) -> Result<Character, serde_json::Error> {
    serde_json::from_str(json)
}

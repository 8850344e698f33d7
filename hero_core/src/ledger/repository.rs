//! Character persistence seam with optimistic concurrency

use crate::character::Character;
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("Character '{id}' was modified concurrently (expected revision {expected}, stored {stored})")]
    Conflict {
        id: String,
        expected: u64,
        stored: u64,
    },
    #[error("Character '{0}' not found")]
    NotFound(String),
}

/// Storage for character snapshots
///
/// `save` is a compare-and-swap on [`Character::revision`]: the snapshot must
/// carry the revision currently stored (0 for a new character), and the
/// stored copy returned has the next revision.
pub trait CharacterRepository: Send + Sync {
    fn load(&self, id: &str) -> Option<Character>;

    fn save(&self, character: &Character) -> Result<Character, RepoError>;

    /// Every character owned by `user_id`, ordered by name then id
    fn list_by_user(&self, user_id: &str) -> Vec<Character>;
}

/// In-process repository for tests and embedding
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    characters: RwLock<HashMap<String, Character>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.characters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.read().is_empty()
    }
}

impl CharacterRepository for InMemoryRepository {
    fn load(&self, id: &str) -> Option<Character> {
        self.characters.read().get(id).cloned()
    }

    fn save(&self, character: &Character) -> Result<Character, RepoError> {
        let mut characters = self.characters.write();

        let stored_revision = match characters.get(&character.id) {
            Some(stored) => stored.revision,
            None if character.revision == 0 => 0,
            None => return Err(RepoError::NotFound(character.id.clone())),
        };

        if stored_revision != character.revision {
            warn!(
                character = %character.id,
                expected = character.revision,
                stored = stored_revision,
                "Rejected stale save"
            );
            return Err(RepoError::Conflict {
                id: character.id.clone(),
                expected: character.revision,
                stored: stored_revision,
            });
        }

        let mut saved = character.clone();
        saved.revision = stored_revision + 1;
        characters.insert(saved.id.clone(), saved.clone());
        Ok(saved)
    }

    fn list_by_user(&self, user_id: &str) -> Vec<Character> {
        let mut owned: Vec<Character> = self
            .characters
            .read()
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        owned
    }
}

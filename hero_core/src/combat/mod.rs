//! Turn-based combat
//!
//! - [`resolve_combat`]: a pure fight between two [`Combatant`]s driven by an injected RNG
//! - [`fight_monster`]: a quest encounter with rewards
//! - [`duel`]: character against character

mod combatant;
mod damage;
mod encounter;
mod resolution;
mod result;

pub use combatant::{AttackStyle, Combatant, Side};
pub use damage::{calculate_hit, Hit};
pub use encounter::{duel, fight_monster, DuelOutcome, LootAward, MonsterFight};
pub use resolution::{experience_award, resolve_combat};
pub use result::{CombatEnd, CombatResult};

//! Fights with consequences: quest monster encounters and duels
//!
//! These wrap [`resolve_combat`] and apply its outcome to the characters
//! involved: win/loss records, experience, loot and quest progress.

use super::combatant::Combatant;
use super::resolution::resolve_combat;
use super::result::CombatResult;
use crate::character::Character;
use crate::config::GameSettings;
use crate::error::{EngineError, EngineResult};
use crate::ledger::{add_gold, record_loss, record_win};
use crate::progression::{add_experience, ProgressionOutcome};
use crate::quest::{advance_step, pending_step, StepOutcome};
use catalog_core::{Catalog, Item, LootRoll, Monster};
use rand::Rng;
use tracing::{info, warn};

/// Loot claimed from a defeated monster
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LootAward {
    pub gold: u64,
    /// Items added to the inventory
    pub items: Vec<Item>,
    /// Items that dropped but did not fit in the inventory
    pub unclaimed: Vec<Item>,
}

/// Everything that happened in a quest encounter
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterFight {
    pub combat: CombatResult,
    /// `None` when the character lost
    pub loot: Option<LootAward>,
    pub progression: Option<ProgressionOutcome>,
    pub step: Option<StepOutcome>,
}

impl MonsterFight {
    pub fn victory(&self) -> bool {
        self.combat.challenger_won()
    }
}

/// Fight the pending monster of the character's active quest
///
/// A win records the win, grants experience and loot and clears the step.
/// A loss only records the loss.
pub fn fight_monster(
    character: &Character,
    monster: &Monster,
    catalog: &Catalog,
    settings: &GameSettings,
    rng: &mut impl Rng,
) -> EngineResult<(Character, MonsterFight)> {
    pending_step(character, monster)?;

    let hero = Combatant::from_character(character);
    let foe = Combatant::from_monster(monster);
    let combat = resolve_combat(&hero, &foe, &settings.combat, rng);

    if !combat.challenger_won() {
        info!(character = %character.id, monster = %monster.name, "Defeated by monster");
        let fight = MonsterFight {
            combat,
            loot: None,
            progression: None,
            step: None,
        };
        return Ok((record_loss(character), fight));
    }

    let next = record_win(character);
    let (next, progression) = add_experience(&next, combat.experience_awarded, settings);
    let (next, loot) = claim_loot(&next, monster.loot.roll(rng), catalog)?;
    let (next, step) = advance_step(&next, monster, settings)?;

    info!(
        character = %character.id,
        monster = %monster.name,
        gold = loot.gold,
        items = loot.items.len(),
        "Monster defeated"
    );

    Ok((
        next,
        MonsterFight {
            combat,
            loot: Some(loot),
            progression: Some(progression),
            step: Some(step),
        },
    ))
}

/// Add rolled gold and items. Items that do not fit are reported, not dropped silently.
fn claim_loot(
    character: &Character,
    roll: LootRoll,
    catalog: &Catalog,
) -> EngineResult<(Character, LootAward)> {
    let mut next = add_gold(character, roll.gold);
    let mut award = LootAward {
        gold: roll.gold,
        ..LootAward::default()
    };

    for item_id in &roll.items {
        let item = catalog
            .item(item_id)
            .ok_or_else(|| EngineError::UnknownItem(item_id.clone()))?;

        if next.can_store(&item.id) {
            next.store(item.clone(), 1)?;
            award.items.push(item.clone());
        } else {
            warn!(character = %character.id, item = %item.id, "Inventory full, loot unclaimed");
            award.unclaimed.push(item.clone());
        }
    }

    Ok((next, award))
}

/// Result of a duel between two characters
#[derive(Debug, Clone, PartialEq)]
pub struct DuelOutcome {
    /// Updated winner snapshot
    pub winner: Character,
    /// Updated loser snapshot
    pub loser: Character,
    pub challenger_won: bool,
    /// Experience credited to the winner, after the global multiplier
    pub experience_gained: u64,
    pub progression: ProgressionOutcome,
    pub log: Vec<String>,
}

/// Character against character
///
/// The challenger must be off cooldown (`pvp_cooldown_minutes` since their
/// last duel). Both sides record `now` as their last duel time.
pub fn duel(
    challenger: &Character,
    defender: &Character,
    settings: &GameSettings,
    now: u64,
    rng: &mut impl Rng,
) -> EngineResult<DuelOutcome> {
    if challenger.id == defender.id {
        return Err(EngineError::SelfDuel);
    }

    if let Some(last) = challenger.last_duel_at {
        let ready_at = last.saturating_add(settings.pvp_cooldown_minutes.saturating_mul(60));
        if now < ready_at {
            warn!(character = %challenger.id, ready_at, "Duel on cooldown");
            return Err(EngineError::DuelCooldown {
                remaining_secs: ready_at - now,
            });
        }
    }

    let combat = resolve_combat(
        &Combatant::from_character(challenger),
        &Combatant::from_character(defender),
        &settings.combat,
        rng,
    );
    let challenger_won = combat.challenger_won();
    let (victor, defeated) = if challenger_won {
        (challenger, defender)
    } else {
        (defender, challenger)
    };

    let (mut winner, progression) =
        add_experience(&record_win(victor), combat.experience_awarded, settings);
    winner.last_duel_at = Some(now);
    let mut loser = record_loss(defeated);
    loser.last_duel_at = Some(now);

    info!(
        winner = %winner.id,
        loser = %loser.id,
        experience = progression.experience_gained,
        "Duel resolved"
    );

    Ok(DuelOutcome {
        winner,
        loser,
        challenger_won,
        experience_gained: progression.experience_gained,
        progression,
        log: combat.log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::create_character;
    use crate::quest::start_quest;
    use catalog_core::{CharacterClass, Stats, DEFAULT_CATALOG_SEED};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const NOW: u64 = 1_700_000_000;

    fn setup(class: CharacterClass, id: &str) -> (Catalog, GameSettings, Character) {
        let catalog = Catalog::builtin(DEFAULT_CATALOG_SEED).unwrap();
        let settings = GameSettings::default();
        let hero = create_character(id, "u1", id, class, &catalog, &settings).unwrap();
        (catalog, settings, hero)
    }

    fn on_quest(hero: &Character, catalog: &Catalog, settings: &GameSettings) -> Character {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        start_quest(hero, catalog, settings, NOW, &mut rng).unwrap()
    }

    fn pending(character: &Character) -> Monster {
        character
            .active_quest
            .as_ref()
            .and_then(|q| q.pending_monster())
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_fight_requires_pending_monster() {
        let (catalog, settings, hero) = setup(CharacterClass::Warrior, "c1");
        let goblin = catalog.monster("Goblin").unwrap().spawn(1);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let result = fight_monster(&hero, &goblin, &catalog, &settings, &mut rng);
        assert!(matches!(result, Err(EngineError::NoActiveQuest(_))));
    }

    #[test]
    fn test_fight_rejects_quest_with_every_step_cleared() {
        let (catalog, settings, hero) = setup(CharacterClass::Warrior, "c1");
        let mut hero = on_quest(&hero, &catalog, &settings);
        let monster = pending(&hero);
        for step in hero.active_quest.as_mut().unwrap().steps.iter_mut() {
            step.completed = true;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let result = fight_monster(&hero, &monster, &catalog, &settings, &mut rng);
        assert!(matches!(result, Err(EngineError::NoActiveQuest(_))));
    }

    #[test]
    fn test_victory_applies_rewards() {
        let (catalog, settings, mut hero) = setup(CharacterClass::Warrior, "c1");
        // Overwhelming stats guarantee the win
        hero.stats = Stats::new(200, 0, 50, 100);
        let hero = on_quest(&hero, &catalog, &settings);
        let monster = pending(&hero);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let (next, fight) = fight_monster(&hero, &monster, &catalog, &settings, &mut rng).unwrap();
        assert!(fight.victory());
        assert_eq!(next.wins, 1);
        assert_eq!(next.losses, 0);

        let loot = fight.loot.unwrap();
        assert_eq!(next.gold, loot.gold);
        assert!(monster.loot.gold().min() <= loot.gold && loot.gold <= monster.loot.gold().max());
        for item in &loot.items {
            assert_eq!(next.quantity_of(&item.id), 1);
        }

        assert_eq!(
            next.experience,
            fight.progression.unwrap().experience_gained
        );
        assert!(matches!(
            fight.step,
            Some(StepOutcome::StepCleared { step: 0, .. })
        ));
        assert_eq!(next.active_quest.as_ref().unwrap().completed_steps(), 1);
    }

    #[test]
    fn test_defeat_only_records_loss() {
        let (catalog, settings, mut hero) = setup(CharacterClass::Mage, "c1");
        hero.stats = Stats::new(0, 0, 0, 0);
        let hero = add_gold(&hero, 40);
        let hero = on_quest(&hero, &catalog, &settings);
        let mut monster = pending(&hero);
        // Keep the monster in the quest but make it unbeatable
        monster.stats = Stats::new(500, 0, 50, 200);
        let mut hero = hero;
        if let Some(quest) = hero.active_quest.as_mut() {
            quest.steps[0].monster = monster.clone();
        }
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let (next, fight) = fight_monster(&hero, &monster, &catalog, &settings, &mut rng).unwrap();
        assert!(!fight.victory());
        assert_eq!(next.losses, 1);
        assert_eq!(next.wins, 0);
        assert_eq!(next.gold, 40);
        assert_eq!(next.experience, 0);
        assert_eq!(next.active_quest, hero.active_quest);
        assert!(fight.loot.is_none());
    }

    #[test]
    fn test_full_inventory_leaves_loot_unclaimed() {
        let (catalog, _, mut hero) = setup(CharacterClass::Rogue, "c1");
        hero.inventory_size = 1;
        let hero = crate::ledger::add_item(&hero, catalog.item("iron-sword").unwrap(), 1).unwrap();
        let roll = LootRoll {
            gold: 12,
            items: vec!["health-potion".to_string()],
        };

        let (next, award) = claim_loot(&hero, roll, &catalog).unwrap();
        assert_eq!(next.gold, 12);
        assert_eq!(award.unclaimed.len(), 1);
        assert!(award.items.is_empty());
        assert_eq!(next.quantity_of("health-potion"), 0);
    }

    #[test]
    fn test_unknown_loot_item() {
        let (catalog, _, hero) = setup(CharacterClass::Rogue, "c1");
        let roll = LootRoll {
            gold: 0,
            items: vec!["phantom-blade".to_string()],
        };
        let result = claim_loot(&hero, roll, &catalog);
        assert_eq!(
            result.map(|(_, award)| award),
            Err(EngineError::UnknownItem("phantom-blade".to_string()))
        );
    }

    #[test]
    fn test_duel_updates_both_sides() {
        let (_, settings, mut strong) = setup(CharacterClass::Warrior, "c1");
        strong.stats = Stats::new(200, 0, 50, 100);
        let (_, _, weak) = setup(CharacterClass::Mage, "c2");
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let outcome = duel(&strong, &weak, &settings, NOW, &mut rng).unwrap();
        assert!(outcome.challenger_won);
        assert_eq!(outcome.winner.id, "c1");
        assert_eq!(outcome.winner.wins, 1);
        assert_eq!(outcome.loser.losses, 1);
        assert_eq!(outcome.winner.last_duel_at, Some(NOW));
        assert_eq!(outcome.loser.last_duel_at, Some(NOW));
        // Equal levels: 1 * 100 * 1.0
        assert_eq!(outcome.experience_gained, 100);
        assert_eq!(outcome.winner.experience, 100);
        assert!(!outcome.log.is_empty());
    }

    #[test]
    fn test_duel_rejects_self_and_cooldown() {
        let (_, settings, mut hero) = setup(CharacterClass::Warrior, "c1");
        let (_, _, rival) = setup(CharacterClass::Rogue, "c2");
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        assert_eq!(
            duel(&hero, &hero, &settings, NOW, &mut rng),
            Err(EngineError::SelfDuel)
        );

        hero.last_duel_at = Some(NOW - 600);
        assert_eq!(
            duel(&hero, &rival, &settings, NOW, &mut rng),
            Err(EngineError::DuelCooldown {
                remaining_secs: 1200
            })
        );

        // 30 minutes later the challenger may duel again
        assert!(duel(&hero, &rival, &settings, NOW + 1200, &mut rng).is_ok());
    }
}

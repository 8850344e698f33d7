//! Turn-based combat resolution

use super::combatant::{Combatant, Side};
use super::damage::calculate_hit;
use super::result::{CombatEnd, CombatResult};
use crate::config::CombatConstants;
use rand::Rng;
use tracing::debug;

/// Fight until one side is knocked out or `max_rounds` attacks have been made
///
/// Sides alternate attacks. The higher dexterity opens, ties go to the
/// challenger. At the cap the side with the larger share of its hit points
/// left wins, again favouring the challenger on a tie.
pub fn resolve_combat(
    challenger: &Combatant,
    opponent: &Combatant,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> CombatResult {
    let challenger_max_hp = challenger.max_hit_points(constants);
    let opponent_max_hp = opponent.max_hit_points(constants);
    let mut challenger_hp = challenger_max_hp;
    let mut opponent_hp = opponent_max_hp;

    let mut log = vec![format!(
        "{} (level {}, {} HP) faces {} (level {}, {} HP)",
        challenger.name,
        challenger.level,
        challenger_max_hp,
        opponent.name,
        opponent.level,
        opponent_max_hp
    )];

    let mut attacker = if opponent.stats.dexterity > challenger.stats.dexterity {
        Side::Opponent
    } else {
        Side::Challenger
    };

    let mut rounds = 0;
    let mut knockout = None;
    while rounds < constants.max_rounds {
        rounds += 1;

        let (striker, target, target_hp) = match attacker {
            Side::Challenger => (challenger, opponent, &mut opponent_hp),
            Side::Opponent => (opponent, challenger, &mut challenger_hp),
        };

        let hit = calculate_hit(striker, target, constants, rng);
        *target_hp = target_hp.saturating_sub(hit.damage);

        log.push(format!(
            "Round {}: {} {} {} for {} damage{} ({} HP left)",
            rounds,
            striker.name,
            striker.style.verb(),
            target.name,
            hit.damage,
            if hit.is_critical { " (critical hit!)" } else { "" },
            target_hp
        ));

        if *target_hp == 0 {
            knockout = Some(attacker);
            break;
        }
        attacker = attacker.other();
    }

    let (winner, end) = match knockout {
        Some(side) => (side, CombatEnd::Knockout),
        None => {
            // Compare remaining shares without division
            let challenger_share = challenger_hp as u64 * opponent_max_hp as u64;
            let opponent_share = opponent_hp as u64 * challenger_max_hp as u64;
            let side = if opponent_share > challenger_share {
                Side::Opponent
            } else {
                Side::Challenger
            };
            log.push(format!(
                "The fight is called after {} rounds",
                constants.max_rounds
            ));
            (side, CombatEnd::RoundLimit)
        }
    };

    let (victor, defeated) = match winner {
        Side::Challenger => (challenger, opponent),
        Side::Opponent => (opponent, challenger),
    };
    let experience_awarded = experience_award(victor.level, defeated.level, constants);

    log.push(format!(
        "{} defeats {} and earns {} experience",
        victor.name, defeated.name, experience_awarded
    ));

    debug!(
        winner = %victor.name,
        loser = %defeated.name,
        rounds,
        ?end,
        experience = experience_awarded,
        "Combat resolved"
    );

    CombatResult {
        winner,
        winner_name: victor.name.clone(),
        loser_name: defeated.name.clone(),
        rounds,
        end,
        challenger_hp,
        challenger_max_hp,
        opponent_hp,
        opponent_max_hp,
        experience_awarded,
        log,
    }
}

/// Experience for beating a `loser_level` opponent at `winner_level`
///
/// `loser_level * experience_per_level`, scaled by
/// `1 + (loser_level - winner_level) * level_difference_step` clamped to
/// `[min_experience_scale, max_experience_scale]`, rounded to the nearest point.
pub fn experience_award(winner_level: u32, loser_level: u32, constants: &CombatConstants) -> u64 {
    let difference = loser_level as f64 - winner_level as f64;
    let scale = (1.0 + difference * constants.level_difference_step)
        .clamp(constants.min_experience_scale, constants.max_experience_scale);
    let base = loser_level as u64 * constants.experience_per_level;
    (base as f64 * scale).round() as u64
}

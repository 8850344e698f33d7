//! Single-hit damage calculation

use super::combatant::Combatant;
use crate::config::CombatConstants;
use rand::Rng;

/// One resolved attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub damage: u32,
    pub is_critical: bool,
}

/// Roll one attack from `attacker` against `defender`
///
/// Always consumes exactly two values from `rng`, so a seeded fight replays
/// identically.
pub fn calculate_hit(
    attacker: &Combatant,
    defender: &Combatant,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> Hit {
    // Step 1: Attack power plus a random bonus of up to `damage_variance` of it
    let power = attacker.attack_power();
    let spread = (power as f64 * constants.damage_variance).floor() as u32;
    let raw = power.saturating_add(rng.gen_range(0..=spread));

    // Step 2: Critical hit
    let is_critical = rng.gen::<f64>() < attacker.crit_chance(constants);
    let raw = if is_critical {
        (raw as f64 * constants.crit_multiplier).floor() as u32
    } else {
        raw
    };

    // Step 3: Defense, with a floor so every hit lands
    let damage = raw
        .saturating_sub(defender.defense(constants))
        .max(constants.min_damage);

    Hit {
        damage,
        is_critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::combatant::AttackStyle;
    use catalog_core::Stats;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn combatant(style: AttackStyle, stats: Stats) -> Combatant {
        Combatant {
            name: "Test".to_string(),
            level: 1,
            stats,
            style,
        }
    }

    #[test]
    fn test_damage_within_bounds() {
        let constants = CombatConstants::default();
        // power 20, spread 5, no crits
        let attacker = combatant(AttackStyle::Physical, Stats::new(20, 0, 0, 10));
        // defense 5
        let defender = combatant(AttackStyle::Physical, Stats::new(10, 0, 0, 10));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..200 {
            let hit = calculate_hit(&attacker, &defender, &constants, &mut rng);
            assert!(!hit.is_critical);
            assert!((15..=20).contains(&hit.damage), "damage {}", hit.damage);
        }
    }

    #[test]
    fn test_minimum_damage() {
        let constants = CombatConstants::default();
        let weakling = combatant(AttackStyle::Physical, Stats::new(1, 0, 0, 0));
        let wall = combatant(AttackStyle::Physical, Stats::new(0, 0, 0, 200));
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let hit = calculate_hit(&weakling, &wall, &constants, &mut rng);
        assert_eq!(hit.damage, constants.min_damage);
    }

    #[test]
    fn test_guaranteed_crit() {
        let constants = CombatConstants {
            max_crit_chance: 1.0,
            damage_variance: 0.0,
            ..CombatConstants::default()
        };
        // dexterity 100 -> crit chance 1.0
        let attacker = combatant(AttackStyle::Physical, Stats::new(20, 0, 100, 0));
        let defender = combatant(AttackStyle::Physical, Stats::new(0, 0, 0, 0));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let hit = calculate_hit(&attacker, &defender, &constants, &mut rng);
        assert!(hit.is_critical);
        assert_eq!(hit.damage, 30);
    }

    #[test]
    fn test_same_seed_same_hit() {
        let constants = CombatConstants::default();
        let attacker = combatant(AttackStyle::Finesse, Stats::new(10, 12, 16, 10));
        let defender = combatant(AttackStyle::Physical, Stats::new(8, 6, 12, 8));

        let a = calculate_hit(&attacker, &defender, &constants, &mut ChaCha8Rng::seed_from_u64(5));
        let b = calculate_hit(&attacker, &defender, &constants, &mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}

//! Attack resolution
//!
//! Combat is a coin flip. The interesting part is the contract around it:
//! all preconditions are checked before anything is touched, and a rejected
//! attack leaves the map exactly as it was.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::error::{GameError, Result};
use crate::map::{Territory, TerritoryMap};

/// Outcome of a resolved attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Defender territory changes hands: its faction becomes the
    /// attacker's, its garrison resets to 1, the attacker loses 1 troop.
    AttackerWon,
    /// Attacker loses 1 troop, floored at the garrison minimum of 1.
    /// Defender is untouched.
    DefenderWon,
}

/// Check every attack precondition without mutating anything
///
/// Order matters for error reporting: range first, then ownership of the
/// origin, then ownership of the target, then garrison size. The target
/// ownership rule also covers a self-attack, since the origin is already
/// known to belong to the player.
pub fn validate_attack(
    map: &TerritoryMap,
    origin: usize,
    target: usize,
    player_faction: &str,
) -> Result<()> {
    let origin_territory = map.get(origin)?;
    let target_territory = map.get(target)?;

    if !origin_territory.is_controlled_by(player_faction) {
        return Err(GameError::IllegalAttackSource);
    }
    if target_territory.is_controlled_by(player_faction) {
        return Err(GameError::IllegalAttackTarget);
    }
    if origin_territory.troops <= 1 {
        return Err(GameError::InsufficientTroops);
    }
    Ok(())
}

/// Resolve one attack between two territories
///
/// Draws a single uniform bit from the session RNG. Touches nothing but
/// the two territories passed in.
pub fn resolve_attack(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut ChaCha8Rng,
) -> AttackOutcome {
    if rng.gen_bool(0.5) {
        defender.faction = attacker.faction.clone();
        defender.troops = 1;
        attacker.troops -= 1;
        AttackOutcome::AttackerWon
    } else {
        // Garrison floor: a failed attack never empties the origin
        attacker.troops = attacker.troops.saturating_sub(1).max(1);
        AttackOutcome::DefenderWon
    }
}

/// Validate and resolve an attack in one step
///
/// This is the entry point the controller uses. On any precondition
/// failure the map is untouched.
pub fn launch_attack(
    map: &mut TerritoryMap,
    origin: usize,
    target: usize,
    player_faction: &str,
    rng: &mut ChaCha8Rng,
) -> Result<AttackOutcome> {
    validate_attack(map, origin, target, player_faction)?;
    let (attacker, defender) = map.get_pair_mut(origin, target)?;
    let outcome = resolve_attack(attacker, defender, rng);
    tracing::debug!(origin, target, ?outcome, "attack resolved");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn battle_map() -> TerritoryMap {
        let mut map = TerritoryMap::with_capacity(5);
        map.push(Territory::new("Ashford", "Red", 5));
        map.push(Territory::new("Blackmoor", "Red", 1));
        map.push(Territory::new("Cinderfell", "Green", 3));
        map.push(Territory::new("Duskvale", "Blue", 2));
        map.push(Territory::new("Emberwood", "Blue", 4));
        map
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let map = battle_map();
        assert!(matches!(
            validate_attack(&map, 9, 2, "Red"),
            Err(GameError::IndexOutOfRange { index: 9, len: 5 })
        ));
        assert!(matches!(
            validate_attack(&map, 0, 7, "Red"),
            Err(GameError::IndexOutOfRange { index: 7, len: 5 })
        ));
    }

    #[test]
    fn rejects_attack_from_enemy_territory() {
        let map = battle_map();
        assert!(matches!(
            validate_attack(&map, 2, 3, "Red"),
            Err(GameError::IllegalAttackSource)
        ));
    }

    #[test]
    fn rejects_attack_on_own_territory() {
        let map = battle_map();
        assert!(matches!(
            validate_attack(&map, 0, 1, "Red"),
            Err(GameError::IllegalAttackTarget)
        ));
    }

    #[test]
    fn rejects_self_attack_as_illegal_target() {
        let map = battle_map();
        assert!(matches!(
            validate_attack(&map, 0, 0, "Red"),
            Err(GameError::IllegalAttackTarget)
        ));
    }

    #[test]
    fn rejects_single_troop_garrison() {
        let map = battle_map();
        assert!(matches!(
            validate_attack(&map, 1, 2, "Red"),
            Err(GameError::InsufficientTroops)
        ));
    }

    #[test]
    fn rejected_attack_leaves_map_unchanged() {
        let mut map = battle_map();
        let before: Vec<_> = map.iter().cloned().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(launch_attack(&mut map, 1, 2, "Red", &mut rng).is_err());
        let after: Vec<_> = map.iter().cloned().collect();
        assert_eq!(before, after);
    }

    // The spec scenario: origin=0 (Red, troops=5) attacks index 2
    // (Green, troops=3). The RNG decides who wins, so the assertions
    // branch on the outcome; scanning seeds guarantees both branches run.
    #[test]
    fn spec_scenario_postconditions_for_both_outcomes() {
        let mut saw_attacker_win = false;
        let mut saw_defender_win = false;

        for seed in 0..64 {
            let mut map = battle_map();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = launch_attack(&mut map, 0, 2, "Red", &mut rng).unwrap();

            match outcome {
                AttackOutcome::AttackerWon => {
                    saw_attacker_win = true;
                    assert_eq!(map.get(2).unwrap().faction, "Red");
                    assert_eq!(map.get(2).unwrap().troops, 1);
                    assert_eq!(map.get(0).unwrap().troops, 4);
                }
                AttackOutcome::DefenderWon => {
                    saw_defender_win = true;
                    assert_eq!(map.get(0).unwrap().troops, 4);
                    assert_eq!(map.get(2).unwrap().faction, "Green");
                    assert_eq!(map.get(2).unwrap().troops, 3);
                }
            }
            // Bystanders are never touched
            assert_eq!(map.get(3).unwrap(), &Territory::new("Duskvale", "Blue", 2));
        }

        assert!(saw_attacker_win);
        assert!(saw_defender_win);
    }

    #[test]
    fn failed_attack_floors_garrison_at_one() {
        // Direct resolve with a 2-troop attacker: whichever way the coin
        // lands, the origin ends at exactly 1.
        for seed in 0..16 {
            let mut attacker = Territory::new("A", "Red", 2);
            let mut defender = Territory::new("B", "Blue", 3);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            resolve_attack(&mut attacker, &mut defender, &mut rng);
            assert_eq!(attacker.troops, 1);
        }
    }

    proptest! {
        #[test]
        fn resolution_invariants(troops in 2u32..1000, defender_troops in 0u32..1000, seed: u64) {
            let mut attacker = Territory::new("A", "Red", troops);
            let mut defender = Territory::new("B", "Blue", defender_troops);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            match resolve_attack(&mut attacker, &mut defender, &mut rng) {
                AttackOutcome::AttackerWon => {
                    prop_assert_eq!(&defender.faction, "Red");
                    prop_assert_eq!(defender.troops, 1);
                    prop_assert_eq!(attacker.troops, troops - 1);
                    prop_assert_eq!(&attacker.faction, "Red");
                }
                AttackOutcome::DefenderWon => {
                    prop_assert_eq!(&defender.faction, "Blue");
                    prop_assert_eq!(defender.troops, defender_troops);
                    prop_assert_eq!(attacker.troops, troops - 1);
                }
            }
            prop_assert!(attacker.troops >= 1);
        }
    }
}

//! GameSession - the root state container for one game

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{self, AttackOutcome};
use crate::core::error::Result;
use crate::map::TerritoryMap;
use crate::mission::Mission;

/// Everything a running game owns
///
/// The session exclusively owns the territory map and the mission; nothing
/// else keeps references into them. The RNG is seeded exactly once here and
/// drives both the mission draw and every combat roll, so a fixed seed
/// reproduces a whole game.
#[derive(Debug)]
pub struct GameSession {
    pub map: TerritoryMap,
    pub player_faction: String,
    pub mission: Mission,
    pub won: bool,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Start a session, drawing the mission from the freshly seeded RNG
    pub fn new(map: TerritoryMap, player_faction: String, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mission = Mission::draw(&mut rng);
        tracing::info!(seed, ?mission, faction = %player_faction, "session started");
        Self {
            map,
            player_faction,
            mission,
            won: false,
            rng,
        }
    }

    /// Start a session with a chosen mission instead of a random draw
    ///
    /// Used by tests that need a specific win condition.
    pub fn with_mission(
        map: TerritoryMap,
        player_faction: String,
        mission: Mission,
        seed: u64,
    ) -> Self {
        Self {
            map,
            player_faction,
            mission,
            won: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Validate and resolve an attack ordered by the player
    pub fn launch_attack(&mut self, origin: usize, target: usize) -> Result<AttackOutcome> {
        combat::launch_attack(
            &mut self.map,
            origin,
            target,
            &self.player_faction,
            &mut self.rng,
        )
    }

    /// Has the player satisfied the session mission?
    pub fn mission_accomplished(&self) -> bool {
        self.mission
            .is_satisfied(&self.map, &self.player_faction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Territory;

    fn small_map() -> TerritoryMap {
        let mut map = TerritoryMap::with_capacity(2);
        map.push(Territory::new("Alpha", "Red", 8));
        map.push(Territory::new("Bravo", "Red", 7));
        map
    }

    #[test]
    fn same_seed_draws_same_mission() {
        let a = GameSession::new(small_map(), "Red".into(), 1234);
        let b = GameSession::new(small_map(), "Red".into(), 1234);
        assert_eq!(a.mission, b.mission);
    }

    #[test]
    fn mission_accomplished_delegates_to_evaluator() {
        let session =
            GameSession::with_mission(small_map(), "Red".into(), Mission::ReachFifteenTroops, 0);
        assert!(session.mission_accomplished());

        let session = GameSession::with_mission(small_map(), "Red".into(), Mission::ConquerThree, 0);
        assert!(!session.mission_accomplished());
    }

    #[test]
    fn attack_errors_surface_through_session() {
        let mut session = GameSession::with_mission(small_map(), "Red".into(), Mission::ConquerAll, 0);
        // Both territories are the player's; no legal target exists.
        assert!(session.launch_attack(0, 1).is_err());
    }
}

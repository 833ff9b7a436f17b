//! Missions - randomly assigned win conditions
//!
//! Exactly one mission is drawn per session, uniformly over the three
//! variants. The set is closed: there is no "unknown mission" fallback,
//! evaluation matches exhaustively on the enum.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::map::TerritoryMap;

/// Territories the player must control for [`Mission::ConquerThree`]
pub const CONQUER_TARGET: usize = 3;

/// Total troops the player must field for [`Mission::ReachFifteenTroops`]
pub const TROOP_TARGET: u32 = 15;

/// The player's win condition for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mission {
    /// Control at least [`CONQUER_TARGET`] territories
    ConquerThree,
    /// Field at least [`TROOP_TARGET`] troops across controlled territories
    ReachFifteenTroops,
    /// Control every territory on the map
    ConquerAll,
}

impl Mission {
    pub const ALL: [Mission; 3] = [
        Mission::ConquerThree,
        Mission::ReachFifteenTroops,
        Mission::ConquerAll,
    ];

    /// Draw a mission uniformly at random
    pub fn draw(rng: &mut ChaCha8Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mission::ConquerThree => "Conquer at least 3 territories for your faction.",
            Mission::ReachFifteenTroops => {
                "Hold at least 15 troops in total across your territories."
            }
            Mission::ConquerAll => "Dominate every territory on the map.",
        }
    }

    /// Has the player satisfied this mission?
    ///
    /// Pure read-only check, one pass over the map. Thresholds are
    /// inclusive. `ConquerAll` is vacuously true on an empty map.
    pub fn is_satisfied(&self, map: &TerritoryMap, player_faction: &str) -> bool {
        match self {
            Mission::ConquerThree => {
                map.iter()
                    .filter(|t| t.is_controlled_by(player_faction))
                    .count()
                    >= CONQUER_TARGET
            }
            Mission::ReachFifteenTroops => {
                map.iter()
                    .filter(|t| t.is_controlled_by(player_faction))
                    .map(|t| t.troops)
                    .sum::<u32>()
                    >= TROOP_TARGET
            }
            Mission::ConquerAll => map.iter().all(|t| t.is_controlled_by(player_faction)),
        }
    }
}

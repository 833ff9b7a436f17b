//! Game configuration
//!
//! Collected here so the CLI layer has one place to override defaults
//! and one place to validate them before a session starts.

/// Configuration for a single game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of territories on the map
    ///
    /// Fixed for the lifetime of the session; territories are registered
    /// interactively at setup and never added or removed afterwards.
    pub territory_count: usize,

    /// Seed for the session RNG
    ///
    /// The RNG is seeded exactly once, at session construction. The CLI
    /// derives this from the clock unless `--seed` is given, so runs are
    /// reproducible on demand.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            territory_count: 5,
            seed: 0,
        }
    }
}

impl GameConfig {
    pub fn new(territory_count: usize, seed: u64) -> Self {
        Self {
            territory_count,
            seed,
        }
    }

    /// Validate configuration before entering setup
    ///
    /// A zero-territory map is rejected here rather than deep in the game
    /// loop: every failure mode past this point is recoverable, this one
    /// is not.
    pub fn validate(&self) -> Result<(), String> {
        if self.territory_count == 0 {
            return Err("territory_count must be at least 1".into());
        }
        Ok(())
    }
}

//! TerritoryMap - the fixed-size ordered territory store

use std::cmp::Ordering;

use crate::core::error::{GameError, Result};
use crate::map::territory::Territory;

/// Ordered store of all territories in a session
///
/// Backed by a `Vec` allocated once at setup and dropped with the session.
/// Indices are the territories' identities: index N refers to the same
/// territory for the whole game. All indexed access is bounds-checked and
/// reports [`GameError::IndexOutOfRange`] instead of panicking, since the
/// indices come straight from player input.
#[derive(Debug, Clone, Default)]
pub struct TerritoryMap {
    territories: Vec<Territory>,
}

impl TerritoryMap {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            territories: Vec::with_capacity(count),
        }
    }

    /// Register a territory during setup
    ///
    /// Only the setup phase calls this; once the game loop starts the
    /// map length never changes.
    pub fn push(&mut self, territory: Territory) {
        self.territories.push(territory);
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    pub fn get(&self, index: usize) -> Result<&Territory> {
        self.territories
            .get(index)
            .ok_or(GameError::IndexOutOfRange {
                index: index as i64,
                len: self.territories.len(),
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Territory> {
        let len = self.territories.len();
        self.territories
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange {
                index: index as i64,
                len,
            })
    }

    /// Mutable references to two distinct territories at once
    ///
    /// Used by combat, which mutates attacker and defender in one step.
    /// Equal indices are rejected: a territory cannot pair with itself,
    /// which in game terms is an attack on your own territory.
    pub fn get_pair_mut(&mut self, a: usize, b: usize) -> Result<(&mut Territory, &mut Territory)> {
        let len = self.territories.len();
        if a >= len {
            return Err(GameError::IndexOutOfRange {
                index: a as i64,
                len,
            });
        }
        if b >= len {
            return Err(GameError::IndexOutOfRange {
                index: b as i64,
                len,
            });
        }
        match a.cmp(&b) {
            Ordering::Less => {
                let (lo, hi) = self.territories.split_at_mut(b);
                Ok((&mut lo[a], &mut hi[0]))
            }
            Ordering::Greater => {
                let (lo, hi) = self.territories.split_at_mut(a);
                Ok((&mut hi[0], &mut lo[b]))
            }
            Ordering::Equal => Err(GameError::IllegalAttackTarget),
        }
    }
}

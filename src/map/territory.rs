//! Territory - the atomic unit of map control

/// A single territory: name, controlling faction, garrison size
///
/// Territories have no identity of their own; a territory is identified by
/// its index in the [`TerritoryMap`](crate::map::TerritoryMap), which is
/// stable for the whole session. Troops are unsigned so the non-negative
/// invariant holds by construction; the garrison floor (never below 1 after
/// a failed attack) is enforced by combat resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub name: String,
    pub faction: String,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<String>, faction: impl Into<String>, troops: u32) -> Self {
        Self {
            name: name.into(),
            faction: faction.into(),
            troops,
        }
    }

    /// Is this territory controlled by the given faction?
    pub fn is_controlled_by(&self, faction: &str) -> bool {
        self.faction == faction
    }
}

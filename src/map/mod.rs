pub mod store;
pub mod territory;

pub use store::TerritoryMap;
pub use territory::Territory;

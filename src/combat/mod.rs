pub mod resolution;

pub use resolution::{launch_attack, resolve_attack, validate_attack, AttackOutcome};

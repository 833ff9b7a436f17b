pub mod controller;
pub mod session;

pub use controller::{play_turn, run, setup, Phase};
pub use session::GameSession;

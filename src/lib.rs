//! Dominion - territory-conquest console game

pub mod combat;
pub mod core;
pub mod game;
pub mod map;
pub mod mission;
pub mod ui;

//! Game loop controller
//!
//! Sequences setup, the turn menu, and dispatch into combat and mission
//! evaluation. Every recoverable error is reported through the console and
//! leaves the session in the Playing phase with the map untouched; only IO
//! failures propagate out.

use crate::combat::AttackOutcome;
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::game::session::GameSession;
use crate::map::{Territory, TerritoryMap};
use crate::ui::Console;

/// Where the session currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Quit,
}

const MENU_ATTACK: i64 = 1;
const MENU_CHECK_MISSION: i64 = 2;
const MENU_QUIT: i64 = 0;

/// Interactive setup: faction, then one territory at a time
///
/// Territory registration is collaborator-driven; the troop prompt
/// re-prompts until it gets a non-negative integer, so the map is fully
/// valid the moment this returns.
pub fn setup(console: &mut dyn Console, config: &GameConfig) -> Result<GameSession> {
    let faction = console.prompt_line("Enter your faction color (e.g. Red, Blue): ")?;

    console.message("\n=== Territory Registration ===");
    let mut map = TerritoryMap::with_capacity(config.territory_count);
    for i in 0..config.territory_count {
        console.message(&format!("\nTerritory {}:", i + 1));
        let name = console.prompt_line("  Name: ")?;
        let owner = console.prompt_line("  Controlling faction: ")?;
        let troops = console.prompt_non_negative_int("  Troops: ")?;
        map.push(Territory::new(name, owner, troops));
    }

    let session = GameSession::new(map, faction, config.seed);
    console.show_mission(session.mission);
    Ok(session)
}

/// Run one menu round; the returned phase tells the loop whether to stop
pub fn play_turn(session: &mut GameSession, console: &mut dyn Console) -> Result<Phase> {
    console.show_map(&session.map);
    console.show_mission(session.mission);
    console.show_menu();

    let Some(choice) = console.prompt_int("Choose an option: ")? else {
        console.message(&GameError::InvalidInput.to_string());
        return Ok(Phase::Playing);
    };

    match choice {
        MENU_ATTACK => {
            attack_phase(session, console)?;
            Ok(Phase::Playing)
        }
        MENU_CHECK_MISSION => {
            if session.mission_accomplished() {
                session.won = true;
                tracing::info!(mission = ?session.mission, "mission accomplished");
                console.message("\n*** Congratulations! Mission accomplished! ***");
                Ok(Phase::Won)
            } else {
                console.message("\nMission not accomplished yet. Keep fighting!");
                Ok(Phase::Playing)
            }
        }
        MENU_QUIT => {
            console.message("\nEnding the campaign...");
            Ok(Phase::Quit)
        }
        other => {
            console.message(&GameError::InvalidOption(other).to_string());
            Ok(Phase::Playing)
        }
    }
}

/// Collect attack indices and resolve the attack
///
/// Index reads are single-attempt: a parse failure aborts the whole attack
/// rather than looping, matching the menu's behavior. Raw values are range
/// checked before they ever become indices.
fn attack_phase(session: &mut GameSession, console: &mut dyn Console) -> Result<()> {
    console.message("\n=== Attack Phase ===");

    let Some(origin_raw) = console.prompt_int("Origin territory index: ")? else {
        console.message(&GameError::InvalidInput.to_string());
        return Ok(());
    };
    let Some(target_raw) = console.prompt_int("Target territory index: ")? else {
        console.message(&GameError::InvalidInput.to_string());
        return Ok(());
    };

    let len = session.map.len();
    let (origin, target) = match (checked_index(origin_raw, len), checked_index(target_raw, len)) {
        (Ok(o), Ok(t)) => (o, t),
        (Err(err), _) | (_, Err(err)) => {
            console.message(&err.to_string());
            return Ok(());
        }
    };

    let origin_name = session.map.get(origin)?.name.clone();
    let target_name = session.map.get(target)?.name.clone();

    match session.launch_attack(origin, target) {
        Ok(AttackOutcome::AttackerWon) => {
            console.message(&format!(
                "\nAttacking from '{origin_name}' to '{target_name}'...\n\
                 The attack succeeded! You conquered '{target_name}'."
            ));
        }
        Ok(AttackOutcome::DefenderWon) => {
            console.message(&format!(
                "\nAttacking from '{origin_name}' to '{target_name}'...\n\
                 The attack failed! The defenders held their ground."
            ));
        }
        Err(err) if err.is_recoverable() => console.message(&err.to_string()),
        Err(err) => return Err(err),
    }
    Ok(())
}

/// Map raw player input to a valid territory index
fn checked_index(raw: i64, len: usize) -> Result<usize> {
    usize::try_from(raw)
        .ok()
        .filter(|&i| i < len)
        .ok_or(GameError::IndexOutOfRange { index: raw, len })
}

/// Full session: setup, then turns until the player wins or quits
pub fn run(console: &mut dyn Console, config: &GameConfig) -> Result<Phase> {
    let mut session = setup(console, config)?;
    loop {
        match play_turn(&mut session, console)? {
            Phase::Playing => console.pause()?,
            phase => {
                tracing::info!(?phase, "session over");
                return Ok(phase);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_index_accepts_valid_range() {
        assert_eq!(checked_index(0, 5).unwrap(), 0);
        assert_eq!(checked_index(4, 5).unwrap(), 4);
    }

    #[test]
    fn checked_index_rejects_negative_and_overflow() {
        assert!(matches!(
            checked_index(-1, 5),
            Err(GameError::IndexOutOfRange { index: -1, len: 5 })
        ));
        assert!(matches!(
            checked_index(5, 5),
            Err(GameError::IndexOutOfRange { index: 5, len: 5 })
        ));
    }
}

//! Console collaborator interface and the stdin/stdout adapter
//!
//! The game core never touches stdio directly; it talks to a [`Console`].
//! [`StdConsole`] is the real terminal adapter, tests drive the core with
//! a scripted implementation instead.

use std::io::{self, BufRead, Write};

use crate::map::TerritoryMap;
use crate::mission::Mission;

/// What the game core needs from the outside world
pub trait Console {
    /// Read one line of text, trimmed of trailing newline/whitespace.
    fn prompt_line(&mut self, label: &str) -> io::Result<String>;

    /// Read a non-negative integer, re-prompting until one parses.
    /// Whole-line reads mean there is never stale input left behind.
    fn prompt_non_negative_int(&mut self, label: &str) -> io::Result<u32>;

    /// Single-attempt integer read for menu and attack-index input.
    /// Returns `None` on parse failure; the caller reports and moves on.
    fn prompt_int(&mut self, label: &str) -> io::Result<Option<i64>>;

    fn show_map(&mut self, map: &TerritoryMap);

    fn show_mission(&mut self, mission: Mission);

    fn show_menu(&mut self);

    fn message(&mut self, text: &str);

    /// Wait for ENTER between turns.
    fn pause(&mut self) -> io::Result<()>;
}

/// Terminal adapter over locked stdin/stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        let n = io::stdin().lock().read_line(&mut buf)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(buf.trim_end().to_string())
    }
}

impl Console for StdConsole {
    fn prompt_line(&mut self, label: &str) -> io::Result<String> {
        print!("{label}");
        io::stdout().flush()?;
        self.read_line()
    }

    fn prompt_non_negative_int(&mut self, label: &str) -> io::Result<u32> {
        loop {
            let line = self.prompt_line(label)?;
            match line.trim().parse::<u32>() {
                Ok(n) => return Ok(n),
                Err(_) => println!("Invalid value. Enter a non-negative integer."),
            }
        }
    }

    fn prompt_int(&mut self, label: &str) -> io::Result<Option<i64>> {
        let line = self.prompt_line(label)?;
        Ok(line.trim().parse::<i64>().ok())
    }

    fn show_map(&mut self, map: &TerritoryMap) {
        println!();
        println!("=== Current Map ===");
        println!("{:<3} | {:<20} | {:<15} | {:<6}", "#", "Territory", "Faction", "Troops");
        println!("{}", "-".repeat(55));
        for (i, territory) in map.iter().enumerate() {
            println!(
                "{:<3} | {:<20} | {:<15} | {:<6}",
                i, territory.name, territory.faction, territory.troops
            );
        }
    }

    fn show_mission(&mut self, mission: Mission) {
        println!();
        println!("=== Your Mission ===");
        println!("{}", mission.description());
    }

    fn show_menu(&mut self) {
        println!();
        println!("=== Main Menu ===");
        println!("1 - Attack phase");
        println!("2 - Check mission");
        println!("0 - Quit");
    }

    fn message(&mut self, text: &str) {
        println!("{text}");
    }

    fn pause(&mut self) -> io::Result<()> {
        print!("\nPress ENTER to continue...");
        io::stdout().flush()?;
        self.read_line()?;
        Ok(())
    }
}

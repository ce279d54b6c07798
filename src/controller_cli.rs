#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::config::BOARD_SIZE;
use crate::controller::{Action, Controller};
use crate::projection::Projection;
use crate::session::Session;

/// Interactive stdin controller for the human seat.
pub struct CliController;

impl CliController {
    pub fn new() -> Self {
        Self
    }
}

fn coord_to_string(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

fn parse_coord(input: &str) -> Result<(u8, u8), String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., B2)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-C", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-C", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-3", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-3", row));
    }
    Ok(((row - 1) as u8, col as u8))
}

fn print_help() {
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║                        HELP                            ║");
    println!("╠════════════════════════════════════════════════════════╣");
    println!("║ Enter a cell as <COLUMN><ROW>, e.g. A1, B2, C3.        ║");
    println!("║ Columns run A-C left to right, rows 1-3 top to bottom. ║");
    println!("║                                                        ║");
    println!("║ Marks do not last: once you place your fourth mark,    ║");
    println!("║ your oldest one leaves the board. A lowercase glyph    ║");
    println!("║ is a mark on its final turn.                           ║");
    println!("║                                                        ║");
    println!("║ Commands: reset - start a new game                     ║");
    println!("║           quit  - leave the session                    ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
}

impl Controller for CliController {
    fn choose(&mut self, _session: &Session, _view: &Projection) -> Action {
        loop {
            print!("\nEnter a cell (e.g. B2), 'reset', 'quit' or 'help': ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            let line = line.trim();

            if line.is_empty() {
                println!("✗ Nothing entered - try a cell like B2, or 'help'.");
                continue;
            }
            if line.eq_ignore_ascii_case("quit") {
                return Action::Quit;
            }
            if line.eq_ignore_ascii_case("reset") {
                return Action::Reset;
            }
            if line.eq_ignore_ascii_case("help") {
                print_help();
                continue;
            }

            match parse_coord(line) {
                Ok((row, col)) => {
                    println!("Placing at {}", coord_to_string(row as usize, col as usize));
                    return Action::Place { row, col };
                }
                Err(e) => {
                    println!("✗ Invalid cell: {}", e);
                    println!("   Example: A1, B2, C3");
                }
            }
        }
    }

    fn on_reject(&mut self, reason: &str) {
        println!("✗ {}", reason);
    }
}

#![cfg(feature = "std")]

//! Terminal rendering of a projected board. All visual styling lives here;
//! the projection layer only decides what state each cell is in.

use crate::common::Outcome;
use crate::config::{BOARD_SIZE, HUMAN_SEAT};
use crate::projection::{project, Projection, RenderState};
use crate::session::Session;

/// Glyph for one cell: uppercase while fully visible, lowercase while
/// fading, a middle dot when nothing renders.
fn glyph(state: RenderState) -> char {
    match state {
        RenderState::Empty => '·',
        RenderState::Visible(player) => player.symbol(),
        RenderState::Fading(player) => player.symbol().to_ascii_lowercase(),
    }
}

/// Format the 3x3 view as a boxed grid with A-C column and 1-3 row labels.
pub fn render_board(view: &Projection) -> String {
    let mut out = String::new();
    out.push_str("    ╔═══════════╗\n");
    out.push_str("    ║    ");
    for col in 0..BOARD_SIZE {
        out.push((b'A' + col as u8) as char);
        out.push(' ');
    }
    out.push_str(" ║\n");
    out.push_str("    ╠═══════════╣\n");
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("    ║ {}  ", row + 1));
        for col in 0..BOARD_SIZE {
            out.push(glyph(view.get(row, col)));
            out.push(' ');
        }
        out.push_str(" ║\n");
    }
    out.push_str("    ╚═══════════╝\n");
    out.push_str("    Legend: X O = placed   x o = fading   · = empty\n");
    out
}

/// One-line summary of whose turn it is or how the game ended.
pub fn render_status(session: &Session) -> String {
    if session.is_over() {
        let headline = match session.outcome() {
            Some(Outcome::Win(player)) if player == HUMAN_SEAT => "You win!".to_string(),
            Some(Outcome::Win(player)) => format!("You lose. {} wins.", player),
            Some(Outcome::Draw) => "Draw.".to_string(),
            None => "Game over.".to_string(),
        };
        match session.notice() {
            Some(notice) => format!("{} {}", headline, notice),
            None => headline,
        }
    } else if session.turn() == HUMAN_SEAT {
        "Your move.".to_string()
    } else {
        "Waiting for the opponent.".to_string()
    }
}

/// Print the whole session view: projected board plus status line.
pub fn print_session(session: &Session) {
    println!("\n{}", render_board(&project(session.board())));
    println!("    {}", render_status(session));
}

//! Immutable session state derived from the last authority snapshot.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use crate::board::Board;
use crate::common::{Outcome, Player};
use crate::config::HUMAN_SEAT;

/// Everything the client knows about the game at one instant. Built from a
/// decoded snapshot and replaced wholesale when the next snapshot arrives;
/// there are no mutable turn or game-over flags to fall out of date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    turn: Player,
    over: bool,
    outcome: Option<Outcome>,
    notice: Option<String>,
}

impl Session {
    /// Placeholder state shown before the first snapshot arrives.
    pub fn new() -> Self {
        Session {
            board: Board::empty(),
            turn: HUMAN_SEAT,
            over: false,
            outcome: None,
            notice: None,
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        turn: Player,
        over: bool,
        outcome: Option<Outcome>,
        notice: Option<String>,
    ) -> Self {
        Session {
            board,
            turn,
            over,
            outcome,
            notice,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

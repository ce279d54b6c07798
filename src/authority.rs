#![cfg(feature = "std")]

//! In-process stand-in for the remote game authority, used for local play
//! and integration tests. It keeps the authoritative mark history, assigns
//! per-seat move ordinals, and answers the opponent seat with a uniformly
//! random free cell. It deliberately implements no win detection and no
//! move search — the real authority owns those — and, like that authority,
//! it never prunes suppressed marks from the grid, so clients see them in
//! snapshot data exactly as they would in production.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, Placement};
use crate::common::{Outcome, PlaceError, Player};
use crate::config::{BOARD_SIZE, HUMAN_SEAT, REMOTE_SEAT};
use crate::domain::{encode_board, Snapshot};
use crate::service::{GameService, MoveOutcome};

pub struct StubAuthority {
    board: Board,
    outcome: Option<Outcome>,
    rng: SmallRng,
}

impl StubAuthority {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            board: Board::empty(),
            outcome: None,
            rng,
        }
    }

    fn place_mark(&mut self, row: usize, col: usize, seat: Player) -> Result<(), PlaceError> {
        let mark = Placement {
            owner: seat,
            move_index: self.board.move_counts().of(seat),
        };
        self.board.place(row, col, mark)
    }

    fn free_cells(&self) -> Vec<(usize, usize)> {
        self.board
            .iter()
            .filter(|(_, _, cell)| cell.is_none())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Opponent seat's turn: one random free cell, if any remain.
    fn reply_move(&mut self) {
        let free = self.free_cells();
        if free.is_empty() {
            return;
        }
        let (row, col) = free[self.rng.random_range(0..free.len())];
        // Cannot fail: the cell was just observed free.
        let _ = self.place_mark(row, col, REMOTE_SEAT);
        log::debug!("authority replies at ({}, {})", row, col);
    }

    fn settle(&mut self) {
        if self.outcome.is_none() && self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        }
    }

    fn build_snapshot(&self) -> Snapshot {
        Snapshot {
            board: encode_board(&self.board),
            turn: HUMAN_SEAT.symbol(),
            game_over: self.outcome.is_some(),
            winner: self.outcome.map(|o| o.label().to_string()),
            message: match self.outcome {
                Some(Outcome::Draw) => Some("The grid is full.".to_string()),
                Some(Outcome::Win(player)) => Some(format!("{} wins!", player)),
                None => None,
            },
        }
    }
}

#[async_trait::async_trait]
impl GameService for StubAuthority {
    async fn apply_move(&mut self, row: u8, col: u8) -> anyhow::Result<MoveOutcome> {
        if self.outcome.is_some() {
            return Ok(MoveOutcome::Rejected("Game is already over.".to_string()));
        }
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Ok(MoveOutcome::Rejected(format!(
                "Move ({}, {}) is outside board boundaries.",
                row, col
            )));
        }
        if self.place_mark(row as usize, col as usize, HUMAN_SEAT).is_err() {
            return Ok(MoveOutcome::Rejected("Invalid move.".to_string()));
        }
        if !self.board.is_full() {
            self.reply_move();
        }
        self.settle();
        Ok(MoveOutcome::Accepted(self.build_snapshot()))
    }

    async fn reset(&mut self) -> anyhow::Result<Snapshot> {
        self.board = Board::empty();
        self.outcome = None;
        log::debug!("game reset");
        Ok(self.build_snapshot())
    }

    fn snapshot(&self) -> Snapshot {
        self.build_snapshot()
    }
}

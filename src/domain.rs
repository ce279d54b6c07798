//! Wire-facing snapshot types and the validated conversion into the domain
//! model. Symbols and indices are only checked here; past this boundary a
//! malformed board is unrepresentable.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use crate::board::{Board, Placement};
use crate::common::{ContractViolation, Outcome, Player};
use crate::config::BOARD_SIZE;
use crate::session::Session;

/// One occupied cell as the authority reports it: a raw symbol plus the
/// owner's 0-based move ordinal. Deliberately loose so that validation is
/// real; see [`decode_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WireCell {
    pub owner: char,
    pub move_index: i32,
}

/// Complete authoritative game state, transmitted whole on every response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub board: Vec<Vec<Option<WireCell>>>,
    pub turn: char,
    pub game_over: bool,
    pub winner: Option<String>,
    pub message: Option<String>,
}

/// Rebuild a [`Board`] from the wire grid, rejecting malformed input
/// instead of coercing it: a wrong shape, an unknown owner symbol, or a
/// negative move index each fail the whole conversion.
pub fn decode_board(rows: &[Vec<Option<WireCell>>]) -> Result<Board, ContractViolation> {
    if rows.len() != BOARD_SIZE {
        return Err(ContractViolation::MalformedGrid {
            rows: rows.len(),
            cols: rows.first().map_or(0, Vec::len),
        });
    }
    let mut board = Board::empty();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != BOARD_SIZE {
            return Err(ContractViolation::MalformedGrid {
                rows: rows.len(),
                cols: cells.len(),
            });
        }
        for (col, cell) in cells.iter().enumerate() {
            let Some(wire) = cell else { continue };
            let owner = Player::from_symbol(wire.owner)?;
            if wire.move_index < 0 {
                return Err(ContractViolation::NegativeMoveIndex(wire.move_index));
            }
            let mark = Placement {
                owner,
                move_index: wire.move_index as u32,
            };
            // Cannot fail: indices come from enumerate and the cell is empty.
            let _ = board.place(row, col, mark);
        }
    }
    Ok(board)
}

/// Flatten a board back into the wire shape. Authority side of the exchange.
pub fn encode_board(board: &Board) -> Vec<Vec<Option<WireCell>>> {
    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    board.get(row, col).map(|mark| WireCell {
                        owner: mark.owner.symbol(),
                        move_index: mark.move_index as i32,
                    })
                })
                .collect()
        })
        .collect()
}

impl TryFrom<Snapshot> for Session {
    type Error = ContractViolation;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let board = decode_board(&snapshot.board)?;
        let turn = Player::from_symbol(snapshot.turn)?;
        let outcome = snapshot
            .winner
            .as_deref()
            .map(Outcome::from_label)
            .transpose()?;
        // A reported winner implies the game is over even if the flag lags.
        let over = snapshot.game_over || outcome.is_some();
        Ok(Session::from_parts(
            board,
            turn,
            over,
            outcome,
            snapshot.message,
        ))
    }
}

//! Visibility projection: maps a board snapshot to per-cell render states.
//!
//! A mark is shown while it is one of its owner's [`VISIBLE_WINDOW`] newest
//! marks, fades while it is the oldest of those, and is suppressed once the
//! owner has placed [`VISIBLE_WINDOW`] or more marks after it. Suppression
//! here is purely visual; pruning the mark from the authoritative board is
//! the authority's job.

use crate::board::{Board, Placement};
use crate::common::Player;
use crate::config::{BOARD_SIZE, VISIBLE_WINDOW};

/// What the renderer should draw in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Empty,
    Visible(Player),
    Fading(Player),
}

/// Render state for every cell of the board, row-major, 0-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    cells: [[RenderState; BOARD_SIZE]; BOARD_SIZE],
}

impl Projection {
    pub fn get(&self, row: usize, col: usize) -> RenderState {
        self.cells[row][col]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, RenderState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, state)| (row, col, *state))
        })
    }
}

/// Project a board snapshot to display state.
///
/// Pure and stateless: move counts are re-derived from the board on every
/// call, each seat's counter is independent of the other's, and the same
/// board always projects to the same result.
pub fn project(board: &Board) -> Projection {
    let counts = board.move_counts();
    let mut cells = [[RenderState::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, col, cell) in board.iter() {
        let Some(Placement { owner, move_index }) = cell else {
            continue;
        };
        // How far the owner's live count has moved past this mark.
        let distance = counts.of(owner).saturating_sub(move_index);
        if distance >= VISIBLE_WINDOW {
            // Suppressed: the mark may still sit in the snapshot data, but
            // the owner has placed enough marks after it to push it out.
            continue;
        }
        cells[row][col] = if distance == VISIBLE_WINDOW - 1 {
            RenderState::Fading(owner)
        } else {
            RenderState::Visible(owner)
        };
    }
    Projection { cells }
}

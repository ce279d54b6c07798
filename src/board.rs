//! Board snapshot data: the full mark history as last reported by the
//! authority, including marks that no longer render.

use crate::common::{PlaceError, Player};
use crate::config::BOARD_SIZE;

/// A mark on the board. `move_index` is the 0-based ordinal among the
/// owner's own placements, fixed at placement time; it is not a global
/// turn counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub owner: Player,
    pub move_index: u32,
}

/// Fixed 3x3 grid of optional placements, row-major, 0-indexed. Rebuilt
/// wholesale from every authority snapshot; never mutated in place by the
/// client between snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Placement>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Mark at (row, col); `None` for an empty or out-of-range cell.
    pub fn get(&self, row: usize, col: usize) -> Option<Placement> {
        *self.cells.get(row)?.get(col)?
    }

    /// Put a mark down. Used by the authority side and by tests; the client
    /// never places marks on its own.
    pub fn place(&mut self, row: usize, col: usize, mark: Placement) -> Result<(), PlaceError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(PlaceError::OutOfBounds)?;
        if cell.is_some() {
            return Err(PlaceError::Occupied);
        }
        *cell = Some(mark);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }

    /// Row-major traversal of all 9 cells.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<Placement>)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, *cell))
        })
    }

    /// Count live marks per seat with a full scan. Recomputed on every call
    /// so the counts can never drift from the board they describe.
    pub fn move_counts(&self) -> MoveCounts {
        let mut counts = MoveCounts::default();
        for cell in self.cells.iter().flatten().flatten() {
            counts.bump(cell.owner);
        }
        counts
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Per-seat count of marks currently occupying cells. Derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveCounts {
    x: u32,
    o: u32,
}

impl MoveCounts {
    pub fn of(self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn bump(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

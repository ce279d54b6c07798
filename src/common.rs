//! Common types: seat identities, game outcomes, and boundary errors.

use core::fmt;

/// One of the two seats at the table. The symbol set is closed; anything
/// else arriving on the wire is a [`ContractViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Parse a wire symbol into a seat.
    pub fn from_symbol(symbol: char) -> Result<Self, ContractViolation> {
        match symbol {
            'X' => Ok(Player::X),
            'O' => Ok(Player::O),
            other => Err(ContractViolation::UnknownPlayer(other)),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Terminal result of a game as reported by the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    /// Parse the authority's winner label ("X", "O", or "Draw").
    pub fn from_label(label: &str) -> Result<Self, ContractViolation> {
        match label {
            "X" => Ok(Outcome::Win(Player::X)),
            "O" => Ok(Outcome::Win(Player::O)),
            "Draw" => Ok(Outcome::Draw),
            _ => Err(ContractViolation::UnknownOutcome),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Win(Player::X) => "X",
            Outcome::Win(Player::O) => "O",
            Outcome::Draw => "Draw",
        }
    }
}

/// Malformed data handed to the core by an upstream collaborator. The core
/// rejects the call rather than guessing at display behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// Occupied cell carries a symbol outside the two known identities.
    UnknownPlayer(char),
    /// Move index below zero; indices are 0-based ordinals.
    NegativeMoveIndex(i32),
    /// Snapshot grid is not 3x3.
    MalformedGrid { rows: usize, cols: usize },
    /// Winner label is none of "X", "O", "Draw".
    UnknownOutcome,
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::UnknownPlayer(sym) => {
                write!(f, "Unknown player symbol '{}'", sym)
            }
            ContractViolation::NegativeMoveIndex(idx) => {
                write!(f, "Negative move index {}", idx)
            }
            ContractViolation::MalformedGrid { rows, cols } => {
                write!(f, "Grid is {}x{}, expected 3x3", rows, cols)
            }
            ContractViolation::UnknownOutcome => {
                write!(f, "Winner label is not one of X, O, Draw")
            }
        }
    }
}

/// Errors from placing a mark on a [`crate::Board`]. Only the authority side
/// and tests place marks; the client rebuilds boards from snapshots instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    OutOfBounds,
    Occupied,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfBounds => write!(f, "Cell is outside the board"),
            PlaceError::Occupied => write!(f, "Cell is already occupied"),
        }
    }
}

#![cfg(feature = "std")]

use crate::domain::Snapshot;

/// Result of asking the authority to apply a move. A rejection is a normal
/// game-level answer (occupied cell, finished game), not a transport error.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    Accepted(Snapshot),
    Rejected(String),
}

/// Authority-side interface served over a transport by
/// [`crate::AuthorityHost`]. The real deployment implements this remotely;
/// [`crate::StubAuthority`] implements it in-process for local play and
/// tests.
#[async_trait::async_trait]
pub trait GameService: Send {
    /// Apply the human seat's move, let the authority take its own turn,
    /// and return the resulting snapshot or a rejection reason.
    async fn apply_move(&mut self, row: u8, col: u8) -> anyhow::Result<MoveOutcome>;

    /// Discard the game in progress and return the fresh snapshot.
    async fn reset(&mut self) -> anyhow::Result<Snapshot>;

    /// Current snapshot, unchanged.
    fn snapshot(&self) -> Snapshot;
}

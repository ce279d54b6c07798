#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use crate::domain::Snapshot;

pub const PROTOCOL_VERSION: u8 = 1;

/// Messages exchanged between the client and the game authority. Every
/// request carries the protocol version and a sequence number; the matching
/// response echoes both, so a reply can never be paired with the wrong
/// request even if a transport reorders delivery.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Opens a session; the initiator proposes its protocol version.
    Handshake { version: u8 },
    /// Accepts a handshake, echoing the version in use.
    HandshakeAck { version: u8 },
    /// Request to place the human seat's mark at the given coordinates.
    Move {
        version: u8,
        seq: u64,
        row: u8,
        col: u8,
    },
    /// Request to start a fresh game.
    Reset { version: u8, seq: u64 },
    /// Request the current snapshot without changing anything.
    StateReq { version: u8, seq: u64 },
    /// Response carrying the full authoritative snapshot.
    State {
        version: u8,
        seq: u64,
        snapshot: Snapshot,
    },
    /// Response refusing a request, with the authority's reason.
    Reject {
        version: u8,
        seq: u64,
        reason: String,
    },
    /// Connection liveness probe; filtered out before game logic sees it.
    Heartbeat { version: u8 },
}

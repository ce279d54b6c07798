use crate::common::Player;

pub const BOARD_SIZE: usize = 3;

/// Number of consecutive snapshots a mark stays on screen before its owner's
/// newer moves push it out. The oldest mark still inside the window renders
/// as fading; a mark outside it is suppressed entirely.
pub const VISIBLE_WINDOW: u32 = 3;

/// Seat driven by local input. The opposite seat belongs to the authority.
pub const HUMAN_SEAT: Player = Player::X;
pub const REMOTE_SEAT: Player = Player::O;

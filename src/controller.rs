//! Input side of the client: something that turns the current session and
//! projection into the next request.

#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::VecDeque;
#[cfg(feature = "std")]
use std::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::projection::{Projection, RenderState};
use crate::session::Session;

/// A request the controller wants sent to the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Place { row: u8, col: u8 },
    Reset,
    Quit,
}

/// Chooses the next action for the human seat. Only consulted when the
/// session says it is that seat's turn and the game is not over.
pub trait Controller: Send {
    fn choose(&mut self, session: &Session, view: &Projection) -> Action;

    /// The authority refused the last action; pick something else next time.
    fn on_reject(&mut self, _reason: &str) {}
}

/// Plays back a fixed list of actions, then quits. Test double.
pub struct ScriptedController {
    queue: VecDeque<Action>,
}

impl ScriptedController {
    pub fn new<I: IntoIterator<Item = Action>>(actions: I) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }
}

impl Controller for ScriptedController {
    fn choose(&mut self, _session: &Session, _view: &Projection) -> Action {
        self.queue.pop_front().unwrap_or(Action::Quit)
    }
}

/// Picks a uniformly random cell among those rendering empty. Some of those
/// are suppressed-but-occupied in the authoritative data, so rejections are
/// expected; the controller simply draws again on the next turn.
pub struct RandomController {
    rng: SmallRng,
}

impl RandomController {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl Controller for RandomController {
    fn choose(&mut self, _session: &Session, view: &Projection) -> Action {
        let open: Vec<(usize, usize)> = view
            .iter()
            .filter(|(_, _, state)| *state == RenderState::Empty)
            .map(|(row, col, _)| (row, col))
            .collect();
        if open.is_empty() {
            return Action::Quit;
        }
        let (row, col) = open[self.rng.random_range(0..open.len())];
        Action::Place {
            row: row as u8,
            col: col as u8,
        }
    }
}

#![cfg(feature = "std")]

use tokio::time::{sleep, Duration};

use crate::client::{RemoteGame, Reply};
use crate::config::HUMAN_SEAT;
use crate::controller::{Action, Controller};
use crate::projection::project;
use crate::session::Session;
use crate::ui;

/// How long to wait before polling again when the authority reports it is
/// not our turn yet.
const TURN_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Orchestrates one seat of a game: solicits actions from a controller,
/// sends them through the remote proxy, and replaces the session wholesale
/// with each snapshot that comes back. The session is the only state held
/// between turns, and it is never mutated in place.
pub struct ClientNode {
    controller: Box<dyn Controller>,
    remote: RemoteGame,
    session: Session,
    quiet: bool,
    moves: u64,
    rejections: u64,
}

impl ClientNode {
    pub fn new(controller: Box<dyn Controller>, remote: RemoteGame) -> Self {
        Self {
            controller,
            remote,
            session: Session::new(),
            quiet: false,
            moves: 0,
            rejections: 0,
        }
    }

    /// Skip terminal rendering; for headless harnesses.
    pub fn silent(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.remote.handshake().await?;
        match self.remote.refresh().await? {
            Reply::State(snapshot) => self.session = Session::try_from(snapshot).map_err(|e| anyhow::anyhow!(e))?,
            Reply::Rejected(reason) => {
                return Err(anyhow::anyhow!("Authority rejected state request: {}", reason))
            }
        }

        loop {
            if !self.quiet {
                ui::print_session(&self.session);
            }
            if self.session.is_over() {
                break;
            }
            if self.session.turn() != HUMAN_SEAT {
                // Request/response only: nothing to do but ask again later.
                log::debug!("not our turn, polling");
                sleep(TURN_POLL_INTERVAL).await;
                match self.remote.refresh().await? {
                    Reply::State(snapshot) => self.session = Session::try_from(snapshot).map_err(|e| anyhow::anyhow!(e))?,
                    Reply::Rejected(reason) => {
                        return Err(anyhow::anyhow!(
                            "Authority rejected state request: {}",
                            reason
                        ))
                    }
                }
                continue;
            }

            let action = self
                .controller
                .choose(&self.session, &project(self.session.board()));
            let reply = match action {
                Action::Place { row, col } => self.remote.place(row, col).await?,
                Action::Reset => self.remote.reset().await?,
                Action::Quit => break,
            };
            match reply {
                Reply::State(snapshot) => {
                    self.session = Session::try_from(snapshot).map_err(|e| anyhow::anyhow!(e))?;
                    if matches!(action, Action::Place { .. }) {
                        self.moves += 1;
                    }
                }
                Reply::Rejected(reason) => {
                    self.rejections += 1;
                    self.controller.on_reject(&reason);
                }
            }
        }
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Accepted moves this node has made.
    pub fn move_count(&self) -> u64 {
        self.moves
    }

    /// Requests the authority refused.
    pub fn rejection_count(&self) -> u64 {
        self.rejections
    }
}

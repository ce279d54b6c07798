#![cfg(feature = "std")]

use crate::protocol::{Message, PROTOCOL_VERSION};
use crate::service::{GameService, MoveOutcome};
use crate::transport::Transport;

/// Serves a [`GameService`] over a transport: answers the handshake, then
/// dispatches one request at a time, echoing each request's sequence number
/// in the reply. Returns cleanly when the peer disconnects.
pub struct AuthorityHost<S: GameService, T: Transport> {
    service: S,
    transport: T,
}

impl<S: GameService, T: Transport> AuthorityHost<S, T> {
    pub fn new(service: S, transport: T) -> Self {
        Self { service, transport }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.transport.recv().await? {
            Message::Handshake { version } if version == PROTOCOL_VERSION => {
                self.transport
                    .send(Message::HandshakeAck {
                        version: PROTOCOL_VERSION,
                    })
                    .await?;
            }
            Message::Handshake { version } => {
                return Err(anyhow::anyhow!(
                    "Protocol version mismatch in Handshake: expected {}, got {}",
                    PROTOCOL_VERSION,
                    version
                ));
            }
            other => {
                return Err(anyhow::anyhow!(
                    "Expected Handshake, got unexpected message: {:?}",
                    other
                ))
            }
        }
        log::info!("session established");

        while let Ok(msg) = self.transport.recv().await {
            let reply = match msg {
                Message::Move {
                    version,
                    seq,
                    row,
                    col,
                } => {
                    check_version(version)?;
                    match self.service.apply_move(row, col).await? {
                        MoveOutcome::Accepted(snapshot) => Message::State {
                            version: PROTOCOL_VERSION,
                            seq,
                            snapshot,
                        },
                        MoveOutcome::Rejected(reason) => {
                            log::debug!("move ({}, {}) rejected: {}", row, col, reason);
                            Message::Reject {
                                version: PROTOCOL_VERSION,
                                seq,
                                reason,
                            }
                        }
                    }
                }
                Message::Reset { version, seq } => {
                    check_version(version)?;
                    Message::State {
                        version: PROTOCOL_VERSION,
                        seq,
                        snapshot: self.service.reset().await?,
                    }
                }
                Message::StateReq { version, seq } => {
                    check_version(version)?;
                    Message::State {
                        version: PROTOCOL_VERSION,
                        seq,
                        snapshot: self.service.snapshot(),
                    }
                }
                // Bare heartbeat from an unwrapped transport; echo and move on.
                Message::Heartbeat { version } => {
                    check_version(version)?;
                    Message::Heartbeat {
                        version: PROTOCOL_VERSION,
                    }
                }
                other => {
                    return Err(anyhow::anyhow!(
                        "Expected a request, got unexpected message: {:?} (closing session)",
                        other
                    ))
                }
            };
            self.transport.send(reply).await?;
        }
        Ok(())
    }
}

fn check_version(version: u8) -> anyhow::Result<()> {
    if version != PROTOCOL_VERSION {
        return Err(anyhow::anyhow!(
            "Protocol version mismatch in request: expected {}, got {}",
            PROTOCOL_VERSION,
            version
        ));
    }
    Ok(())
}

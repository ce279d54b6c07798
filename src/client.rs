#![cfg(feature = "std")]

use crate::domain::Snapshot;
use crate::protocol::{Message, PROTOCOL_VERSION};
use crate::transport::Transport;

/// Game-level answer to a client request.
#[derive(Debug, Clone)]
pub enum Reply {
    State(Snapshot),
    Rejected(String),
}

/// Client-side proxy for the remote game authority. Owns the handshake,
/// assigns sequence numbers to requests, and refuses replies whose version
/// or sequence number does not match — a reply can therefore only ever be
/// paired with the request that is currently in flight, which keeps
/// snapshot application serialized in arrival order.
pub struct RemoteGame {
    transport: Box<dyn Transport>,
    seq: u64,
}

impl RemoteGame {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport, seq: 0 }
    }

    /// Open the session as initiator.
    pub async fn handshake(&mut self) -> anyhow::Result<()> {
        self.transport
            .send(Message::Handshake {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match self.transport.recv().await? {
            Message::HandshakeAck { version } if version == PROTOCOL_VERSION => Ok(()),
            Message::HandshakeAck { version } => Err(anyhow::anyhow!(
                "Protocol version mismatch: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            other => Err(anyhow::anyhow!(
                "Expected HandshakeAck, got unexpected message: {:?}",
                other
            )),
        }
    }

    /// Ask the authority to place the human seat's mark.
    pub async fn place(&mut self, row: u8, col: u8) -> anyhow::Result<Reply> {
        let request = Message::Move {
            version: PROTOCOL_VERSION,
            seq: self.seq,
            row,
            col,
        };
        self.exchange(request).await
    }

    /// Ask the authority to start a fresh game.
    pub async fn reset(&mut self) -> anyhow::Result<Reply> {
        let request = Message::Reset {
            version: PROTOCOL_VERSION,
            seq: self.seq,
        };
        self.exchange(request).await
    }

    /// Fetch the current snapshot without changing anything.
    pub async fn refresh(&mut self) -> anyhow::Result<Reply> {
        let request = Message::StateReq {
            version: PROTOCOL_VERSION,
            seq: self.seq,
        };
        self.exchange(request).await
    }

    async fn exchange(&mut self, request: Message) -> anyhow::Result<Reply> {
        let seq = self.seq;
        self.transport.send(request).await?;
        let reply = match self.transport.recv().await? {
            Message::State {
                version,
                seq: resp_seq,
                snapshot,
            } if version == PROTOCOL_VERSION && resp_seq == seq => Reply::State(snapshot),
            Message::Reject {
                version,
                seq: resp_seq,
                reason,
            } if version == PROTOCOL_VERSION && resp_seq == seq => Reply::Rejected(reason),
            Message::State {
                version,
                seq: resp_seq,
                ..
            }
            | Message::Reject {
                version,
                seq: resp_seq,
                ..
            } => {
                if version != PROTOCOL_VERSION {
                    return Err(anyhow::anyhow!(
                        "Protocol version mismatch in response: expected {}, got {}",
                        PROTOCOL_VERSION,
                        version
                    ));
                }
                return Err(anyhow::anyhow!(
                    "Sequence mismatch in response: expected {}, got {}",
                    seq,
                    resp_seq
                ));
            }
            other => {
                return Err(anyhow::anyhow!(
                    "Expected State or Reject, got unexpected message: {:?}",
                    other
                ))
            }
        };
        self.seq += 1;
        Ok(reply)
    }
}

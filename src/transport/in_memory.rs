#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::protocol::Message;
use crate::transport::Transport;

/// Loopback transport for tests and same-process play. Each endpoint of a
/// [`InMemoryTransport::pair`] sends into the queue the other end reads.
pub struct InMemoryTransport {
    inbox: Arc<Mutex<VecDeque<Message>>>,
    outbox: Arc<Mutex<VecDeque<Message>>>,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let left = Arc::new(Mutex::new(VecDeque::new()));
        let right = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                inbox: left.clone(),
                outbox: right.clone(),
            },
            Self {
                inbox: right,
                outbox: left,
            },
        )
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.outbox.lock().unwrap().push_back(msg);
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        loop {
            if let Some(msg) = {
                let mut inbox = self.inbox.lock().unwrap();
                inbox.pop_front()
            } {
                return Ok(msg);
            }
            // Peer endpoint dropped with nothing queued for us.
            if Arc::strong_count(&self.inbox) == 1 {
                return Err(anyhow::anyhow!("Channel closed"));
            }
            yield_now().await;
        }
    }
}

#![cfg(feature = "std")]

use tokio::time::{interval, Duration, Instant};

use crate::protocol::{Message, PROTOCOL_VERSION};
use crate::transport::Transport;

/// Transport wrapper that keeps a connection visibly alive: it sends
/// periodic [`Message::Heartbeat`] probes when idle, echoes probes from the
/// peer, fails the connection after an idle timeout, and filters heartbeats
/// so callers only ever see game messages.
///
/// Use [`HeartbeatTransport::disabled`] for loopback transports that need
/// no liveness monitoring.
pub struct HeartbeatTransport<T: Transport> {
    inner: T,
    heartbeat_interval: Duration,
    idle_timeout: Duration,
    last_activity: Instant,
    enabled: bool,
}

impl<T: Transport> HeartbeatTransport<T> {
    pub fn new(inner: T, heartbeat_interval: Duration, idle_timeout: Duration) -> Self {
        Self {
            inner,
            heartbeat_interval,
            idle_timeout,
            last_activity: Instant::now(),
            enabled: true,
        }
    }

    pub fn disabled(inner: T) -> Self {
        Self {
            inner,
            heartbeat_interval: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(45),
            last_activity: Instant::now(),
            enabled: false,
        }
    }

    fn mark_activity(&mut self) {
        self.last_activity = Instant::now();
    }

    fn is_idle_timeout(&self) -> bool {
        self.last_activity.elapsed() > self.idle_timeout
    }
}

#[async_trait::async_trait]
impl<T: Transport> Transport for HeartbeatTransport<T> {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        if self.enabled && self.is_idle_timeout() {
            return Err(anyhow::anyhow!("Connection idle timeout exceeded"));
        }
        let result = self.inner.send(msg).await;
        if result.is_ok() {
            self.mark_activity();
        }
        result
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        if !self.enabled {
            return self.inner.recv().await;
        }

        let mut timer = interval(self.heartbeat_interval);
        timer.tick().await; // first tick completes immediately

        loop {
            tokio::select! {
                msg = self.inner.recv() => {
                    match msg? {
                        Message::Heartbeat { version } => {
                            if version != PROTOCOL_VERSION {
                                return Err(anyhow::anyhow!(
                                    "Heartbeat version mismatch: expected {}, got {}",
                                    PROTOCOL_VERSION,
                                    version
                                ));
                            }
                            self.mark_activity();
                            self.inner
                                .send(Message::Heartbeat { version: PROTOCOL_VERSION })
                                .await?;
                        }
                        msg => {
                            self.mark_activity();
                            return Ok(msg);
                        }
                    }
                }
                _ = timer.tick() => {
                    if self.is_idle_timeout() {
                        return Err(anyhow::anyhow!(
                            "Connection idle timeout exceeded ({:?})",
                            self.idle_timeout
                        ));
                    }
                    self.inner
                        .send(Message::Heartbeat { version: PROTOCOL_VERSION })
                        .await?;
                }
            }
        }
    }
}

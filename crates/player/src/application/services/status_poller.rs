//! AI status poller - periodic availability probe with explicit shutdown
//!
//! The status banner needs a fresh probe once a minute while a play screen
//! is visible. The poller owns a background task and a cancellation token;
//! `shutdown` (or dropping the poller) stops the task so a dismissed screen
//! never leaves a ticking probe behind.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use echoveil_protocol::AiStatusResponse;

use crate::ports::outbound::GameServerPort;

/// How often the AI status is probed
pub const AI_STATUS_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Background poller for game-master availability.
///
/// Statuses arrive on the returned channel; the first one is sent
/// immediately so the UI never waits a full interval for its banner.
pub struct AiStatusPoller {
    // Option so shutdown can take the handle; Drop still cancels.
    handle: Option<tokio::task::JoinHandle<()>>,
    cancel: CancellationToken,
}

impl AiStatusPoller {
    /// Spawn a poller at the default one-minute interval
    pub fn spawn(server: Arc<dyn GameServerPort>) -> (Self, mpsc::Receiver<AiStatusResponse>) {
        Self::spawn_with_interval(server, AI_STATUS_POLL_INTERVAL)
    }

    /// Spawn a poller with a custom interval
    pub fn spawn_with_interval(
        server: Arc<dyn GameServerPort>,
        interval: Duration,
    ) -> (Self, mpsc::Receiver<AiStatusResponse>) {
        let (tx, rx) = mpsc::channel(8);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        // ai_status never errors; offline degrades to a
                        // synthetic unavailable status.
                        let status = server.ai_status().await;
                        tracing::debug!(available = status.available, "ai status probed");
                        if tx.send(status).await.is_err() {
                            // Receiver gone; the screen was dismissed.
                            break;
                        }
                    }
                }
            }
        });

        (Self { handle: Some(handle), cancel }, rx)
    }

    /// Stop the poller and wait for the task to finish
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for AiStatusPoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockGameServerPort;

    fn online() -> AiStatusResponse {
        AiStatusResponse {
            available: true,
            backend: Some("ollama".into()),
            message: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_emits_immediately_then_on_interval() {
        let mut server = MockGameServerPort::new();
        server.expect_ai_status().returning(online);

        let (poller, mut rx) =
            AiStatusPoller::spawn_with_interval(Arc::new(server), Duration::from_secs(60));

        let first = rx.recv().await.expect("first status");
        assert!(first.available);

        tokio::time::advance(Duration::from_secs(61)).await;
        let second = rx.recv().await.expect("second status");
        assert!(second.available);

        poller.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_the_stream() {
        let mut server = MockGameServerPort::new();
        server.expect_ai_status().returning(online);

        let (poller, mut rx) =
            AiStatusPoller::spawn_with_interval(Arc::new(server), Duration::from_secs(60));
        let _ = rx.recv().await;

        poller.shutdown().await;
        assert!(rx.recv().await.is_none(), "channel closes after shutdown");
    }

    #[tokio::test(start_paused = true)]
    async fn test_offline_status_flows_through() {
        let mut server = MockGameServerPort::new();
        server.expect_ai_status().returning(AiStatusResponse::offline);

        let (poller, mut rx) =
            AiStatusPoller::spawn_with_interval(Arc::new(server), Duration::from_secs(60));
        let status = rx.recv().await.expect("status");
        assert!(!status.available);
        assert!(status.message.is_some());

        poller.shutdown().await;
    }
}

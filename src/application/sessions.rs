//! Single-active-utterance session arbitration
//!
//! The speech engine tolerates at most one active utterance system-wide.
//! Instead of the ambient "cancel whatever is speaking" call the original
//! platform offered, conversions go through an explicit active-session slot:
//! acquiring it cancels the previous holder, so two racing conversions can
//! never have engine events cross-delivered.

use tokio::sync::{oneshot, Mutex};

/// Owns the active-session slot. One instance per process, shared between
/// the convert use case and the shutdown signal handler.
#[derive(Default)]
pub struct SessionManager {
    active: Mutex<Option<oneshot::Sender<()>>>,
}

/// The slot held by the conversion currently allowed to use the engine.
/// Resolves its cancellation future when a newer conversion takes over or
/// shutdown begins.
pub struct SessionSlot {
    cancelled: oneshot::Receiver<()>,
}

impl SessionSlot {
    /// Suspend until this slot is revoked. The holder must then cancel its
    /// utterance and tear down; it must settle its own result either way.
    pub async fn cancelled(&mut self) {
        // Err means the manager itself is gone, which is shutdown too.
        let _ = (&mut self.cancelled).await;
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever conversion holds the slot, then claim it.
    pub async fn acquire(&self) -> SessionSlot {
        let mut active = self.active.lock().await;
        if let Some(previous) = active.take() {
            let _ = previous.send(());
        }
        let (tx, rx) = oneshot::channel();
        *active = Some(tx);
        SessionSlot { cancelled: rx }
    }

    /// Cancel the active conversion without claiming the slot.
    /// Used by shutdown teardown.
    pub async fn cancel_active(&self) {
        if let Some(previous) = self.active.lock().await.take() {
            let _ = previous.send(());
        }
    }
}

//! Signal handlers for conversion teardown

use std::io;
use std::sync::Arc;

use colored::Colorize;

use crate::application::sessions::SessionManager;

/// Shutdown signal handler.
///
/// SIGINT/SIGTERM revoke the active session slot, which makes an in-flight
/// conversion settle with a cancellation and tear down its routing path
/// instead of leaking it on exit.
pub struct ShutdownSignal {
    sessions: Arc<SessionManager>,
}

impl ShutdownSignal {
    /// Create a handler bound to the session manager
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }

    /// Install the signal handlers
    pub async fn setup(&self) -> Result<(), io::Error> {
        let sessions = Arc::clone(&self.sessions);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("{} Interrupted, cancelling conversion", "↓".cyan());
                sessions.cancel_active().await;
            }
        });

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let sessions = Arc::clone(&self.sessions);
            let mut sigterm = signal(SignalKind::terminate())?;
            tokio::spawn(async move {
                sigterm.recv().await;
                eprintln!("{} Terminated, cancelling conversion", "↓".cyan());
                sessions.cancel_active().await;
            });
        }

        Ok(())
    }
}

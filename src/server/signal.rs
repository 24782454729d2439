// Signal handling module
//
// SIGTERM and SIGINT both request a graceful shutdown: the accept loop
// stops and active connections finish in their background tasks.

use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Shutdown signal (SIGTERM, SIGINT)
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the signal listener task (Unix)
///
/// `notify_one` stores a permit, so a signal arriving while the accept
/// loop is between waits is not lost.
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                crate::logger::log_warning("SIGTERM received, initiating graceful shutdown");
            }
            _ = sigint.recv() => {
                crate::logger::log_warning("SIGINT received, initiating graceful shutdown");
            }
        }

        handler.shutdown.notify_one();
    });
}

/// Fallback for platforms without Unix signals - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            crate::logger::log_warning("Ctrl+C received, initiating graceful shutdown");
            handler.shutdown.notify_one();
        }
    });
}

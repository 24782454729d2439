// Accept loop module
// Runs the listener until a shutdown signal arrives

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;
use crate::server::connection;
use crate::server::signal::SignalHandler;

/// Accept connections until shutdown is requested.
///
/// In-flight connections run in their own tasks and finish naturally
/// after the loop exits; only accepting stops.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    signals: Arc<SignalHandler>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = signals.shutdown.notified() => {
                logger::log_shutdown(active_connections.load(Ordering::SeqCst));
                break;
            }
        }
    }

    Ok(())
}

//! Server module
//!
//! Listener setup and the accept loop.

pub mod connection;
pub mod listener;

pub use listener::bind_listener;

use crate::config::Site;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept loop: serve connections until Ctrl+C.
///
/// Each connection is handled on its own task; the only state shared
/// between requests is the immutable `Site`, so requests stay independent.
/// On Ctrl+C the loop returns, dropping the listener, and the process
/// exits normally.
pub async fn run(
    listener: TcpListener,
    site: Arc<Site>,
    access_log: bool,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::handle_connection(
                            stream,
                            peer_addr,
                            Arc::clone(&site),
                            access_log,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            result = tokio::signal::ctrl_c() => {
                result?;
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}

//! Logger module
//!
//! Stdout/stderr logging for the dev server: startup banner, access log
//! lines, and error/warning messages.

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr) {
    println!("Serving at http://{addr}");
    println!("Press Ctrl+C to stop");
}

pub fn log_shutdown() {
    println!("\nShutting down");
}

/// Log one access log line in Common Log Format
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

//! Access log format module
//!
//! Common Log Format (CLF), the same shape `python3 -m http.server` and
//! nginx emit, so existing log-scraping habits keep working.

use chrono::Local;

/// Access log entry containing per-request information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// HTTP version (1.0, 1.1)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_common() {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1".to_string(),
            "GET".to_string(),
            "/about/".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 512;

        let line = entry.format_common();
        assert!(line.starts_with("127.0.0.1 - - ["));
        assert!(line.contains("\"GET /about/ HTTP/1.1\""));
        assert!(line.ends_with(" 200 512"));
    }
}

//! Static file serving module
//!
//! Reads the file chosen by the router and builds the HTTP response with
//! MIME type detection.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Read a file from disk and build a 200 response for it
///
/// A missing file yields the plain-text 404 response. With the fallback
/// routing in front of this, that branch is only reached when the site's
/// fallback page itself is absent.
pub async fn serve_file(path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => {
            let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
            http::build_file_response(content, content_type, is_head)
        }
        // File not found is common, no need to log
        Err(e) if e.kind() == ErrorKind::NotFound => http::build_404_response(),
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {}", path.display(), e));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_serves_file_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("page.html");
        std::fs::write(&file, "<h1>Home</h1>").unwrap();

        let resp = serve_file(&file, false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
        assert_eq!(body_bytes(resp).await, "<h1>Home</h1>");
    }

    #[tokio::test]
    async fn test_head_has_empty_body() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("page.html");
        std::fs::write(&file, "<h1>Home</h1>").unwrap();

        let resp = serve_file(&file, true).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "13");
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_plain_404() {
        let dir = tempfile::tempdir().unwrap();
        let resp = serve_file(&dir.path().join("nope.html"), false).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(body_bytes(resp).await, "404 Not Found");
    }
}

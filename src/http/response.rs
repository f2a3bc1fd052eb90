//! HTTP response building module
//!
//! Provides builders for the handful of responses this server emits,
//! decoupled from the routing logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 OK response for a served file
///
/// HEAD requests get the full headers (including Content-Length of the
/// real body) with an empty body.
pub fn build_file_response(
    content: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
///
/// Only reachable when the site's own fallback page is missing; normal
/// unresolved paths serve the fallback page instead.
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 301 redirect response (directory requested without trailing slash)
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Moved Permanently")))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::from("Moved Permanently")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_response() {
        let resp = build_file_response(b"hello".to_vec(), "text/plain; charset=utf-8", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "5");
        assert_eq!(resp.headers()["Content-Type"], "text/plain; charset=utf-8");
    }

    #[test]
    fn test_head_keeps_content_length() {
        let resp = build_file_response(b"hello".to_vec(), "text/plain; charset=utf-8", true);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "5");
    }

    #[test]
    fn test_error_responses() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_500_response().status(), 500);

        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD");
    }

    #[test]
    fn test_redirect_response() {
        let resp = build_redirect_response("/about/");
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["Location"], "/about/");
    }
}

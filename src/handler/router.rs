//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, URL path
//! translation, and the three-way file/index/fallback routing decision.

use crate::config::Site;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Outcome of the routing decision for one request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The path names an existing regular file; serve its bytes
    File(PathBuf),
    /// Directory requested without a trailing slash; redirect to it
    Redirect(String),
    /// Nothing matched; serve the site's fallback page
    Fallback(PathBuf),
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    site: Arc<Site>,
    peer_addr: SocketAddr,
    access_log: bool,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let version = req.version();
    let is_head = method == Method::HEAD;

    let response = match check_http_method(&method) {
        Some(resp) => resp,
        None => match resolve(&site, &path) {
            Route::File(file_path) => static_files::serve_file(&file_path, is_head).await,
            Route::Redirect(target) => http::build_redirect_response(&target),
            // Same serving path as a regular file, so the fallback page
            // goes out with a 200 status. Faithful to the emulated
            // platform; see resolve().
            Route::Fallback(fallback_path) => {
                static_files::serve_file(&fallback_path, is_head).await
            }
        },
    };

    if access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.http_version = version_str(version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length(&response);
        logger::log_access(&entry);
    }

    Ok(response)
}

/// Decide which file on disk satisfies a request path.
///
/// Evaluated in order:
/// 1. Existing regular file -> [`Route::File`] on it.
/// 2. Existing directory containing the index file -> [`Route::File`] on
///    the index when the URL has a trailing slash, [`Route::Redirect`] to
///    the slashed path when it does not.
/// 3. Anything else -> [`Route::Fallback`] on `404.html` at the serving
///    root. The fallback page is then served exactly like any other file,
///    so the client sees a 200 status rather than 404. That mirrors the
///    platform behavior this server emulates and is deliberate, not a bug.
///
/// Traversal attempts never escape the serving root: `..` segments are
/// collapsed during translation and the resolved path is canonicalized and
/// checked against the root, so symlinks cannot escape either.
pub fn resolve(site: &Site, url_path: &str) -> Route {
    let decoded = percent_decode(url_path);
    let requested = translate_path(&site.root, &decoded);

    let Ok(resolved) = requested.canonicalize() else {
        return Route::Fallback(site.fallback_path());
    };

    if !resolved.starts_with(&site.root) {
        logger::log_warning(&format!(
            "Path escape blocked: {} -> {}",
            url_path,
            resolved.display()
        ));
        return Route::Fallback(site.fallback_path());
    }

    if resolved.is_file() {
        return Route::File(resolved);
    }

    if resolved.is_dir() {
        let index = resolved.join(&site.index_file);
        if index.is_file() {
            return if url_path.ends_with('/') {
                Route::File(index)
            } else {
                Route::Redirect(format!("{url_path}/"))
            };
        }
    }

    Route::Fallback(site.fallback_path())
}

/// Check HTTP method; anything other than GET/HEAD is rejected
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Translate a decoded URL path into a filesystem path under the root.
///
/// Empty and `.` segments are dropped; `..` pops the previous segment and
/// cannot climb above the root.
fn translate_path(root: &Path, url_path: &str) -> PathBuf {
    let mut segments: Vec<&str> = Vec::new();
    for segment in url_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut path = root.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    path
}

/// Decode `%XX` escapes in a URL path; malformed escapes pass through
fn percent_decode(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(value) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(value);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Body size as advertised by the response headers
fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get(hyper::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

fn version_str(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else {
        "1.1"
    }
}

//! devpages - local development static file server
//!
//! Emulates GitHub-Pages-style routing on top of a plain static file
//! server: serve the requested file if it exists, serve a directory's
//! `index.html` if the directory exists, and otherwise serve the site's
//! `404.html` page. Note that the fallback page is sent with a 200 status,
//! exactly as the hosted platform does; see [`handler::router::resolve`].

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

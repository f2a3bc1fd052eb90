//! Request handler module
//!
//! Method validation, path translation, and the file/index/fallback
//! routing decision, composed with a static file response writer.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::{handle_request, resolve, Route};

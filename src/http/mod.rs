//! HTTP protocol layer module
//!
//! Response construction and MIME type detection, decoupled from the
//! routing logic.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_405_response, build_500_response, build_file_response,
    build_redirect_response,
};

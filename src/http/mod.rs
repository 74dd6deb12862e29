//! HTTP Protocol.
mod status;

pub use status::StatusCode;

/// The only HTTP version spoken on the wire, as it appears in the request line.
pub const HTTP_VERSION: &str = "1.1";

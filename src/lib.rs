//! HTTP/1.1 over raw byte streams.
//!
//! - [`request`] incrementally decodes a request line and header section from any
//!   [`AsyncRead`](tokio::io::AsyncRead).
//! - [`response`] writes a response while enforcing status line, headers, body ordering.
//! - [`server`] glues both to a listener, one request per connection.
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod common;
pub mod headers;
pub mod http;
pub mod request;
pub mod response;
pub mod server;

pub use request::Request;
pub use server::{Handler, HandlerError, Server, serve};

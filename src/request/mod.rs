//! HTTP Request decoding.
//!
//! [`decode_from`] reads from any [`AsyncRead`] until a request line and a complete header
//! section have been parsed. The parsing itself is sans-IO: [`Request::parse`] accepts any
//! length of bytes and reports how many of them it consumed, so the caller can keep only the
//! unparsed remainder around for the next read.
//!
//! [`AsyncRead`]: tokio::io::AsyncRead
mod parser;
mod buffer;
mod decode;
mod error;


pub use parser::parse_reqline;
pub use buffer::ReadBuffer;
pub use decode::{INITIAL_BUFFER_CAP, decode_from};
pub use error::{DecodeError, ParseError};

use crate::common::ParseResult;
use crate::headers::HeaderMap;

/// HTTP Request Line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestLine {
    /// Request method, uppercase letters only, e.g: `GET`.
    pub method: String,
    /// Request target as sent by the client, e.g: `/index.html`.
    pub target: String,
    /// Protocol version without the `HTTP/` prefix, always `1.1`.
    pub version: String,
}

/// Request parser state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseState {
    /// Waiting for the request line.
    #[default]
    RequestLine,
    /// Request line parsed, parsing header fields.
    Headers,
    /// Empty line after the header section found.
    Done,
}

/// HTTP Request.
///
/// The request is built incrementally with [`Request::parse`], and should be treated as
/// immutable once [`Request::is_done`] returns `true`.
#[derive(Debug, Default)]
pub struct Request {
    request_line: RequestLine,
    headers: HeaderMap,
    state: ParseState,
}

impl Request {
    /// Create new empty request waiting for its request line.
    #[inline]
    pub const fn new() -> Self {
        Self {
            request_line: RequestLine {
                method: String::new(),
                target: String::new(),
                version: String::new(),
            },
            headers: HeaderMap::new(),
            state: ParseState::RequestLine,
        }
    }

    /// Returns the request line.
    #[inline]
    pub fn request_line(&self) -> &RequestLine {
        &self.request_line
    }

    /// Returns the request method.
    #[inline]
    pub fn method(&self) -> &str {
        &self.request_line.method
    }

    /// Returns the request target.
    #[inline]
    pub fn target(&self) -> &str {
        &self.request_line.target
    }

    /// Returns the header map.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns current parser state.
    #[inline]
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Returns `true` if the request line and the whole header section have been parsed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == ParseState::Done
    }

    /// Parse as much of `bytes` as possible, returning the number of bytes consumed.
    ///
    /// Parsing stops when a line is incomplete or when the header section ends. Bytes after the
    /// header section are never consumed. Calling this after the request is done returns
    /// [`ParseError::AlreadyDone`].
    pub fn parse(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        if self.is_done() {
            return Err(ParseError::AlreadyDone);
        }

        let mut parsed = 0;
        while !self.is_done() {
            let read = self.parse_single(&bytes[parsed..])?;
            if read == 0 {
                break;
            }
            parsed += read;
        }

        Ok(parsed)
    }

    fn parse_single(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        match self.state {
            ParseState::RequestLine => match parse_reqline(bytes) {
                ParseResult::Ok((reqline, read)) => {
                    self.request_line = reqline;
                    self.state = ParseState::Headers;
                    Ok(read)
                }
                ParseResult::Pending => Ok(0),
                ParseResult::Err(err) => Err(err),
            },
            ParseState::Headers => match self.headers.parse_line(bytes) {
                ParseResult::Ok(line) => {
                    if line.is_end() {
                        self.state = ParseState::Done;
                    }
                    Ok(line.consumed())
                }
                ParseResult::Pending => Ok(0),
                ParseResult::Err(err) => Err(err.into()),
            },
            ParseState::Done => Err(ParseError::AlreadyDone),
        }
    }
}

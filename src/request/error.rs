use std::io;

use super::ParseState;
use crate::headers::HeaderError;
use crate::http::StatusCode;

// ===== Parsing Error =====

/// HTTP Request parsing error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Request line is not exactly three non empty tokens separated by a single space.
    InvalidRequestLine,
    /// Method is empty or contains anything other than uppercase letters.
    InvalidMethod,
    /// Version is anything other than `HTTP/1.1`.
    UnsupportedVersion,
    /// Malformed header field line.
    Header(HeaderError),
    /// More bytes were fed after the request has been completely parsed.
    AlreadyDone,
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Header(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidRequestLine => f.write_str("malformed request line"),
            Self::InvalidMethod => f.write_str("invalid method"),
            Self::UnsupportedVersion => f.write_str("unrecognized http version"),
            Self::Header(err) => write!(f, "malformed header: {err}"),
            Self::AlreadyDone => f.write_str("request already parsed"),
        }
    }
}

impl From<HeaderError> for ParseError {
    #[inline]
    fn from(value: HeaderError) -> Self {
        Self::Header(value)
    }
}

// ===== Decode Error =====

/// An error that can occur when decoding a request from IO.
#[derive(Debug)]
pub enum DecodeError {
    /// Underlying IO read failed.
    Io(io::Error),
    /// IO reached end of stream before the header section was complete.
    Incomplete {
        /// Parser state when the stream ended.
        state: ParseState,
    },
    /// Malformed request.
    Parse(ParseError),
}

impl DecodeError {
    /// Returns the status code to respond with.
    ///
    /// Malformed requests are a client error, anything else is a server error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Parse(_) => StatusCode::BAD_REQUEST,
            Self::Io(_) | Self::Incomplete { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Incomplete { .. } => None,
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Incomplete { state } => write!(f, "incomplete request, in state: {state:?}"),
            Self::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl From<io::Error> for DecodeError {
    #[inline]
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ParseError> for DecodeError {
    #[inline]
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

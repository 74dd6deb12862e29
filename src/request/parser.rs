use super::{ParseError, RequestLine};
use crate::common::ParseResult;
use crate::http::HTTP_VERSION;
use crate::matches::{self, CRLF};

/// Parse a request line from the start of `bytes`.
///
/// On success, returns the request line and the number of bytes consumed, including the CRLF.
/// Returns [`ParseResult::Pending`] if `bytes` does not contain a CRLF yet.
///
/// ```rust
/// use h1wire::common::ParseResult;
/// use h1wire::request::parse_reqline;
///
/// let ParseResult::Ok((reqline, read)) = parse_reqline(b"GET /path HTTP/1.1\r\nHost") else {
///     unreachable!()
/// };
/// assert_eq!(reqline.method, "GET");
/// assert_eq!(reqline.target, "/path");
/// assert_eq!(reqline.version, "1.1");
/// assert_eq!(read, 20);
/// ```
pub fn parse_reqline(bytes: &[u8]) -> ParseResult<(RequestLine, usize), ParseError> {
    let Some(len) = matches::find_crlf(bytes) else {
        return ParseResult::Pending;
    };

    let Ok(line) = std::str::from_utf8(&bytes[..len]) else {
        return ParseResult::Err(ParseError::InvalidRequestLine);
    };

    let mut parts = line.split(' ');
    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return ParseResult::Err(ParseError::InvalidRequestLine);
    };

    if target.is_empty() {
        return ParseResult::Err(ParseError::InvalidRequestLine);
    }

    if method.is_empty() || !method.bytes().all(|b| b.is_ascii_uppercase()) {
        return ParseResult::Err(ParseError::InvalidMethod);
    }

    let mut version = version.split('/');
    let (Some("HTTP"), Some(HTTP_VERSION), None) = (version.next(), version.next(), version.next())
    else {
        return ParseResult::Err(ParseError::UnsupportedVersion);
    };

    let reqline = RequestLine {
        method: method.to_owned(),
        target: target.to_owned(),
        version: HTTP_VERSION.to_owned(),
    };

    ParseResult::Ok((reqline, len + CRLF.len()))
}

use super::{HeaderError, HeaderMap};
use crate::common::ParseResult;
use crate::matches::{self, CRLF};

/// A successfully parsed header section line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderLine {
    /// A field line was merged into the map, consuming the given number of bytes, including the
    /// trailing CRLF.
    Field(usize),
    /// The empty line terminating the header section, consuming the 2 bytes of CRLF.
    End,
}

impl HeaderLine {
    /// Returns the number of bytes consumed by this line.
    #[inline]
    pub const fn consumed(&self) -> usize {
        match self {
            Self::Field(len) => *len,
            Self::End => CRLF.len(),
        }
    }

    /// Returns `true` if this is the end of the header section.
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

impl HeaderMap {
    /// Parse a single header field line from the start of `bytes`.
    ///
    /// Returns [`ParseResult::Pending`] if `bytes` does not contain a CRLF yet, in which case
    /// nothing is consumed. An empty line returns [`HeaderLine::End`] without touching the map.
    ///
    /// ```rust
    /// use h1wire::common::ParseResult;
    /// use h1wire::headers::{HeaderLine, HeaderMap};
    ///
    /// let mut map = HeaderMap::new();
    /// let bytes = b"Host: localhost:42069\r\n\r\n";
    ///
    /// let ParseResult::Ok(line) = map.parse_line(bytes) else { unreachable!() };
    /// assert_eq!(line, HeaderLine::Field(23));
    /// assert_eq!(map.get("host"), Some("localhost:42069"));
    ///
    /// let ParseResult::Ok(line) = map.parse_line(&bytes[23..]) else { unreachable!() };
    /// assert!(line.is_end());
    /// ```
    pub fn parse_line(&mut self, bytes: &[u8]) -> ParseResult<HeaderLine, HeaderError> {
        let Some(len) = matches::find_crlf(bytes) else {
            return ParseResult::Pending;
        };

        if len == 0 {
            return ParseResult::Ok(HeaderLine::End);
        }

        let line = &bytes[..len];

        let Some(colon) = line.iter().position(|&b| b == b':') else {
            return ParseResult::Err(HeaderError::MissingColon);
        };

        let name = &line[..colon];
        if let Some(b' ' | b'\t') = name.last() {
            return ParseResult::Err(HeaderError::InvalidSpacing);
        }

        let name = name.trim_ascii_start();
        if name.is_empty() || !name.iter().copied().all(matches::is_token) {
            return ParseResult::Err(HeaderError::InvalidName);
        }

        // token characters are all ASCII
        let Ok(name) = std::str::from_utf8(name) else {
            return ParseResult::Err(HeaderError::InvalidName);
        };
        let Ok(value) = std::str::from_utf8(line[colon + 1..].trim_ascii()) else {
            return ParseResult::Err(HeaderError::InvalidValue);
        };

        if let Err(err) = self.set(name, value) {
            return ParseResult::Err(err);
        }

        ParseResult::Ok(HeaderLine::Field(len + CRLF.len()))
    }
}

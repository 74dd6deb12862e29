//! Byte matching helpers shared by the parsers.

pub(crate) const CRLF: &[u8; 2] = b"\r\n";

/// Returns the index of the first `\r\n` in `bytes`.
pub(crate) fn find_crlf(bytes: &[u8]) -> Option<usize> {
    let mut state = bytes;
    let mut offset = 0;

    while let Some(nth) = state.iter().position(|&b| b == b'\r') {
        match state.get(nth + 1) {
            Some(b'\n') => return Some(offset + nth),
            Some(_) => {
                state = &state[nth + 1..];
                offset += nth + 1;
            }
            None => return None,
        }
    }

    None
}

/// `tchar` from RFC 9110, section 5.6.2.
#[inline]
pub(crate) const fn is_token(byte: u8) -> bool {
    matches!(
        byte,
        b'a'..=b'z'
            | b'A'..=b'Z'
            | b'0'..=b'9'
            | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
            | b'^' | b'_' | b'`' | b'|' | b'~'
    )
}

/// Bytes allowed in a field value. CR, LF and NUL would break the message framing.
#[inline]
pub(crate) const fn is_field_value(byte: u8) -> bool {
    !matches!(byte, b'\r' | b'\n' | b'\0')
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_find_crlf() {
        assert_eq!(find_crlf(b"\r\n"), Some(0));
        assert_eq!(find_crlf(b"GET / HTTP/1.1\r\n"), Some(14));
        assert_eq!(find_crlf(b"a\rb\r\n"), Some(3));
        assert_eq!(find_crlf(b"a\r"), None);
        assert_eq!(find_crlf(b"a\n"), None);
        assert_eq!(find_crlf(b""), None);
    }

    #[test]
    fn test_is_token() {
        for b in b"Content-Type!#$%&'*+-.^_`|~09" {
            assert!(is_token(*b), "{:?}", *b as char);
        }
        for b in b" :/@\"(),;<=>?[]{}\\\t\x7f\x80" {
            assert!(!is_token(*b), "{:?}", *b as char);
        }
    }

    #[test]
    fn test_is_field_value() {
        for b in b"text/html; charset=utf-8 \t\x80" {
            assert!(is_field_value(*b), "{:?}", *b as char);
        }
        for b in b"\r\n\0" {
            assert!(!is_field_value(*b), "{:?}", *b as char);
        }
    }
}

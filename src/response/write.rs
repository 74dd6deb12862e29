use bytes::BufMut;

use crate::headers::HeaderMap;
use crate::http::{HTTP_VERSION, StatusCode};

/// Write `HTTP/1.1 <code> <reason>\r\n`.
///
/// Codes without a known reason phrase are written with an empty one, e.g: `HTTP/1.1 299 \r\n`.
pub fn write_status_line<B: BufMut>(status: StatusCode, mut bufm: B) {
    bufm.put_slice(b"HTTP/");
    bufm.put_slice(HTTP_VERSION.as_bytes());
    bufm.put_slice(b" ");
    bufm.put_slice(itoa::Buffer::new().format(status.as_u16()).as_bytes());
    bufm.put_slice(b" ");
    bufm.put_slice(status.reason().unwrap_or_default().as_bytes());
    bufm.put_slice(b"\r\n");
}

/// Write every header as `name: value\r\n`, followed by an empty line.
pub fn write_headers<B: BufMut>(headers: &HeaderMap, mut bufm: B) {
    for (name, value) in headers {
        bufm.put_slice(name.as_bytes());
        bufm.put_slice(b": ");
        bufm.put_slice(value.as_bytes());
        bufm.put_slice(b"\r\n");
    }

    bufm.put_slice(b"\r\n");
}

/// Write a single chunk of chunked transfer coding, `<hex len>\r\n<chunk>\r\n`.
///
/// Returns the number of bytes written.
pub fn write_chunk<B: BufMut>(chunk: &[u8], mut bufm: B) -> usize {
    let mut hex = [0u8; 2 * size_of::<usize>()];
    let len = hex_digits(chunk.len(), &mut hex);

    bufm.put_slice(len);
    bufm.put_slice(b"\r\n");
    bufm.put_slice(chunk);
    bufm.put_slice(b"\r\n");

    len.len() + chunk.len() + 4
}

/// Returns the default headers for a plain text response of `content_len` bytes.
pub fn default_headers(content_len: usize) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(3);
    headers.merge("Content-Length", itoa::Buffer::new().format(content_len));
    headers.merge("Connection", "close");
    headers.merge("Content-Type", "text/plain");
    headers
}

/// Write a complete response with [`default_headers`] and `message` as body.
pub fn write_message<B: BufMut>(status: StatusCode, message: &str, mut bufm: B) {
    write_status_line(status, &mut bufm);
    write_headers(&default_headers(message.len()), &mut bufm);
    bufm.put_slice(message.as_bytes());
}

fn hex_digits(mut value: usize, buf: &mut [u8; 2 * size_of::<usize>()]) -> &[u8] {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = DIGITS[value & 0xf];
        value >>= 4;
        if value == 0 {
            break;
        }
    }

    &buf[start..]
}

use bytes::BytesMut;

use crate::common::ParseResult;
use crate::headers::{HeaderLine, HeaderMap};
use crate::http::StatusCode;
use crate::matches::find_crlf;
use crate::response::{Writer, WriterError, WriterState, default_headers, write_message};

/// Minimal response reader used to check that written bytes parse back.
fn read_response(bytes: &[u8]) -> (String, HeaderMap, &[u8]) {
    let line_len = find_crlf(bytes).expect("status line");
    let status_line = std::str::from_utf8(&bytes[..line_len]).unwrap().to_owned();

    let mut headers = HeaderMap::new();
    let mut rest = &bytes[line_len + 2..];
    loop {
        match headers.parse_line(rest) {
            ParseResult::Ok(HeaderLine::End) => return (status_line, headers, &rest[2..]),
            ParseResult::Ok(line) => rest = &rest[line.consumed()..],
            ParseResult::Pending => panic!("unterminated header section"),
            ParseResult::Err(err) => panic!("invalid header: {err}"),
        }
    }
}

#[test]
fn test_status_line() {
    macro_rules! test {
        ($code:expr, $expected:literal) => {
            let mut writer = Writer::new(Vec::new());
            writer.write_status_line($code).unwrap();
            assert_eq!(writer.get_ref().as_slice(), $expected);
            assert_eq!(writer.state(), WriterState::Headers);
        };
    }

    test!(StatusCode::OK, b"HTTP/1.1 200 OK\r\n");
    test!(StatusCode::BAD_REQUEST, b"HTTP/1.1 400 Bad Request\r\n");
    test!(StatusCode::INTERNAL_SERVER_ERROR, b"HTTP/1.1 500 Internal Server Error\r\n");
    test!(StatusCode::from_u16(200), b"HTTP/1.1 200 OK\r\n");
    test!(StatusCode::from_u16(299), b"HTTP/1.1 299 \r\n");
    test!(StatusCode::from(404u16), b"HTTP/1.1 404 \r\n");
}

#[test]
fn test_round_trip() {
    let mut headers = HeaderMap::new();
    headers.set("Content-Type", "text/plain").unwrap();

    let mut writer = Writer::new(BytesMut::new());
    writer.write_status_line(StatusCode::OK).unwrap();
    writer.write_headers(&headers).unwrap();
    assert_eq!(writer.write_body(b"hello world").unwrap(), 11);
    assert!(writer.is_done());

    let bytes = writer.into_inner();
    assert_eq!(
        &bytes[..],
        b"HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\n\r\nhello world"
    );

    let (status_line, parsed, body) = read_response(&bytes);
    assert_eq!(status_line, "HTTP/1.1 200 OK");
    assert_eq!(parsed, headers);
    assert_eq!(body, b"hello world");
}

#[test]
fn test_rejected_fields_never_reach_the_wire() {
    let mut headers = HeaderMap::new();
    assert!(headers.set("X-Evil\r\nInjected", "1").is_err());
    assert!(headers.set("Bad Name", "v").is_err());
    assert!(headers.set("X-Name", "v\r\nSmuggled: yes").is_err());
    headers.set("X-Name", "v").unwrap();

    let mut writer = Writer::new(Vec::new());
    writer.write_status_line(StatusCode::OK).unwrap();
    writer.write_headers(&headers).unwrap();

    let bytes = writer.into_inner();
    assert_eq!(bytes, b"HTTP/1.1 200 OK\r\nx-name: v\r\n\r\n");

    let (_, parsed, body) = read_response(&bytes);
    assert_eq!(parsed, headers);
    assert!(body.is_empty());
}

#[test]
fn test_out_of_order() {
    let mut writer = Writer::new(Vec::new());

    assert_eq!(
        writer.write_body(b"body"),
        Err(WriterError::State { expected: WriterState::Body, actual: WriterState::StatusLine })
    );
    assert_eq!(
        writer.write_headers(&HeaderMap::new()),
        Err(WriterError::State { expected: WriterState::Headers, actual: WriterState::StatusLine })
    );
    assert!(writer.write_chunked_body(b"abc").is_err());
    assert!(writer.write_chunked_body_done().is_err());
    assert!(writer.write_trailers(&HeaderMap::new()).is_err());
    assert!(writer.get_ref().is_empty(), "failed writes must not write anything");

    writer.write_status_line(StatusCode::OK).unwrap();
    let len = writer.get_ref().len();

    assert!(writer.write_status_line(StatusCode::OK).is_err());
    assert!(writer.write_body(b"body").is_err());
    assert_eq!(writer.get_ref().len(), len);

    writer.write_headers(&HeaderMap::new()).unwrap();
    assert!(writer.write_headers(&HeaderMap::new()).is_err());

    writer.write_body(b"body").unwrap();
    assert_eq!(
        writer.write_body(b"body"),
        Err(WriterError::State { expected: WriterState::Body, actual: WriterState::Done })
    );
    assert!(writer.write_chunked_body(b"abc").is_err());
}

#[test]
fn test_chunked() {
    let mut headers = HeaderMap::new();
    headers.set("Transfer-Encoding", "chunked").unwrap();

    let mut writer = Writer::new(Vec::new());
    writer.write_status_line(StatusCode::OK).unwrap();
    writer.write_headers(&headers).unwrap();
    let head = writer.get_ref().len();

    assert_eq!(writer.write_chunked_body(b"abc").unwrap(), 8);
    assert_eq!(&writer.get_ref()[head..], b"3\r\nabc\r\n");

    assert_eq!(writer.write_chunked_body(b"").unwrap(), 0);
    assert_eq!(writer.get_ref().len(), head + 8);

    let chunk = [b'x'; 300];
    assert_eq!(writer.write_chunked_body(&chunk).unwrap(), 3 + 2 + 300 + 2);
    assert_eq!(&writer.get_ref()[head + 8..head + 13], b"12c\r\n");

    assert_eq!(writer.write_body(b"body"), Err(WriterError::ChunkedBody));
    assert_eq!(writer.state(), WriterState::Body);

    let start = writer.get_ref().len();
    assert_eq!(writer.write_chunked_body_done().unwrap(), 5);
    assert_eq!(&writer.get_ref()[start..], b"0\r\n\r\n");
    assert!(writer.is_done());

    assert!(writer.write_chunked_body(b"abc").is_err());
    assert!(writer.write_trailers(&HeaderMap::new()).is_err());
}

#[test]
fn test_trailers() {
    let mut writer = Writer::new(Vec::new());
    writer.write_status_line(StatusCode::OK).unwrap();
    writer.write_headers(&HeaderMap::new()).unwrap();
    writer.write_chunked_body(b"hello").unwrap();

    let mut trailers = HeaderMap::new();
    trailers.set("X-Content-Length", "5").unwrap();
    writer.write_trailers(&trailers).unwrap();
    assert!(writer.is_done());

    assert_eq!(
        writer.into_inner(),
        b"HTTP/1.1 200 OK\r\n\r\n5\r\nhello\r\n0\r\nx-content-length: 5\r\n\r\n"
    );
}

#[test]
fn test_default_headers() {
    let headers = default_headers(42);
    assert_eq!(headers.get("content-length"), Some("42"));
    assert_eq!(headers.get("connection"), Some("close"));
    assert_eq!(headers.get("content-type"), Some("text/plain"));

    let mut bytes = Vec::new();
    write_message(StatusCode::BAD_REQUEST, "bad", &mut bytes);

    let (status_line, headers, body) = read_response(&bytes);
    assert_eq!(status_line, "HTTP/1.1 400 Bad Request");
    assert_eq!(headers.get("content-length"), Some("3"));
    assert_eq!(body, b"bad");
}

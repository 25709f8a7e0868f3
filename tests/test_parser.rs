use pixel_demo::http::parser::{ParseError, parse_request};
use pixel_demo::http::request::Method;

#[test]
fn test_parse_simple_get() {
    let raw = b"GET /ImagickPixel/getColor HTTP/1.1\r\nHost: localhost\r\n\r\n";

    let req = parse_request(raw).unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.target, "/ImagickPixel/getColor");
    assert_eq!(req.protocol, "HTTP/1.1");
    assert_eq!(req.header("Host"), Some("localhost"));
}

#[test]
fn test_parse_target_with_query() {
    let raw = b"GET /ImagickPixel/setColor?color=red HTTP/1.1\r\n\r\n";

    let req = parse_request(raw).unwrap();

    assert_eq!(req.path(), "/ImagickPixel/setColor");
    assert_eq!(req.query(), Some("color=red"));
}

#[test]
fn test_parse_multiple_headers() {
    let raw = b"GET / HTTP/1.1\r\nHost: localhost\r\nAccept: text/html\r\nUser-Agent: demo\r\n\r\n";

    let req = parse_request(raw).unwrap();

    assert_eq!(req.headers.len(), 3);
    assert_eq!(req.header("Accept"), Some("text/html"));
}

#[test]
fn test_parse_header_values_trimmed() {
    let raw = b"GET / HTTP/1.1\r\nHost:   spaced.example   \r\n\r\n";

    let req = parse_request(raw).unwrap();
    assert_eq!(req.header("Host"), Some("spaced.example"));
}

#[test]
fn test_incomplete_request() {
    let raw = b"GET / HTTP/1.1\r\nHost: localhost\r\n";

    assert!(matches!(parse_request(raw), Err(ParseError::Incomplete)));
}

#[test]
fn test_invalid_method() {
    let raw = b"BREW /pot HTTP/1.1\r\n\r\n";

    assert!(matches!(parse_request(raw), Err(ParseError::InvalidMethod)));
}

#[test]
fn test_malformed_request_line() {
    let raw = b"GET\r\n\r\n";

    assert!(matches!(parse_request(raw), Err(ParseError::InvalidRequest)));
}

#[test]
fn test_malformed_header_line() {
    let raw = b"GET / HTTP/1.1\r\nNoColonHere\r\n\r\n";

    assert!(matches!(parse_request(raw), Err(ParseError::InvalidHeader)));
}

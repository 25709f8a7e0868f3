use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    Incomplete,
}

/// Parses one HTTP request head from the buffer.
///
/// The demo serves one request per connection and never reads a request
/// body, so parsing stops at the header/body separator.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = head.split("\r\n");
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let (method, target, protocol) = parse_request_line(request_line)?;

    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(Request {
        method,
        target: target.to_string(),
        protocol: protocol.to_string(),
        headers,
    })
}

fn parse_request_line(line: &str) -> Result<(Method, &str, &str), ParseError> {
    let mut parts = line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target = parts.next().ok_or(ParseError::InvalidRequest)?;
    let protocol = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    Ok((method, target, protocol))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

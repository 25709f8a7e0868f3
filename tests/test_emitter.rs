use std::collections::HashMap;

use tokio::io::AsyncReadExt;

use pixel_demo::http::emitter::{Emitter, serialize_head, status_line};
use pixel_demo::http::request::{Method, Request};
use pixel_demo::http::response::{Body, Response, ResponseBuilder};

fn get(target: &str) -> Request {
    Request {
        method: Method::GET,
        target: target.to_string(),
        protocol: "HTTP/1.1".to_string(),
        headers: HashMap::new(),
    }
}

#[test]
fn test_status_line_with_reason() {
    assert_eq!(status_line("HTTP/1.1", 404, Some("Not Found")), "HTTP/1.1 404 Not Found");
}

#[test]
fn test_status_line_without_reason() {
    assert_eq!(status_line("HTTP/1.1", 599, None), "HTTP/1.1 599");
}

#[test]
fn test_status_line_empty_reason_means_no_trailing_text() {
    assert_eq!(status_line("HTTP/1.1", 599, Some("")), "HTTP/1.1 599");
}

#[test]
fn test_head_auto_adds_known_reason() {
    let req = get("/");
    let mut resp = Response::new(404);

    let head = serialize_head(&req, &mut resp, true);
    let head = String::from_utf8(head).unwrap();

    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert_eq!(resp.reason.as_deref(), Some("Not Found"));
}

#[test]
fn test_head_unknown_code_gets_bare_status_line() {
    let req = get("/");
    let mut resp = Response::new(599);

    let head = serialize_head(&req, &mut resp, true);
    let head = String::from_utf8(head).unwrap();

    assert!(head.starts_with("HTTP/1.1 599\r\n"));
}

#[test]
fn test_head_keeps_explicit_reason() {
    let req = get("/");
    let mut resp = ResponseBuilder::new(404).reason("Missing Pixel").build();

    let head = serialize_head(&req, &mut resp, true);
    let head = String::from_utf8(head).unwrap();

    assert!(head.starts_with("HTTP/1.1 404 Missing Pixel\r\n"));
}

#[test]
fn test_head_without_auto_reason() {
    let req = get("/");
    let mut resp = Response::new(404);

    let head = serialize_head(&req, &mut resp, false);
    let head = String::from_utf8(head).unwrap();

    assert!(head.starts_with("HTTP/1.1 404\r\n"));
    assert_eq!(resp.reason, None);
}

#[test]
fn test_head_uses_request_protocol() {
    let mut req = get("/");
    req.protocol = "HTTP/1.0".to_string();
    let mut resp = Response::new(200);

    let head = serialize_head(&req, &mut resp, true);
    let head = String::from_utf8(head).unwrap();

    assert!(head.starts_with("HTTP/1.0 200 OK\r\n"));
}

#[test]
fn test_head_emits_repeated_headers_in_order() {
    let req = get("/");
    let mut resp = ResponseBuilder::new(200)
        .header("Set-Cookie", "a=1")
        .header("X-Other", "x")
        .header("Set-Cookie", "b=2")
        .body(Body::Empty)
        .build();

    let head = serialize_head(&req, &mut resp, true);
    let head = String::from_utf8(head).unwrap();

    let first = head.find("Set-Cookie: a=1\r\n").unwrap();
    let second = head.find("Set-Cookie: b=2\r\n").unwrap();
    assert!(first < second);
    assert!(head.contains("X-Other: x\r\n"));
    assert!(head.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_send_error_response_scenario() {
    let (mut client, mut server) = tokio::io::duplex(64 * 1024);
    let req = get("/missing");
    let mut emitter = Emitter::new();

    emitter
        .send_error_response(&mut client, &req, "not found", 404)
        .await
        .unwrap();
    drop(client);

    let mut out = Vec::new();
    server.read_to_end(&mut out).await.unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("HTTP/1.1 404 Not Found\r\n"));
    let (_, body) = out.split_once("\r\n\r\n").unwrap();
    assert_eq!(body, "not found");
}

#[tokio::test]
async fn test_send_response_writer_body() {
    let (mut client, mut server) = tokio::io::duplex(64 * 1024);
    let req = get("/");
    let mut emitter = Emitter::new();

    let resp = ResponseBuilder::new(200)
        .body(Body::Writer(Box::new(|out| {
            out.extend_from_slice(b"produced by the body itself")
        })))
        .build();

    emitter
        .send_response(&mut client, &req, resp, true)
        .await
        .unwrap();
    drop(client);

    let mut out = Vec::new();
    server.read_to_end(&mut out).await.unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(out.ends_with("\r\n\r\nproduced by the body itself"));
}

#[tokio::test]
async fn test_headers_sent_flag() {
    let (mut client, _server) = tokio::io::duplex(64 * 1024);
    let req = get("/");
    let mut emitter = Emitter::new();

    assert!(!emitter.headers_sent());

    emitter
        .send_response(&mut client, &req, Response::new(204), true)
        .await
        .unwrap();

    assert!(emitter.headers_sent());
}

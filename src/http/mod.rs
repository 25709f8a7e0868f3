//! HTTP front end.
//!
//! Request-scoped HTTP/1.x handling: one connection carries one request to
//! completion and is then closed, so there is no keep-alive bookkeeping and
//! no shared state between requests.
//!
//! - **`connection`**: per-connection lifecycle (read, route, emit, terminal hook)
//! - **`parser`**: parses an incoming request from the byte buffer
//! - **`request`**: parsed request representation
//! - **`response`**: response representation with ordered additive headers
//!   and a variant body
//! - **`emitter`**: serializes and sends responses, tracking whether headers
//!   have hit the wire

pub mod connection;
pub mod emitter;
pub mod parser;
pub mod request;
pub mod response;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::request::Request;
use crate::http::response::{Body, Response, ResponseBuilder, reason_phrase};

/// Formats a status line: `"<PROTOCOL> <CODE>[ <REASON>]"`.
///
/// An absent or empty reason produces no trailing text after the code.
pub fn status_line(protocol: &str, status: u16, reason: Option<&str>) -> String {
    let mut line = format!("{} {}", protocol, status);

    if let Some(reason) = reason {
        if !reason.is_empty() {
            line.push(' ');
            line.push_str(reason);
        }
    }

    line
}

/// Serializes the response head: status line plus header lines, in stored
/// order, terminated by the blank separator line.
///
/// When `auto_add_reason` is set and the response carries no reason phrase,
/// the standard table is consulted; unknown codes get an empty reason. The
/// computed reason is written back to the response, mirroring the emitter's
/// observable contract.
pub fn serialize_head(request: &Request, response: &mut Response, auto_add_reason: bool) -> Vec<u8> {
    let reason_missing = response.reason.as_deref().is_none_or(str::is_empty);
    if auto_add_reason && reason_missing {
        let reason = reason_phrase(response.status).unwrap_or("");
        response.reason = Some(reason.to_string());
    }

    let mut buf = Vec::new();

    let line = status_line(&request.protocol, response.status, response.reason.as_deref());
    buf.extend_from_slice(line.as_bytes());
    buf.extend_from_slice(b"\r\n");

    // Additive: every stored line goes out, duplicates included.
    for (name, value) in response.header_lines() {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    buf.extend_from_slice(b"\r\n");
    buf
}

/// Sends responses over a transport, tracking whether the head has been
/// flushed to the wire.
///
/// The flag is the guard behind the invariant that no status line or header
/// may be written once the body has begun; the terminal fault hook consults
/// it before attempting an error page.
pub struct Emitter {
    headers_sent: bool,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            headers_sent: false,
        }
    }

    pub fn headers_sent(&self) -> bool {
        self.headers_sent
    }

    /// Emits the full response: head, flush, then body.
    ///
    /// The flush between head and body forces header delivery before any
    /// body bytes move.
    pub async fn send_response<W>(
        &mut self,
        stream: &mut W,
        request: &Request,
        mut response: Response,
        auto_add_reason: bool,
    ) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let head = serialize_head(request, &mut response, auto_add_reason);
        stream.write_all(&head).await?;
        stream.flush().await?;
        self.headers_sent = true;

        let body = response.body.into_bytes();
        if !body.is_empty() {
            stream.write_all(&body).await?;
            stream.flush().await?;
        }

        Ok(())
    }

    /// Convenience wrapper: builds a response around the given body and
    /// status code and delegates to `send_response`.
    pub async fn send_error_response<W>(
        &mut self,
        stream: &mut W,
        request: &Request,
        body: impl Into<String>,
        error_code: u16,
    ) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let response = ResponseBuilder::new(error_code)
            .body(Body::Text(body.into()))
            .build();

        self.send_response(stream, request, response, true).await
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

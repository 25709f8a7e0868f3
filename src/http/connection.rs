use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::demo;
use crate::fault::{self, FaultContext};
use crate::http::emitter::Emitter;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;

/// Handles one request-scoped connection: read and parse a single request,
/// route it, emit the response, run the terminal fault hook, close.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let Some(request) = self.read_request().await? else {
            return Ok(());
        };

        let mut emitter = Emitter::new();
        let mut ctx = FaultContext::new();

        match demo::route(&request, &mut ctx) {
            Ok(Some(response)) => {
                emitter
                    .send_response(&mut self.stream, &request, response, true)
                    .await?;
            }
            Ok(None) => {
                emitter
                    .send_error_response(&mut self.stream, &request, "not found", 404)
                    .await?;
            }
            Err(e) => {
                let fatal = ctx.last().is_some_and(|f| f.severity.is_fatal());

                if fatal {
                    // The terminal hook owns the client-facing report.
                    tracing::error!(error = %e, path = %request.path(), "Unrecoverable fault");
                } else {
                    tracing::warn!(error = %e, path = %request.path(), "Request failed");
                    emitter
                        .send_error_response(&mut self.stream, &request, e.to_string(), 500)
                        .await?;
                }
            }
        }

        fault::shutdown_hook(&ctx, &emitter, &mut self.stream).await?;
        self.stream.shutdown().await?;

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            match parse_request(&self.buffer) {
                Ok(request) => return Ok(Some(request)),

                Err(ParseError::Incomplete) => {
                    // Need more data, fall through to read
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed without sending anything
                    return Ok(None);
                }
                return Err(anyhow::anyhow!("connection closed mid-request"));
            }
        }
    }
}

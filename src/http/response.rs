use std::fmt;

/// Standard reason phrase for an HTTP status code.
///
/// Unknown codes return `None`; the emitter then writes a status line with
/// no trailing reason text.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    let reason = match code {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        _ => return None,
    };

    Some(reason)
}

/// Response body variants.
///
/// `Empty` is the explicit no-output case; the other three carry their own
/// emission strategy.
pub enum Body {
    /// No body bytes at all.
    Empty,
    /// Emitted as-is.
    Text(String),
    /// Emitted via its string conversion.
    Stringable(Box<dyn fmt::Display + Send>),
    /// Invoked once; the procedure produces the output itself.
    Writer(Box<dyn FnOnce(&mut Vec<u8>) + Send>),
}

impl Body {
    /// Renders the body to its final bytes, consuming it.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Body::Empty => Vec::new(),
            Body::Text(text) => text.into_bytes(),
            Body::Stringable(value) => value.to_string().into_bytes(),
            Body::Writer(write) => {
                let mut out = Vec::new();
                write(&mut out);
                out
            }
        }
    }

    /// Byte length, when it is knowable without running the body.
    pub fn known_len(&self) -> Option<usize> {
        match self {
            Body::Empty => Some(0),
            Body::Text(text) => Some(text.len()),
            _ => None,
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Empty => f.write_str("Body::Empty"),
            Body::Text(text) => write!(f, "Body::Text({} bytes)", text.len()),
            Body::Stringable(_) => f.write_str("Body::Stringable"),
            Body::Writer(_) => f.write_str("Body::Writer"),
        }
    }
}

/// An HTTP response ready to be emitted.
///
/// Headers are an ordered multi-map: repeated names are kept, in insertion
/// order, and never overwrite an earlier entry.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub reason: Option<String>,
    headers: Vec<(String, String)>,
    pub body: Body,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            reason: None,
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    /// Appends a header line. Additive: an existing line with the same name
    /// stays in place and keeps its position.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Header lines in the order they were added.
    pub fn header_lines(&self) -> &[(String, String)] {
        &self.headers
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

/// Builder for constructing responses in a fluent style.
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new(status: u16) -> Self {
        Self {
            response: Response::new(status),
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.response.reason = Some(reason.into());
        self
    }

    /// Appends a header line (additive, never replaces).
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.response.add_header(name, value);
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.response.body = body;
        self
    }

    /// Builds the final response, adding Content-Length when the body length
    /// is knowable and the header is not already present.
    pub fn build(mut self) -> Response {
        if !self.response.has_header("Content-Length") {
            if let Some(len) = self.response.body.known_len() {
                self.response.add_header("Content-Length", len.to_string());
            }
        }

        self.response
    }
}

impl Response {
    /// A 200 text/html page.
    pub fn html(page: impl Into<String>) -> Self {
        ResponseBuilder::new(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(Body::Text(page.into()))
            .build()
    }
}

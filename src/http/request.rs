use std::collections::HashMap;

/// HTTP request methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
}

impl Method {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            _ => None,
        }
    }
}

/// A parsed HTTP request.
///
/// Carries only what the demo needs: the request line pieces and the header
/// block. The protocol string (e.g. `HTTP/1.1`) is what the response emitter
/// uses to format the status line.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Request target as sent, query string included (e.g. `/ImagickPixel/getColor?color=red`)
    pub target: String,
    /// Protocol version string, e.g. "HTTP/1.1"
    pub protocol: String,
    pub headers: HashMap<String, String>,
}

impl Request {
    /// The path component of the target, query string stripped.
    pub fn path(&self) -> &str {
        self.target
            .split_once('?')
            .map(|(path, _)| path)
            .unwrap_or(&self.target)
    }

    /// The raw query string, if the target has one.
    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, query)| query)
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_and_query_split() {
        let req = Request {
            method: Method::GET,
            target: "/ImagickPixel/setColor?color=red".to_string(),
            protocol: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
        };

        assert_eq!(req.path(), "/ImagickPixel/setColor");
        assert_eq!(req.query(), Some("color=red"));
    }

    #[test]
    fn path_without_query() {
        let req = Request {
            method: Method::GET,
            target: "/".to_string(),
            protocol: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
        };

        assert_eq!(req.path(), "/");
        assert_eq!(req.query(), None);
    }
}

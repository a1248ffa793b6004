/// A parsed HTTP request line.
///
/// Only the request line is ever read from the client, so a `Request` is
/// exactly its three tokens. Method and version are kept verbatim and are
/// not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token (e.g. "GET")
    pub method: String,
    /// The request path/URL (e.g. "/index.html")
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
}

impl Request {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            version: version.into(),
        }
    }
}

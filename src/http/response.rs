use std::path::PathBuf;

/// HTTP status codes the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use warden::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use warden::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// The single response produced for a connection.
///
/// Static bodies are not loaded into memory: `source` is streamed to the
/// client by the writer, which checks that exactly `length` bytes went out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Path is not on the allow-list.
    NotFound,
    /// Raw file contents, copied verbatim.
    StaticOk {
        content_type: String,
        length: u64,
        source: PathBuf,
    },
    /// Rendered template bytes.
    TemplatedOk { content_type: String, body: Vec<u8> },
}

impl Response {
    pub fn status(&self) -> StatusCode {
        match self {
            Response::NotFound => StatusCode::NotFound,
            Response::StaticOk { .. } | Response::TemplatedOk { .. } => StatusCode::Ok,
        }
    }

    /// Content type header value, if the response carries a body.
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Response::NotFound => None,
            Response::StaticOk { content_type, .. } | Response::TemplatedOk { content_type, .. } => {
                Some(content_type.as_str())
            }
        }
    }

    /// Value sent as `Content-Length`.
    pub fn content_length(&self) -> u64 {
        match self {
            Response::NotFound => 0,
            Response::StaticOk { length, .. } => *length,
            Response::TemplatedOk { body, .. } => body.len() as u64,
        }
    }
}

use crate::http::request::Request;

/// Longest request line accepted before the connection is dropped.
pub const MAX_REQUEST_LINE: usize = 8 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("request line has {0} tokens, expected 3")]
    WrongTokenCount(usize),
    #[error("request line is not valid UTF-8")]
    InvalidEncoding,
    #[error("request line exceeds {} bytes", MAX_REQUEST_LINE)]
    TooLong,
}

/// Splits a request line into method, path and version.
///
/// Tokens are separated by single spaces; trailing empty tokens are ignored,
/// so `"GET / HTTP/1.1 "` parses while `"GET  / HTTP/1.1"` does not.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut parts: Vec<&str> = line.split(' ').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    match parts.as_slice() {
        [method, path, version] => Ok(Request::new(*method, *path, *version)),
        other => Err(ParseError::WrongTokenCount(other.len())),
    }
}

/// Extracts the first line from `buf`, without its terminator.
///
/// A line ends at `\n`, `\r` or `\r\n`; anything after the terminator is
/// ignored. Returns `Ok(None)` while no terminator has arrived yet. Pass
/// `eof = true` once the peer has stopped sending; whatever was buffered is
/// then the line.
pub fn take_request_line(buf: &[u8], eof: bool) -> Result<Option<&str>, ParseError> {
    let line = match find_line_end(buf) {
        Some(end) => &buf[..end],
        None if eof => buf,
        None if buf.len() > MAX_REQUEST_LINE => return Err(ParseError::TooLong),
        None => return Ok(None),
    };

    if line.len() > MAX_REQUEST_LINE {
        return Err(ParseError::TooLong);
    }

    std::str::from_utf8(line)
        .map(Some)
        .map_err(|_| ParseError::InvalidEncoding)
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n' || b == b'\r')
}

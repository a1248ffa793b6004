use warden::http::parser::{MAX_REQUEST_LINE, ParseError, parse_request_line, take_request_line};

#[test]
fn test_parse_simple_get_request() {
    let parsed = parse_request_line("GET /index.html HTTP/1.1").unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/index.html");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_does_not_validate_method_or_version() {
    let parsed = parse_request_line("BREW /pot COFFEE/1.0").unwrap();

    assert_eq!(parsed.method, "BREW");
    assert_eq!(parsed.path, "/pot");
    assert_eq!(parsed.version, "COFFEE/1.0");
}

#[test]
fn test_parse_keeps_query_string_in_path() {
    let parsed = parse_request_line("GET /search?q=rust HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_empty_line() {
    let result = parse_request_line("");

    assert!(matches!(result, Err(ParseError::WrongTokenCount(0))));
}

#[test]
fn test_parse_wrong_token_counts() {
    let cases = vec![
        ("GET", 1),
        ("GET /index.html", 2),
        ("GET /index.html HTTP/1.1 extra", 4),
        ("GET /a b HTTP/1.1 x", 5),
    ];

    for (line, count) in cases {
        let result = parse_request_line(line);
        assert_eq!(result, Err(ParseError::WrongTokenCount(count)), "line {line:?}");
    }
}

#[test]
fn test_parse_double_space_is_malformed() {
    let result = parse_request_line("GET  /index.html HTTP/1.1");

    assert!(matches!(result, Err(ParseError::WrongTokenCount(4))));
}

#[test]
fn test_parse_ignores_trailing_spaces() {
    let parsed = parse_request_line("GET /index.html HTTP/1.1  ").unwrap();

    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_tab_is_not_a_separator() {
    let result = parse_request_line("GET\t/index.html\tHTTP/1.1");

    assert!(matches!(result, Err(ParseError::WrongTokenCount(1))));
}

#[test]
fn test_take_line_waits_for_newline() {
    let result = take_request_line(b"GET /index.html HT", false).unwrap();

    assert_eq!(result, None);
}

#[test]
fn test_take_line_accepts_bare_lf() {
    let result = take_request_line(b"GET / HTTP/1.1\nHost: x\n\n", false).unwrap();

    assert_eq!(result, Some("GET / HTTP/1.1"));
}

#[test]
fn test_take_line_accepts_bare_cr() {
    let result = take_request_line(b"GET / HTTP/1.1\rHost: x\r", false).unwrap();

    assert_eq!(result, Some("GET / HTTP/1.1"));
}

#[test]
fn test_take_line_ignores_headers_after_request_line() {
    let buf = b"GET /a HTTP/1.1\r\nHost: example.com\r\nBroken header line\r\n";
    let result = take_request_line(buf, false).unwrap();

    assert_eq!(result, Some("GET /a HTTP/1.1"));
}

#[test]
fn test_take_line_at_eof_uses_buffered_bytes() {
    let result = take_request_line(b"GET / HTTP/1.1", true).unwrap();

    assert_eq!(result, Some("GET / HTTP/1.1"));
}

#[test]
fn test_take_line_at_eof_with_empty_buffer() {
    let result = take_request_line(b"", true).unwrap();

    assert_eq!(result, Some(""));
}

#[test]
fn test_take_line_rejects_invalid_utf8() {
    let result = take_request_line(b"GET /\xff HTTP/1.1\r\n", false);

    assert!(matches!(result, Err(ParseError::InvalidEncoding)));
}

#[test]
fn test_take_line_rejects_oversized_line() {
    let buf = vec![b'a'; MAX_REQUEST_LINE + 1];
    let result = take_request_line(&buf, false);

    assert!(matches!(result, Err(ParseError::TooLong)));
}

use lantern::http::parser::{ParseError, parse_request};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /index.html HTTP/1.0\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/index.html");
    assert_eq!(parsed.version, "HTTP/1.0");
}

#[test]
fn test_parse_head_request() {
    let req = b"HEAD /index.html HTTP/1.0\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, "HEAD");
    assert_eq!(parsed.target, "/index.html");
}

#[test]
fn test_headers_are_consumed_but_not_retained() {
    let req = b"GET /path HTTP/1.0\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    // Only the request line survives parsing.
    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/path");
    assert_eq!(parsed.version, "HTTP/1.0");
}

#[test]
fn test_parse_target_with_query_string_is_verbatim() {
    let req = b"GET /search?q=rust HTTP/1.0\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.target, "/search?q=rust");
}

#[test]
fn test_parse_absolute_form_target_is_verbatim() {
    let req = b"GET http://example.com/index.html HTTP/1.0\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    // The parser passes absolute-form through; the resolver strips it.
    assert_eq!(parsed.target, "http://example.com/index.html");
}

#[test]
fn test_parse_percent_escapes_not_decoded() {
    let req = b"GET /a%2e%2e/b HTTP/1.0\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.target, "/a%2e%2e/b");
}

#[test]
fn test_parse_missing_terminator() {
    let req = b"GET / HTTP/1.0\r\nHost: example.com\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::MissingTerminator)));
}

#[test]
fn test_parse_method_only_request_line() {
    let req = b"GET\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
}

#[test]
fn test_parse_two_token_request_line() {
    let req = b"GET /index.html\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
}

#[test]
fn test_parse_four_token_request_line() {
    let req = b"GET /index.html HTTP/1.0 extra\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
}

#[test]
fn test_parse_empty_request_line() {
    let req = b"\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
}

#[test]
fn test_parse_method_is_verbatim_not_classified() {
    // Unknown methods parse fine; the handler decides 501, not the parser.
    let req = b"POST /x HTTP/1.0\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, "POST");
}

#[test]
fn test_parse_binary_header_bytes_are_tolerated() {
    // Header lines may carry non-UTF-8 bytes; only the request line is decoded.
    let mut req = b"GET / HTTP/1.0\r\nX-Junk: ".to_vec();
    req.extend_from_slice(&[0xff, 0xfe, 0x00]);
    req.extend_from_slice(b"\r\n\r\n");

    let parsed = parse_request(&req).unwrap();
    assert_eq!(parsed.target, "/");
}

#[test]
fn test_parse_non_utf8_request_line() {
    let req = b"G\xffT / HTTP/1.0\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidEncoding)));
}

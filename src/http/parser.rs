use crate::http::request::Request;
use thiserror::Error;

/// Ways a buffered request head can fail to yield a `Request`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer does not contain the blank-line terminator.
    #[error("request head is missing the blank-line terminator")]
    MissingTerminator,

    /// The request line is not valid UTF-8.
    #[error("request line is not valid UTF-8")]
    InvalidEncoding,

    /// The request line does not consist of exactly three tokens.
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),
}

/// Parses the request line out of a buffered request head.
///
/// The buffer must contain everything from the start of the stream through
/// the `\r\n\r\n` terminator (see `reader::read_request_head`). Only the
/// first line is interpreted; header lines were consumed so the terminator
/// check is meaningful, but their content is deliberately dropped.
///
/// The request line must split into exactly three whitespace-separated
/// tokens: method, target, version. Fewer or extra tokens are rejected.
/// The target is passed through verbatim, with no percent-decoding; the
/// resolver is responsible for interpreting it.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let head_end = find_head_end(buf).ok_or(ParseError::MissingTerminator)?;
    let head = &buf[..head_end];

    // Only the request line is decoded; later header lines may legally
    // carry bytes that are not UTF-8.
    let line_end = head
        .windows(2)
        .position(|w| w == b"\r\n")
        .unwrap_or(head.len());
    let request_line = std::str::from_utf8(&head[..line_end])
        .map_err(|_| ParseError::InvalidEncoding)?;

    let tokens: Vec<&str> = request_line.split_whitespace().collect();
    let [method, target, version] = tokens.as_slice() else {
        return Err(ParseError::MalformedRequestLine(request_line.to_string()));
    };

    Ok(Request {
        method: method.to_string(),
        target: target.to_string(),
        version: version.to_string(),
    })
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

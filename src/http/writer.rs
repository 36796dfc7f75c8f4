use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.0";

/// Write-side failures. The peer resetting or vanishing mid-response is
/// an ordinary per-connection event, never fatal to the server.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("transmission failed: {0}")]
    Transmission(#[from] std::io::Error),

    #[error("connection closed while writing")]
    ConnectionClosed,
}

fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in insertion order
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Head/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Serializes a response and writes it to a connection.
///
/// The head (status line, headers, blank line) is always written in full
/// before any body byte. Content-Length is taken from the headers as-is:
/// the handler computed it from filesystem metadata before the body was
/// even opened, so the writer never streams-and-counts.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        let mut buffer = serialize_head(response);
        if let Some(body) = &response.body {
            buffer.extend_from_slice(body);
        }
        Self { buffer, written: 0 }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> Result<(), WriteError>
    where
        W: AsyncWriteExt + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(WriteError::ConnectionClosed);
            }

            self.written += n;
        }

        stream.flush().await?;

        Ok(())
    }
}

use bytes::BytesMut;
use thiserror::Error;
use tokio::io::AsyncReadExt;

/// Size of the per-read scratch buffer.
const CHUNK_SIZE: usize = 1024;

/// Ways reading a request head off the connection can fail.
///
/// Neither variant leaves the connection in a state where a response can
/// be attributed to a request, so the handler closes without writing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadError {
    /// The peer closed the stream before the terminator appeared.
    #[error("connection closed before request head was complete")]
    ConnectionClosed,

    /// The accumulated head exceeded the configured maximum.
    #[error("request head exceeded {limit} bytes")]
    TooLarge { limit: usize },
}

/// Reads from `stream` until the accumulated buffer contains the
/// `\r\n\r\n` head terminator, and returns everything read so far.
///
/// The buffer is an explicit length-tracked byte sequence; request bytes
/// are never assumed to be text. Growth is bounded by `max`: once the
/// accumulated length passes it without a terminator, the read is
/// abandoned with `ReadError::TooLarge` rather than buffering an
/// arbitrarily large head.
pub async fn read_request_head<R>(stream: &mut R, max: usize) -> Result<BytesMut, ReadError>
where
    R: AsyncReadExt + Unpin,
{
    let mut buf = BytesMut::with_capacity(CHUNK_SIZE);
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        // The terminator may straddle two reads, so scan the whole
        // accumulated buffer each time.
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            return Ok(buf);
        }

        if buf.len() > max {
            return Err(ReadError::TooLarge { limit: max });
        }

        let n = stream
            .read(&mut chunk)
            .await
            .map_err(|_| ReadError::ConnectionClosed)?;

        if n == 0 {
            return Err(ReadError::ConnectionClosed);
        }

        buf.extend_from_slice(&chunk[..n]);
    }
}

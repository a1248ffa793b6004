use std::time::Duration;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::http::error::ConnectionError;
use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";
const CHUNK_SIZE: usize = 8 * 1024;

/// Status line and headers, terminated by the blank line.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    let status = resp.status();
    let mut head = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );

    if let Some(content_type) = resp.content_type() {
        head.push_str(&format!("Content-Type: {content_type}\r\n"));
    }
    head.push_str(&format!("Content-Length: {}\r\n", resp.content_length()));
    head.push_str("Connection: close\r\n");
    head.push_str("\r\n");

    head.into_bytes()
}

pub struct ResponseWriter {
    response: Response,
    head: Vec<u8>,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self {
            head: serialize_head(&response),
            response,
        }
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Writes the whole response and returns the number of body bytes sent.
    ///
    /// `idle` bounds each chunk written, not the response as a whole: a client
    /// that keeps reading is never cut off however long the body takes.
    /// A static body is streamed from disk; if the file no longer holds
    /// exactly `length` bytes the write fails with `LengthMismatch`.
    pub async fn write_to_stream<W>(&self, stream: &mut W, idle: Duration) -> Result<u64, ConnectionError>
    where
        W: AsyncWrite + Unpin,
    {
        let written = match &self.response {
            Response::NotFound => {
                write_chunked(stream, &self.head, idle).await?;
                0
            }

            Response::TemplatedOk { body, .. } => {
                write_chunked(stream, &self.head, idle).await?;
                write_chunked(stream, body, idle).await?;
                body.len() as u64
            }

            Response::StaticOk { length, source, .. } => {
                // Open before sending the head so a vanished file yields no bytes.
                let mut file = File::open(source).await.map_err(|source_err| {
                    ConnectionError::ResourceUnavailable {
                        path: source.display().to_string(),
                        location: source.clone(),
                        source: source_err,
                    }
                })?;

                write_chunked(stream, &self.head, idle).await?;

                let mut chunk = vec![0u8; CHUNK_SIZE];
                let mut copied = 0u64;
                while copied < *length {
                    let want = (*length - copied).min(CHUNK_SIZE as u64) as usize;
                    let n = file.read(&mut chunk[..want]).await?;
                    if n == 0 {
                        break;
                    }
                    write_chunked(stream, &chunk[..n], idle).await?;
                    copied += n as u64;
                }

                if copied != *length {
                    return Err(ConnectionError::LengthMismatch {
                        expected: *length,
                        written: copied,
                    });
                }
                copied
            }
        };

        timeout(idle, stream.flush())
            .await
            .map_err(|_| ConnectionError::Timeout("writing response"))??;
        Ok(written)
    }
}

/// Writes `bytes` in chunks, each of which must complete within `idle`.
async fn write_chunked<W>(stream: &mut W, bytes: &[u8], idle: Duration) -> Result<(), ConnectionError>
where
    W: AsyncWrite + Unpin,
{
    for chunk in bytes.chunks(CHUNK_SIZE) {
        timeout(idle, stream.write_all(chunk))
            .await
            .map_err(|_| ConnectionError::Timeout("writing response"))??;
    }
    Ok(())
}

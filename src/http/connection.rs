use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info};

use crate::http::error::ConnectionError;
use crate::http::parser::{parse_request_line, take_request_line};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::site::{Authorization, Resource, Site, template};

pub struct Connection<S> {
    stream: S,
    site: Arc<Site>,
    io_timeout: Duration,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Authorizing(Request),
    Resolving(Request),
    Writing(ResponseWriter, Request),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>, io_timeout: Duration) -> Self {
        Self {
            stream,
            site,
            io_timeout,
            buffer: BytesMut::with_capacity(1024),
            state: ConnectionState::Reading,
        }
    }

    /// Handles the single request/response exchange and closes the stream.
    ///
    /// The stream is shut down on every exit path, including errors. A
    /// malformed request line returns `ConnectionError::Malformed` without a
    /// single byte having been written.
    pub async fn run(&mut self) -> Result<(), ConnectionError> {
        let result = self.drive().await;
        self.state = ConnectionState::Closed;
        // The peer may already be gone; nothing left to report.
        let _ = self.stream.shutdown().await;
        result
    }

    async fn drive(&mut self) -> Result<(), ConnectionError> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let request = self.read_request().await?;
                    debug!(method = %request.method, path = %request.path, "Request line parsed");
                    self.state = ConnectionState::Authorizing(request);
                }

                ConnectionState::Authorizing(request) => {
                    self.state = match self.site.allow_list.authorize(&request) {
                        Authorization::Authorized => ConnectionState::Resolving(request),
                        Authorization::Forbidden => {
                            ConnectionState::Writing(ResponseWriter::new(Response::NotFound), request)
                        }
                    };
                }

                ConnectionState::Resolving(request) => {
                    let response = self.resolve(&request).await?;
                    self.state = ConnectionState::Writing(ResponseWriter::new(response), request);
                }

                ConnectionState::Writing(writer, request) => {
                    let written = writer.write_to_stream(&mut self.stream, self.io_timeout).await?;

                    info!(
                        path = %request.path,
                        status = writer.response().status().as_u16(),
                        bytes = written,
                        "Response sent"
                    );
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => return Ok(()),
            }
        }
    }

    /// Reads up to the end of the request line. Headers that follow are never looked at.
    ///
    /// The whole line must arrive within `io_timeout`, however it is split up.
    pub async fn read_request(&mut self) -> Result<Request, ConnectionError> {
        let deadline = Instant::now() + self.io_timeout;
        let mut eof = false;

        loop {
            if let Some(line) = take_request_line(&self.buffer, eof)? {
                return Ok(parse_request_line(line)?);
            }

            let n = timeout_at(deadline, self.stream.read_buf(&mut self.buffer))
                .await
                .map_err(|_| ConnectionError::Timeout("reading request line"))??;

            if n == 0 {
                eof = true;
            }
        }
    }

    async fn resolve(&self, request: &Request) -> Result<Response, ConnectionError> {
        let resource = self.site.resolver.resolve(&request.path);

        if self.site.is_template(&request.path) {
            let text = resource
                .read_text()
                .await
                .map_err(|e| unavailable(request, &resource, e))?;
            let body = template::render(&text, &template::timestamp()).into_bytes();

            return Ok(Response::TemplatedOk {
                content_type: resource.content_type,
                body,
            });
        }

        let length = resource
            .len()
            .await
            .map_err(|e| unavailable(request, &resource, e))?;

        Ok(Response::StaticOk {
            content_type: resource.content_type,
            length,
            source: resource.location,
        })
    }
}

fn unavailable(request: &Request, resource: &Resource, source: std::io::Error) -> ConnectionError {
    ConnectionError::ResourceUnavailable {
        path: request.path.clone(),
        location: resource.location.clone(),
        source,
    }
}

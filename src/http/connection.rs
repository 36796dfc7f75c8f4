use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, warn};

use crate::config::FilesConfig;
use crate::files::error_pages::ErrorPages;
use crate::files::mime;
use crate::files::resolver::Resolver;
use crate::http::parser::parse_request;
use crate::http::reader::read_request_head;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;

/// Serves exactly one HTTP/1.0 request on one connection.
///
/// Generic over the stream so the full request-response cycle can be
/// exercised against an in-memory duplex in tests.
pub struct Connection<S> {
    stream: S,
    files: FilesConfig,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, files: FilesConfig) -> Self {
        Self {
            stream,
            files,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection state machine to completion.
    ///
    /// Read and parse failures close the connection without writing a
    /// byte: the request line never decoded, so no status line can be
    /// attributed to it. Failures after that point produce a best-effort
    /// error response. Nothing here is ever fatal to the process.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let head =
                        match read_request_head(&mut self.stream, self.files.max_request_size)
                            .await
                        {
                            Ok(head) => head,
                            Err(e) => {
                                debug!("closing without response: {e}");
                                self.state = ConnectionState::Closed;
                                continue;
                            }
                        };

                    match parse_request(&head) {
                        Ok(req) => {
                            debug!("request line: {} {} {}", req.method, req.target, req.version);
                            self.state = ConnectionState::Processing(req);
                        }
                        Err(e) => {
                            debug!("closing without response: {e}");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let req = req.clone();
                    let response = self.respond(&req).await;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    // HTTP/1.0 has no resumption: a transmission failure
                    // ends the connection, and nothing more.
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Decides the status code and assembles the response.
    async fn respond(&self, req: &Request) -> Response {
        let Some(method) = req.method() else {
            // Not GET/HEAD: no resolution, and no body either, since a
            // body accompanies only GET requests.
            return self
                .error_response(StatusCode::NotImplemented, false)
                .await;
        };

        let send_body = method == Method::Get;

        let resolver = match Resolver::new(&self.files.document_root).await {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    "document root {:?} unusable: {e}",
                    self.files.document_root
                );
                return self.error_response(StatusCode::NotFound, send_body).await;
            }
        };

        let resource = match resolver.resolve(&req.target).await {
            Ok(res) if res.exists && res.readable => res,
            Ok(res) => {
                debug!(
                    "target {:?} not served (exists: {}, readable: {})",
                    req.target, res.exists, res.readable
                );
                return self.error_response(StatusCode::NotFound, send_body).await;
            }
            Err(e) => {
                // Forbidden and invalid targets collapse into 404 so the
                // response does not reveal what lies outside the root.
                debug!("target {:?} rejected: {e}", req.target);
                return self.error_response(StatusCode::NotFound, send_body).await;
            }
        };

        // Content-Length comes from metadata, known before the body is
        // opened; the HEAD response carries it without the body.
        let mut builder = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", mime::content_type(&resource.path))
            .header("Content-Length", resource.len.to_string());

        if send_body {
            match tokio::fs::read(&resource.path).await {
                Ok(bytes) => builder = builder.body(bytes),
                Err(e) => {
                    warn!("reading {:?} failed after resolution: {e}", resource.path);
                    return self.error_response(StatusCode::NotFound, send_body).await;
                }
            }
        }

        builder.build()
    }

    /// Builds an error response. The headers always describe the error
    /// page; the page bytes are attached only for GET requests.
    async fn error_response(&self, status: StatusCode, attach_body: bool) -> Response {
        let page = ErrorPages::new(&self.files.error_dir).body_for(status).await;

        let mut builder = ResponseBuilder::new(status)
            .header("Content-Type", "text/html")
            .header("Content-Length", page.len().to_string());

        if attach_body {
            builder = builder.body(page);
        }

        builder.build()
    }
}

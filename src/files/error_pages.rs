//! Error-page bodies for non-200 responses.

use std::path::{Path, PathBuf};

use crate::http::response::StatusCode;

/// Loads per-status HTML error pages, falling back to a synthesized
/// body when no template exists on disk.
#[derive(Debug, Clone)]
pub struct ErrorPages {
    dir: PathBuf,
}

impl ErrorPages {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the HTML body for an error status.
    ///
    /// Tries `<error-dir>/<code>.html` first; a missing or unreadable
    /// template is not an error, just a fallback to the synthesized page.
    pub async fn body_for(&self, status: StatusCode) -> Vec<u8> {
        let template = self.template_path(status);
        match tokio::fs::read(&template).await {
            Ok(bytes) => bytes,
            Err(_) => synthesize(status),
        }
    }

    fn template_path(&self, status: StatusCode) -> PathBuf {
        self.dir.join(format!("{}.html", status.as_u16()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn synthesize(status: StatusCode) -> Vec<u8> {
    format!(
        "<html><body><h1>{} {}</h1></body></html>",
        status.as_u16(),
        status.reason_phrase()
    )
    .into_bytes()
}

//! Resource resolution against the document root.
//!
//! The resolver is the sandbox boundary: every request target, however
//! adversarial, either maps to a canonical path under the document root
//! or is rejected. The check is done on the canonicalized path, never by
//! scanning the target string for `..` — encoded traversal and symlink
//! escapes defeat string-level checks.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Resolver-level failures. Both map to a client-facing 404 so the
/// response does not leak filesystem layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Absolute-form target with no path after the authority, or an
    /// absolute-form target that is not a parseable URL.
    #[error("request target has no usable path")]
    InvalidTarget,

    /// The target canonicalizes to a path outside the document root.
    #[error("resolved path escapes the document root")]
    Forbidden,
}

/// Classification of one request target against the filesystem.
///
/// `path` is guaranteed to lie within the document root, even when the
/// file does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub path: PathBuf,
    pub exists: bool,
    pub readable: bool,
    /// Byte length from metadata; 0 unless `readable`.
    pub len: u64,
}

/// Maps request targets to sandboxed filesystem paths.
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    /// Creates a resolver for a document root. The root itself is
    /// canonicalized once here; a root that does not exist is a
    /// configuration error surfaced to the caller.
    pub async fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = tokio::fs::canonicalize(root.as_ref()).await?;
        Ok(Self { root })
    }

    /// The canonical document root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a raw request target to a classified resource.
    ///
    /// Absolute-form targets (`scheme://host/path`) are reduced to their
    /// path; origin-form targets are used as-is (with a leading `/`
    /// supplied if absent). The joined path is canonicalized and must
    /// remain under the document root.
    pub async fn resolve(&self, target: &str) -> Result<ResolvedResource, ResolveError> {
        let origin_form = to_origin_form(target)?;
        let joined = self.root.join(origin_form.trim_start_matches('/'));

        match tokio::fs::canonicalize(&joined).await {
            Ok(canonical) => {
                if !canonical.starts_with(&self.root) {
                    return Err(ResolveError::Forbidden);
                }
                self.classify(canonical).await
            }
            Err(e) => {
                // The path cannot be canonicalized, so the sandbox check
                // falls back to lexical normalization of the join.
                let lexical = normalize_lexically(&joined);
                if !lexical.starts_with(&self.root) {
                    return Err(ResolveError::Forbidden);
                }
                let exists = e.kind() == ErrorKind::PermissionDenied;
                Ok(ResolvedResource {
                    path: lexical,
                    exists,
                    readable: false,
                    len: 0,
                })
            }
        }
    }

    async fn classify(&self, canonical: PathBuf) -> Result<ResolvedResource, ResolveError> {
        match tokio::fs::metadata(&canonical).await {
            Ok(meta) if meta.is_file() => {
                // Presence is not readability: a mode-000 file stats fine
                // but cannot be opened.
                let readable = tokio::fs::File::open(&canonical).await.is_ok();
                let len = if readable { meta.len() } else { 0 };
                Ok(ResolvedResource {
                    path: canonical,
                    exists: true,
                    readable,
                    len,
                })
            }
            // Directories and other non-file entries are never served.
            Ok(_) => Ok(ResolvedResource {
                path: canonical,
                exists: true,
                readable: false,
                len: 0,
            }),
            Err(_) => Ok(ResolvedResource {
                path: canonical,
                exists: false,
                readable: false,
                len: 0,
            }),
        }
    }
}

/// Reduces a request target to origin-form.
///
/// For absolute-form, everything through the first `/` after the
/// authority is stripped; an absolute-form target with no such `/` (or
/// one that is not a valid URL at all) is invalid. The result is passed
/// through verbatim otherwise; no percent-decoding happens here.
fn to_origin_form(target: &str) -> Result<String, ResolveError> {
    if target.contains("://") {
        let url = Url::parse(target).map_err(|_| ResolveError::InvalidTarget)?;
        let after_scheme = &target[url.scheme().len() + 3..];
        let slash = after_scheme.find('/').ok_or(ResolveError::InvalidTarget)?;
        return Ok(after_scheme[slash..].to_string());
    }

    if target.starts_with('/') {
        Ok(target.to_string())
    } else {
        Ok(format!("/{target}"))
    }
}

/// Resolves `.` and `..` components without touching the filesystem.
/// Used only for paths that cannot be canonicalized (nonexistent or
/// unreadable), to keep the sandbox prefix check meaningful for them.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

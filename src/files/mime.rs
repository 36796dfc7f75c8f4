//! MIME type detection based on file extensions.

use std::path::Path;

/// Fallback for unknown or missing extensions.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension to MIME type table. Process-wide, read-only; lookups are
/// case-sensitive, so `INDEX.HTML` is served as an opaque octet stream.
const MIME_TABLE: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("htm", "text/html"),
    ("txt", "text/plain"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
];

/// Infers the Content-Type for a resource path.
///
/// Looks at the substring after the last `.` of the final path segment.
/// Total: paths with no extension or an unrecognized one yield
/// `application/octet-stream`.
///
/// # Example
///
/// ```
/// # use lantern::files::mime::content_type;
/// # use std::path::Path;
/// assert_eq!(content_type(Path::new("/srv/www/index.html")), "text/html");
/// assert_eq!(content_type(Path::new("/srv/www/archive.tar.gz")), "application/octet-stream");
/// ```
pub fn content_type(path: &Path) -> &'static str {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };

    let Some((_, extension)) = name.rsplit_once('.') else {
        return DEFAULT_CONTENT_TYPE;
    };

    MIME_TABLE
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(content_type(Path::new("a.htm")), "text/html");
        assert_eq!(content_type(Path::new("notes.txt")), "text/plain");
        assert_eq!(content_type(Path::new("site.css")), "text/css");
        assert_eq!(content_type(Path::new("app.js")), "application/javascript");
        assert_eq!(content_type(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(content_type(Path::new("icon.png")), "image/png");
    }

    #[test]
    fn unknown_or_missing_extension_falls_back() {
        assert_eq!(content_type(Path::new("README")), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type(Path::new("data.xyz")), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(content_type(Path::new("INDEX.HTML")), DEFAULT_CONTENT_TYPE);
    }
}

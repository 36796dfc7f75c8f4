//! Static file serving
//!
//! This module maps request targets onto the filesystem, including the
//! sandbox enforcement against the document root, content-type
//! inference, and error-page bodies.

pub mod error_pages;
pub mod mime;
pub mod resolver;

pub use error_pages::ErrorPages;
pub use resolver::{ResolveError, ResolvedResource, Resolver};

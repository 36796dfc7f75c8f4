//! Lantern - Minimal HTTP/1.0 Origin Server
//!
//! Core library for serving files from a sandboxed document root.

pub mod config;
pub mod files;
pub mod http;
pub mod server;

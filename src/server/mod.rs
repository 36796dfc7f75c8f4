//! Listening-socket lifecycle and per-connection dispatch.

pub mod listener;

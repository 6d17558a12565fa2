//! Input sources for the gesture bridge.
//!
//! Current input sources:
//! - `http`: trigger listener decoding `action=<gesture>` from request targets

pub mod http;

pub use http::{GestureSink, HttpListener};

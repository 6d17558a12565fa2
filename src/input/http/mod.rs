//! HTTP trigger input.
//!
//! Every request is acknowledged with an empty `200 OK`. When its target
//! contains `action=<gesture>`, the gesture is forwarded to a [`GestureSink`].

mod decode;
mod server;

pub use decode::decode_gesture;
pub use server::{GestureSink, HttpListener, router};

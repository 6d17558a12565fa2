//! axum-based trigger listener.

use super::decode::decode_gesture;
use crate::error::{BridgeError, Result};
use crate::gesture::Gesture;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use log::{debug, error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Receiver of decoded gestures.
pub trait GestureSink: Send + Sync + 'static {
    fn trigger(&self, gesture: Gesture);
}

/// Router answering every method and path with an empty `200 OK`.
pub fn router(sink: Arc<dyn GestureSink>) -> Router {
    Router::new().fallback(handle_request).with_state(sink)
}

async fn handle_request(State(sink): State<Arc<dyn GestureSink>>, uri: Uri) -> StatusCode {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    match decode_gesture(target) {
        Some(gesture) => {
            info!("[HTTP] Gesture was triggered: {}", gesture);
            sink.trigger(gesture);
        }
        None => debug!("[HTTP] No gesture in request {}", target),
    }

    StatusCode::OK
}

/// Bound TCP listener for the trigger endpoint.
///
/// Binding and serving are split so a bind failure surfaces before any task
/// is spawned.
pub struct HttpListener {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl HttpListener {
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| BridgeError::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;
        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// Actual bound address (resolves port `0`).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until `shutdown` is cancelled.
    ///
    /// The socket is closed when the returned task finishes. The token is
    /// cancelled on exit as well, so watchers notice a server that stopped
    /// on its own.
    pub fn serve(self, sink: Arc<dyn GestureSink>, shutdown: CancellationToken) -> JoinHandle<()> {
        let addr = self.local_addr;
        tokio::spawn(async move {
            let signal = shutdown.clone();
            if let Err(e) = axum::serve(self.listener, router(sink))
                .with_graceful_shutdown(async move { signal.cancelled().await })
                .await
            {
                error!("[HTTP] Listener on {} failed: {}", addr, e);
            }
            shutdown.cancel();
            info!("[HTTP] Listener on {} closed", addr);
        })
    }
}

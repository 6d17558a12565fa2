//! Gesture motion sensor group.
//!
//! Owns the tracker, the four sensor capabilities and, once started, the
//! HTTP trigger listener. One instance is built at startup and torn down
//! at shutdown.

use crate::config::Config;
use crate::error::Result;
use crate::gesture::Gesture;
use crate::input::http::{GestureSink, HttpListener, decode_gesture};
use crate::sensors::GestureSensors;
use crate::tracker::{GestureTracker, SensorState, Transition};
use log::info;
use parking_lot::{Mutex, ReentrantMutex};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// State shared between the bridge handle and the listener task.
struct BridgeCore {
    tracker: Mutex<GestureTracker>,
    sensors: GestureSensors,
    /// Serializes trigger-and-apply across threads. Reentrant so a write hook
    /// may call back into the bridge, including another trigger.
    apply: ReentrantMutex<()>,
}

impl BridgeCore {
    /// The tracker lock is released before the sensors are written, so write
    /// hooks can query the bridge.
    fn handle_gesture(&self, gesture: Gesture) -> Vec<Transition> {
        let _apply = self.apply.lock();
        let transitions = self.tracker.lock().trigger(gesture);
        self.sensors.apply(&transitions);
        transitions
    }
}

impl GestureSink for BridgeCore {
    fn trigger(&self, gesture: Gesture) {
        self.handle_gesture(gesture);
    }
}

/// Four mutually-exclusive motion sensors driven by gesture triggers.
#[derive(Clone)]
pub struct GestureMotionBridge {
    config: Config,
    core: Arc<BridgeCore>,
}

impl GestureMotionBridge {
    /// Bridge with default [`MotionSensor`](crate::sensors::MotionSensor)s.
    pub fn new(config: Config) -> Self {
        let tracker = GestureTracker::new();
        let sensors = GestureSensors::motion(&config.name, &tracker.current_state());
        Self::from_parts(config, tracker, sensors)
    }

    /// Bridge writing to host-provided capabilities.
    pub fn with_sensors(config: Config, sensors: GestureSensors) -> Self {
        Self::from_parts(config, GestureTracker::new(), sensors)
    }

    fn from_parts(config: Config, tracker: GestureTracker, sensors: GestureSensors) -> Self {
        Self {
            config,
            core: Arc::new(BridgeCore {
                tracker: Mutex::new(tracker),
                sensors,
                apply: ReentrantMutex::new(()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sensors(&self) -> &GestureSensors {
        &self.core.sensors
    }

    pub fn last_gesture(&self) -> Gesture {
        self.core.tracker.lock().last_gesture()
    }

    pub fn current_state(&self) -> SensorState {
        self.core.tracker.lock().current_state()
    }

    /// Trigger `gesture` and write the resulting transitions to the sensors.
    pub fn trigger(&self, gesture: Gesture) -> Vec<Transition> {
        self.core.handle_gesture(gesture)
    }

    /// Decode a request target and trigger the gesture it names, if any.
    pub fn handle_target(&self, target: &str) -> Vec<Transition> {
        match decode_gesture(target) {
            Some(gesture) => self.trigger(gesture),
            None => Vec::new(),
        }
    }

    /// Bind the trigger listener and start serving.
    ///
    /// A bind failure is returned as [`BridgeError::Bind`](crate::error::BridgeError::Bind)
    /// and is fatal for the caller.
    pub async fn start(self) -> Result<RunningBridge> {
        self.config.validate()?;

        let listener = HttpListener::bind(self.config.listen_addr()).await?;
        let local_addr = listener.local_addr();
        let shutdown = CancellationToken::new();
        let server = listener.serve(self.core.clone(), shutdown.clone());

        info!(
            "Device '{}' listening @ http://localhost:{}",
            self.config.name,
            local_addr.port()
        );

        Ok(RunningBridge {
            bridge: self,
            local_addr,
            shutdown,
            server: Some(server),
        })
    }
}

/// A bridge whose listener is running.
///
/// The listening socket is released exactly once: by [`shutdown`], by a
/// cancelled [`shutdown_token`], or when this handle is dropped.
///
/// [`shutdown`]: RunningBridge::shutdown
/// [`shutdown_token`]: RunningBridge::shutdown_token
pub struct RunningBridge {
    bridge: GestureMotionBridge,
    local_addr: SocketAddr,
    shutdown: CancellationToken,
    server: Option<JoinHandle<()>>,
}

impl RunningBridge {
    pub fn bridge(&self) -> &GestureMotionBridge {
        &self.bridge
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Token a host can cancel from its own shutdown hook. It is also
    /// cancelled when the listener stops on its own.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.shutdown.is_cancelled()
    }

    /// Stop accepting connections and wait until the socket is closed.
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(server) = self.server.take()
            && let Err(e) = server.await
        {
            log::error!("HTTP listener task failed: {}", e);
        }
        info!("Device '{}' stopped", self.bridge.name());
    }
}

impl Drop for RunningBridge {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

use clap::Parser;
use gesture_motion_bridge::config::Config;
use gesture_motion_bridge::error::Result;
use gesture_motion_bridge::sensors::{GestureSensors, MotionSensor};
use gesture_motion_bridge::{GestureMotionBridge, SensorState};
use log::{error, info, warn};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "gesture-motion-bridge")]
#[command(about = "Mirror HTTP gesture triggers onto four motion sensors")]
struct Cli {
    /// JSON config file (defaults to the per-user config location)
    #[arg(long, env = "GESTURE_SENSOR_CONFIG")]
    config: Option<PathBuf>,

    /// Sensor group name
    #[arg(long)]
    name: Option<String>,

    /// Listen address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Listen port
    #[arg(long)]
    port: Option<u16>,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logger();
    info!("Starting Gesture Motion Bridge");

    let cli = Cli::parse();
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("Configuration loaded:");
    info!("  Name: {}", config.name);
    info!("  Listen: {}", config.listen_addr());

    // Stand-in host: log every value pushed to a sensor
    let motion = MotionSensor::for_gestures(&config.name, &SensorState::default());
    for sensor in &motion {
        let name = sensor.name().to_string();
        sensor.set_state_pusher(Arc::new(move |detected| {
            info!("[Sensor] {} motion detected: {}", name, detected);
        }));
    }

    let bridge =
        GestureMotionBridge::with_sensors(config, GestureSensors::from_motion_sensors(&motion));
    let running = match bridge.start().await {
        Ok(running) => running,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Gesture Motion Bridge is running");
    info!("  - Press Ctrl+C to exit");

    let stopped = running.shutdown_token();
    tokio::select! {
        _ = shutdown_signal() => info!("Received shutdown signal"),
        _ = stopped.cancelled() => warn!("HTTP listener stopped unexpectedly"),
    }

    running.shutdown().await;
    info!("Gesture Motion Bridge stopped");
}

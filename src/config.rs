use crate::error::{BridgeError, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Accessory identifier used in plugin-style config files.
pub const ACCESSORY_NAME: &str = "GestureMotionSensor";

/// Runtime configuration for one sensor group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Label of the sensor group, prefixed to every sensor name.
    pub name: String,
    /// Address the HTTP trigger listener binds to.
    pub host: IpAddr,
    /// Port of the HTTP trigger listener. `0` picks an ephemeral port.
    pub port: u16,
}

/// Config file contents. Every field is optional so a file can override a
/// subset of the defaults; unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct FileConfig {
    accessory: Option<String>,
    name: Option<String>,
    host: Option<IpAddr>,
    port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "Gesture Sensor".to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl Config {
    /// Load defaults, then the config file, then environment overrides.
    ///
    /// An explicit `path` must exist. Without one, the per-user default
    /// location is used when a file is present there.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        match path {
            Some(path) => config.apply_file(path)?,
            None => {
                if let Some(default_path) = Self::default_path()
                    && default_path.exists()
                {
                    config.apply_file(&default_path)?;
                }
            }
        }

        config.apply_env();
        Ok(config)
    }

    /// `<config dir>/gesture-motion-bridge/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gesture-motion-bridge").join("config.json"))
    }

    /// Overlay the fields present in a JSON config file.
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|source| BridgeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.apply_json(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(())
    }

    /// Overlay the fields present in a JSON document.
    pub fn apply_json(&mut self, content: &str) -> Result<()> {
        let file: FileConfig = serde_json::from_str(content)?;

        if let Some(accessory) = &file.accessory
            && accessory != ACCESSORY_NAME
        {
            warn!(
                "Config declares accessory '{}', expected '{}'",
                accessory, ACCESSORY_NAME
            );
        }
        if let Some(name) = file.name {
            self.name = name;
        }
        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        Ok(())
    }

    /// Overlay `GESTURE_SENSOR_*` environment variables.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Overlay variables from `lookup`. Values that fail to parse are ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("GESTURE_SENSOR_NAME") {
            self.name = name;
        }
        if let Some(host) = lookup("GESTURE_SENSOR_HOST")
            && let Ok(h) = host.parse()
        {
            self.host = h;
        }
        if let Some(port) = lookup("GESTURE_SENSOR_PORT")
            && let Ok(p) = port.parse()
        {
            self.port = p;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BridgeError::InvalidConfig(
                "sensor group name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

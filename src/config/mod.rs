// config/mod.rs
use crate::error::PanelError;
use config::Config;
use serde::Deserialize;
use std::time::Duration;
use validator::Validate;

const DEFAULT_FILE: &str = "config/panel";

#[derive(Debug, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub device: DeviceSettings,
    #[validate(nested)]
    pub poller: PollerSettings,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DeviceSettings {
    #[validate(url)]
    pub base_url: String,
    #[validate(length(min = 1))]
    pub status_path: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PollerSettings {
    #[validate(range(min = 1))]
    pub interval_ms: u64,
}

impl PollerSettings {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Settings {
    pub fn new() -> Result<Self, PanelError> {
        Self::load(None, None)
    }

    /// Layers defaults, the config file, `PANEL__*` environment variables and
    /// finally an explicit base URL.
    ///
    /// The default file is optional; a file named on the command line is not.
    pub fn load(file: Option<&str>, base_url: Option<&str>) -> Result<Self, PanelError> {
        let settings = Config::builder()
            .set_default("device.base_url", "http://ambilight.local/")?
            .set_default("device.status_path", "status")?
            .set_default("poller.interval_ms", 2500_i64)?
            .add_source(config::File::with_name(file.unwrap_or(DEFAULT_FILE)).required(file.is_some()))
            .add_source(config::Environment::with_prefix("PANEL").separator("__"))
            .set_override_option("device.base_url", base_url)?
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| PanelError::Validation(e.to_string()))?;
        Ok(settings)
    }
}

// error.rs
use crate::models::Mode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Invalid device url: {0}")]
    InvalidUrl(String),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Device answered {status} for {path}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },
    #[error("Malformed device response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Unsupported mode: {0}")]
    UnsupportedMode(Mode),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Validation error: {0}")]
    Validation(String),
}

// commands/mod.rs
use crate::{
    client::DeviceClient,
    error::PanelError,
    models::{Brightness, Mode, RawRgb},
};
use async_trait::async_trait;

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, client: &DeviceClient) -> Result<(), PanelError>;
}

/// A user action that turns into a single request.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetRgb(RawRgb),
    SendColor(String),
    ChangeBrightness(Brightness),
    SetMode(Mode),
}

#[async_trait]
impl CommandHandler for Command {
    async fn execute(&self, client: &DeviceClient) -> Result<(), PanelError> {
        match self {
            Command::SetRgb(color) => client.set_rgb(*color).await,
            Command::SendColor(hex) => client.send_color(hex).await,
            Command::ChangeBrightness(brightness) => client.change_brightness(*brightness).await,
            Command::SetMode(mode) => client.set_mode(*mode).await,
        }
    }
}

// panel.rs
use crate::{
    client::DeviceClient,
    commands::CommandHandler,
    error::PanelError,
    models::{DeviceStatus, Mode, Rgb},
    surface::Surface,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Glue between user actions, the device and the on-screen controls.
pub struct ControlPanel {
    client: DeviceClient,
    surface: Arc<dyn Surface>,
}

impl ControlPanel {
    pub fn new(client: DeviceClient, surface: Arc<dyn Surface>) -> Self {
        Self { client, surface }
    }

    pub fn client(&self) -> &DeviceClient {
        &self.client
    }

    /// Picks a random color, paints the random button with it and sends it.
    pub async fn set_random(&self) -> Result<Rgb, PanelError> {
        let color = {
            let mut rng = rand::thread_rng();
            Rgb::random(&mut rng)
        };
        self.surface.set_random_swatch(&color.css()).await;
        self.client.set_rgb(color).await?;
        Ok(color)
    }

    /// One poll cycle. Failures are logged and leave the controls untouched.
    pub async fn update_status(&self) {
        match self.client.fetch_status().await {
            Ok(status) => self.apply_status(&status).await,
            Err(e) => error!("Error polling: {}", e),
        }
    }

    pub async fn apply_status(&self, status: &DeviceStatus) {
        debug!(?status, "Status update");

        // Never clobber a value the user is in the middle of editing.
        if let Some(brightness) = status.brightness {
            if !self.surface.brightness_focused().await {
                self.surface.set_brightness(brightness).await;
            }
        }

        // In animated modes the picker is left as it was.
        if status.mode == Mode::Static {
            if let Some(hex) = status.color_hex.as_deref() {
                self.surface.set_color_picker(hex).await;
            }
        }
    }

    /// Runs `command` in the background.
    ///
    /// Dropping the returned handle discards the outcome; awaiting it gives
    /// the request's result.
    pub fn dispatch<C>(&self, command: C) -> JoinHandle<Result<(), PanelError>>
    where
        C: CommandHandler + 'static,
    {
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = command.execute(&client).await;
            if let Err(e) = &result {
                debug!("Command failed: {}", e);
            }
            result
        })
    }
}

// handlers.rs

use crate::Action;
use lamp_panel::{
    ControlPanel, DeviceClient,
    config::Settings,
    models::RawRgb,
    spawn_poller,
    surface::MemorySurface,
    transport::HttpTransport,
    utils,
};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

pub async fn run(action: Action, settings: &Settings) -> anyhow::Result<()> {
    let transport = HttpTransport::new(&settings.device.base_url)?;
    let client = DeviceClient::with_status_path(Arc::new(transport), &settings.device.status_path);

    match action {
        Action::Color { hex } => client.send_color(&hex).await?,
        Action::Rgb { r, g, b } => client.set_rgb(RawRgb::new(r, g, b)).await?,
        Action::Random => {
            let panel = ControlPanel::new(client, Arc::new(MemorySurface::new()));
            let color = panel.set_random().await?;
            println!("{}", color.to_hex());
        }
        Action::Brightness { value } => client.change_brightness(value).await?,
        Action::Mode { mode } => client.set_mode(mode).await?,
        Action::Rainbow => client.set_rainbow().await?,
        Action::Ambilight => client.set_ambilight().await?,
        Action::Status => {
            let status = client.fetch_status().await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Action::Config => {
            let config = client.fetch_config().await?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Action::Watch => watch(client, settings).await,
    }

    Ok(())
}

async fn watch(client: DeviceClient, settings: &Settings) {
    let surface = Arc::new(MemorySurface::new());
    let mut events = surface.subscribe();
    let panel = Arc::new(ControlPanel::new(client, surface));
    let poller = spawn_poller(Arc::clone(&panel), settings.poller.period());

    let shutdown = utils::shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => info!("Control updated: {}", event),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Missed control updates"),
                Err(RecvError::Closed) => break,
            },
            _ = &mut shutdown => break,
        }
    }

    poller.abort();
}

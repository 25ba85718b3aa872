// main.rs
mod handlers;

use clap::{Parser, Subcommand};
use lamp_panel::{config::Settings, models::Mode, utils};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Control panel for an ambilight LED controller",
    long_about = "Sends color, brightness and mode commands to the lamp's HTTP interface\n\
                  and mirrors its status into a local control panel."
)]
pub struct Cli {
    /// Device base URL, e.g. http://ambilight.local/
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Config file (defaults to config/panel.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Set a solid color from a hex string such as #ff8000
    Color { hex: String },
    /// Set a solid color from raw components (sent as given)
    Rgb {
        #[arg(allow_hyphen_values = true)]
        r: i64,
        #[arg(allow_hyphen_values = true)]
        g: i64,
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },
    /// Set a random solid color
    Random,
    /// Set brightness
    Brightness {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Switch display mode (static, rainbow, ambilight, off)
    Mode { mode: Mode },
    /// Switch to the rainbow animation
    Rainbow,
    /// Switch to ambilight mode
    Ambilight,
    /// Print the current device status
    Status,
    /// Print the device configuration
    Config,
    /// Keep a local panel in sync with the device until Ctrl-C
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    utils::init_tracing();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref(), cli.url.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    tracing::debug!(base_url = %settings.device.base_url, "Using device");

    handlers::run(cli.command, &settings).await
}

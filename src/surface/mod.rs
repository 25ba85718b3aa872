// surface/mod.rs
mod memory;
pub use memory::{MemorySurface, SurfaceEvent};

use crate::models::Brightness;

/// The controls the panel reads and writes.
///
/// Handles are passed in rather than looked up, so any front end (or a test)
/// can stand behind them.
#[async_trait::async_trait]
pub trait Surface: Send + Sync {
    /// Whether the user is currently dragging or editing the brightness control.
    async fn brightness_focused(&self) -> bool;
    async fn set_brightness(&self, value: Brightness);
    async fn set_color_picker(&self, hex: &str);
    /// Background of the "random color" button.
    async fn set_random_swatch(&self, css: &str);
}

// memory.rs
use crate::models::Brightness;
use async_trait::async_trait;
use std::fmt;
use tokio::sync::{RwLock, broadcast};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Brightness(Brightness),
    ColorPicker(String),
    RandomSwatch(String),
}

impl fmt::Display for SurfaceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceEvent::Brightness(value) => write!(f, "brightness = {value}"),
            SurfaceEvent::ColorPicker(hex) => write!(f, "color = {hex}"),
            SurfaceEvent::RandomSwatch(css) => write!(f, "random button = {css}"),
        }
    }
}

/// Control values held in memory. Publishes an event whenever one changes.
pub struct MemorySurface {
    brightness: RwLock<Option<Brightness>>,
    brightness_focused: RwLock<bool>,
    color_picker: RwLock<Option<String>>,
    random_swatch: RwLock<Option<String>>,
    tx: broadcast::Sender<SurfaceEvent>,
}

impl MemorySurface {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(100);
        Self {
            brightness: RwLock::new(None),
            brightness_focused: RwLock::new(false),
            color_picker: RwLock::new(None),
            random_swatch: RwLock::new(None),
            tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SurfaceEvent> {
        self.tx.subscribe()
    }

    /// Marks the brightness control as being edited (or not).
    pub async fn focus_brightness(&self, focused: bool) {
        *self.brightness_focused.write().await = focused;
    }

    pub async fn brightness(&self) -> Option<Brightness> {
        *self.brightness.read().await
    }

    pub async fn color_picker(&self) -> Option<String> {
        self.color_picker.read().await.clone()
    }

    pub async fn random_swatch(&self) -> Option<String> {
        self.random_swatch.read().await.clone()
    }

    fn publish(&self, event: SurfaceEvent) {
        // No subscribers is fine.
        let _ = self.tx.send(event);
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl super::Surface for MemorySurface {
    async fn brightness_focused(&self) -> bool {
        *self.brightness_focused.read().await
    }

    async fn set_brightness(&self, value: Brightness) {
        let mut current = self.brightness.write().await;
        if *current != Some(value) {
            *current = Some(value);
            self.publish(SurfaceEvent::Brightness(value));
        }
    }

    async fn set_color_picker(&self, hex: &str) {
        let mut current = self.color_picker.write().await;
        if current.as_deref() != Some(hex) {
            *current = Some(hex.to_string());
            self.publish(SurfaceEvent::ColorPicker(hex.to_string()));
        }
    }

    async fn set_random_swatch(&self, css: &str) {
        let mut current = self.random_swatch.write().await;
        if current.as_deref() != Some(css) {
            *current = Some(css.to_string());
            self.publish(SurfaceEvent::RandomSwatch(css.to_string()));
        }
    }
}

// lib.rs
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod panel;
pub mod poller;
pub mod surface;
pub mod transport;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use client::DeviceClient;
pub use error::PanelError;
pub use panel::ControlPanel;
pub use poller::spawn_poller;

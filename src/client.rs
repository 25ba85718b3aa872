// client.rs
use crate::{
    error::PanelError,
    models::{Brightness, DeviceConfig, DeviceStatus, Mode, RawRgb, parse_hex_color},
    transport::Transport,
};
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_STATUS_PATH: &str = "status";

/// Typed commands against the device. Every call issues exactly one GET.
#[derive(Clone)]
pub struct DeviceClient {
    transport: Arc<dyn Transport>,
    status_path: String,
}

impl DeviceClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_status_path(transport, DEFAULT_STATUS_PATH)
    }

    pub fn with_status_path(transport: Arc<dyn Transport>, status_path: impl Into<String>) -> Self {
        Self {
            transport,
            status_path: status_path.into(),
        }
    }

    pub fn status_path(&self) -> &str {
        &self.status_path
    }

    pub async fn set_rgb(&self, color: impl Into<RawRgb>) -> Result<(), PanelError> {
        let RawRgb { r, g, b } = color.into();
        info!("Sending: {r},{g},{b}");
        self.transport
            .get(&format!("/set?r={r}&g={g}&b={b}"))
            .await?;
        Ok(())
    }

    /// Sends a `#rrggbb` color. Malformed input is forwarded as `NaN`.
    pub async fn send_color(&self, hex: &str) -> Result<(), PanelError> {
        self.set_rgb(parse_hex_color(hex)).await
    }

    pub async fn change_brightness(&self, brightness: impl Into<Brightness>) -> Result<(), PanelError> {
        let brightness = brightness.into();
        info!("Sending brightness: {brightness}");
        self.transport
            .get(&format!("/brightness?val={brightness}"))
            .await?;
        Ok(())
    }

    pub async fn set_mode(&self, mode: Mode) -> Result<(), PanelError> {
        if mode == Mode::Unknown {
            return Err(PanelError::UnsupportedMode(mode));
        }
        self.transport.get(&format!("/mode?m={mode}")).await?;
        Ok(())
    }

    pub async fn set_rainbow(&self) -> Result<(), PanelError> {
        self.set_mode(Mode::Rainbow).await
    }

    pub async fn set_ambilight(&self) -> Result<(), PanelError> {
        self.set_mode(Mode::Ambilight).await
    }

    /// Reads the status snapshot.
    ///
    /// A JSON body is used whatever the response code; only a body that is
    /// not a status document reports the code as the error.
    pub async fn fetch_status(&self) -> Result<DeviceStatus, PanelError> {
        match self.transport.get(&self.status_path).await {
            Ok(body) => Ok(serde_json::from_str(&body)?),
            Err(PanelError::Status { path, status, body }) => serde_json::from_str(&body)
                .map_err(|_| PanelError::Status { path, status, body }),
            Err(e) => Err(e),
        }
    }

    pub async fn fetch_config(&self) -> Result<DeviceConfig, PanelError> {
        let body = self.transport.get("/config").await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;
    use crate::testing::{LogCapture, RecordingTransport};

    fn client() -> (Arc<RecordingTransport>, DeviceClient) {
        let transport = Arc::new(RecordingTransport::default());
        let client = DeviceClient::new(transport.clone());
        (transport, client)
    }

    #[tokio::test]
    async fn test_send_color() {
        let (transport, client) = client();
        client.send_color("#FF8000").await.unwrap();
        client.send_color("a1b2c3").await.unwrap();
        assert_eq!(
            transport.requests(),
            vec!["/set?r=255&g=128&b=0", "/set?r=161&g=178&b=195"]
        );
    }

    #[tokio::test]
    async fn test_send_malformed_color_forwards_nan() {
        let (transport, client) = client();
        client.send_color("#zz12").await.unwrap();
        assert_eq!(transport.requests(), vec!["/set?r=NaN&g=18&b=NaN"]);
    }

    #[tokio::test]
    async fn test_set_rgb_is_unvalidated() {
        let (transport, client) = client();
        client.set_rgb(RawRgb::new(300_i64, -1_i64, 0_i64)).await.unwrap();
        client.set_rgb(Rgb::new(1, 2, 3)).await.unwrap();
        assert_eq!(
            transport.requests(),
            vec!["/set?r=300&g=-1&b=0", "/set?r=1&g=2&b=3"]
        );
    }

    #[tokio::test]
    async fn test_brightness_and_modes() {
        let (transport, client) = client();
        client.change_brightness(42).await.unwrap();
        client.set_rainbow().await.unwrap();
        client.set_ambilight().await.unwrap();
        client.set_mode(Mode::Off).await.unwrap();
        assert_eq!(
            transport.requests(),
            vec![
                "/brightness?val=42",
                "/mode?m=rainbow",
                "/mode?m=ambilight",
                "/mode?m=off"
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_mode_is_not_sent() {
        let (transport, client) = client();
        let result = client.set_mode(Mode::Unknown).await;
        assert!(matches!(result, Err(PanelError::UnsupportedMode(Mode::Unknown))));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_status() {
        let transport = Arc::new(RecordingTransport::with_status(
            r##"{"brightness":10,"mode":"rainbow","colorHex":"#000000"}"##,
        ));
        let client = DeviceClient::new(transport.clone());
        let status = client.fetch_status().await.unwrap();
        assert_eq!(status.mode, Mode::Rainbow);
        assert_eq!(transport.requests(), vec!["status"]);
    }

    #[tokio::test]
    async fn test_fetch_status_bad_json() {
        let transport = Arc::new(RecordingTransport::with_status("Not found"));
        let client = DeviceClient::new(transport);
        assert!(matches!(
            client.fetch_status().await,
            Err(PanelError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_custom_status_path() {
        let transport = Arc::new(RecordingTransport::default());
        let client = DeviceClient::with_status_path(transport.clone(), "get-status");
        assert!(client.fetch_status().await.is_err());
        assert_eq!(transport.requests(), vec!["get-status"]);
    }

    #[tokio::test]
    async fn test_status_body_used_despite_error_code() {
        let transport = Arc::new(RecordingTransport::with_status(
            r#"{"brightness":5,"mode":"off"}"#,
        ));
        transport.set_status_code(500);
        let client = DeviceClient::new(transport);
        let status = client.fetch_status().await.unwrap();
        assert_eq!(status.mode, Mode::Off);
        assert_eq!(status.brightness, Some(Brightness(5.0)));
    }

    #[tokio::test]
    async fn test_status_error_code_with_text_body() {
        let transport = Arc::new(RecordingTransport::with_status("Not found"));
        transport.set_status_code(404);
        let client = DeviceClient::new(transport);
        assert!(matches!(
            client.fetch_status().await,
            Err(PanelError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_outgoing_values_are_logged() {
        let (logs, _guard) = LogCapture::install();
        let (_, client) = client();

        client.set_rgb(Rgb::new(1, 2, 3)).await.unwrap();
        client.send_color("#zz0000").await.unwrap();
        client.change_brightness(42).await.unwrap();

        assert!(logs.has("INFO", "Sending: 1,2,3"), "{}", logs.contents());
        assert!(logs.has("INFO", "Sending: NaN,0,0"), "{}", logs.contents());
        assert!(logs.has("INFO", "Sending brightness: 42"), "{}", logs.contents());
    }
}

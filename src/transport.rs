// transport.rs
use crate::error::PanelError;
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::trace;

/// Outbound side of the panel: plain HTTP GETs against the device.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues `GET path_and_query` and returns the response body.
    async fn get(&self, path_and_query: &str) -> Result<String, PanelError>;
}

/// `reqwest` backed transport.
///
/// Paths resolve against `base` the way a page resolves links against its
/// own URL: `/set?...` replaces the base path, `status` is taken relative
/// to the base directory.
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, PanelError> {
        let base = Url::parse(base_url)
            .map_err(|e| PanelError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(PanelError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().build()?;
        Ok(Self { client, base })
    }

    pub fn resolve(&self, path_and_query: &str) -> Result<Url, PanelError> {
        self.base
            .join(path_and_query)
            .map_err(|e| PanelError::InvalidUrl(format!("{path_and_query}: {e}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path_and_query: &str) -> Result<String, PanelError> {
        let url = self.resolve(path_and_query)?;
        trace!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PanelError::Status {
                path: path_and_query.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

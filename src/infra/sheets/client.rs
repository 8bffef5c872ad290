use tracing::debug;

use crate::config::SheetConfig;
use crate::error::SheetError;
use crate::usecase::ports::sheet::SheetSource;

/// Reads the published CSV export over plain HTTP GET. No auth, no retry.
pub struct HttpSheetSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSheetSource {
    pub fn new(config: &SheetConfig) -> Result<Self, SheetError> {
        Ok(Self::with_client(build_client(config)?, config.export_url()))
    }

    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &SheetConfig) -> Result<reqwest::Client, SheetError> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|err| SheetError::Client(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &SheetConfig) -> Result<reqwest::Client, SheetError> {
    reqwest::Client::builder()
        .build()
        .map_err(|err| SheetError::Client(err.to_string()))
}

impl SheetSource for HttpSheetSource {
    async fn fetch_csv(&self) -> Result<String, SheetError> {
        debug!(url = %self.url(), "fetching sheet export");
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| SheetError::Transport(err.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SheetError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|err| SheetError::Transport(format!("read body: {err}")))?;
        debug!(bytes = body.len(), "received sheet export");
        Ok(body)
    }
}

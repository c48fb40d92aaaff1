use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::data::{send_authorized, DataClient};
use crate::error::Result;

const ENDPOINT: &str = "ESG";

/// Column headers plus row-major cell values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsgResponse {
    #[serde(default)]
    pub headers: Vec<EsgHeader>,
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsgHeader {
    #[serde(default)]
    pub name: String,
    pub title: Option<String>,
}

impl EsgHeader {
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.name)
    }
}

impl DataClient {
    pub async fn esg_scores(&self, access_token: &str, symbol: &str) -> Result<EsgResponse> {
        let url = self.endpoints().esg_url();
        info!("Requesting ESG data from {}?universe={}", url, symbol);

        let request = self.client.get(&url).query(&[("universe", symbol)]);
        send_authorized(ENDPOINT, access_token, request).await
    }
}

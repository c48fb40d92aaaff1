use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::{send_authorized, DataClient};
use crate::error::Result;

const ENDPOINT: &str = "symbology";

/// Lookup request: one RIC in, ISIN / LEI / exchange ticker out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbologyRequest {
    pub from: Vec<SymbologyFrom>,
    pub to: Vec<SymbologyTo>,
    pub reference: Vec<String>,
    #[serde(rename = "type")]
    pub lookup_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbologyFrom {
    pub identifier_types: Vec<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbologyTo {
    pub identifier_types: Vec<String>,
}

impl SymbologyRequest {
    pub fn for_ric(symbol: &str) -> Self {
        Self {
            from: vec![SymbologyFrom {
                identifier_types: vec!["RIC".to_owned()],
                values: vec![symbol.to_owned()],
            }],
            to: vec![SymbologyTo {
                identifier_types: vec!["ISIN".to_owned(), "LEI".to_owned(), "ExchangeTicker".to_owned()],
            }],
            reference: vec!["name".to_owned(), "status".to_owned(), "classification".to_owned()],
            lookup_type: "auto".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymbologyResponse {
    #[serde(default)]
    pub data: Vec<SymbologyData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymbologyData {
    #[serde(default)]
    pub input: Vec<SymbologyInput>,
    #[serde(default)]
    pub output: Vec<SymbologyOutput>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbologyInput {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub identifier_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbologyOutput {
    #[serde(default)]
    pub identifier_type: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

impl DataClient {
    pub async fn symbology(&self, access_token: &str, symbol: &str) -> Result<SymbologyResponse> {
        let url = self.endpoints().symbology_url();
        info!("Requesting Symbology data from {}", url);

        let request = self.client.post(&url).json(&SymbologyRequest::for_ric(symbol));
        send_authorized(ENDPOINT, access_token, request).await
    }
}

//! Authorized requests against the data endpoints.
//!
//! Every request carries `Authorization: Bearer <access_token>`; an empty token
//! is rejected before anything is sent.

pub mod esg;
pub mod news;
pub mod symbology;

use http::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::endpoints::EndpointsConfig;
use crate::error::{ClientError, Result};

#[derive(Debug, Clone)]
pub struct DataClient {
    client: Client,
    endpoints: EndpointsConfig,
}

impl DataClient {
    pub fn new(client: Client, endpoints: EndpointsConfig) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &EndpointsConfig {
        &self.endpoints
    }
}

async fn send_authorized<T: DeserializeOwned>(
    endpoint: &'static str,
    access_token: &str,
    request: RequestBuilder,
) -> Result<T> {
    if access_token.is_empty() {
        return Err(ClientError::MissingAccessToken);
    }

    let response = request
        .header(AUTHORIZATION, format!("Bearer {}", access_token))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::Api {
            endpoint,
            status: status.as_u16(),
            body,
        });
    }
    debug!("{} response: {} bytes", endpoint, body.len());
    info!("Get {} data success.", endpoint);
    Ok(serde_json::from_str(&body)?)
}

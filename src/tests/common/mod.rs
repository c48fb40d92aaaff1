// tests/common/mod.rs
pub use httpmock::Method::{GET, POST};
pub use httpmock::{Mock, MockServer};
pub use serde_json::json;

use reqwest::Client;

use crate::auth::{Credentials, TokenManager};
use crate::config::endpoints::EndpointsConfig;

pub const AUTH_PATH: &str = "/auth/oauth2/v1/token";
pub const REVOKE_PATH: &str = "/auth/oauth2/v1/revoke";

pub const PASSWORD_GRANT_BODY: &str =
    "username=u&client_id=cid&password=pw&scope=trapi&takeExclusiveSignOnControl=true&grant_type=password";

pub fn refresh_grant_body(refresh_token: &str) -> String {
    format!(
        "username=u&client_id=cid&takeExclusiveSignOnControl=true&refresh_token={}&grant_type=refresh_token",
        refresh_token
    )
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// Default endpoint paths on top of the mock server
pub fn endpoints(server: &MockServer) -> EndpointsConfig {
    EndpointsConfig::new(server.base_url())
}

/// Manager for user `u`, password `pw`, client id `cid`
pub fn token_manager(server: &MockServer) -> TokenManager {
    TokenManager::new(
        build_reqwest_client(),
        &endpoints(server),
        Credentials::new("u", "pw", "cid"),
    )
}

pub async fn mock_password_grant<'a>(
    server: &'a MockServer,
    status: u16,
    body: serde_json::Value,
) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path(AUTH_PATH)
                .header("content-type", "application/x-www-form-urlencoded")
                .body(PASSWORD_GRANT_BODY);
            then.status(status)
                .header("Content-Type", "application/json")
                .json_body(body);
        })
        .await
}

pub fn token_body(access_token: &str, refresh_token: &str, expires_in: &str) -> serde_json::Value {
    json!({
        "access_token": access_token,
        "refresh_token": refresh_token,
        "expires_in": expires_in,
        "scope": "trapi",
        "token_type": "Bearer"
    })
}

use serde::Deserialize;
use std::fmt;

use crate::auth::credentials::Credentials;
use crate::config::settings::SettingsConfig;
use crate::utils::constants::DEFAULT_SCOPE;


/// ================================
/// Full client configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    pub endpoints: EndpointsConfig,
    pub credentials: CredentialsConfig,
}

/// ================================
/// Endpoints
/// ================================
/// Paths are appended to `base_url` as is.
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointsConfig {
    pub base_url: String,
    #[serde(default = "default_auth_path")]
    pub auth: String,
    #[serde(default = "default_revoke_path")]
    pub revoke: String,
    #[serde(default = "default_symbology_path")]
    pub symbology: String,
    #[serde(default = "default_news_path")]
    pub news: String,
    #[serde(default = "default_esg_path")]
    pub esg: String,
}

impl EndpointsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: default_auth_path(),
            revoke: default_revoke_path(),
            symbology: default_symbology_path(),
            news: default_news_path(),
            esg: default_esg_path(),
        }
    }

    pub fn auth_url(&self) -> String {
        self.join(&self.auth)
    }

    pub fn revoke_url(&self) -> String {
        self.join(&self.revoke)
    }

    pub fn symbology_url(&self) -> String {
        self.join(&self.symbology)
    }

    pub fn news_url(&self) -> String {
        self.join(&self.news)
    }

    pub fn esg_url(&self) -> String {
        self.join(&self.esg)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// ================================
/// Credentials
/// ================================
#[derive(Deserialize, Clone)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
    /// application key
    pub client_id: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde(default = "default_take_exclusive_sign_on_control")]
    pub take_exclusive_sign_on_control: bool,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .field("take_exclusive_sign_on_control", &self.take_exclusive_sign_on_control)
            .finish()
    }
}

impl From<&CredentialsConfig> for Credentials {
    fn from(cfg: &CredentialsConfig) -> Self {
        Credentials::new(&cfg.username, &cfg.password, &cfg.client_id)
            .with_scope(&cfg.scope)
            .with_exclusive_sign_on(cfg.take_exclusive_sign_on_control)
    }
}

fn default_auth_path() -> String {
    "/auth/oauth2/v1/token".to_string()
}

fn default_revoke_path() -> String {
    "/auth/oauth2/v1/revoke".to_string()
}

fn default_symbology_path() -> String {
    "/discovery/symbology/v1/lookup".to_string()
}

fn default_news_path() -> String {
    "/data/news/v1/headlines".to_string()
}

fn default_esg_path() -> String {
    "/data/environmental-social-governance/v2/views/scores-full".to_string()
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

fn default_take_exclusive_sign_on_control() -> bool {
    true
}

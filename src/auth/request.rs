use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::auth::credentials::Credentials;
use crate::utils::constants::{GRANT_PASSWORD, GRANT_REFRESH_TOKEN};

/// Body of a token request, sent as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Password {
        username: String,
        client_id: String,
        password: String,
        scope: String,
        take_exclusive_sign_on_control: bool,
    },
    Refresh {
        username: String,
        client_id: String,
        refresh_token: String,
        take_exclusive_sign_on_control: bool,
    },
}

impl AuthRequest {
    /// Password grant on first login, refresh grant once a refresh token is known.
    pub fn build(credentials: &Credentials, previous_refresh_token: Option<&str>) -> Self {
        match previous_refresh_token.filter(|token| !token.is_empty()) {
            None => AuthRequest::Password {
                username: credentials.username.to_owned(),
                client_id: credentials.client_id.to_owned(),
                password: credentials.password.to_owned(),
                scope: credentials.scope.to_owned(),
                take_exclusive_sign_on_control: credentials.take_exclusive_sign_on_control,
            },
            Some(refresh_token) => AuthRequest::Refresh {
                username: credentials.username.to_owned(),
                client_id: credentials.client_id.to_owned(),
                refresh_token: refresh_token.to_owned(),
                take_exclusive_sign_on_control: credentials.take_exclusive_sign_on_control,
            },
        }
    }

    pub fn grant_type(&self) -> &'static str {
        match self {
            AuthRequest::Password { .. } => GRANT_PASSWORD,
            AuthRequest::Refresh { .. } => GRANT_REFRESH_TOKEN,
        }
    }

    pub fn form(&self) -> Vec<(&'static str, String)> {
        match self {
            AuthRequest::Password {
                username,
                client_id,
                password,
                scope,
                take_exclusive_sign_on_control,
            } => vec![
                ("username", username.to_owned()),
                ("client_id", client_id.to_owned()),
                ("password", password.to_owned()),
                ("scope", scope.to_owned()),
                ("takeExclusiveSignOnControl", take_exclusive_sign_on_control.to_string()),
                ("grant_type", self.grant_type().to_owned()),
            ],
            AuthRequest::Refresh {
                username,
                client_id,
                refresh_token,
                take_exclusive_sign_on_control,
            } => vec![
                ("username", username.to_owned()),
                ("client_id", client_id.to_owned()),
                ("takeExclusiveSignOnControl", take_exclusive_sign_on_control.to_string()),
                ("refresh_token", refresh_token.to_owned()),
                ("grant_type", self.grant_type().to_owned()),
            ],
        }
    }
}

/// Body of a revoke request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeRequest {
    pub token: String,
}

impl RevokeRequest {
    pub fn new(token: &str) -> Self {
        Self { token: token.to_owned() }
    }

    pub fn form(&self) -> [(&'static str, &str); 1] {
        [("token", self.token.as_str())]
    }
}

/// `Basic base64(client_id + ":")`, the client secret is always empty.
pub fn basic_auth_value(client_id: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:", client_id)))
}

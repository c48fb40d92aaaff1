//! Error types shared by the token lifecycle and the data requests.

use std::time::Duration;
use thiserror::Error;

use crate::auth::Lifecycle;

/// Non-success answer from the authorization endpoint (password or refresh grant).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("authentication failed: {status} {body}")]
pub struct AuthError {
    pub status: u16,
    pub body: String,
}

/// Non-success answer from the revoke endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("token revoke failed: {status} {body}")]
pub struct RevokeError {
    pub status: u16,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Revoke(#[from] RevokeError),

    /// Non-success answer from a data endpoint
    #[error("{endpoint} request failed: {status} {body}")]
    Api {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("access token is empty, authenticate first")]
    MissingAccessToken,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(String),

    /// The manager failed its first login or was shut down
    #[error("token manager is {0}, no further token exchanges")]
    Closed(Lifecycle),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Malformed(err.to_string())
    }
}

impl ClientError {
    /// The authorization endpoint's rejection, if that is what this is.
    pub fn as_auth(&self) -> Option<&AuthError> {
        match self {
            ClientError::Auth(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_revoke(&self) -> Option<&RevokeError> {
        match self {
            ClientError::Revoke(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

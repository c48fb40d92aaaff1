use serde::{Deserialize, Deserializer};

/// Current access/refresh token pair. Empty until the first successful exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenState {
    pub access_token: String,
    pub refresh_token: String,
    /// seconds until the access token expires
    #[serde(deserialize_with = "deserialize_expires_in")]
    pub expires_in: u64,
}

impl TokenState {
    pub fn new(access_token: &str, refresh_token: &str, expires_in: u64) -> Self {
        Self {
            access_token: access_token.to_owned(),
            refresh_token: refresh_token.to_owned(),
            expires_in,
        }
    }

    /// Both tokens present
    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }
}

/// The platform sends `expires_in` as a string ("600"); numbers are accepted too.
fn deserialize_expires_in<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ExpiresIn {
        Number(u64),
        Text(String),
    }

    match ExpiresIn::deserialize(deserializer)? {
        ExpiresIn::Number(n) => Ok(n),
        ExpiresIn::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid expires_in '{}': {}", s, e))),
    }
}

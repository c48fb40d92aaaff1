//! Shared constants and invariants

pub const DEFAULT_CONFIG_PATH: &str = "rdp-client.yaml";

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_REVOKE_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_GRACE_DELAY_MS: u64 = 1000;
/// refresh fires at this share of `expires_in`
pub const DEFAULT_REFRESH_RATIO_PERCENT: u64 = 90;
/// lower bound for the refresh interval, guards against `expires_in == 0`
pub const MIN_REFRESH_DELAY_MS: u64 = 1000;

pub const DEFAULT_SCOPE: &str = "trapi";
pub const DEFAULT_SYMBOL: &str = "LSEG.L";
pub const DEFAULT_NEWS_LIMIT: u32 = 10;

// Grant types
pub const GRANT_PASSWORD: &str = "password";
pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";

//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Validates endpoint URLs, credentials presence, refresh/shutdown timing
//!   and logging invariants

use tracing::{error, info};

use crate::config::endpoints::{CredentialsConfig, EndpointsConfig, ServiceConfig};
use crate::config::settings::SettingsConfig;

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);
    validate_endpoints(&cfg.endpoints, &mut errors);
    validate_credentials(&cfg.credentials, &mut errors);

    if errors.is_empty() {
        info!("config valid");
        Ok(())
    } else {
        error!("configuration validation errors ({}):", errors.len());
        for e in &errors {
            error!(" - {}", e);
        }
        Err(errors)
    }
}

/// SETTINGS VALIDATION
fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if settings.http.timeout_ms == 0 {
        errors.push("settings.http.timeout_ms must be > 0".to_string());
    }

    let ratio = settings.refresh.ratio_percent;
    if ratio == 0 || ratio > 100 {
        errors.push(format!(
            "settings.refresh.ratio_percent ({}) must be in range 1-100",
            ratio
        ));
    }

    if settings.shutdown.revoke_timeout_ms == 0 {
        errors.push("settings.shutdown.revoke_timeout_ms must be > 0".to_string());
    }

    // logging level
    if let Some(logging) = &settings.logging {
        let valid = ["trace", "debug", "info", "warn", "error"];
        if !valid.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' invalid; allowed: {:?}",
                logging.level, valid
            ));
        }
    }
}

/// ENDPOINTS VALIDATION
fn validate_endpoints(endpoints: &EndpointsConfig, errors: &mut Vec<String>) {
    let base_url = &endpoints.base_url;
    if base_url.is_empty() {
        errors.push("endpoints.base_url must not be empty".to_string());
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(format!(
            "endpoints.base_url '{}' must start with http:// or https://",
            base_url
        ));
    }

    let paths = [
        ("auth", &endpoints.auth),
        ("revoke", &endpoints.revoke),
        ("symbology", &endpoints.symbology),
        ("news", &endpoints.news),
        ("esg", &endpoints.esg),
    ];
    for (name, path) in paths {
        if !path.starts_with('/') {
            errors.push(format!("endpoints.{} '{}' must start with '/'", name, path));
        }
    }
}

/// CREDENTIALS VALIDATION
fn validate_credentials(credentials: &CredentialsConfig, errors: &mut Vec<String>) {
    let required = [
        ("username", &credentials.username),
        ("password", &credentials.password),
        ("client_id", &credentials.client_id),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            errors.push(format!("credentials.{} must not be empty", name));
        }
    }
}

use std::path::Path;
use anyhow::{anyhow, Result};
use tracing::debug;

use crate::ServiceConfig;
use crate::config::proc_loader::{file_to_config, template_to_config};

/// Load the config file when it exists, otherwise fall back to the built-in
/// template driven by `RDP_*` environment variables.
pub async fn run(config_path: &str) -> Result<ServiceConfig> {
    let path = Path::new(config_path);
    let loaded = if path.exists() {
        debug!("loading config from {}", path.display());
        file_to_config(path).await
    } else {
        debug!("config file {} not found, using environment template", path.display());
        template_to_config().await
    };
    loaded.map_err(|e| anyhow!(format!("Invalid config format: {}", e)))
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_log_level, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PRODUCT_LIMIT: usize = 100;
/// `limit=0` makes the API return the whole catalog.
pub const DEFAULT_CATEGORIES_LIMIT: usize = 0;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Fully resolved settings: defaults, then the TOML file, then command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub api_base_url: String,
    pub product_limit: usize,
    pub categories_limit: usize,
    pub timeout_seconds: u64,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            product_limit: DEFAULT_PRODUCT_LIMIT,
            categories_limit: DEFAULT_CATEGORIES_LIMIT,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            log_level: None,
            json_logs: false,
        }
    }
}

impl ConfigProvider for StoreSettings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn product_limit(&self) -> usize {
        self.product_limit
    }

    fn categories_limit(&self) -> usize {
        self.categories_limit
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for StoreSettings {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.base_url", &self.api_base_url)?;
        validate_positive_number("catalog.product_limit", self.product_limit, 1)?;
        validate_range("catalog.timeout_seconds", self.timeout_seconds, 1, 300)?;
        if let Some(level) = &self.log_level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};

fn default_environment() -> String {
    "local".to_string()
}

/// 啟動時解析完成的設定值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub oppslag_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_url: Option<String>,
    #[serde(default)]
    pub notify_enabled: bool,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

impl AppConfig {
    pub fn new(oppslag_url: impl Into<String>) -> Self {
        Self {
            oppslag_url: oppslag_url.into(),
            hook_url: None,
            notify_enabled: false,
            environment: default_environment(),
            request_timeout_seconds: None,
        }
    }
}

impl ConfigProvider for AppConfig {
    fn oppslag_url(&self) -> &str {
        &self.oppslag_url
    }

    fn hook_url(&self) -> Option<&str> {
        self.hook_url.as_deref()
    }

    fn notify_enabled(&self) -> bool {
        self.notify_enabled
    }

    fn environment(&self) -> &str {
        &self.environment
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.request_timeout_seconds
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("oppslag_url", &self.oppslag_url)?;
        validate_non_empty_string("environment", &self.environment)?;

        if self.notify_enabled {
            let hook_url = validate_required_field("hook_url", &self.hook_url)?;
            validate_url("hook_url", hook_url)?;
        }

        if let Some(seconds) = self.request_timeout_seconds {
            validate_positive_number("request_timeout_seconds", seconds, 1)?;
        }

        Ok(())
    }
}

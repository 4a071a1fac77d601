use crate::config::AppConfig;
use crate::utils::error::{AppError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "intake-support")]
#[command(about = "Municipality lookup and long-description notifications for application intake")]
pub struct CliConfig {
    #[arg(long, help = "Load settings from a TOML/YAML/JSON file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "OPPSLAG_URL")]
    pub oppslag_url: Option<String>,

    #[arg(long, env = "SLACK_HOOK_URL")]
    pub hook_url: Option<String>,

    #[arg(long, env = "NOTIFY_ENABLED")]
    pub notify_enabled: bool,

    #[arg(long, env = "APP_ENV", default_value = "local")]
    pub environment: String,

    #[arg(long = "request-timeout", env = "REQUEST_TIMEOUT")]
    pub request_timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve one or more municipality codes
    Lookup { codes: Vec<String> },
    /// Send a notification if the description is longer than the threshold
    Notify { description: String },
}

impl CliConfig {
    /// 設定檔優先，否則使用命令列參數 / 環境變數
    pub fn app_config(&self) -> Result<AppConfig> {
        if let Some(path) = &self.config {
            return AppConfig::from_file(path);
        }

        let oppslag_url = self
            .oppslag_url
            .clone()
            .ok_or_else(|| AppError::MissingConfigError {
                field: "oppslag_url".to_string(),
            })?;

        Ok(AppConfig {
            oppslag_url,
            hook_url: self.hook_url.clone(),
            notify_enabled: self.notify_enabled,
            environment: self.environment.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_build_app_config() {
        let cli = CliConfig::try_parse_from([
            "intake-support",
            "--oppslag-url",
            "https://oppslag.example.com",
            "--environment",
            "prod",
            "lookup",
            "0301",
            "4601",
        ])
        .unwrap();

        let config = cli.app_config().unwrap();
        assert_eq!(config.oppslag_url, "https://oppslag.example.com");
        assert_eq!(config.environment, "prod");
        match cli.command {
            Command::Lookup { codes } => assert_eq!(codes, vec!["0301", "4601"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_missing_oppslag_url() {
        let cli = CliConfig {
            config: None,
            oppslag_url: None,
            hook_url: None,
            notify_enabled: false,
            environment: "local".to_string(),
            request_timeout_seconds: None,
            verbose: false,
            json_logs: false,
            command: Command::Notify {
                description: "kort".to_string(),
            },
        };

        assert!(matches!(
            cli.app_config(),
            Err(AppError::MissingConfigError { .. })
        ));
    }
}

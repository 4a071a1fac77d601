use reqwest::StatusCode;
use thiserror::Error;

/// 查詢服務的傳輸錯誤，建構時發生即視為致命
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Lookup endpoint {url} answered with status {status}")]
    Status { status: StatusCode, url: String },

    #[error("Could not decode lookup response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: SerializationError,
    },
}

/// Webhook 通知失敗；只會被記錄，不會往外傳遞
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Webhook answered with status {status}")]
    Status { status: StatusCode },

    #[error("Could not serialize notification: {0}")]
    Serialization(#[from] SerializationError),
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Transport(_) => {
                "Could not load the municipality directory from the lookup service".to_string()
            }
            AppError::IoError(e) => format!("File access failed: {}", e),
            AppError::Serialization(e) => format!("Could not read or write data: {}", e),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// 設定錯誤回傳 2，啟動（網路）錯誤回傳 1
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ConfigError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

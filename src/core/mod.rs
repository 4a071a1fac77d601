pub mod lookup_client;
pub mod municipality_service;
pub mod notifier;

pub use crate::domain::model::{Municipality, MunicipalityDirectory, NotificationMessage};
pub use crate::domain::ports::{ConfigProvider, MunicipalityClient};
pub use crate::utils::error::Result;

use crate::utils::error::AppError;
use reqwest::Client;
use std::time::Duration;

/// 依設定建立共用的 HTTP client（未設定逾時則使用 reqwest 預設）
pub(crate) fn http_client<C: ConfigProvider + ?Sized>(config: &C) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(seconds) = config.request_timeout_seconds() {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    builder.build().map_err(|e| AppError::ConfigError {
        message: format!("Could not build HTTP client: {}", e),
    })
}

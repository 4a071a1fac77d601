use crate::domain::model::MunicipalityDirectory;
use crate::utils::error::TransportError;
use async_trait::async_trait;

/// 市鎮資料來源
#[async_trait]
pub trait MunicipalityClient: Send + Sync {
    async fn fetch_all(&self) -> Result<MunicipalityDirectory, TransportError>;
}

pub trait ConfigProvider: Send + Sync {
    fn oppslag_url(&self) -> &str;
    fn hook_url(&self) -> Option<&str>;
    fn notify_enabled(&self) -> bool;
    fn environment(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;
}

use crate::core::lookup_client::HttpMunicipalityClient;
use crate::core::{ConfigProvider, MunicipalityClient, MunicipalityDirectory};
use crate::domain::model::Municipality;
use crate::utils::error::{Result, TransportError};
use crate::utils::serialization::Serialization;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Resolves municipality codes against a directory that is fetched exactly once.
///
/// The only way to obtain a service is through one of the async constructors,
/// which complete the fetch first. If the fetch fails there is no service, so a
/// half-loaded or empty directory can never be observed.
#[derive(Debug)]
pub struct MunicipalityService {
    directory: MunicipalityDirectory,
}

impl MunicipalityService {
    pub async fn new<C: MunicipalityClient + ?Sized>(
        client: &C,
    ) -> std::result::Result<Self, TransportError> {
        let directory = client.fetch_all().await?;
        Ok(Self { directory })
    }

    /// 使用預設的 HTTP client 建立服務
    pub async fn from_config<C: ConfigProvider + ?Sized>(
        config: &C,
        serialization: Arc<Serialization>,
    ) -> Result<Self> {
        let client = HttpMunicipalityClient::from_config(config, serialization)?;
        Ok(Self::new(&client).await?)
    }

    pub fn lookup(&self, code: Option<&str>) -> Option<&Municipality> {
        let code = code.filter(|c| !c.trim().is_empty())?;
        self.directory.get(code)
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.lookup(Some(code)).map(|m| m.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.directory.fetched_at()
    }
}

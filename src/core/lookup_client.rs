use crate::core::{http_client, ConfigProvider, MunicipalityClient, MunicipalityDirectory};
use crate::domain::model::Municipality;
use crate::utils::error::{Result, TransportError};
use crate::utils::serialization::Serialization;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";
const DIRECTORY_PATH: &str = "geografi/kommunenr";

/// 透過 HTTP 從查詢服務取得完整的市鎮清單
pub struct HttpMunicipalityClient {
    client: Client,
    base_url: String,
    serialization: Arc<Serialization>,
}

impl HttpMunicipalityClient {
    pub fn new(base_url: impl Into<String>, serialization: Arc<Serialization>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            serialization,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(
        config: &C,
        serialization: Arc<Serialization>,
    ) -> Result<Self> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.oppslag_url().to_string(),
            serialization,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), DIRECTORY_PATH)
    }

    // 每次呼叫都產生新的 correlation id
    fn build_request(&self, url: &str) -> std::result::Result<(reqwest::Request, Uuid), TransportError> {
        let correlation_id = Uuid::new_v4();
        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CORRELATION_ID_HEADER, correlation_id.to_string())
            .build()?;
        Ok((request, correlation_id))
    }

    async fn fetch(&self, url: &str) -> std::result::Result<MunicipalityDirectory, TransportError> {
        let (request, correlation_id) = self.build_request(url)?;
        tracing::info!(%correlation_id, "Fetching municipality directory from {}", url);

        let response = self.client.execute(request).await?;
        let status = response.status();
        tracing::debug!("Lookup response status: {}", status);

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let entries: HashMap<String, Municipality> = self
            .serialization
            .from_json_slice(&body)
            .map_err(|source| TransportError::Decode {
                url: url.to_string(),
                source,
            })?;

        Ok(MunicipalityDirectory::new(entries))
    }
}

#[async_trait]
impl MunicipalityClient for HttpMunicipalityClient {
    async fn fetch_all(&self) -> std::result::Result<MunicipalityDirectory, TransportError> {
        let url = self.endpoint();
        match self.fetch(&url).await {
            Ok(directory) => {
                tracing::info!("Loaded {} municipalities", directory.len());
                Ok(directory)
            }
            Err(e) => {
                tracing::error!("Failed to fetch municipality directory from {}: {}", url, e);
                Err(e)
            }
        }
    }
}

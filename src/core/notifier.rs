use crate::core::{http_client, ConfigProvider};
use crate::domain::model::NotificationMessage;
use crate::utils::error::{NotificationError, Result};
use crate::utils::serialization::Serialization;
use crate::utils::validation::validate_required_field;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;

/// 超過此長度（字元數）的文件描述才會通知
pub const DESCRIPTION_LENGTH_THRESHOLD: usize = 100;
pub const CHANNEL_ID: &str = "C01ADJN2M6Y";
pub const SENDER_NAME: &str = "fss-soknad";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    BelowThreshold,
}

/// Result of one notification attempt. Callers are free to ignore it.
#[derive(Debug)]
pub enum NotifyOutcome {
    Skipped(SkipReason),
    Sent,
    Failed(NotificationError),
}

impl NotifyOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, NotifyOutcome::Sent)
    }
}

/// Posts a chat message when an inbound document description is too long.
pub struct Notifier {
    client: Client,
    hook_url: String,
    enabled: bool,
    environment: String,
    serialization: Arc<Serialization>,
}

impl Notifier {
    pub fn new(
        hook_url: impl Into<String>,
        enabled: bool,
        environment: impl Into<String>,
        serialization: Arc<Serialization>,
    ) -> Self {
        Self {
            client: Client::new(),
            hook_url: hook_url.into(),
            enabled,
            environment: environment.into(),
            serialization,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(
        config: &C,
        serialization: Arc<Serialization>,
    ) -> Result<Self> {
        let hook_url = if config.notify_enabled() {
            validate_required_field("hook_url", &config.hook_url().map(str::to_string))?.clone()
        } else {
            config.hook_url().unwrap_or_default().to_string()
        };

        Ok(Self {
            client: http_client(config)?,
            hook_url,
            enabled: config.notify_enabled(),
            environment: config.environment().to_string(),
            serialization,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn build_message(&self, description: &str) -> NotificationMessage {
        NotificationMessage {
            text: format!(
                "{} - Dokumentbeskrivelse ble over {} tegn: {}",
                self.environment.to_uppercase(),
                DESCRIPTION_LENGTH_THRESHOLD,
                description
            ),
            channel: CHANNEL_ID.to_string(),
            username: SENDER_NAME.to_string(),
        }
    }

    pub async fn notify(&self, description: &str) -> NotifyOutcome {
        if !self.enabled {
            return NotifyOutcome::Skipped(SkipReason::Disabled);
        }
        if description.chars().count() <= DESCRIPTION_LENGTH_THRESHOLD {
            return NotifyOutcome::Skipped(SkipReason::BelowThreshold);
        }

        match self.post(&self.build_message(description)).await {
            Ok(()) => {
                tracing::debug!("Posted long-description notification to webhook");
                NotifyOutcome::Sent
            }
            Err(e) => {
                tracing::warn!("Could not send notification to webhook: {}", e);
                NotifyOutcome::Failed(e)
            }
        }
    }

    async fn post(&self, message: &NotificationMessage) -> std::result::Result<(), NotificationError> {
        let body = self.serialization.to_json_pretty(message)?;

        let response = self
            .client
            .post(&self.hook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotificationError::Status { status });
        }
        Ok(())
    }
}

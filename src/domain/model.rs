use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 單一市鎮的描述；除了名稱以外的欄位原樣保存
///
/// `name` is read from `name` or `kommunenavn` and is empty when the lookup
/// service sends neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    #[serde(default, alias = "kommunenavn")]
    pub name: String,
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl Municipality {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }
}

/// Immutable code → municipality map, fetched once.
#[derive(Debug, Clone)]
pub struct MunicipalityDirectory {
    entries: HashMap<String, Municipality>,
    fetched_at: DateTime<Utc>,
}

impl MunicipalityDirectory {
    pub fn new(entries: HashMap<String, Municipality>) -> Self {
        Self {
            entries,
            fetched_at: Utc::now(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&Municipality> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// Webhook payload; lives only for one notification attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub text: String,
    pub channel: String,
    pub username: String,
}

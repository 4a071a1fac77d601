//! Shared (de)serialization settings.
//!
//! A single [`Serialization`] value is built at startup and handed by reference
//! to every component that reads or writes JSON/YAML, so formatting stays the
//! same everywhere. Date/time fields use chrono's serde support and are written
//! as RFC 3339 strings, never as numeric timestamps.

use crate::utils::error::SerializationError;
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, Default)]
pub struct Serialization;

impl Serialization {
    pub fn new() -> Self {
        Self
    }

    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(value)?)
    }

    /// Webhook 訊息使用的縮排格式
    pub fn to_json_pretty<T: Serialize + ?Sized>(
        &self,
        value: &T,
    ) -> Result<String, SerializationError> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    pub fn from_json<T: DeserializeOwned>(&self, input: &str) -> Result<T, SerializationError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_slice<T: DeserializeOwned>(
        &self,
        input: &[u8],
    ) -> Result<T, SerializationError> {
        Ok(serde_json::from_slice(input)?)
    }

    pub fn to_yaml<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, SerializationError> {
        Ok(serde_yaml::to_string(value)?)
    }

    pub fn from_yaml<T: DeserializeOwned>(&self, input: &str) -> Result<T, SerializationError> {
        Ok(serde_yaml::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Soknad {
        soknad_id: String,
        mottatt: DateTime<Utc>,
        fodselsdato: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kommentar: Option<String>,
    }

    fn sample() -> Soknad {
        Soknad {
            soknad_id: "abc-123".to_string(),
            mottatt: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
            fodselsdato: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            kommentar: None,
        }
    }

    #[test]
    fn test_dates_are_written_as_iso_strings() {
        let json = Serialization::new().to_json(&sample()).unwrap();

        assert!(json.contains(r#""mottatt":"2024-03-01T12:30:00Z""#));
        assert!(json.contains(r#""fodselsdato":"1990-05-17""#));
        assert!(json.contains("soknadId"));
        assert!(!json.contains("kommentar"));
    }

    #[test]
    fn test_unknown_and_missing_optional_fields_are_tolerated() {
        let input = r#"{
            "soknadId": "abc-123",
            "mottatt": "2024-03-01T12:30:00Z",
            "fodselsdato": "1990-05-17",
            "ukjentFelt": true
        }"#;

        let parsed: Soknad = Serialization::new().from_json(input).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_compact_and_pretty_output() {
        let serialization = Serialization::new();
        assert!(!serialization.to_json(&sample()).unwrap().contains('\n'));
        assert!(serialization.to_json_pretty(&sample()).unwrap().contains('\n'));
    }

    #[test]
    fn test_yaml_uses_same_field_names() {
        let serialization = Serialization::new();
        let yaml = serialization.to_yaml(&sample()).unwrap();
        assert!(yaml.contains("soknadId: abc-123"));

        let parsed: Soknad = serialization.from_yaml(&yaml).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result: Result<Soknad, _> = Serialization::new().from_json_slice(b"{not json");
        assert!(matches!(result, Err(SerializationError::Json(_))));
    }
}

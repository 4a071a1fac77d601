use crate::config::AppConfig;
use crate::utils::error::{AppError, Result};
use crate::utils::serialization::Serialization;
use regex::Regex;
use std::path::Path;

impl AppConfig {
    /// 從設定檔載入，依副檔名決定格式（toml / yaml / json）
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let content = Self::substitute_env_vars(&content)?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");
        match ext {
            "yaml" | "yml" => Ok(Serialization::new().from_yaml(&content)?),
            "json" => Ok(Serialization::new().from_json(&content)?),
            _ => Self::parse_toml(&content),
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Self::parse_toml(&processed_content)
    }

    fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPPSLAG_URL})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

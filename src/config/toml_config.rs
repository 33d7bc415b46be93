use crate::config::RunConfig;
use crate::domain::model::RequestKind;
use crate::utils::error::{FanoutError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub items: Vec<String>,
    pub client: ClientConfig,
    pub dispatch: Option<DispatchConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    pub kind: Option<RequestKind>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub concurrency: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FanoutError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FanoutError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_run_config(self) -> RunConfig {
        let defaults = RunConfig::default();

        let api_key = match self.client.api_key {
            Some(key) if key.contains("${") => {
                tracing::warn!("API key placeholder {} was not resolved, sending no credential", key);
                None
            }
            other => other.filter(|k| !k.is_empty()),
        };

        RunConfig {
            endpoint: self.client.endpoint,
            kind: self.client.kind.unwrap_or(defaults.kind),
            model: self.client.model.unwrap_or(defaults.model),
            api_key,
            timeout: self
                .client
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            concurrency: self.dispatch.and_then(|d| d.concurrency),
            items: self.items,
        }
    }
}

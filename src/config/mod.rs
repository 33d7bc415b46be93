#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::RequestKind;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://example.com/llm";
pub const DEFAULT_MODEL: &str = "text-embedding-3-large";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Fully resolved settings for one run, whichever source they came from.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub endpoint: String,
    pub kind: RequestKind,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub concurrency: Option<usize>,
    pub items: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            kind: RequestKind::default(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            concurrency: None,
            items: Vec::new(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_kind(&self) -> RequestKind {
        self.kind
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn concurrency(&self) -> Option<usize> {
        self.concurrency
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_url("client.endpoint", &self.endpoint)?;

        if self.kind == RequestKind::Embedding {
            validate_non_empty_string("client.model", &self.model)?;
        }

        validate_range(
            "client.timeout_seconds",
            self.timeout.as_secs(),
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        if let Some(concurrency) = self.concurrency {
            validate_positive_number("dispatch.concurrency", concurrency, 1)?;
        }

        Ok(())
    }
}

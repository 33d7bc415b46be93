use crate::core::ConfigProvider;
use crate::domain::model::{CompletionRequest, EmbeddingRequest};
use crate::domain::ports::ModelClient;
use crate::utils::error::{FanoutError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Posts one JSON body per item to a model endpoint.
///
/// Holds a single `reqwest::Client`, so every concurrent call made through
/// one instance shares the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpModelClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl HttpModelClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            model: config.model().to_string(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_json<B: Serialize + ?Sized>(&self, body: &B) -> Result<serde_json::Value> {
        let mut request = self.client.post(&self.endpoint).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        tracing::debug!("POST {}", self.endpoint);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FanoutError::HttpStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn complete(&self, prompt: &str) -> Result<serde_json::Value> {
        self.post_json(&CompletionRequest { prompt }).await
    }

    async fn embed(&self, text: &str) -> Result<serde_json::Value> {
        self.post_json(&EmbeddingRequest {
            input: text,
            model: &self.model,
        })
        .await
    }
}

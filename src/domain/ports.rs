use crate::domain::model::RequestKind;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn request_kind(&self) -> RequestKind;
    fn model(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout(&self) -> Duration;
    /// `None` means every item is in flight at once.
    fn concurrency(&self) -> Option<usize>;
}

#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<serde_json::Value>;
    async fn embed(&self, text: &str) -> Result<serde_json::Value>;

    async fn send(&self, kind: RequestKind, item: &str) -> Result<serde_json::Value> {
        match kind {
            RequestKind::Completion => self.complete(item).await,
            RequestKind::Embedding => self.embed(item).await,
        }
    }
}

use crate::core::dispatch::{dispatch, dispatch_bounded};
use crate::domain::model::{GatherReport, RequestKind};
use crate::domain::ports::{ConfigProvider, ModelClient};
use crate::utils::error::Result;
use std::time::Instant;

/// Runs one batch of items through a [`ModelClient`].
///
/// The engine owns the client for its whole lifetime, so the connection pool
/// is created before any request starts and outlives every request in a batch.
pub struct GatherEngine<M: ModelClient> {
    client: M,
    kind: RequestKind,
    concurrency: Option<usize>,
}

impl<M: ModelClient> GatherEngine<M> {
    pub fn new(client: M, kind: RequestKind) -> Self {
        Self {
            client,
            kind,
            concurrency: None,
        }
    }

    /// Takes the request kind and in-flight limit from `config`.
    pub fn from_config<C: ConfigProvider>(client: M, config: &C) -> Self {
        Self::new(client, config.request_kind()).with_concurrency(config.concurrency())
    }

    pub fn with_concurrency(mut self, concurrency: Option<usize>) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn client(&self) -> &M {
        &self.client
    }

    pub async fn run(&self, items: Vec<String>) -> Result<GatherReport> {
        let item_count = items.len();
        tracing::info!("Gathering {} {} requests", item_count, self.kind);

        let start = Instant::now();
        let client = &self.client;
        let kind = self.kind;
        let send = move |item: String| async move { client.send(kind, &item).await };

        let outcome = match self.concurrency {
            Some(limit) => dispatch_bounded(items, limit, send).await,
            None => dispatch(items, send).await,
        };
        let elapsed = start.elapsed();
        // Failures are reported by the caller
        let results = outcome?;

        tracing::info!("Gathered {} results in {:?}", results.len(), elapsed);
        Ok(GatherReport {
            results,
            item_count,
            elapsed,
        })
    }
}

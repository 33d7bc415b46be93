use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Which request body a per-item call sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RequestKind {
    #[default]
    Completion,
    Embedding,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Completion => f.write_str("completion"),
            RequestKind::Embedding => f.write_str("embedding"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest<'a> {
    pub input: &'a str,
    pub model: &'a str,
}

/// Outcome of one gathered batch. `results[i]` answers `items[i]`.
#[derive(Debug, Clone)]
pub struct GatherReport {
    pub results: Vec<serde_json::Value>,
    pub item_count: usize,
    pub elapsed: Duration,
}

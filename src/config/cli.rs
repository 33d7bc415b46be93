use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::domain::model::RequestKind;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Command-line flags. Every setting flag is optional: a flag that is given
/// overrides the config file, a flag that is absent leaves the file value
/// (or the built-in default) in place.
#[derive(Debug, Clone, Parser)]
#[command(name = "llm-fanout")]
#[command(about = "Send many prompts or embedding inputs to a model endpoint concurrently")]
pub struct CliConfig {
    /// Items to send, one request each
    pub items: Vec<String>,

    #[arg(long, help = "TOML config file; CLI items are appended to its items")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Request body to send [default: completion]")]
    pub kind: Option<RequestKind>,

    #[arg(long, help = "Model endpoint URL [default: https://example.com/llm]")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Model name for embedding requests [default: text-embedding-3-large]")]
    pub model: Option<String>,

    #[arg(
        long,
        help = "Environment variable holding the bearer token [default: API_KEY]; \
                overrides the config file's api_key when set"
    )]
    pub api_key_env: Option<String>,

    #[arg(long, help = "Maximum requests in flight (default: all at once)")]
    pub concurrency: Option<usize>,

    #[arg(long, help = "Per-request timeout in seconds [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Merge the optional config file and the flags into one [`RunConfig`].
    ///
    /// Precedence: explicit flag, then config file, then built-in default.
    /// The credential comes from `--api-key-env` when that flag is given and
    /// its variable is set, otherwise from the file's `api_key`, otherwise
    /// from the named variable (`API_KEY` when the flag is absent).
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                TomlConfig::from_file(path)?.into_run_config()
            }
            None => RunConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            config.timeout = Duration::from_secs(timeout_seconds);
        }
        if self.concurrency.is_some() {
            config.concurrency = self.concurrency;
        }
        config.items.extend(self.items.iter().cloned());

        let explicit_key = self.api_key_env.as_deref().and_then(read_api_key);
        if explicit_key.is_some() {
            config.api_key = explicit_key;
        } else if config.api_key.is_none() {
            let var = self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
            config.api_key = read_api_key(var);
            if config.api_key.is_none() {
                tracing::debug!("{} is not set, sending requests without a credential", var);
            }
        }

        Ok(config)
    }
}

fn read_api_key(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|key| !key.is_empty())
}

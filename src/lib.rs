pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, RunConfig};
pub use crate::core::{
    client::HttpModelClient,
    dispatch::{dispatch, dispatch_bounded, dispatch_settled},
    gather::GatherEngine,
};
pub use crate::domain::model::{GatherReport, RequestKind};
pub use crate::domain::ports::{ConfigProvider, ModelClient};
pub use crate::utils::error::{FanoutError, Result};

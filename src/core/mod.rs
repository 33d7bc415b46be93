pub mod client;
pub mod dispatch;
pub mod gather;

pub use crate::domain::model::{GatherReport, RequestKind};
pub use crate::domain::ports::{ConfigProvider, ModelClient};
pub use crate::utils::error::Result;

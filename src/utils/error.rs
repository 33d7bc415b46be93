use thiserror::Error;

#[derive(Error, Debug)]
pub enum FanoutError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FanoutError {
    /// True for failures of a single per-item operation (transport, status or body).
    pub fn is_operation_failure(&self) -> bool {
        matches!(
            self,
            FanoutError::ApiError(_)
                | FanoutError::HttpStatusError { .. }
                | FanoutError::SerializationError(_)
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FanoutError::ConfigError { .. }
                | FanoutError::InvalidConfigValueError { .. }
                | FanoutError::IoError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FanoutError::ApiError(e) if e.is_timeout() => {
                "A request timed out before the endpoint answered".to_string()
            }
            FanoutError::ApiError(_) => "Could not reach the model endpoint".to_string(),
            FanoutError::HttpStatusError { status, .. } => {
                format!("The model endpoint rejected a request (HTTP {})", status)
            }
            FanoutError::SerializationError(_) => {
                "The model endpoint returned a body that is not valid JSON".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, FanoutError>;

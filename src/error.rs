use thiserror::Error;

pub type Result<T> = std::result::Result<T, DesignError>;

#[derive(Error, Debug)]
pub enum DesignError {
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("engine missing on {vehicle}")]
    EngineMissing { vehicle: String },

    #[error("unknown payment method '{0}'")]
    UnknownPaymentMethod(String),

    #[error("invalid TOML description: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write demo output: {0}")]
    Io(#[from] std::io::Error),
}

impl DesignError {
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    pub fn engine_missing(vehicle: impl Into<String>) -> Self {
        Self::EngineMissing {
            vehicle: vehicle.into(),
        }
    }
}

/// Configuration and parameter validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported embedding model: {name}")]
    UnsupportedModel { name: String },

    #[error("unknown embedding provider: {provider}")]
    UnknownProvider { provider: String },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("config parse failed: {reason}")]
    ParseFailed { reason: String },

    #[error("config read failed: {path}: {reason}")]
    Io { path: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

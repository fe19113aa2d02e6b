// error.rs - Configuration errors
//
// The per-frame simulation never fails. Loading a scene config can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse scene config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid scene config: `{field}` {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid { field, reason: reason.into() }
    }
}

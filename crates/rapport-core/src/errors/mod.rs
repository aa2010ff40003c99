mod snapshot_error;

pub use snapshot_error::SnapshotError;

/// Top-level error for Rapport.
///
/// Policy operations are total and never return this. It only surfaces at
/// the edges: config parsing/validation and snapshot I/O.
#[derive(Debug, thiserror::Error)]
pub enum RapportError {
    #[error("invalid config for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RapportError {
    pub(crate) fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for RapportError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

pub type RapportResult<T> = Result<T, RapportError>;

//! Domain error types.

/// Top-level error type for alpharise.
#[derive(Debug, thiserror::Error)]
pub enum AlphariseError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no market data in {path}")]
    NoData { path: String },

    #[error("insufficient market data: have {rows} rows, need {minimum}")]
    InsufficientData { rows: usize, minimum: usize },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&AlphariseError> for std::process::ExitCode {
    fn from(err: &AlphariseError) -> Self {
        let code: u8 = match err {
            AlphariseError::Io(_) => 1,
            AlphariseError::ConfigParse { .. }
            | AlphariseError::ConfigMissing { .. }
            | AlphariseError::ConfigInvalid { .. } => 2,
            AlphariseError::Data { .. } => 3,
            AlphariseError::NoData { .. } | AlphariseError::InsufficientData { .. } => 4,
            AlphariseError::Report { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

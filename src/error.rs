use thiserror::Error;

/// Failures of the validator itself, as opposed to conformance findings.
///
/// Conformance findings are never raised: validators turn these errors into
/// report entries at the point of the check. Only client construction and
/// configuration loading surface to the caller of a run.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type ValidatorResult<T> = Result<T, ValidatorError>;

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a portfolio document.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document does not match the portfolio schema:\n{}", .0.join("\n"))]
    Schema(Vec<String>),

    #[error("validation failed:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}

impl PortfolioError {
    /// Individual problems, one per line of output.
    pub fn details(&self) -> Vec<String> {
        match self {
            PortfolioError::Schema(errors) | PortfolioError::Invalid(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

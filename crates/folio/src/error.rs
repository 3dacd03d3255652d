//! CLI error types.

use folio_config::LoadError;
use folio_nav::ConfigError;
use folio_scan::ScanError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

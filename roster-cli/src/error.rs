//! CLI error type.

use std::path::PathBuf;

use roster_lib::error::ExportError;
use roster_lib::error::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot load rows: {0}")]
    Load(#[from] LoadError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

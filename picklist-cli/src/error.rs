use std::io;
use std::path::PathBuf;

use picklist::InitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read page '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid page description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to mount widget: {0}")]
    Init(#[from] InitError),
}

//! Error type for the file-facing edges of the runtime.
//!
//! Simulation queries never fail; only config and save I/O return errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TilestrikeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TilestrikeError>;

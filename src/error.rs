use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("Failed to load audio asset '{path}': {reason}")]
    AudioAsset { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, GameError>;

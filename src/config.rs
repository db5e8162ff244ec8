use std::{env, fs, path::Path, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::info;

use crate::error::{GameError, Result};
use crate::tuning::Tuning;

// Runtime constants (not gameplay tuning).

pub const TICKS_PER_SECOND: u64 = 60;
pub const FRAME: Duration = Duration::from_micros(1_000_000 / TICKS_PER_SECOND);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// When false the game runs silently.
    pub enabled: bool,

    /// Background track checked at scene start. A configured but missing
    /// file aborts the scene.
    pub soundtrack: Option<PathBuf>,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            soundtrack: None,
        }
    }
}

/// Everything read from the settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub tuning: Tuning,
}

pub fn log_path() -> PathBuf {
    env::var("GALAGA_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("galaga.log"))
}

/// Settings file location: first CLI argument, then `GALAGA_CONFIG`.
pub fn settings_path(arg: Option<String>) -> Option<PathBuf> {
    arg.or_else(|| env::var("GALAGA_CONFIG").ok())
        .map(PathBuf::from)
}

pub fn parse_settings(text: &str, origin: &Path) -> Result<Settings> {
    let settings: Settings = toml::from_str(text).map_err(|source| GameError::SettingsParse {
        path: origin.to_path_buf(),
        source,
    })?;
    settings.tuning.validate()?;
    Ok(settings)
}

/// Load settings from `path`, or the defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = fs::read_to_string(path)?;
    let settings = parse_settings(&text, path)?;
    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

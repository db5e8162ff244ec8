/// Audio collaborator.
///
/// Sounds are fire-and-forget: the game never waits on playback. Sinks are
/// owned by the driver and handed gameplay events; nothing here is global.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::entities::GameEvent;
use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Shoot,
    Explosion,
    PlayerDeath,
}

impl SoundCue {
    /// Cue for a gameplay event, if it makes a sound.
    pub fn for_event(event: &GameEvent) -> Option<SoundCue> {
        match event {
            GameEvent::ShotFired => Some(SoundCue::Shoot),
            GameEvent::EnemyDestroyed { .. } => Some(SoundCue::Explosion),
            GameEvent::PlayerDestroyed => Some(SoundCue::PlayerDeath),
            GameEvent::ExtraLife | GameEvent::LevelUp { .. } | GameEvent::GameOver => None,
        }
    }
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);

    /// Prepare the scene's background track. A configured track that cannot
    /// be read is a setup error.
    fn start_soundtrack(&mut self, path: Option<&Path>) -> Result<()>;

    /// Play the cue for every event that has one.
    fn play_events(&mut self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(SoundCue::for_event) {
            self.play(cue);
        }
    }
}

/// Read a soundtrack asset, failing if it is missing or empty.
pub fn load_asset(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| GameError::AudioAsset {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if bytes.is_empty() {
        return Err(GameError::AudioAsset {
            path: path.to_path_buf(),
            reason: "file is empty".to_string(),
        });
    }
    Ok(bytes)
}

/// Used when audio is disabled or unavailable.
#[derive(Debug, Default)]
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _cue: SoundCue) {}

    fn start_soundtrack(&mut self, _path: Option<&Path>) -> Result<()> {
        Ok(())
    }
}

/// Terminal stand-in: rings the bell for destruction cues.
///
/// Shots are too frequent to ring for. The soundtrack is validated and kept
/// but the terminal has no way to stream it.
pub struct Bell<W: Write> {
    out: W,
    soundtrack: Option<Vec<u8>>,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            soundtrack: None,
        }
    }

    pub fn has_soundtrack(&self) -> bool {
        self.soundtrack.is_some()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for Bell<W> {
    fn play(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::Shoot => {}
            SoundCue::Explosion | SoundCue::PlayerDeath => {
                // A lost bell is not worth interrupting the frame for.
                if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
                    debug!(error = %e, "bell write failed");
                }
            }
        }
    }

    fn start_soundtrack(&mut self, path: Option<&Path>) -> Result<()> {
        if let Some(path) = path {
            let bytes = load_asset(path)?;
            info!(path = %path.display(), bytes = bytes.len(), "soundtrack loaded");
            self.soundtrack = Some(bytes);
        }
        Ok(())
    }
}

/// Records every cue; useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct Recorder {
    pub cues: Vec<SoundCue>,
}

impl AudioSink for Recorder {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }

    fn start_soundtrack(&mut self, path: Option<&Path>) -> Result<()> {
        if let Some(path) = path {
            load_asset(path)?;
        }
        Ok(())
    }
}

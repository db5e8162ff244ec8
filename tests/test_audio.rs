use std::path::{Path, PathBuf};

use galaga::audio::{load_asset, AudioSink, Bell, Muted, Recorder, SoundCue};
use galaga::entities::GameEvent;
use galaga::GameError;

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("galaga-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn events_map_to_cues() {
    assert_eq!(SoundCue::for_event(&GameEvent::ShotFired), Some(SoundCue::Shoot));
    assert_eq!(
        SoundCue::for_event(&GameEvent::EnemyDestroyed { points: 50 }),
        Some(SoundCue::Explosion)
    );
    assert_eq!(
        SoundCue::for_event(&GameEvent::PlayerDestroyed),
        Some(SoundCue::PlayerDeath)
    );
    assert_eq!(SoundCue::for_event(&GameEvent::LevelUp { level: 2 }), None);
    assert_eq!(SoundCue::for_event(&GameEvent::GameOver), None);
}

#[test]
fn recorder_plays_cues_in_event_order() {
    let mut audio = Recorder::default();
    audio.play_events(&[
        GameEvent::ShotFired,
        GameEvent::ExtraLife,
        GameEvent::EnemyDestroyed { points: 150 },
        GameEvent::PlayerDestroyed,
    ]);
    assert_eq!(
        audio.cues,
        vec![SoundCue::Shoot, SoundCue::Explosion, SoundCue::PlayerDeath]
    );
}

#[test]
fn bell_rings_only_for_destruction() {
    let mut audio = Bell::new(Vec::new());
    audio.play(SoundCue::Shoot);
    audio.play_events(&[GameEvent::ShotFired, GameEvent::ExtraLife]);
    assert!(!audio.has_soundtrack());
    assert!(audio.into_inner().is_empty());

    let mut audio = Bell::new(Vec::new());
    audio.play(SoundCue::Explosion);
    audio.play_events(&[GameEvent::PlayerDestroyed]);
    assert_eq!(audio.into_inner(), b"\x07\x07".to_vec());
}

#[test]
fn missing_soundtrack_is_fatal() {
    let missing = Path::new("/nonexistent/galaga/theme.ogg");
    let err = Bell::new(Vec::new()).start_soundtrack(Some(missing)).unwrap_err();
    assert!(matches!(err, GameError::AudioAsset { .. }));
    assert!(err.to_string().contains("theme.ogg"));
}

#[test]
fn empty_soundtrack_is_rejected() {
    let path = temp_file("empty.ogg", b"");
    let err = load_asset(&path).unwrap_err();
    assert!(matches!(err, GameError::AudioAsset { .. }));
    let _ = std::fs::remove_file(path);
}

#[test]
fn readable_soundtrack_is_loaded() {
    let path = temp_file("theme.ogg", b"OggS fake");
    let mut audio = Bell::new(Vec::new());
    audio.start_soundtrack(Some(&path)).unwrap();
    assert!(audio.has_soundtrack());
    let _ = std::fs::remove_file(path);
}

#[test]
fn no_soundtrack_configured_is_fine() {
    assert!(Muted.start_soundtrack(None).is_ok());
    assert!(Bell::new(Vec::new()).start_soundtrack(None).is_ok());
    assert!(Recorder::default().start_soundtrack(None).is_ok());
}

#[test]
fn muted_sink_ignores_missing_assets() {
    // Audio is off entirely; nothing is loaded.
    assert!(Muted.start_soundtrack(Some(Path::new("/nonexistent.ogg"))).is_ok());
}

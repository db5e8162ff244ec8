use std::path::Path;

use galaga::config::{load_settings, parse_settings, Settings};
use galaga::tuning::Tuning;
use galaga::GameError;

#[test]
fn missing_file_path_gives_defaults() {
    let settings = load_settings(None).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.audio.enabled);
    assert!(settings.audio.soundtrack.is_none());
}

#[test]
fn defaults_are_valid() {
    assert!(Tuning::default().validate().is_ok());
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let text = r#"
        [audio]
        enabled = false
        soundtrack = "assets/gameplay.ogg"

        [tuning.player]
        speed = 7.5
        lives = 5

        [tuning.wave]
        rows = 4
        max_cols = 5
    "#;
    let settings = parse_settings(text, Path::new("test.toml")).unwrap();
    let defaults = Tuning::default();

    assert!(!settings.audio.enabled);
    assert_eq!(
        settings.audio.soundtrack.as_deref(),
        Some(Path::new("assets/gameplay.ogg"))
    );
    assert_eq!(settings.tuning.player.speed, 7.5);
    assert_eq!(settings.tuning.player.lives, 5);
    assert_eq!(settings.tuning.player.start_x, defaults.player.start_x);
    assert_eq!(settings.tuning.wave.rows, 4);
    assert_eq!(settings.tuning.wave.capacity(), 20);
    assert_eq!(settings.tuning.wave.initial_size, defaults.wave.initial_size);
    assert_eq!(settings.tuning.enemy, defaults.enemy);
    assert_eq!(settings.tuning.scoring, defaults.scoring);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let err = parse_settings("[tuning.player\nspeed = ", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, GameError::SettingsParse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = parse_settings("[tuning.wave]\nrows = \"six\"\n", Path::new("t.toml")).unwrap_err();
    assert!(matches!(err, GameError::SettingsParse { .. }));
}

#[test]
fn zero_rows_rejected() {
    let err = parse_settings("[tuning.wave]\nrows = 0\n", Path::new("t.toml")).unwrap_err();
    assert!(matches!(err, GameError::InvalidTuning(_)));
}

#[test]
fn out_of_range_dive_chance_rejected() {
    let mut t = Tuning::default();
    t.dive.base_chance = 1.5;
    assert!(matches!(t.validate(), Err(GameError::InvalidTuning(_))));
}

#[test]
fn non_positive_enemy_speed_rejected() {
    let mut t = Tuning::default();
    t.enemy.base_speed = 0.0;
    assert!(t.validate().is_err());
}

#[test]
fn unreadable_file_is_io_error() {
    let err = load_settings(Some(Path::new("/nonexistent/galaga/settings.toml"))).unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}

#[test]
fn nan_speed_rejected() {
    let err = parse_settings("[tuning.enemy]\nbase_speed = nan\n", Path::new("t.toml")).unwrap_err();
    assert!(matches!(err, GameError::InvalidTuning(_)));
}

#[test]
fn non_finite_floats_rejected() {
    let cases = [
        "[tuning.wave]\nspacing_x = nan\n",
        "[tuning.wave]\nspeed_step = inf\n",
        "[tuning.path]\nloops = nan\n",
        "[tuning.dive]\ncurve = -inf\n",
        "[tuning.dive]\nbase_chance = nan\n",
        "[tuning.player]\nstart_x = nan\n",
        "[tuning.timers]\nintro_speed = nan\n",
    ];
    for text in cases {
        let result = parse_settings(text, Path::new("t.toml"));
        assert!(
            matches!(result, Err(GameError::InvalidTuning(_))),
            "accepted {text:?}"
        );
    }
}

#[test]
fn empty_waves_rejected() {
    let err = parse_settings("[tuning.wave]\nmax_size = 0\n", Path::new("t.toml")).unwrap_err();
    assert!(matches!(err, GameError::InvalidTuning(_)));

    let mut t = Tuning::default();
    t.wave.initial_size = 30;
    t.wave.max_size = 20;
    assert!(t.validate().is_err());
    t.wave.max_size = 30;
    assert!(t.validate().is_ok());
}

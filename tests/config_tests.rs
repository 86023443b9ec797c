// Host-side tests for query-string configuration and the autoplay gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod app {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod autoplay {
        include!("../src/core/autoplay.rs");
    }
}

use app::autoplay::*;
use app::config::*;
use app::constants::*;

#[test]
fn empty_query_gives_defaults() {
    let (cfg, warnings) = AppConfig::from_query("");
    assert_eq!(cfg, AppConfig::default());
    assert!(warnings.is_empty());
    assert_eq!(cfg.log_level, log::Level::Info);
    assert_eq!(cfg.music_volume, MUSIC_VOLUME);
    assert_eq!(cfg.particles, PARTICLE_COUNT);
}

#[test]
fn parses_known_keys() {
    let (cfg, warnings) = AppConfig::from_query("?log=DEBUG&volume=0.2&muted&photos=3&particles=10");
    assert!(warnings.is_empty(), "{:?}", warnings);
    assert_eq!(cfg.log_level, log::Level::Debug);
    assert!((cfg.music_volume - 0.2).abs() < 1e-9);
    assert!(cfg.muted);
    assert_eq!(cfg.photos, 3);
    assert_eq!(cfg.particles, 10);
}

#[test]
fn volume_is_clamped() {
    let (cfg, _) = AppConfig::from_query("volume=3");
    assert_eq!(cfg.music_volume, 1.0);
    let (cfg, _) = AppConfig::from_query("volume=-1");
    assert_eq!(cfg.music_volume, 0.0);
}

#[test]
fn bad_values_fall_back_with_warnings() {
    let (cfg, warnings) =
        AppConfig::from_query("?log=loud&volume=abc&photos=99&particles=100000&muted=false");
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(warnings.len(), 4);
}

#[test]
fn unknown_keys_are_ignored() {
    let (cfg, warnings) = AppConfig::from_query("?utm_source=mail&&x");
    assert_eq!(cfg, AppConfig::default());
    assert!(warnings.is_empty());
}

#[test]
fn gate_starts_idle_and_allows_one_attempt_at_a_time() {
    let mut g = AutoplayGate::default();
    assert_eq!(g.state(), AutoplayState::Idle);
    assert!(g.begin_attempt());
    assert!(!g.begin_attempt());
    assert_eq!(g.attempts(), 1);
}

#[test]
fn rejected_autoplay_is_retried_on_next_gesture() {
    let mut g = AutoplayGate::default();
    assert!(g.begin_attempt());
    g.failed();
    assert!(!g.is_started());
    assert!(g.begin_attempt());
    g.succeeded();
    assert!(g.is_started());
    assert_eq!(g.attempts(), 2);
}

#[test]
fn started_music_is_never_replayed() {
    let mut g = AutoplayGate::default();
    g.begin_attempt();
    g.succeeded();
    g.failed();
    assert!(g.is_started());
    assert!(!g.begin_attempt());
}

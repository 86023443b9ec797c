// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn repulsion_tuning_is_positive() {
    assert!(CURSOR_REPEL_RADIUS_PX > 0.0);
    assert!(CURSOR_PUSH_STRENGTH > 0.0);
    assert!(EDGE_THRESHOLD_PX > 0.0);
    assert!(EDGE_PUSH_STRENGTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn collage_grid_fits_the_photo_list() {
    assert!(COLLAGE_DISTINCT_PHOTOS * COLLAGE_REPEATS <= COLLAGE_MAX_PHOTOS);
    // jitter margin must leave room inside a cell
    assert!(100.0 / COLLAGE_COLS as f32 > COLLAGE_CELL_MARGIN);
    assert!(100.0 / COLLAGE_ROWS as f32 > COLLAGE_CELL_MARGIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_lifetimes_are_short_and_bounded() {
    assert!(SPARKLE_LIFETIME_MS > 0 && BURST_LIFETIME_MS > 0);
    assert!(CONFETTI_DURATION_MS > CONFETTI_INTERVAL_MS as f64);
    // steady-state confetti load must fit well inside the node budget
    let overlapping = (CONFETTI_DURATION_MS / CONFETTI_INTERVAL_MS as f64).ceil() as usize;
    assert!(overlapping * CONFETTI_PER_VOLLEY < MAX_LIVE_EFFECT_NODES);
    assert!(PARTICLE_COUNT <= PARTICLE_MAX_COUNT);
}

#[test]
fn palettes_are_css_hex_colors() {
    for c in PARTICLE_COLORS
        .iter()
        .chain(SPARKLE_COLORS.iter())
        .chain(CONFETTI_COLORS.iter())
    {
        assert!(c.starts_with('#') && c.len() == 7, "bad color {}", c);
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}

#[test]
fn dom_hooks_are_distinct() {
    let mut ids = vec![
        START_BTN_ID,
        NEXT_BTN_ID,
        YES_BTN_ID,
        NO_BTN_ID,
        CELEBRATION_ID,
        COLLAGE_CONTAINER_ID,
        PARTICLES_CONTAINER_ID,
        BG_MUSIC_ID,
    ];
    let n = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), n);
    assert!(QUESTION_SELECTOR.starts_with('.'));
    assert!(BUTTONS_SELECTOR.starts_with('.'));
    assert!(CONTENT_WRAPPER_SELECTOR.starts_with('.'));
}

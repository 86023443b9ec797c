// Host-side tests for the evasive button physics.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod app {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod physics {
        include!("../src/core/physics.rs");
    }
}

use app::constants::*;
use app::physics::*;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 800.0);

fn centered_button() -> Rect {
    // 120x48 button in the middle of the viewport
    Rect::new(580.0, 376.0, 120.0, 48.0)
}

#[test]
fn cursor_outside_radius_has_no_effect() {
    let p = RepulsionParams::default();
    let center = Vec2::new(500.0, 500.0);
    let f = cursor_force(center, Vec2::new(500.0 + CURSOR_REPEL_RADIUS_PX, 500.0), &p);
    assert_eq!(f, Vec2::ZERO);
    let f = cursor_force(center, Vec2::new(900.0, 900.0), &p);
    assert_eq!(f, Vec2::ZERO);
}

#[test]
fn cursor_pushes_button_away() {
    let p = RepulsionParams::default();
    let center = Vec2::new(500.0, 500.0);

    // cursor to the left: pushed right
    let f = cursor_force(center, Vec2::new(450.0, 500.0), &p);
    assert!(f.x > 0.0);
    assert!(f.y.abs() < 1e-5);

    // cursor below: pushed up
    let f = cursor_force(center, Vec2::new(500.0, 560.0), &p);
    assert!(f.y < 0.0);
    assert!(f.x.abs() < 1e-5);
}

#[test]
fn cursor_force_grows_as_cursor_approaches() {
    let p = RepulsionParams::default();
    let center = Vec2::new(500.0, 500.0);
    let far = cursor_force(center, Vec2::new(380.0, 500.0), &p).length();
    let near = cursor_force(center, Vec2::new(480.0, 500.0), &p).length();
    assert!(near > far);
    // linear falloff: at half the radius, half the push
    let half = cursor_force(center, Vec2::new(500.0 - p.cursor_radius * 0.5, 500.0), &p);
    assert!((half.length() - p.cursor_push * 0.5).abs() < 1e-4);
}

#[test]
fn cursor_on_center_escapes_left() {
    let p = RepulsionParams::default();
    let c = Vec2::new(300.0, 300.0);
    let f = cursor_force(c, c, &p);
    assert!((f.x + p.cursor_push).abs() < 1e-5);
    assert_eq!(f.y, 0.0);
}

#[test]
fn edge_force_is_zero_in_the_middle() {
    let p = RepulsionParams::default();
    assert_eq!(edge_force(&centered_button(), VIEWPORT, &p), Vec2::ZERO);
}

#[test]
fn edge_force_points_inward_near_each_edge() {
    let p = RepulsionParams::default();
    let near_left = Rect::new(20.0, 376.0, 120.0, 48.0);
    assert!(edge_force(&near_left, VIEWPORT, &p).x > 0.0);

    let near_right = Rect::new(VIEWPORT.x - 140.0, 376.0, 120.0, 48.0);
    assert!(edge_force(&near_right, VIEWPORT, &p).x < 0.0);

    let near_top = Rect::new(580.0, 10.0, 120.0, 48.0);
    assert!(edge_force(&near_top, VIEWPORT, &p).y > 0.0);

    let near_bottom = Rect::new(580.0, VIEWPORT.y - 60.0, 120.0, 48.0);
    assert!(edge_force(&near_bottom, VIEWPORT, &p).y < 0.0);
}

#[test]
fn edge_force_at_the_edge_is_full_strength() {
    let p = RepulsionParams::default();
    let at_left = Rect::new(0.0, 376.0, 120.0, 48.0);
    let f = edge_force(&at_left, VIEWPORT, &p);
    assert!((f.x - EDGE_PUSH_STRENGTH).abs() < 1e-5);
}

#[test]
fn idle_button_does_not_move() {
    let mut b = EvasiveButton::default();
    let off = b.step(centered_button(), None, VIEWPORT);
    assert_eq!(off, Vec2::ZERO);
}

#[test]
fn offset_accumulates_across_frames() {
    let mut b = EvasiveButton::default();
    let mut rect = centered_button();
    let cursor = Some(rect.center() - Vec2::new(40.0, 0.0));
    let mut last = 0.0;
    for _ in 0..5 {
        let before = b.offset();
        let off = b.step(rect, cursor, VIEWPORT);
        rect = rect.translated(off - before);
        assert!(off.x > last);
        last = off.x;
    }
}

#[test]
fn button_never_leaves_viewport_when_chased_into_a_corner() {
    let mut b = EvasiveButton::default();
    let base = centered_button();
    let mut rect = base;
    // cursor keeps sitting just up-left of the button, driving it toward the bottom-right corner
    for _ in 0..2000 {
        let cursor = rect.center() - Vec2::new(10.0, 10.0);
        let off = b.step(rect, Some(cursor), VIEWPORT);
        rect = base.translated(off);
        assert!(rect.is_within(VIEWPORT), "escaped viewport: {:?}", rect);
    }
}

#[test]
fn offscreen_button_is_pulled_back_in() {
    let mut b = EvasiveButton::default();
    let outside = Rect::new(-50.0, VIEWPORT.y + 10.0, 120.0, 48.0);
    let off = b.step(outside, None, VIEWPORT);
    assert!(outside.translated(off).is_within(VIEWPORT));
}

#[test]
fn oversized_button_is_pinned_to_top_left() {
    let mut b = EvasiveButton::default();
    let tiny_viewport = Vec2::new(100.0, 30.0);
    let rect = Rect::new(10.0, 5.0, 120.0, 48.0);
    let off = b.step(rect, None, tiny_viewport);
    let moved = rect.translated(off);
    assert_eq!(moved.left, 0.0);
    assert_eq!(moved.top, 0.0);
}

#[test]
fn reset_clears_offset() {
    let mut b = EvasiveButton::default();
    let rect = Rect::new(10.0, 376.0, 120.0, 48.0);
    b.step(rect, None, VIEWPORT);
    assert_ne!(b.offset(), Vec2::ZERO);
    b.reset();
    assert_eq!(b.offset(), Vec2::ZERO);
}

#[test]
fn translate_css_formats_pixels() {
    assert_eq!(translate_css(Vec2::new(12.5, -3.0)), "translate(12.5px, -3px)");
}

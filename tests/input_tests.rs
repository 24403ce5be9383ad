// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::*;
use glam::Vec2;
use input::*;

#[test]
fn css_to_ndc_maps_corners_and_center() {
    let size = Vec2::new(800.0, 600.0);
    assert_eq!(css_to_ndc(Vec2::new(0.0, 0.0), size), Vec2::new(-1.0, 1.0));
    assert_eq!(css_to_ndc(Vec2::new(800.0, 600.0), size), Vec2::new(1.0, -1.0));
    assert_eq!(css_to_ndc(Vec2::new(400.0, 300.0), size), Vec2::ZERO);
    let q = css_to_ndc(Vec2::new(200.0, 450.0), size);
    assert!((q.x + 0.5).abs() < 1e-6);
    assert!((q.y + 0.5).abs() < 1e-6);
}

#[test]
fn css_to_ndc_handles_degenerate_size() {
    assert_eq!(css_to_ndc(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
    assert_eq!(
        css_to_ndc(Vec2::new(10.0, 10.0), Vec2::new(100.0, 0.0)),
        Vec2::ZERO
    );
}

#[test]
fn short_primary_press_is_a_click() {
    let mut p = PointerState::default();
    p.press(Vec2::new(100.0, 100.0), BUTTON_PRIMARY, false);
    assert!(!p.pan);
    assert_eq!(p.drag_to(Vec2::new(101.0, 101.0)), Some(Vec2::new(1.0, 1.0)));
    assert!(p.release());
    assert!(!p.down);
}

#[test]
fn drag_past_tolerance_is_not_a_click() {
    let mut p = PointerState::default();
    p.press(Vec2::ZERO, BUTTON_PRIMARY, false);
    p.drag_to(Vec2::new(CLICK_DRAG_TOLERANCE_PX, 0.0));
    p.drag_to(Vec2::new(CLICK_DRAG_TOLERANCE_PX + 3.0, 0.0));
    assert!(p.travel > CLICK_DRAG_TOLERANCE_PX);
    assert!(!p.release());
}

#[test]
fn travel_accumulates_back_and_forth() {
    let mut p = PointerState::default();
    p.press(Vec2::ZERO, BUTTON_PRIMARY, false);
    for _ in 0..4 {
        p.drag_to(Vec2::new(3.0, 0.0));
        p.drag_to(Vec2::ZERO);
    }
    // ends where it started but still counts as a drag
    assert!(!p.release());
}

#[test]
fn secondary_or_shift_press_pans_and_never_clicks() {
    let mut p = PointerState::default();
    p.press(Vec2::ZERO, BUTTON_SECONDARY, false);
    assert!(p.pan);
    assert!(!p.release());

    p.press(Vec2::ZERO, BUTTON_PRIMARY, true);
    assert!(p.pan);
    // shift-click still lands as a click
    assert!(p.release());
}

#[test]
fn movement_without_press_is_ignored() {
    let mut p = PointerState::default();
    assert_eq!(p.drag_to(Vec2::new(50.0, 50.0)), None);
    assert!(!p.release());
}

#[test]
fn wheel_delta_scales_by_mode() {
    assert_eq!(wheel_delta_px(-100.0, 0), -100.0);
    assert_eq!(wheel_delta_px(3.0, 1), 3.0 * WHEEL_LINE_PX);
    assert_eq!(wheel_delta_px(1.0, 2), WHEEL_PAGE_PX);
}

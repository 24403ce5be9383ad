// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use viewer_core::{
    MARKER_SPHERE_RADIUS, OVERLAY_HIDE_MS, POINT_SIZE_MAX, POINT_SIZE_MIN, TRANSITION_MS,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(CLICK_DRAG_TOLERANCE_PX > 0.0 && CLICK_DRAG_TOLERANCE_PX < 20.0);
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(WHEEL_PAGE_PX > WHEEL_LINE_PX);
    assert!(MARKER_INSTANCE_CAPACITY >= 2);
    assert_ne!(BUTTON_PRIMARY, BUTTON_SECONDARY);
}

#[test]
fn dom_ids_are_non_empty_and_distinct() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!CONFIG_ELEMENT_ID.is_empty());
    assert_ne!(CANVAS_ID, CONFIG_ELEMENT_ID);
    assert!(CANVAS_STYLE.contains("touch-action:none"));
}

#[test]
fn query_keys_match_config_overrides() {
    let config = viewer_core::ViewerConfig::default().with_overrides(
        QUERY_OVERRIDE_KEYS
            .iter()
            .map(|k| (*k, format!("{}-value", k))),
    );
    assert_eq!(config.cloud_url, "cloud-value");
    assert_eq!(config.cameras_url, "cameras-value");
    assert_eq!(config.image_prefix, "images-value");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shared_timing_and_size_constants_are_consistent() {
    assert_eq!(TRANSITION_MS, 1500.0);
    assert_eq!(OVERLAY_HIDE_MS, 3000);
    assert!(POINT_SIZE_MIN < POINT_SIZE_MAX);
    assert!(MARKER_SPHERE_RADIUS > POINT_SIZE_MAX);
}

// Host-side tests for page configuration defaults and overrides.

use viewer_core::*;

#[test]
fn config_defaults_match_host_page() {
    let config = ViewerConfig::default();
    assert_eq!(config.cloud_url, "final_point_cloud.ply");
    assert_eq!(config.cameras_url, "cameras.json");
    assert_eq!(config.next_button_id, "next-view");
    assert_eq!(config.reset_button_id, "reset-view");
    assert_eq!(config.overlay_visible_class, "visible");
    assert_eq!(config.image_url("img_3.jpg"), "img_3.jpg");
}

#[test]
fn config_json_and_overrides_layer() {
    let config = ViewerConfig::from_json(r#"{ "cloud_url": "scan.ply", "image_prefix": "imgs" }"#)
        .expect("config");
    assert_eq!(config.cloud_url, "scan.ply");
    assert_eq!(config.cameras_url, "cameras.json");
    assert_eq!(config.image_url("a.jpg"), "imgs/a.jpg");

    let config = config.with_overrides([
        ("cameras", "poses.json"),
        ("images", "photos/"),
        ("cloud", ""),
        ("unknown", "x"),
    ]);
    assert_eq!(config.cloud_url, "scan.ply");
    assert_eq!(config.cameras_url, "poses.json");
    assert_eq!(config.image_url("a.jpg"), "photos/a.jpg");

    assert!(matches!(
        ViewerConfig::from_json("[1, 2]"),
        Err(ViewerError::Config(_))
    ));
}

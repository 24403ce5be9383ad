// Host-side tests for camera record parsing and generated layouts.

use glam::Vec3;
use std::path::Path;
use viewer_core::*;

#[test]
fn parses_manifest_object() {
    let json = r#"{
        "cameras": [
            { "position": [1, 2, 3], "quaternion": [0, 0, 0, 1], "image": "a.jpg", "name": "a" },
            { "position": [-1, 0, 0.5], "quaternion": [0, 0.7071068, 0, 0.7071068], "image": "b.jpg" }
        ]
    }"#;
    let records = parse_camera_records(json).expect("parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(records[0].name.as_deref(), Some("a"));
    assert_eq!(records[1].image, "b.jpg");
    assert_eq!(records[1].name, None);
}

#[test]
fn parses_bare_array_in_file_order() {
    let json = r#"[
        { "position": [0, 0, 0], "quaternion": [0, 0, 0, 1], "image": "z.jpg" },
        { "position": [0, 0, 1], "quaternion": [0, 0, 0, 1], "image": "a.jpg" }
    ]"#;
    let images: Vec<String> = parse_camera_records(json)
        .expect("parse")
        .into_iter()
        .map(|r| r.image)
        .collect();
    assert_eq!(images, vec!["z.jpg", "a.jpg"]);
}

#[test]
fn empty_manifest_is_valid() {
    assert!(parse_camera_records(r#"{ "cameras": [] }"#)
        .expect("parse")
        .is_empty());
}

#[test]
fn malformed_json_is_a_records_error() {
    for bad in [
        "{ not json",
        r#"{ "cameras": [ { "position": [0, 0], "quaternion": [0, 0, 0, 1], "image": "a" } ] }"#,
        r#"{ "views": [] }"#,
    ] {
        assert!(
            matches!(parse_camera_records(bad), Err(ViewerError::Records(_))),
            "{}",
            bad
        );
    }
}

#[test]
fn degenerate_quaternion_falls_back_to_identity() {
    let r = CameraRecord {
        position: [0.0, 0.0, 0.0],
        quaternion: [0.0, 0.0, 0.0, 0.0],
        image: "a.jpg".to_string(),
        name: None,
    };
    assert_eq!(r.look_at_target(), Vec3::new(0.0, 0.0, -1.0));

    // non-unit input is normalized before use
    let scaled = CameraRecord {
        quaternion: [0.0, 0.0, 0.0, 4.0],
        ..r
    };
    assert!(scaled.look_at_target().distance(Vec3::new(0.0, 0.0, -1.0)) < 1e-6);
}

#[test]
fn manifest_serialization_omits_missing_names() {
    let manifest = CameraManifest {
        cameras: vec![CameraRecord {
            position: [1.0, 0.0, 0.4],
            quaternion: [0.0, 0.0, 0.0, 1.0],
            image: "img.png".to_string(),
            name: None,
        }],
    };
    let json = serde_json::to_string(&manifest).expect("serialize");
    assert!(!json.contains("name"));
    assert_eq!(parse_camera_records(&json).expect("parse"), manifest.cameras);
}

#[test]
fn image_extensions_are_case_insensitive() {
    for name in ["a.jpg", "b.JPEG", "c.png", "d.Tif", "e.tiff"] {
        assert!(is_image_file(Path::new(name)), "{}", name);
    }
    for name in ["notes.txt", "cloud.ply", "README", "archive.jpg.zip"] {
        assert!(!is_image_file(Path::new(name)), "{}", name);
    }
}

#[test]
fn circle_layout_spaces_cameras_evenly() {
    let images: Vec<String> = ["img_0.jpg", "img_1.jpg", "img_2.jpg", "img_3.jpg"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let records = circle_layout(&images, 2.0);
    assert_eq!(records.len(), 4);

    let expected = [
        [2.0, 0.0, 0.4],
        [0.0, 0.0, 1.6],
        [-2.0, 0.0, 0.4],
        [0.0, 0.0, -0.8],
    ];
    for (r, e) in records.iter().zip(expected) {
        assert!(r.position().distance(Vec3::from_array(e)) < 1e-5, "{:?}", r);
        assert_eq!(r.quaternion, [0.0, 0.0, 0.0, 1.0]);
    }
    assert_eq!(records[1].image, "img_1.jpg");
    assert_eq!(records[1].name.as_deref(), Some("img_1"));
}

#[test]
fn circle_layout_of_nothing_is_empty() {
    assert!(circle_layout(&[], 1.0).is_empty());
}

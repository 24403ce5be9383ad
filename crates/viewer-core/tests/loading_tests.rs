// Host-side tests for the startup load policies, driven with in-memory transports.

use pollster::block_on;
use std::cell::Cell;
use viewer_core::error::Result;
use viewer_core::*;

const TINY_PLY: &str = "ply
format ascii 1.0
element vertex 2
property float x
property float y
property float z
end_header
-1 0 0
1 0 0
";

#[derive(Default)]
struct RecordingIndicator {
    texts: Vec<String>,
    hidden: bool,
}

impl LoadingIndicator for RecordingIndicator {
    fn set_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}

async fn not_found() -> Result<Vec<u8>> {
    Err(ViewerError::Http {
        status: 404,
        url: "final_point_cloud.ply".to_string(),
    })
}

async fn network_down() -> Result<Vec<u8>> {
    Err(ViewerError::Network("connection refused".to_string()))
}

async fn tiny_ply() -> Result<Vec<u8>> {
    Ok(TINY_PLY.as_bytes().to_vec())
}

async fn garbage() -> Result<Vec<u8>> {
    Ok(b"<html>not found</html>".to_vec())
}

#[test]
fn primary_success_never_touches_fallback() {
    let calls = Cell::new(0);
    let mut indicator = RecordingIndicator::default();
    let loaded = block_on(load_point_cloud(
        tiny_ply,
        || {
            calls.set(calls.get() + 1);
            tiny_ply()
        },
        &mut indicator,
    ));
    let (prepared, source) = loaded.expect("loaded");
    assert_eq!(source, CloudSource::Primary);
    assert_eq!(prepared.cloud.len(), 2);
    assert!((prepared.bounds.radius - 1.0).abs() < 1e-6);
    assert_eq!(calls.get(), 0);
    assert_eq!(indicator.texts, vec![LOADING_TEXT, PARSING_TEXT]);
    // hiding is left to the caller once the cloud is in the scene
    assert!(!indicator.hidden);
}

#[test]
fn http_error_triggers_exactly_one_fallback() {
    let calls = Cell::new(0);
    let mut indicator = RecordingIndicator::default();
    let loaded = block_on(load_point_cloud(
        not_found,
        || {
            calls.set(calls.get() + 1);
            tiny_ply()
        },
        &mut indicator,
    ));
    assert_eq!(calls.get(), 1);
    assert_eq!(loaded.map(|(_, s)| s), Some(CloudSource::Fallback));
    assert_eq!(indicator.texts, vec![LOADING_TEXT, FALLBACK_TEXT]);
}

#[test]
fn unparseable_primary_also_falls_back() {
    let calls = Cell::new(0);
    let mut indicator = RecordingIndicator::default();
    let loaded = block_on(load_point_cloud(
        garbage,
        || {
            calls.set(calls.get() + 1);
            tiny_ply()
        },
        &mut indicator,
    ));
    assert_eq!(calls.get(), 1);
    assert!(loaded.is_some());
    assert_eq!(
        indicator.texts,
        vec![LOADING_TEXT, PARSING_TEXT, FALLBACK_TEXT]
    );
}

#[test]
fn fallback_failure_is_terminal() {
    let calls = Cell::new(0);
    let mut indicator = RecordingIndicator::default();
    let loaded = block_on(load_point_cloud(
        not_found,
        || {
            calls.set(calls.get() + 1);
            network_down()
        },
        &mut indicator,
    ));
    assert!(loaded.is_none());
    assert_eq!(calls.get(), 1);
    assert_eq!(indicator.texts.last().map(String::as_str), Some(LOAD_ERROR_TEXT));
    assert!(!indicator.hidden);
}

#[test]
fn fallback_with_bad_bytes_is_terminal() {
    let mut indicator = RecordingIndicator::default();
    let loaded = block_on(load_point_cloud(network_down, garbage, &mut indicator));
    assert!(loaded.is_none());
    assert_eq!(indicator.texts.last().map(String::as_str), Some(LOAD_ERROR_TEXT));
}

#[test]
fn camera_records_load_and_soft_fail() {
    let ok = block_on(load_camera_records(|| async {
        Ok::<_, ViewerError>(
            r#"[{ "position": [0, 0, 0], "quaternion": [0, 0, 0, 1], "image": "a.jpg" }]"#
                .to_string(),
        )
    }));
    assert_eq!(ok.len(), 1);

    let missing = block_on(load_camera_records(|| async {
        Err::<String, _>(ViewerError::Http {
            status: 404,
            url: "cameras.json".to_string(),
        })
    }));
    assert!(missing.is_empty());

    let malformed = block_on(load_camera_records(|| async {
        Ok::<_, ViewerError>("{ broken".to_string())
    }));
    assert!(malformed.is_empty());
}

//! Load policies for the two startup inputs.
//!
//! Transport is supplied by the caller as async closures, so the same policy
//! drives browser fetches and host-side tests.

use crate::cloud::{PointCloud, PreparedCloud};
use crate::constants::*;
use crate::error::Result;
use crate::records::{parse_camera_records, CameraRecord};
use std::future::Future;

/// User-visible loading status.
pub trait LoadingIndicator {
    fn set_text(&mut self, text: &str);
    fn hide(&mut self);
}

/// Which path produced the point cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudSource {
    Primary,
    Fallback,
}

/// Fetch and parse camera records. Any failure is logged and yields no records.
pub async fn load_camera_records<F, Fut>(fetch: F) -> Vec<CameraRecord>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let parsed = match fetch().await {
        Ok(text) => parse_camera_records(&text),
        Err(e) => Err(e),
    };
    match parsed {
        Ok(records) => {
            log::info!("[cameras] loaded {} cameras", records.len());
            records
        }
        Err(e) => {
            log::error!("[cameras] error loading cameras: {}", e);
            Vec::new()
        }
    }
}

/// Load the point cloud through `primary`; if fetching or parsing fails, make
/// exactly one attempt through `fallback`. A fallback failure is terminal:
/// the indicator shows the error text and `None` is returned.
pub async fn load_point_cloud<P, PFut, F, FFut, L>(
    primary: P,
    fallback: F,
    indicator: &mut L,
) -> Option<(PreparedCloud, CloudSource)>
where
    P: FnOnce() -> PFut,
    PFut: Future<Output = Result<Vec<u8>>>,
    F: FnOnce() -> FFut,
    FFut: Future<Output = Result<Vec<u8>>>,
    L: LoadingIndicator + ?Sized,
{
    indicator.set_text(LOADING_TEXT);
    let primary_result = match primary().await {
        Ok(bytes) => {
            indicator.set_text(PARSING_TEXT);
            PointCloud::from_ply_bytes(&bytes)
        }
        Err(e) => Err(e),
    };

    let (cloud, source) = match primary_result {
        Ok(cloud) => (cloud, CloudSource::Primary),
        Err(e) => {
            log::warn!("[cloud] falling back to alternate loader after: {}", e);
            indicator.set_text(FALLBACK_TEXT);
            let fallback_result = match fallback().await {
                Ok(bytes) => PointCloud::from_ply_bytes(&bytes),
                Err(e) => Err(e),
            };
            match fallback_result {
                Ok(cloud) => (cloud, CloudSource::Fallback),
                Err(e) => {
                    log::error!("[cloud] error loading point cloud: {}", e);
                    indicator.set_text(LOAD_ERROR_TEXT);
                    return None;
                }
            }
        }
    };

    let prepared = PreparedCloud::new(cloud);
    log::info!(
        "[cloud] loaded {} points via {:?} (radius {:.3}, point size {:.4})",
        prepared.cloud.len(),
        source,
        prepared.bounds.radius,
        prepared.point_size
    );
    Some((prepared, source))
}

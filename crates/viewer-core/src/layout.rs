//! Placeholder camera layouts for image sets without recorded poses.

use crate::records::CameraRecord;
use std::f32::consts::TAU;
use std::path::Path;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff"];

/// Case-insensitive check against [`IMAGE_EXTENSIONS`].
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// One camera per image on a circle of `radius` around the origin, with
/// identity orientation. The z axis is squashed and lifted slightly so the
/// markers do not sit in the grid plane.
pub fn circle_layout(images: &[String], radius: f32) -> Vec<CameraRecord> {
    let n = images.len().max(1) as f32;
    images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let theta = i as f32 / n * TAU;
            let name = Path::new(image)
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string);
            CameraRecord {
                position: [
                    radius * theta.cos(),
                    0.0,
                    radius * theta.sin() * 0.6 + 0.4,
                ],
                quaternion: [0.0, 0.0, 0.0, 1.0],
                image: image.clone(),
                name,
            }
        })
        .collect()
}

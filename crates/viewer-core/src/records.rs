use crate::constants::LOOK_FORWARD;
use crate::error::Result;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// One recorded camera pose and the photo taken from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraRecord {
    pub position: [f32; 3],
    /// Orientation as `[x, y, z, w]`.
    pub quaternion: [f32; 4],
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CameraRecord {
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Orientation normalized for rotation; a degenerate quaternion is treated as identity.
    pub fn orientation(&self) -> Quat {
        let q = Quat::from_array(self.quaternion);
        if q.is_finite() && q.length_squared() > f32::EPSILON {
            q.normalize()
        } else {
            Quat::IDENTITY
        }
    }

    /// Point one unit in front of the camera along its view axis.
    pub fn look_at_target(&self) -> Vec3 {
        self.position() + self.orientation() * LOOK_FORWARD
    }
}

/// On-disk layout of `cameras.json`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraManifest {
    pub cameras: Vec<CameraRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CameraFile {
    Manifest(CameraManifest),
    Bare(Vec<CameraRecord>),
}

/// Parse camera records, accepting either `{ "cameras": [...] }` or a bare array.
/// Record order is preserved; it defines marker indices and navigation order.
pub fn parse_camera_records(json: &str) -> Result<Vec<CameraRecord>> {
    let file: CameraFile = serde_json::from_str(json)?;
    Ok(match file {
        CameraFile::Manifest(m) => m.cameras,
        CameraFile::Bare(cameras) => cameras,
    })
}

use crate::constants::*;
use crate::records::CameraRecord;
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelperTransform {
    pub position: Vec3,
    pub scale: f32,
}

impl Default for HelperTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Placement of the grid and axes helpers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneHelpers {
    pub grid: HelperTransform,
    pub axes: HelperTransform,
}

impl SceneHelpers {
    /// Recenter both helpers on a cloud and scale them with its radius.
    /// Scales never drop below 1 so small clouds keep visible helpers.
    pub fn fit_to(&mut self, center: Vec3, radius: f32) {
        self.grid = HelperTransform {
            position: center - Vec3::Y * (radius * GRID_DROP_FACTOR),
            scale: (radius * GRID_SCALE_FACTOR).max(1.0),
        };
        self.axes = HelperTransform {
            position: center,
            scale: (radius * AXES_SCALE_FACTOR).max(1.0),
        };
    }
}

/// Clickable proxy for a recorded camera pose, bound to its record by index.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraMarker {
    pub record_index: usize,
    pub position: Vec3,
    pub orientation: Quat,
    pub intensity: f32,
}

impl CameraMarker {
    pub fn from_record(record_index: usize, record: &CameraRecord) -> Self {
        Self {
            record_index,
            position: record.position(),
            orientation: record.orientation(),
            intensity: MARKER_INTENSITY_IDLE,
        }
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.intensity >= MARKER_INTENSITY_SELECTED
    }

    #[inline]
    pub fn pick_radius(&self) -> f32 {
        MARKER_SPHERE_RADIUS
    }

    /// Center of the direction cone, offset along the camera's view axis.
    pub fn cone_center(&self) -> Vec3 {
        self.position + self.orientation * (LOOK_FORWARD * MARKER_CONE_OFFSET)
    }

    pub fn cone_pick_radius(&self) -> f32 {
        (MARKER_CONE_RADIUS * MARKER_CONE_RADIUS
            + 0.25 * MARKER_CONE_HEIGHT * MARKER_CONE_HEIGHT)
            .sqrt()
    }

    pub fn sphere_model(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// Cone mesh is built apex-up (+Y); rotate it to point along the view axis.
    pub fn cone_model(&self) -> Mat4 {
        let apex_to_view = Quat::from_rotation_arc(Vec3::Y, LOOK_FORWARD);
        Mat4::from_rotation_translation(self.orientation * apex_to_view, self.cone_center())
    }
}

/// Mark exactly `selected` as highlighted (or none), resetting every other marker.
pub fn highlight_markers(markers: &mut [CameraMarker], selected: Option<usize>) {
    for (i, m) in markers.iter_mut().enumerate() {
        m.intensity = if Some(i) == selected {
            MARKER_INTENSITY_SELECTED
        } else {
            MARKER_INTENSITY_IDLE
        };
    }
}

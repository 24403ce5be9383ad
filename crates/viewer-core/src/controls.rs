//! Damped orbit / pan / zoom around a target point.
//!
//! Pointer input accumulates deltas; `update` applies a fraction of them each
//! frame and decays the remainder, which gives the glide-to-rest feel. The
//! camera eye is always rewritten from the target plus a spherical offset, so
//! moving the eye or target externally (e.g. during a transition) and then
//! calling `update` re-syncs the controller to the new pose.

use crate::camera::Camera;
use crate::constants::*;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
        }
    }

    /// Rotate by a pointer drag of `dx`, `dy` pixels; a full viewport height is one turn.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.rotate_speed;
    }

    /// Pan in the view plane so the point under the cursor tracks the drag.
    pub fn pan_by_pixels(&mut self, dx: f32, dy: f32, camera: &Camera, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let offset = camera.eye - self.target;
        let target_distance = offset.length() * (camera.fovy_radians / 2.0).tan();
        let forward = (-offset).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);
        let left_amount = 2.0 * dx * target_distance / h * self.pan_speed;
        let up_amount = 2.0 * dy * target_distance / h * self.pan_speed;
        self.pan_offset += -right * left_amount + up * up_amount;
    }

    /// Wheel zoom: negative `delta_y` moves closer.
    pub fn dolly(&mut self, delta_y: f32) {
        let step = ORBIT_ZOOM_SCALE.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.scale *= step;
        } else if delta_y > 0.0 {
            self.scale /= step;
        }
    }

    /// Drop accumulated input without applying it.
    pub fn reset_motion(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
        self.pan_offset = Vec3::ZERO;
    }

    /// Apply pending motion to `camera`; returns whether the eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let before = camera.eye;
        let offset = camera.eye - self.target;

        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };

        let k = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        theta += self.delta_theta * k;
        phi += self.delta_phi * k;
        phi = phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);

        radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);
        self.target += self.pan_offset * k;

        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        camera.eye = self.target + new_offset;
        camera.target = self.target;

        if self.enable_damping {
            let decay = 1.0 - self.damping_factor;
            self.delta_theta *= decay;
            self.delta_phi *= decay;
            self.pan_offset *= decay;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        camera.eye.distance_squared(before) > 1e-12
    }
}

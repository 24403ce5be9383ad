//! Perspective camera and scale-adaptive framing.
//!
//! The camera is a plain right-handed look-at description. Framing derives
//! eye distance and clip planes from a bounding sphere so clouds of very
//! different physical size end up filling a similar share of the viewport.

use crate::constants::*;
use crate::picking::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Default viewer camera: 75° vertical fov, eye at (2,2,2) looking at the origin.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: DEFAULT_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: sanitize_aspect(aspect),
            fovy_radians: DEFAULT_FOV_DEG.to_radians(),
            znear: DEFAULT_NEAR,
            zfar: DEFAULT_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    /// World-space ray through a point given in normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p_far = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            direction: (p_far - self.eye).normalize_or_zero(),
        }
    }

    pub fn apply_framing(&mut self, framing: &Framing) {
        self.eye = framing.eye;
        self.target = framing.target;
        self.znear = framing.near;
        self.zfar = framing.far;
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

/// Camera placement that fits a bounding sphere into the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framing {
    pub eye: Vec3,
    pub target: Vec3,
    pub distance: f32,
    pub near: f32,
    pub far: f32,
}

/// Radius actually used for framing; tiny clouds still get a usable view.
#[inline]
pub fn framing_radius(radius: f32) -> f32 {
    radius.max(MIN_FRAMING_RADIUS)
}

#[inline]
pub fn framing_distance(radius: f32, fovy_radians: f32) -> f32 {
    framing_radius(radius) * FIT_OFFSET / (fovy_radians / 2.0).sin()
}

/// Place the eye along the (1,1,1) diagonal from `center`, far enough that the
/// sphere fits, with clip planes scaled to the same radius.
pub fn frame_sphere(center: Vec3, radius: f32, fovy_radians: f32) -> Framing {
    let r = framing_radius(radius);
    let distance = framing_distance(radius, fovy_radians);
    let direction = Vec3::ONE.normalize();
    Framing {
        eye: center + direction * distance,
        target: center,
        distance,
        near: MIN_NEAR.max(r / NEAR_RADIUS_DIVISOR),
        far: (distance * FAR_DISTANCE_FACTOR).max(r * FAR_RADIUS_FACTOR),
    }
}

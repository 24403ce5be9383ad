use crate::scene::CameraMarker;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Distance along a normalized ray to the first intersection with a sphere.
/// A ray starting inside the sphere reports the exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Nearest marker hit by `ray`, tested against the marker sphere and the
/// bounding sphere of its direction cone. Cone hits resolve to the owning marker.
pub fn pick_marker(ray: &Ray, markers: &[CameraMarker]) -> Option<usize> {
    if ray.direction == Vec3::ZERO {
        return None;
    }
    let mut best = None::<(usize, f32)>;
    for (i, m) in markers.iter().enumerate() {
        let hits = [
            ray_sphere(ray.origin, ray.direction, m.position, m.pick_radius()),
            ray_sphere(
                ray.origin,
                ray.direction,
                m.cone_center(),
                m.cone_pick_radius(),
            ),
        ];
        for t in hits.into_iter().flatten() {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

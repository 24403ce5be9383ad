//! Point-cloud geometry and the attributes derived from it once after load.

use crate::constants::*;
use crate::error::{Result, ViewerError};
use crate::mesh::PointInstance;
use glam::Vec3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use std::io::Cursor;

#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    /// Linear RGB in [0, 1], one entry per position when present.
    pub colors: Option<Vec<[f32; 3]>>,
    pub normals: Option<Vec<Vec3>>,
}

/// Sphere enclosing every point, centered on the axis-aligned bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    /// An empty point set yields a zero-radius sphere at the origin.
    pub fn from_points(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self {
                center: Vec3::ZERO,
                radius: 0.0,
            };
        }
        let (min, max) = points
            .iter()
            .fold((Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)), |(lo, hi), p| {
                (lo.min(*p), hi.max(*p))
            });
        let center = (min + max) * 0.5;
        let max_sq = points
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0f32, f32::max);
        Self {
            center,
            radius: max_sq.sqrt(),
        }
    }
}

/// World-space point size for a cloud of the given bounding radius.
#[inline]
pub fn point_size_for_radius(radius: f32) -> f32 {
    (radius * POINT_SIZE_PER_RADIUS).clamp(POINT_SIZE_MIN, POINT_SIZE_MAX)
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn has_colors(&self) -> bool {
        self.colors
            .as_ref()
            .is_some_and(|c| c.len() == self.positions.len())
    }

    /// Decode an ascii or binary PLY file with a `vertex` element.
    pub fn from_ply_bytes(bytes: &[u8]) -> Result<Self> {
        let parser = Parser::<DefaultElement>::new();
        let mut cursor = Cursor::new(bytes);
        let ply = parser
            .read_ply(&mut cursor)
            .map_err(|e| ViewerError::Ply(e.to_string()))?;
        let vertices = ply
            .payload
            .get("vertex")
            .ok_or_else(|| ViewerError::Ply("missing vertex element".to_string()))?;

        let mut positions = Vec::with_capacity(vertices.len());
        for v in vertices {
            let x = scalar(v, "x");
            let y = scalar(v, "y");
            let z = scalar(v, "z");
            match (x, y, z) {
                (Some(x), Some(y), Some(z)) => positions.push(Vec3::new(x, y, z)),
                _ => {
                    return Err(ViewerError::Ply(
                        "vertex without numeric x/y/z".to_string(),
                    ))
                }
            }
        }

        let colors = vertices
            .iter()
            .map(vertex_color)
            .collect::<Option<Vec<_>>>();
        let normals = vertices
            .iter()
            .map(|v| match (scalar(v, "nx"), scalar(v, "ny"), scalar(v, "nz")) {
                (Some(x), Some(y), Some(z)) => Some(Vec3::new(x, y, z)),
                _ => None,
            })
            .collect::<Option<Vec<_>>>();

        log::debug!(
            "[cloud] decoded {} points (colors={}, normals={})",
            positions.len(),
            colors.is_some(),
            normals.is_some()
        );
        Ok(Self {
            positions,
            colors: colors.filter(|c| !c.is_empty()),
            normals: normals.filter(|n| !n.is_empty()),
        })
    }

    /// Fill in a uniform light-gray color when the source carried none.
    pub fn ensure_colors(&mut self) {
        if !self.has_colors() {
            self.colors = Some(vec![DEFAULT_POINT_COLOR; self.positions.len()]);
        }
    }
}

/// A decoded cloud together with its derived render attributes.
#[derive(Clone, Debug)]
pub struct PreparedCloud {
    pub cloud: PointCloud,
    pub bounds: BoundingSphere,
    pub point_size: f32,
}

impl PreparedCloud {
    pub fn new(mut cloud: PointCloud) -> Self {
        cloud.ensure_colors();
        let bounds = BoundingSphere::from_points(&cloud.positions);
        let point_size = point_size_for_radius(bounds.radius);
        Self {
            cloud,
            bounds,
            point_size,
        }
    }

    /// Per-point GPU instances in file order.
    pub fn instances(&self) -> Vec<PointInstance> {
        let colors = self.cloud.colors.as_deref().unwrap_or(&[]);
        self.cloud
            .positions
            .iter()
            .enumerate()
            .map(|(i, p)| PointInstance {
                position: p.to_array(),
                color: colors.get(i).copied().unwrap_or(DEFAULT_POINT_COLOR),
            })
            .collect()
    }
}

fn scalar(element: &DefaultElement, name: &str) -> Option<f32> {
    match element.get(name)? {
        Property::Char(v) => Some(*v as f32),
        Property::UChar(v) => Some(*v as f32),
        Property::Short(v) => Some(*v as f32),
        Property::UShort(v) => Some(*v as f32),
        Property::Int(v) => Some(*v as f32),
        Property::UInt(v) => Some(*v as f32),
        Property::Float(v) => Some(*v),
        Property::Double(v) => Some(*v as f32),
        _ => None,
    }
}

/// Integer channels are normalized by their type range; float channels are taken as-is.
fn channel(element: &DefaultElement, names: &[&str]) -> Option<f32> {
    names.iter().find_map(|name| match element.get(*name)? {
        Property::UChar(v) => Some(*v as f32 / 255.0),
        Property::Char(v) => Some((*v).max(0) as f32 / 127.0),
        Property::UShort(v) => Some(*v as f32 / 65535.0),
        Property::Short(v) => Some((*v).max(0) as f32 / 32767.0),
        Property::Int(v) => Some(((*v).max(0) as f32 / 255.0).min(1.0)),
        Property::UInt(v) => Some((*v as f32 / 255.0).min(1.0)),
        Property::Float(v) => Some(v.clamp(0.0, 1.0)),
        Property::Double(v) => Some((*v as f32).clamp(0.0, 1.0)),
        _ => None,
    })
}

fn vertex_color(element: &DefaultElement) -> Option<[f32; 3]> {
    Some([
        channel(element, &["red", "r", "diffuse_red"])?,
        channel(element, &["green", "g", "diffuse_green"])?,
        channel(element, &["blue", "b", "diffuse_blue"])?,
    ])
}

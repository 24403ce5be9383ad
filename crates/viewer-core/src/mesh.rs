//! CPU-side geometry for markers and helpers, in GPU-ready layouts.

use crate::constants::*;
use crate::scene::{HelperTransform, SceneHelpers};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

/// UV sphere centered at the origin.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for y in 0..=hs {
        let v = y as f32 / hs as f32;
        let phi = v * PI;
        for x in 0..=ws {
            let u = x as f32 / ws as f32;
            let theta = u * TAU;
            let n = Vec3::new(-theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
            mesh.vertices.push(MeshVertex {
                position: (n * radius).to_array(),
                normal: n.to_array(),
            });
        }
    }
    let row = ws + 1;
    for y in 0..hs {
        for x in 0..ws {
            let a = (y * row + x) as u16;
            let b = (y * row + x + 1) as u16;
            let c = ((y + 1) * row + x) as u16;
            let d = ((y + 1) * row + x + 1) as u16;
            if y != 0 {
                mesh.indices.extend_from_slice(&[a, c, b]);
            }
            if y != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Cone with its apex on +Y and base centered at -height/2.
pub fn cone(radius: f32, height: f32, segments: u32) -> MeshData {
    let segs = segments.max(3);
    let half = height * 0.5;
    let slope = radius / height;
    let mut mesh = MeshData::default();

    // Side: one apex vertex per segment so each face gets its own normal.
    for i in 0..segs {
        let a0 = i as f32 / segs as f32 * TAU;
        let a1 = (i + 1) as f32 / segs as f32 * TAU;
        let am = (a0 + a1) * 0.5;
        let side_normal = |a: f32| Vec3::new(a.sin(), slope, a.cos()).normalize();
        let base = mesh.vertices.len() as u16;
        mesh.vertices.push(MeshVertex {
            position: [0.0, half, 0.0],
            normal: side_normal(am).to_array(),
        });
        for a in [a0, a1] {
            mesh.vertices.push(MeshVertex {
                position: [radius * a.sin(), -half, radius * a.cos()],
                normal: side_normal(a).to_array(),
            });
        }
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    // Base cap.
    let center = mesh.vertices.len() as u16;
    mesh.vertices.push(MeshVertex {
        position: [0.0, -half, 0.0],
        normal: [0.0, -1.0, 0.0],
    });
    for i in 0..segs {
        let a = i as f32 / segs as f32 * TAU;
        mesh.vertices.push(MeshVertex {
            position: [radius * a.sin(), -half, radius * a.cos()],
            normal: [0.0, -1.0, 0.0],
        });
    }
    for i in 0..segs as u16 {
        let cur = center + 1 + i;
        let next = center + 1 + (i + 1) % segs as u16;
        mesh.indices.extend_from_slice(&[center, next, cur]);
    }
    mesh
}

/// Square grid on the XZ plane, `divisions` cells per side; the center lines use `center_color`.
pub fn grid_lines(
    size: f32,
    divisions: u32,
    center_color: [f32; 3],
    line_color: [f32; 3],
) -> Vec<LineVertex> {
    let divisions = divisions.max(1);
    let step = size / divisions as f32;
    let half = size / 2.0;
    let center = divisions / 2;
    let mut out = Vec::with_capacity(((divisions + 1) * 4) as usize);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if i == center { center_color } else { line_color };
        out.push(LineVertex {
            position: [-half, 0.0, k],
            color,
        });
        out.push(LineVertex {
            position: [half, 0.0, k],
            color,
        });
        out.push(LineVertex {
            position: [k, 0.0, -half],
            color,
        });
        out.push(LineVertex {
            position: [k, 0.0, half],
            color,
        });
    }
    out
}

/// X/Y/Z axes colored red/green/blue, starting at the origin.
pub fn axes_lines(length: f32) -> Vec<LineVertex> {
    let axes = [
        ([length, 0.0, 0.0], [1.0, 0.0, 0.0]),
        ([0.0, length, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, length], [0.0, 0.0, 1.0]),
    ];
    axes.iter()
        .flat_map(|(end, color)| {
            [
                LineVertex {
                    position: [0.0; 3],
                    color: *color,
                },
                LineVertex {
                    position: *end,
                    color: *color,
                },
            ]
        })
        .collect()
}

fn place(lines: &mut [LineVertex], t: &HelperTransform) {
    for v in lines.iter_mut() {
        v.position = (Vec3::from_array(v.position) * t.scale + t.position).to_array();
    }
}

/// Grid and axes line vertices in world space for the current helper placement.
pub fn helper_line_vertices(helpers: &SceneHelpers) -> Vec<LineVertex> {
    let mut grid = grid_lines(GRID_SIZE, GRID_DIVISIONS, GRID_CENTER_COLOR, GRID_LINE_COLOR);
    place(&mut grid, &helpers.grid);
    let mut axes = axes_lines(AXES_LENGTH);
    place(&mut axes, &helpers.axes);
    grid.extend(axes);
    grid
}

// Host-side tests for PLY decoding and derived cloud attributes.

use glam::Vec3;
use viewer_core::*;

const ASCII_COLORED: &str = "ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
property uchar red
property uchar green
property uchar blue
end_header
0 0 0 255 0 0
1 0 0 0 255 0
0 2 0 0 0 255
";

const ASCII_PLAIN: &str = "ply
format ascii 1.0
comment exported without colors
element vertex 2
property double x
property double y
property double z
property float nx
property float ny
property float nz
end_header
-1 0 0 0 1 0
1 0 0 0 1 0
";

fn binary_le(points: &[[f32; 3]]) -> Vec<u8> {
    let mut bytes = format!(
        "ply\nformat binary_little_endian 1.0\nelement vertex {}\nproperty float x\nproperty float y\nproperty float z\nend_header\n",
        points.len()
    )
    .into_bytes();
    for p in points {
        for c in p {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
    }
    bytes
}

#[test]
fn ascii_ply_with_uchar_colors() {
    let cloud = PointCloud::from_ply_bytes(ASCII_COLORED.as_bytes()).expect("parse");
    assert_eq!(cloud.len(), 3);
    assert_eq!(cloud.positions[2], Vec3::new(0.0, 2.0, 0.0));
    let colors = cloud.colors.as_ref().expect("colors");
    assert_eq!(colors[0], [1.0, 0.0, 0.0]);
    assert_eq!(colors[1], [0.0, 1.0, 0.0]);
    assert_eq!(colors[2], [0.0, 0.0, 1.0]);
    assert!(cloud.normals.is_none());
}

#[test]
fn missing_colors_are_synthesized_light_gray() {
    let cloud = PointCloud::from_ply_bytes(ASCII_PLAIN.as_bytes()).expect("parse");
    assert!(cloud.colors.is_none());
    assert_eq!(cloud.normals.as_ref().map(|n| n.len()), Some(2));

    let prepared = PreparedCloud::new(cloud);
    let colors = prepared.cloud.colors.as_ref().expect("synthesized");
    assert_eq!(colors.len(), 2);
    assert!(colors.iter().all(|c| *c == [0.8, 0.8, 0.8]));
    assert!(prepared.instances().iter().all(|i| i.color == [0.8, 0.8, 0.8]));
}

#[test]
fn binary_little_endian_ply() {
    let bytes = binary_le(&[[0.5, -1.0, 2.0], [3.0, 4.0, -5.0]]);
    let cloud = PointCloud::from_ply_bytes(&bytes).expect("parse");
    assert_eq!(
        cloud.positions,
        vec![Vec3::new(0.5, -1.0, 2.0), Vec3::new(3.0, 4.0, -5.0)]
    );
}

#[test]
fn garbage_and_vertexless_files_fail() {
    assert!(matches!(
        PointCloud::from_ply_bytes(b"definitely not a ply file"),
        Err(ViewerError::Ply(_))
    ));
    let faces_only = "ply
format ascii 1.0
element face 0
property list uchar int vertex_indices
end_header
";
    assert!(matches!(
        PointCloud::from_ply_bytes(faces_only.as_bytes()),
        Err(ViewerError::Ply(_))
    ));
}

#[test]
fn zero_vertex_file_decodes_to_an_empty_cloud() {
    let empty = "ply
format ascii 1.0
element vertex 0
property float x
property float y
property float z
end_header
";
    let cloud = PointCloud::from_ply_bytes(empty.as_bytes()).expect("empty cloud");
    assert!(cloud.is_empty());
    assert!(!cloud.has_colors());
}

#[test]
fn bounding_sphere_is_centered_on_aabb() {
    let pts = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ];
    let s = BoundingSphere::from_points(&pts);
    assert!(s.center.distance(Vec3::new(0.5, 1.0, 0.0)) < 1e-6);
    assert!((s.radius - 1.25_f32.sqrt()).abs() < 1e-6);
    assert!(pts.iter().all(|p| p.distance(s.center) <= s.radius + 1e-6));
}

#[test]
fn empty_cloud_has_zero_radius() {
    let s = BoundingSphere::from_points(&[]);
    assert_eq!(s.center, Vec3::ZERO);
    assert_eq!(s.radius, 0.0);
    let prepared = PreparedCloud::new(PointCloud::default());
    assert_eq!(prepared.point_size, POINT_SIZE_MIN);
}

#[test]
fn prepared_cloud_derives_point_size() {
    let pts: Vec<Vec3> = (0..=10)
        .map(|i| Vec3::new(i as f32 - 5.0, 0.0, 0.0))
        .collect();
    let prepared = PreparedCloud::new(PointCloud {
        positions: pts,
        colors: None,
        normals: None,
    });
    assert!((prepared.bounds.radius - 5.0).abs() < 1e-6);
    assert!((prepared.point_size - 0.0125).abs() < 1e-7);
}

#[test]
fn marker_and_helper_geometry_is_well_formed() {
    let sphere = mesh::uv_sphere(MARKER_SPHERE_RADIUS, 16, 16);
    assert!(!sphere.indices.is_empty());
    assert_eq!(sphere.indices.len() % 3, 0);
    assert!(sphere
        .indices
        .iter()
        .all(|&i| (i as usize) < sphere.vertices.len()));
    assert!(sphere.vertices.iter().all(|v| {
        (Vec3::from_array(v.position).length() - MARKER_SPHERE_RADIUS).abs() < 1e-6
    }));

    let cone = mesh::cone(MARKER_CONE_RADIUS, MARKER_CONE_HEIGHT, 8);
    assert_eq!(cone.indices.len(), 8 * 3 * 2);
    assert!(cone.indices.iter().all(|&i| (i as usize) < cone.vertices.len()));

    // 21 lines per direction, two vertices each, plus three axes
    let lines = mesh::helper_line_vertices(&SceneHelpers::default());
    assert_eq!(lines.len(), 21 * 4 + 6);
}

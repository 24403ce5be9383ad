// Host-side tests for the damped orbit controls.

use glam::Vec3;
use viewer_core::*;

fn camera_at(eye: Vec3) -> Camera {
    let mut camera = Camera::new(1.0);
    camera.eye = eye;
    camera.target = Vec3::ZERO;
    camera
}

#[test]
fn update_without_input_keeps_pose() {
    let mut camera = camera_at(Vec3::new(1.0, 2.0, 3.0));
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.update(&mut camera);
    assert!(camera.eye.distance(Vec3::new(1.0, 2.0, 3.0)) < 1e-5);
    assert_eq!(camera.target, Vec3::ZERO);
}

#[test]
fn rotation_keeps_distance_and_glides_to_rest() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 5.0));
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.rotate_by_pixels(100.0, 0.0, 800.0);

    assert!(controls.update(&mut camera));
    let first = camera.eye;
    assert!((first.length() - 5.0).abs() < 1e-4);
    assert!(first.x < 0.0);

    let mut last = first;
    for _ in 0..400 {
        controls.update(&mut camera);
        last = camera.eye;
    }
    assert!((last.length() - 5.0).abs() < 1e-3);
    // damping decays, so one more frame barely moves
    assert!(!controls.update(&mut camera) || camera.eye.distance(last) < 1e-4);
}

#[test]
fn polar_angle_is_clamped_at_the_poles() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 5.0));
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.enable_damping = false;
    controls.rotate_by_pixels(0.0, 10_000.0, 100.0);
    controls.update(&mut camera);
    assert!(camera.eye.is_finite());
    assert!((camera.eye.length() - 5.0).abs() < 1e-3);
}

#[test]
fn dolly_moves_toward_and_away_from_target() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.dolly(-1.0);
    controls.update(&mut camera);
    assert!((camera.eye.length() - 9.5).abs() < 1e-4);

    controls.dolly(1.0);
    controls.update(&mut camera);
    assert!((camera.eye.length() - 10.0).abs() < 1e-3);
}

#[test]
fn pan_moves_eye_and_target_together() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 5.0));
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.enable_damping = false;
    controls.pan_by_pixels(50.0, 0.0, &camera, 500.0);
    controls.update(&mut camera);
    assert!(controls.target.x < 0.0);
    assert!((camera.eye - controls.target).distance(Vec3::new(0.0, 0.0, 5.0)) < 1e-4);
}

#[test]
fn reset_motion_discards_pending_input() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 5.0));
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.rotate_by_pixels(300.0, 120.0, 600.0);
    controls.dolly(-1.0);
    controls.reset_motion();
    assert!(!controls.update(&mut camera));
}

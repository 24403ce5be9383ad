//! The viewer's single owned state record.
//!
//! All operations take the current time in milliseconds so the web layer can
//! feed `Date.now()` and tests can feed fixed clocks. Navigation requests are
//! dropped, not queued, while a transition is running.

use crate::camera::{frame_sphere, Camera, Framing};
use crate::cloud::BoundingSphere;
use crate::constants::*;
use crate::controls::OrbitControls;
use crate::picking::pick_marker;
use crate::records::CameraRecord;
use crate::scene::{highlight_markers, CameraMarker, SceneHelpers};
use crate::transition::{Transition, TransitionDone, TransitionState};
use glam::{Vec2, Vec3};

/// Follow-up work for the host after a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    /// A camera-view transition landed; show this record's photo.
    ShowImage { index: usize, image: String },
    /// A transition with no follow-up (e.g. reset) landed.
    TransitionFinished,
}

#[derive(Clone, Debug)]
pub struct ViewerController {
    pub camera: Camera,
    pub controls: OrbitControls,
    pub helpers: SceneHelpers,
    records: Vec<CameraRecord>,
    markers: Vec<CameraMarker>,
    current_index: usize,
    transition: TransitionState,
    cloud_center: Vec3,
    cloud_radius: f32,
    cloud_point_size: Option<f32>,
    helpers_revision: u64,
}

impl ViewerController {
    pub fn new(aspect: f32) -> Self {
        let camera = Camera::new(aspect);
        let controls = OrbitControls::new(camera.target);
        Self {
            camera,
            controls,
            helpers: SceneHelpers::default(),
            records: Vec::new(),
            markers: Vec::new(),
            current_index: 0,
            transition: TransitionState::Idle,
            cloud_center: Vec3::ZERO,
            cloud_radius: DEFAULT_CLOUD_RADIUS,
            cloud_point_size: None,
            helpers_revision: 0,
        }
    }

    pub fn records(&self) -> &[CameraRecord] {
        &self.records
    }

    pub fn markers(&self) -> &[CameraMarker] {
        &self.markers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_busy()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.active()
    }

    pub fn cloud_center(&self) -> Vec3 {
        self.cloud_center
    }

    pub fn cloud_radius(&self) -> f32 {
        self.cloud_radius
    }

    /// Point size of the loaded cloud, `None` until one has loaded.
    pub fn point_size(&self) -> Option<f32> {
        self.cloud_point_size
    }

    /// Bumped whenever helper placement changes, so the renderer can rebuild lines lazily.
    pub fn helpers_revision(&self) -> u64 {
        self.helpers_revision
    }

    /// Replace the record set and build one marker per record.
    pub fn set_records(&mut self, records: Vec<CameraRecord>) {
        self.markers = records
            .iter()
            .enumerate()
            .map(|(i, r)| CameraMarker::from_record(i, r))
            .collect();
        self.records = records;
        self.current_index = 0;
    }

    /// Adopt a freshly loaded cloud: remember its bounds, refit helpers and camera.
    /// A zero radius keeps the previous radius.
    pub fn on_cloud_loaded(&mut self, bounds: BoundingSphere, point_size: f32) {
        self.cloud_center = bounds.center;
        if bounds.radius > 0.0 && bounds.radius.is_finite() {
            self.cloud_radius = bounds.radius;
        }
        self.cloud_point_size = Some(point_size);
        self.position_scene_helpers();
        self.frame_camera_to_scene();
    }

    pub fn position_scene_helpers(&mut self) {
        self.helpers.fit_to(self.cloud_center, self.cloud_radius);
        self.helpers_revision += 1;
    }

    /// Whole-cloud framing for the current bounds and camera fov.
    pub fn framing(&self) -> Framing {
        frame_sphere(self.cloud_center, self.cloud_radius, self.camera.fovy_radians)
    }

    pub fn frame_camera_to_scene(&mut self) {
        let framing = self.framing();
        self.camera.apply_framing(&framing);
        self.controls.target = framing.target;
        self.controls.update(&mut self.camera);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }

    /// Handle a click at `ndc`. Returns the picked marker index when a
    /// transition toward it started.
    pub fn on_click(&mut self, ndc: Vec2, now_ms: f64) -> Option<usize> {
        if self.is_transitioning() {
            return None;
        }
        let ray = self.camera.ray_from_ndc(ndc);
        let index = pick_marker(&ray, &self.markers)?;
        let record_index = self.markers[index].record_index;
        log::info!("[click] camera marker {}", record_index);
        self.move_to_camera_view(record_index, now_ms)
            .then_some(record_index)
    }

    /// Start a transition into record `index`'s pose. No-op when busy or out of range.
    pub fn move_to_camera_view(&mut self, index: usize, now_ms: f64) -> bool {
        if index >= self.records.len() || self.is_transitioning() {
            return false;
        }
        let record = &self.records[index];
        let end_eye = record.position();
        let end_target = record.look_at_target();
        self.current_index = index;
        highlight_markers(&mut self.markers, Some(index));
        self.animate_camera_transition(end_eye, end_target, TransitionDone::ShowImage(index), now_ms)
    }

    /// Advance to the next record in order, wrapping around.
    pub fn next_camera(&mut self, now_ms: f64) -> bool {
        if self.records.is_empty() || self.is_transitioning() {
            return false;
        }
        let next = (self.current_index + 1) % self.records.len();
        self.move_to_camera_view(next, now_ms)
    }

    /// Return to the whole-cloud framing and clear marker highlights.
    pub fn reset_view(&mut self, now_ms: f64) -> bool {
        if self.is_transitioning() {
            return false;
        }
        let framing = self.framing();
        highlight_markers(&mut self.markers, None);
        self.animate_camera_transition(
            framing.eye,
            framing.target,
            TransitionDone::Nothing,
            now_ms,
        )
    }

    fn animate_camera_transition(
        &mut self,
        end_eye: Vec3,
        end_target: Vec3,
        on_done: TransitionDone,
        now_ms: f64,
    ) -> bool {
        if self.transition.is_busy() {
            return false;
        }
        // leftover drag momentum would pull the camera off the end pose
        self.controls.reset_motion();
        self.transition.begin(Transition {
            start_eye: self.camera.eye,
            start_target: self.controls.target,
            end_eye,
            end_target,
            start_ms: now_ms,
            duration_ms: TRANSITION_MS,
            on_done,
        })
    }

    /// Per-frame step: advance the running transition, then the orbit damping.
    pub fn tick(&mut self, now_ms: f64) -> Option<ViewerEvent> {
        let mut event = None;
        if let Some(sample) = self.transition.active().map(|t| t.sample(now_ms)) {
            self.camera.eye = sample.eye;
            self.controls.target = sample.target;
            if sample.finished {
                event = match self.transition.finish() {
                    Some(TransitionDone::ShowImage(index)) => {
                        self.records.get(index).map(|r| ViewerEvent::ShowImage {
                            index,
                            image: r.image.clone(),
                        })
                    }
                    Some(TransitionDone::Nothing) => Some(ViewerEvent::TransitionFinished),
                    None => None,
                };
            }
        }
        self.controls.update(&mut self.camera);
        event
    }
}

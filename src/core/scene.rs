use crate::core::bounds::{Aabb, Subject};
use crate::core::camera::{CameraView, MatrixCamera, PerspectiveCamera};
use crate::core::constants::AUTO_ROTATE_STEP_RAD;
use glam::DVec3;

/// The viewer's view of the outside world: the current subject (if any)
/// and the camera the overlay projects through.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub subject: Option<Subject>,
    pub camera: PerspectiveCamera,
    /// Set when the host drives its own camera; takes precedence.
    pub host_camera: Option<MatrixCamera>,
    pub auto_rotate: bool,
}

impl SceneState {
    pub fn new(aspect: f64) -> Self {
        Self {
            subject: None,
            camera: PerspectiveCamera::new(aspect),
            host_camera: None,
            auto_rotate: false,
        }
    }

    /// Replace any prior subject with a freshly loaded one and frame it.
    pub fn subject_ready(&mut self, raw: Aabb, label: impl Into<String>) -> &Subject {
        let subject = Subject::placed(raw, label);
        self.camera.frame_bounds(&subject.rest_bounds);
        log::info!(
            "[subject] ready `{}`: min=({:.2},{:.2},{:.2}) max=({:.2},{:.2},{:.2})",
            subject.label,
            subject.rest_bounds.min.x,
            subject.rest_bounds.min.y,
            subject.rest_bounds.min.z,
            subject.rest_bounds.max.x,
            subject.rest_bounds.max.y,
            subject.rest_bounds.max.z
        );
        self.subject.insert(subject)
    }

    pub fn clear_subject(&mut self) {
        if self.subject.take().is_some() {
            log::info!("[subject] cleared");
        }
    }

    /// Per-tick scene motion.
    pub fn advance(&mut self) {
        if self.auto_rotate {
            if let Some(subject) = &mut self.subject {
                subject.rotate_yaw(AUTO_ROTATE_STEP_RAD);
            }
        }
    }

    /// Placement offset and yaw of the current subject, for the host to
    /// apply to the rendered model.
    pub fn subject_transform(&self) -> Option<(DVec3, f64)> {
        self.subject.as_ref().map(|s| (s.offset, s.yaw))
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.camera.set_aspect(width, height);
    }

    pub fn camera_view(&self) -> &dyn CameraView {
        match &self.host_camera {
            Some(host) => host as &dyn CameraView,
            None => &self.camera,
        }
    }
}

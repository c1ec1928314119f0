use crate::core::bounds::Aabb;
use crate::core::constants::*;
use glam::{DMat4, DVec3};

/// What the overlay needs from whoever owns the camera.
pub trait CameraView {
    /// World point to normalized device coordinates (perspective divide applied).
    fn world_to_ndc(&self, world: DVec3) -> DVec3;
    /// Camera eye in world space.
    fn position(&self) -> DVec3;
}

/// Right-handed perspective camera looking at a target, OpenGL depth range.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub eye: DVec3,
    pub target: DVec3,
    pub fov_y_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl PerspectiveCamera {
    pub fn new(aspect: f64) -> Self {
        Self {
            eye: DVec3::from_array(CAMERA_INITIAL_EYE),
            target: DVec3::ZERO,
            fov_y_deg: CAMERA_FOV_Y_DEG,
            aspect: aspect.max(f64::EPSILON),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    pub fn set_aspect(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_projection(&self) -> DMat4 {
        let proj =
            DMat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far);
        let view = DMat4::look_at_rh(self.eye, self.target, DVec3::Y);
        proj * view
    }

    /// Back off along the (1, 0.7, 1) diagonal far enough for the largest
    /// box dimension to fit the vertical field of view, aimed at its centre.
    pub fn frame_bounds(&mut self, bounds: &Aabb) {
        let size = bounds.size();
        let max_dim = size.x.max(size.y).max(size.z);
        let half_fov = self.fov_y_deg.to_radians() / 2.0;
        let d = (max_dim / half_fov.sin()).abs() * FRAMING_DISTANCE_FACTOR;
        self.eye = DVec3::new(d, d * FRAMING_HEIGHT_RATIO, d);
        self.target = bounds.center();
        log::info!(
            "[camera] framed subject: eye=({:.2},{:.2},{:.2}) target=({:.2},{:.2},{:.2})",
            self.eye.x,
            self.eye.y,
            self.eye.z,
            self.target.x,
            self.target.y,
            self.target.z
        );
    }
}

impl CameraView for PerspectiveCamera {
    fn world_to_ndc(&self, world: DVec3) -> DVec3 {
        self.view_projection().project_point3(world)
    }

    fn position(&self) -> DVec3 {
        self.eye
    }
}

/// Camera state pushed by a host that owns its own camera (e.g. an orbit
/// control in the page script).
#[derive(Clone, Copy, Debug)]
pub struct MatrixCamera {
    pub view_proj: DMat4,
    pub eye: DVec3,
}

impl MatrixCamera {
    /// `cols` is a column-major 4x4 matrix; `None` unless it has 16 entries.
    pub fn from_cols(cols: &[f64], eye: DVec3) -> Option<Self> {
        (cols.len() == 16).then(|| Self {
            view_proj: DMat4::from_cols_slice(cols),
            eye,
        })
    }
}

impl CameraView for MatrixCamera {
    fn world_to_ndc(&self, world: DVec3) -> DVec3 {
        self.view_proj.project_point3(world)
    }

    fn position(&self) -> DVec3 {
        self.eye
    }
}

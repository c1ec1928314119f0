use crate::core::camera::CameraView;
use glam::{DVec2, DVec3};

/// Overlay canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A world point after projection: canvas pixels plus NDC depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

impl Projected {
    #[inline]
    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// NDC to canvas pixels. Screen y grows downward, NDC y upward.
#[inline]
pub fn ndc_to_canvas(ndc: DVec3, viewport: Viewport) -> Projected {
    Projected {
        x: (ndc.x + 1.0) / 2.0 * viewport.width,
        y: (1.0 - ndc.y) / 2.0 * viewport.height,
        depth: ndc.z,
    }
}

/// Project a world point onto the overlay canvas.
///
/// The only rejection is depth beyond 1 (behind the camera for this
/// projection). Points off the canvas are returned as-is; drawing outside
/// the canvas is harmless.
pub fn project(world: DVec3, camera: &dyn CameraView, viewport: Viewport) -> Option<Projected> {
    let ndc = camera.world_to_ndc(world);
    // w == 0 lands here as inf/NaN
    if !ndc.is_finite() || ndc.z > 1.0 {
        return None;
    }
    Some(ndc_to_canvas(ndc, viewport))
}

/// Per-frame projection context so renderers don't carry camera and
/// viewport separately.
#[derive(Clone, Copy)]
pub struct Projector<'a> {
    pub camera: &'a dyn CameraView,
    pub viewport: Viewport,
}

impl<'a> Projector<'a> {
    pub fn new(camera: &'a dyn CameraView, viewport: Viewport) -> Self {
        Self { camera, viewport }
    }

    #[inline]
    pub fn project(&self, world: DVec3) -> Option<Projected> {
        project(world, self.camera, self.viewport)
    }
}

use crate::core::{AnchorSet, CameraView, OverlayConfig, Projector, Subject};
use glam::DVec2;

pub mod canvas;
pub mod color;
pub mod layers;
pub mod record;

use canvas::Canvas;
use layers::{Layer, LayerFrame, ScreenBox, LAYERS};

/// Per-tick inputs. Everything the overlay reads comes through here.
pub struct FrameInput<'a> {
    pub config: &'a OverlayConfig,
    pub subject: Option<&'a Subject>,
    pub camera: &'a dyn CameraView,
    pub health: f64,
    /// Last known pointer position in canvas pixels.
    pub pointer: DVec2,
    /// Wall-clock seconds.
    pub now: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Canvas cleared, nothing loaded.
    NoSubject,
    /// Canvas cleared, subject centre is behind the camera.
    CenterHidden,
    /// Layers that were enabled and invoked, in draw order.
    Drawn(Vec<Layer>),
}

/// Draw one overlay frame: clear, derive anchors from the subject's current
/// bounds, project, then run the enabled layers bottom to top.
pub fn compose(canvas: &mut dyn Canvas, input: &FrameInput) -> FrameOutcome {
    canvas.clear();
    let Some(subject) = input.subject else {
        return FrameOutcome::NoSubject;
    };

    let anchors = AnchorSet::derive(&subject.world_bounds());
    let projector = Projector::new(input.camera, canvas.viewport());
    let Some(center) = projector.project(anchors.center) else {
        return FrameOutcome::CenterHidden;
    };

    let s = &anchors.silhouette;
    let screen_box = match (
        projector.project(s.top),
        projector.project(s.bottom),
        projector.project(s.left),
        projector.project(s.right),
    ) {
        (Some(top), Some(bottom), Some(left), Some(right)) => {
            Some(ScreenBox::from_silhouette(center, top, bottom, left, right))
        }
        _ => None,
    };

    let frame = LayerFrame {
        config: input.config,
        projector,
        anchors: &anchors,
        center,
        screen_box,
        label: &subject.label,
        health: input.health,
        distance: input.camera.position().length(),
        pointer: input.pointer,
        now: input.now,
    };

    let mut drawn = Vec::with_capacity(LAYERS.len());
    for entry in &LAYERS {
        if (entry.enabled)(input.config) {
            (entry.render)(canvas, &frame);
            drawn.push(entry.layer);
        }
    }
    FrameOutcome::Drawn(drawn)
}

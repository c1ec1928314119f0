use crate::constants::{LABEL_SCALE_REFERENCE_PX, OUTLINE_COLOR};
use crate::core::{AnchorSet, OverlayConfig, Projected, Projector};
use crate::overlay::canvas::Canvas;
use glam::DVec2;

mod boxes;
mod hat;
mod health_bar;
mod labels;
mod skeleton;
mod tracer;
mod wireframe;

pub use boxes::draw_box;
pub use hat::draw_hat;
pub use health_bar::draw_health_bar;
pub use labels::{distance_text, draw_distance, draw_name};
pub use skeleton::draw_skeleton;
pub use tracer::draw_tracer;
pub use wireframe::{draw_wireframe, WIREFRAME_EDGES, WIREFRAME_FACES};

/// Screen-space box sized from the projected silhouette anchors and
/// centred horizontally on the projected subject centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ScreenBox {
    pub fn from_silhouette(
        center: Projected,
        top: Projected,
        bottom: Projected,
        left: Projected,
        right: Projected,
    ) -> Self {
        let width = (right.x - left.x).abs();
        Self {
            left: center.x - width / 2.0,
            right: center.x + width / 2.0,
            top: top.y,
            bottom: bottom.y,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).abs()
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Label scale: 1.0 for a 100px tall box.
    #[inline]
    pub fn label_scale(&self) -> f64 {
        self.height() / LABEL_SCALE_REFERENCE_PX
    }
}

/// Everything a layer may read for one frame. Layers never look anything
/// up outside of this.
pub struct LayerFrame<'a> {
    pub config: &'a OverlayConfig,
    pub projector: Projector<'a>,
    pub anchors: &'a AnchorSet,
    /// Projected subject centre; always present once layers run.
    pub center: Projected,
    /// `None` when any silhouette anchor failed to project.
    pub screen_box: Option<ScreenBox>,
    pub label: &'a str,
    pub health: f64,
    /// Camera distance to the world origin.
    pub distance: f64,
    pub pointer: DVec2,
    /// Wall-clock seconds supplied by the frame driver.
    pub now: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Tracers,
    Box,
    Skeleton,
    HealthBar,
    Name,
    Distance,
    Hat,
}

pub type RenderFn = fn(&mut dyn Canvas, &LayerFrame);

pub struct LayerEntry {
    pub layer: Layer,
    pub enabled: fn(&OverlayConfig) -> bool,
    pub render: RenderFn,
}

/// Draw order, bottom to top.
pub const LAYERS: [LayerEntry; 7] = [
    LayerEntry {
        layer: Layer::Tracers,
        enabled: |c| c.show_tracers,
        render: draw_tracer,
    },
    LayerEntry {
        layer: Layer::Box,
        enabled: |c| c.show_box,
        render: draw_box,
    },
    LayerEntry {
        layer: Layer::Skeleton,
        enabled: |c| c.show_skeleton,
        render: draw_skeleton,
    },
    LayerEntry {
        layer: Layer::HealthBar,
        enabled: |c| c.show_health,
        render: draw_health_bar,
    },
    LayerEntry {
        layer: Layer::Name,
        enabled: |c| c.show_name,
        render: draw_name,
    },
    LayerEntry {
        layer: Layer::Distance,
        enabled: |c| c.show_distance,
        render: draw_distance,
    },
    LayerEntry {
        layer: Layer::Hat,
        enabled: |c| c.show_hat,
        render: draw_hat,
    },
];

/// Run `path` twice: a wide dark stroke, then the colored stroke on top.
pub(crate) fn double_stroke(
    canvas: &mut dyn Canvas,
    color: &str,
    outline_width: f64,
    width: f64,
    mut path: impl FnMut(&mut dyn Canvas),
) {
    canvas.set_stroke_color(OUTLINE_COLOR);
    canvas.set_line_width(outline_width);
    path(&mut *canvas);
    canvas.set_stroke_color(color);
    canvas.set_line_width(width);
    path(&mut *canvas);
}

use super::{double_stroke, LayerFrame};
use crate::constants::{TRACER_OUTLINE_WIDTH, TRACER_STROKE_WIDTH};
use crate::core::tracer_origin;
use crate::overlay::canvas::Canvas;

/// Line from the configured screen origin to the subject's centre.
pub fn draw_tracer(canvas: &mut dyn Canvas, frame: &LayerFrame) {
    let from = tracer_origin(
        frame.config.tracer_origin,
        frame.projector.viewport,
        frame.pointer,
    );
    let to = frame.center.xy();
    double_stroke(
        canvas,
        &frame.config.tracer_color,
        TRACER_OUTLINE_WIDTH,
        TRACER_STROKE_WIDTH,
        |c| c.line(from, to),
    );
}

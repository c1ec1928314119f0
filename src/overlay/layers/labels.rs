use super::LayerFrame;
use crate::constants::*;
use crate::overlay::canvas::{Canvas, TextAlign};

/// Anchor line and scale for a label. Falls back to the projected centre
/// at unit scale when the box could not be sized.
fn placement(frame: &LayerFrame, above: bool) -> (f64, f64) {
    match frame.screen_box {
        Some(b) => (if above { b.top } else { b.bottom }, b.label_scale()),
        None => (frame.center.y, 1.0),
    }
}

fn outlined_text(canvas: &mut dyn Canvas, text: &str, color: &str, font_px: f64, x: f64, y: f64) {
    canvas.set_font(&format!("{}px {}", font_px, LABEL_FONT_FAMILY));
    canvas.set_text_align(TextAlign::Center);
    canvas.set_stroke_color(OUTLINE_COLOR);
    canvas.set_line_width(LABEL_OUTLINE_WIDTH);
    canvas.stroke_text(text, x, y);
    canvas.set_fill_color(color);
    canvas.fill_text(text, x, y);
}

pub fn draw_name(canvas: &mut dyn Canvas, frame: &LayerFrame) {
    let (top, scale) = placement(frame, true);
    outlined_text(
        canvas,
        frame.label,
        &frame.config.name_color,
        NAME_FONT_PX * scale,
        frame.center.x,
        top - NAME_OFFSET_PX * scale,
    );
}

/// Whole metres from the camera to the world origin, e.g. `[7m]`.
pub fn distance_text(distance: f64) -> String {
    format!("[{}m]", distance.max(0.0).floor() as u64)
}

pub fn draw_distance(canvas: &mut dyn Canvas, frame: &LayerFrame) {
    let (bottom, scale) = placement(frame, false);
    outlined_text(
        canvas,
        &distance_text(frame.distance),
        &frame.config.distance_color,
        DISTANCE_FONT_PX * scale,
        frame.center.x,
        bottom + DISTANCE_OFFSET_PX * scale,
    );
}

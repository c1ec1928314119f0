use super::LayerFrame;
use crate::constants::*;
use crate::overlay::canvas::Canvas;
use crate::overlay::color::health_color;

/// Vertical bar left of the box; the fill grows up from the bottom edge.
pub fn draw_health_bar(canvas: &mut dyn Canvas, frame: &LayerFrame) {
    let Some(b) = frame.screen_box else {
        return;
    };
    let x = b.left - HEALTH_BAR_WIDTH - HEALTH_BAR_GAP;
    let track = b.height();
    let fraction = (frame.health / 100.0).clamp(0.0, 1.0);

    canvas.set_fill_color(HEALTH_TRACK_COLOR);
    canvas.fill_rect(x, b.top, HEALTH_BAR_WIDTH, track);

    let filled = track * fraction;
    canvas.set_fill_color(&health_color(frame.health));
    canvas.fill_rect(x, b.bottom - filled, HEALTH_BAR_WIDTH, filled);

    canvas.set_stroke_color(OUTLINE_COLOR);
    canvas.set_line_width(HEALTH_BORDER_WIDTH);
    canvas.stroke_rect(x, b.top, HEALTH_BAR_WIDTH, track);
}

use super::{double_stroke, draw_wireframe, LayerFrame, ScreenBox};
use crate::constants::*;
use crate::core::{BoxStyle, OverlayConfig};
use crate::overlay::canvas::{Canvas, RadialGradient};
use crate::overlay::color::hex_to_rgba;

/// Box layer. Every style needs the four silhouette anchors; without them
/// the layer draws nothing.
pub fn draw_box(canvas: &mut dyn Canvas, frame: &LayerFrame) {
    let Some(b) = frame.screen_box else {
        return;
    };
    let config = frame.config;
    match config.box_style {
        BoxStyle::Outline => {
            fill_box(canvas, config, &b);
            outline_box(canvas, config, &b);
        }
        BoxStyle::Glow => glow_box(canvas, config, &b, frame.now),
        BoxStyle::Corners => {
            fill_box(canvas, config, &b);
            corner_box(canvas, config, &b);
        }
        BoxStyle::Wireframe => draw_wireframe(canvas, frame),
    }
}

fn fill_box(canvas: &mut dyn Canvas, config: &OverlayConfig, b: &ScreenBox) {
    if config.box_filled {
        canvas.set_fill_color(&hex_to_rgba(&config.box_fill_color, BOX_FILL_ALPHA));
        canvas.fill_rect(b.left, b.top, b.width(), b.bottom - b.top);
    }
}

fn outline_box(canvas: &mut dyn Canvas, config: &OverlayConfig, b: &ScreenBox) {
    let (w, h) = (b.width(), b.bottom - b.top);
    double_stroke(
        canvas,
        &config.box_color,
        BOX_OUTLINE_WIDTH,
        BOX_STROKE_WIDTH,
        |c| c.stroke_rect(b.left, b.top, w, h),
    );
}

fn glow_box(canvas: &mut dyn Canvas, config: &OverlayConfig, b: &ScreenBox, now: f64) {
    fill_box(canvas, config, b);

    let (left, top) = (b.left, b.top);
    let (width, height) = (b.width(), b.bottom - b.top);
    let short_side = width.min(height);
    let color = &config.box_color;

    // Soft halo behind the frame
    let stops = GLOW_GRADIENT_STOPS
        .iter()
        .map(|&(offset, alpha)| (offset, hex_to_rgba(color, alpha)))
        .collect();
    canvas.set_fill_gradient(&RadialGradient {
        center: b.center(),
        inner_radius: short_side * GLOW_GRADIENT_INNER,
        outer_radius: short_side * GLOW_GRADIENT_OUTER,
        stops,
    });
    canvas.fill_rect(
        left - width * GLOW_GRADIENT_BLEED,
        top - height * GLOW_GRADIENT_BLEED,
        width * (1.0 + 2.0 * GLOW_GRADIENT_BLEED),
        height * (1.0 + 2.0 * GLOW_GRADIENT_BLEED),
    );

    // Concentric rounded rings, faint and wide far out, brighter close in
    let max_spread = short_side * GLOW_MAX_SPREAD_RATIO;
    for i in (1..=GLOW_STEPS).rev() {
        let progress = i as f64 / GLOW_STEPS as f64;
        let spread = max_spread * progress;
        let alpha = GLOW_MAX_ALPHA * (1.0 - progress) * (1.0 - progress);
        canvas.set_stroke_color(&hex_to_rgba(color, alpha));
        canvas.set_line_width(GLOW_BASE_WIDTH + GLOW_WIDTH_SPAN * progress);
        rounded_rect_path(
            canvas,
            left - spread,
            top - spread,
            width + spread * 2.0,
            height + spread * 2.0,
            spread * GLOW_RADIUS_RATIO,
        );
        canvas.stroke();
    }

    canvas.set_stroke_color(GLOW_FRAME_OUTLINE);
    canvas.set_line_width(GLOW_FRAME_OUTLINE_WIDTH);
    canvas.stroke_rect(left - 1.0, top - 1.0, width + 2.0, height + 2.0);
    canvas.set_stroke_color(color);
    canvas.set_line_width(GLOW_FRAME_WIDTH);
    canvas.stroke_rect(left, top, width, height);
    canvas.set_stroke_color(&hex_to_rgba(color, GLOW_INNER_ALPHA));
    canvas.set_line_width(1.0);
    canvas.stroke_rect(left + 2.0, top + 2.0, width - 4.0, height - 4.0);

    canvas.set_fill_color(&hex_to_rgba(color, GLOW_CORNER_ALPHA));
    let s = GLOW_CORNER_HALF;
    for (x, y) in [
        (b.left, b.top),
        (b.right, b.top),
        (b.right, b.bottom),
        (b.left, b.bottom),
    ] {
        canvas.fill_rect(x - s, y - s, s * 2.0, s * 2.0);
    }

    // Keyed off wall-clock time so the pulse stays smooth at any frame rate
    let pulse = ((now * PULSE_RATE_PER_SEC).sin() + 1.0) * 0.5;
    let pulse_alpha = PULSE_BASE_ALPHA + pulse * PULSE_ALPHA_SPAN;
    let ring = max_spread * PULSE_RING_RATIO;
    canvas.set_stroke_color(&hex_to_rgba(color, pulse_alpha));
    canvas.set_line_width(1.0);
    canvas.stroke_rect(
        left - ring,
        top - ring,
        width + ring * 2.0,
        height + ring * 2.0,
    );
}

fn rounded_rect_path(canvas: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64, r: f64) {
    canvas.begin_path();
    canvas.move_to(x + r, y);
    canvas.line_to(x + w - r, y);
    canvas.quadratic_curve_to(x + w, y, x + w, y + r);
    canvas.line_to(x + w, y + h - r);
    canvas.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
    canvas.line_to(x + r, y + h);
    canvas.quadratic_curve_to(x, y + h, x, y + h - r);
    canvas.line_to(x, y + r);
    canvas.quadratic_curve_to(x, y, x + r, y);
    canvas.close_path();
}

/// Bracket length for the corner style.
pub(crate) fn corner_size(b: &ScreenBox) -> f64 {
    CORNER_MAX_PX
        .min(b.width() * CORNER_RATIO)
        .min((b.bottom - b.top) * CORNER_RATIO)
}

fn corner_box(canvas: &mut dyn Canvas, config: &OverlayConfig, b: &ScreenBox) {
    let size = corner_size(b);
    // The outline pass here is a translucent, slightly longer bracket.
    canvas.set_stroke_color(&hex_to_rgba(&config.box_color, CORNER_GLOW_ALPHA));
    canvas.set_line_width(CORNER_GLOW_WIDTH);
    corner_lines(canvas, b, size + 1.0);
    canvas.set_stroke_color(&config.box_color);
    canvas.set_line_width(BOX_STROKE_WIDTH);
    corner_lines(canvas, b, size);
}

fn corner_lines(canvas: &mut dyn Canvas, b: &ScreenBox, size: f64) {
    let (l, t, r, bt) = (b.left, b.top, b.right, b.bottom);
    canvas.begin_path();
    canvas.move_to(l, t + size);
    canvas.line_to(l, t);
    canvas.line_to(l + size, t);
    canvas.move_to(r - size, t);
    canvas.line_to(r, t);
    canvas.line_to(r, t + size);
    canvas.move_to(r, bt - size);
    canvas.line_to(r, bt);
    canvas.line_to(r - size, bt);
    canvas.move_to(l + size, bt);
    canvas.line_to(l, bt);
    canvas.line_to(l, bt - size);
    canvas.stroke();
}

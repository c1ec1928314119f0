use super::LayerFrame;
use crate::constants::*;
use crate::core::Projected;
use crate::overlay::canvas::Canvas;
use crate::overlay::color::hex_to_rgba;
use glam::DVec3;
use std::f64::consts::TAU;

/// World-space ring of `HAT_SEGMENTS + 1` points; the last repeats the
/// first so the outline closes.
fn ring(center: DVec3, radius: f64) -> impl Iterator<Item = DVec3> {
    (0..=HAT_SEGMENTS).map(move |i| {
        let angle = i as f64 * TAU / HAT_SEGMENTS as f64;
        center + DVec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
    })
}

/// Polyline through the projected points, lifting the pen over gaps.
fn stroke_ring(canvas: &mut dyn Canvas, points: &[Option<Projected>]) {
    canvas.begin_path();
    let mut pen_down = false;
    for p in points {
        match p {
            Some(p) if pen_down => canvas.line_to(p.x, p.y),
            Some(p) => {
                canvas.move_to(p.x, p.y);
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    canvas.stroke();
}

/// Conical hat above the head anchor: apex ring, brim ring and the struts
/// between them. Each point projects on its own; missing ones are skipped.
pub fn draw_hat(canvas: &mut dyn Canvas, frame: &LayerFrame) {
    let head = frame.anchors.head();
    let apex_center = head + DVec3::Y * HAT_APEX_RISE;
    let brim_center = head - DVec3::Y * HAT_BRIM_DROP;

    let apex: Vec<Option<Projected>> = ring(apex_center, HAT_APEX_RADIUS)
        .map(|p| frame.projector.project(p))
        .collect();
    let brim: Vec<Option<Projected>> = ring(brim_center, HAT_BRIM_RADIUS)
        .map(|p| frame.projector.project(p))
        .collect();

    let visible = |pts: &[Option<Projected>]| pts.iter().flatten().count();
    if visible(&apex) < 2 || visible(&brim) < 2 {
        return;
    }

    let color = &frame.config.hat_color;
    canvas.set_stroke_color(&hex_to_rgba(color, HAT_STRUT_ALPHA));
    canvas.set_line_width(HAT_STRUT_WIDTH);
    for (top, bottom) in apex.iter().zip(&brim).take(HAT_SEGMENTS) {
        if let (Some(t), Some(b)) = (top, bottom) {
            canvas.line(t.xy(), b.xy());
        }
    }

    canvas.set_stroke_color(&hex_to_rgba(color, HAT_RING_ALPHA));
    canvas.set_line_width(HAT_RING_WIDTH);
    stroke_ring(canvas, &apex);
    stroke_ring(canvas, &brim);
}

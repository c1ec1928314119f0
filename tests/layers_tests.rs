// Host-side tests for the individual overlay layers, drawn onto a
// RecordingCanvas through a flat test camera.

use esp_viewer::core::*;
use esp_viewer::overlay::color::{health_channels, health_color, hex_to_rgba};
use esp_viewer::overlay::layers::*;
use esp_viewer::overlay::record::{DrawOp, Paint, PathOp, RecordingCanvas, Rect};
use glam::{DVec2, DVec3};

/// Orthographic-ish camera: NDC = world / 8, with selected points pushed
/// past the far plane so they fail to project.
struct FlatCamera {
    hide: fn(DVec3) -> bool,
}

impl CameraView for FlatCamera {
    fn world_to_ndc(&self, p: DVec3) -> DVec3 {
        let z = if (self.hide)(p) { 2.0 } else { 0.0 };
        DVec3::new(p.x / 8.0, p.y / 8.0, z)
    }

    fn position(&self) -> DVec3 {
        DVec3::new(3.0, 4.0, 0.0)
    }
}

const W: f64 = 800.0;
const H: f64 = 600.0;

fn show_all(_: DVec3) -> bool {
    false
}

fn anchors() -> AnchorSet {
    AnchorSet::derive(&Aabb::new(
        DVec3::new(-1.0, 0.0, -1.0),
        DVec3::new(1.0, 2.0, 1.0),
    ))
}

type Render = fn(&mut dyn esp_viewer::overlay::canvas::Canvas, &LayerFrame);

fn draw(
    config: &OverlayConfig,
    hide: fn(DVec3) -> bool,
    health: f64,
    now: f64,
    render: Render,
) -> RecordingCanvas {
    draw_around(&anchors(), config, hide, health, now, render)
}

fn draw_around(
    anchors: &AnchorSet,
    config: &OverlayConfig,
    hide: fn(DVec3) -> bool,
    health: f64,
    now: f64,
    render: Render,
) -> RecordingCanvas {
    let camera = FlatCamera { hide };
    let projector = Projector::new(&camera, Viewport::new(W, H));
    let center = projector.project(anchors.center).expect("centre visible");
    let s = &anchors.silhouette;
    let screen_box = match (
        projector.project(s.top),
        projector.project(s.bottom),
        projector.project(s.left),
        projector.project(s.right),
    ) {
        (Some(t), Some(b), Some(l), Some(r)) => Some(ScreenBox::from_silhouette(center, t, b, l, r)),
        _ => None,
    };
    let frame = LayerFrame {
        config,
        projector,
        anchors,
        center,
        screen_box,
        label: "Model",
        health,
        distance: camera.position().length(),
        pointer: DVec2::new(10.0, 20.0),
        now,
    };
    let mut canvas = RecordingCanvas::new(W, H);
    render(&mut canvas, &frame);
    canvas
}

fn expected_box() -> Rect {
    // x: 400 +/- 50, y: top 225, bottom 300
    Rect {
        x: 350.0,
        y: 225.0,
        w: 100.0,
        h: 75.0,
    }
}

#[test]
fn screen_box_is_centred_on_projected_centre() {
    let c = Projected { x: 400.0, y: 250.0, depth: 0.0 };
    let p = |x, y| Projected { x, y, depth: 0.0 };
    // Silhouette skewed to the right; width kept, centre re-imposed.
    let b = ScreenBox::from_silhouette(c, p(420.0, 200.0), p(420.0, 300.0), p(380.0, 250.0), p(480.0, 250.0));
    assert_eq!(b.left, 350.0);
    assert_eq!(b.right, 450.0);
    assert_eq!(b.top, 200.0);
    assert_eq!(b.bottom, 300.0);
    assert_eq!(b.label_scale(), 1.0);
}

#[test]
fn outline_box_is_double_stroked() {
    let config = OverlayConfig::default();
    let canvas = draw(&config, show_all, 100.0, 0.0, draw_box);
    assert_eq!(
        canvas.ops,
        vec![
            DrawOp::StrokeRect {
                color: "#000".into(),
                width: 3.5,
                rect: expected_box(),
            },
            DrawOp::StrokeRect {
                color: "#7b68ee".into(),
                width: 2.0,
                rect: expected_box(),
            },
        ]
    );
}

#[test]
fn filled_box_paints_before_the_outline() {
    let config = OverlayConfig {
        box_filled: true,
        box_fill_color: "#ff0000".into(),
        ..OverlayConfig::default()
    };
    let canvas = draw(&config, show_all, 100.0, 0.0, draw_box);
    assert_eq!(
        canvas.ops[0],
        DrawOp::FillRect {
            paint: Paint::Solid("rgba(255, 0, 0, 0.25)".into()),
            rect: expected_box(),
        }
    );
    assert_eq!(canvas.ops.len(), 3);
}

#[test]
fn box_needs_every_silhouette_anchor() {
    let config = OverlayConfig::default();
    // Hides the left silhouette anchor only.
    let canvas = draw(&config, |p| p.x < -0.5 && p.y == 1.0, 100.0, 0.0, draw_box);
    assert!(canvas.ops.is_empty());
}

#[test]
fn corner_brackets_scale_with_the_box() {
    let config = OverlayConfig {
        box_style: BoxStyle::Corners,
        ..OverlayConfig::default()
    };
    let canvas = draw(&config, show_all, 100.0, 0.0, draw_box);
    let strokes: Vec<_> = canvas.strokes().collect();
    assert_eq!(strokes.len(), 2);

    // min(15, 0.15 * 100, 0.15 * 75) = 11.25
    let (glow_color, glow_width, glow_path) = strokes[0];
    assert_eq!(glow_color, "rgba(123, 104, 238, 0.3)");
    assert_eq!(glow_width, 4.0);
    assert_eq!(glow_path[0], PathOp::MoveTo(DVec2::new(350.0, 225.0 + 12.25)));

    let (color, width, path) = strokes[1];
    assert_eq!(color, "#7b68ee");
    assert_eq!(width, 2.0);
    assert_eq!(path[0], PathOp::MoveTo(DVec2::new(350.0, 225.0 + 11.25)));
    assert_eq!(path.len(), 12);
}

#[test]
fn corner_brackets_cap_at_fifteen_pixels() {
    let config = OverlayConfig {
        box_style: BoxStyle::Corners,
        ..OverlayConfig::default()
    };
    // 200 x 150 px box: 15% of either side exceeds the cap.
    let big = AnchorSet::derive(&Aabb::new(
        DVec3::new(-2.0, 0.0, -2.0),
        DVec3::new(2.0, 4.0, 2.0),
    ));
    let canvas = draw_around(&big, &config, show_all, 100.0, 0.0, draw_box);
    let strokes: Vec<_> = canvas.strokes().collect();
    assert_eq!(strokes[0].2[0], PathOp::MoveTo(DVec2::new(300.0, 150.0 + 16.0)));
    assert_eq!(
        strokes[1].2[..3],
        [
            PathOp::MoveTo(DVec2::new(300.0, 165.0)),
            PathOp::LineTo(DVec2::new(300.0, 150.0)),
            PathOp::LineTo(DVec2::new(315.0, 150.0)),
        ]
    );
}

#[test]
fn glow_rings_fall_off_quadratically() {
    let config = OverlayConfig {
        box_style: BoxStyle::Glow,
        ..OverlayConfig::default()
    };
    let canvas = draw(&config, show_all, 100.0, 0.0, draw_box);
    let rings: Vec<_> = canvas
        .strokes()
        .filter(|(_, _, path)| path.iter().any(|op| matches!(op, PathOp::QuadTo(..))))
        .collect();
    assert_eq!(rings.len(), 15);

    // Box is 100 x 75; spread reaches 0.4 * 75 at the outermost ring.
    let b = expected_box();
    let max_spread = 0.4 * b.w.min(b.h);
    for (k, (color, width, path)) in rings.iter().enumerate() {
        let p = (15 - k) as f64 / 15.0;
        let alpha = 0.15 * (1.0 - p) * (1.0 - p);
        assert_eq!(*color, format!("rgba(123, 104, 238, {})", alpha), "ring {}", k);
        assert!((width - (2.0 + 4.0 * p)).abs() < 1e-12, "ring {}", k);

        let spread = max_spread * p;
        let PathOp::MoveTo(start) = path[0] else {
            panic!("ring {} does not start with a move", k);
        };
        // Rounded rect starts one corner radius along the top edge.
        assert!((start.x - (b.x - spread + spread * 0.5)).abs() < 1e-9, "ring {}", k);
        assert!((start.y - (b.y - spread)).abs() < 1e-9, "ring {}", k);
    }

    // Outermost ring is fully transparent.
    assert_eq!(rings[0].0, "rgba(123, 104, 238, 0)");
}

#[test]
fn glow_box_draws_rings_and_pulses_with_time() {
    let config = OverlayConfig {
        box_style: BoxStyle::Glow,
        ..OverlayConfig::default()
    };
    let at_rest = draw(&config, show_all, 100.0, 0.0, draw_box);

    let rings = at_rest
        .strokes()
        .filter(|(_, _, path)| path.iter().any(|op| matches!(op, PathOp::QuadTo(..))))
        .count();
    assert_eq!(rings, 15);
    assert!(at_rest
        .ops
        .iter()
        .any(|op| matches!(op, DrawOp::FillRect { paint: Paint::Radial(_), .. })));

    let pulse_color = |c: &RecordingCanvas| match c.ops.last() {
        Some(DrawOp::StrokeRect { color, .. }) => color.clone(),
        other => panic!("expected pulse ring, got {:?}", other),
    };
    let later = draw(&config, show_all, 100.0, std::f64::consts::PI / 10.0, draw_box);
    assert_ne!(pulse_color(&at_rest), pulse_color(&later));
}

#[test]
fn wireframe_fills_faces_then_strokes_edges() {
    let config = OverlayConfig {
        box_style: BoxStyle::Wireframe,
        box_filled: true,
        ..OverlayConfig::default()
    };
    let canvas = draw(&config, show_all, 100.0, 0.0, draw_box);

    let fills: Vec<_> = canvas.fills().collect();
    assert_eq!(fills.len(), WIREFRAME_FACES.len());
    assert!(fills
        .iter()
        .all(|(paint, _)| paint.css() == Some("rgba(123, 104, 238, 0.15)")));

    let strokes: Vec<_> = canvas.strokes().collect();
    assert_eq!(strokes.len(), 24);
    assert!(strokes[..12].iter().all(|(c, w, _)| *c == "#000" && *w == 3.0));
    assert!(strokes[12..].iter().all(|(c, w, _)| *c == "#7b68ee" && *w == 2.0));
}

#[test]
fn wireframe_is_all_or_nothing() {
    let config = OverlayConfig {
        box_style: BoxStyle::Wireframe,
        box_filled: true,
        ..OverlayConfig::default()
    };
    // Only the (min.x, min.y, min.z) corner fails.
    let canvas = draw(
        &config,
        |p| p.x < -0.5 && p.y < 0.5 && p.z < -0.5,
        100.0,
        0.0,
        draw_wireframe,
    );
    assert!(canvas.ops.is_empty());
}

#[test]
fn skeleton_draws_every_bone_twice() {
    let config = OverlayConfig::default();
    let canvas = draw(&config, show_all, 100.0, 0.0, draw_skeleton);
    let strokes: Vec<_> = canvas.strokes().collect();
    assert_eq!(strokes.len(), BONES.len() * 2);
    assert!(strokes[..17].iter().all(|(c, w, _)| *c == "#000" && *w == 3.0));
    assert!(strokes[17..].iter().all(|(c, w, _)| *c == "#ffffff" && *w == 1.5));
}

#[test]
fn skeleton_skips_bones_with_a_hidden_joint() {
    let config = OverlayConfig::default();
    // The head sits on top of the box; only Head-Neck touches it.
    let canvas = draw(&config, |p| p.y > 1.9, 100.0, 0.0, draw_skeleton);
    assert_eq!(canvas.strokes().count(), (BONES.len() - 1) * 2);
}

#[test]
fn tracer_runs_from_origin_to_centre() {
    let config = OverlayConfig::default();
    let canvas = draw(&config, show_all, 100.0, 0.0, draw_tracer);
    let strokes: Vec<_> = canvas.strokes().collect();
    assert_eq!(strokes.len(), 2);
    let expected = [
        PathOp::MoveTo(DVec2::new(400.0, 600.0)),
        PathOp::LineTo(DVec2::new(400.0, 262.5)),
    ];
    assert_eq!(strokes[0], ("#000", 3.5, &expected[..]));
    assert_eq!(strokes[1], ("#7b68ee", 2.0, &expected[..]));
}

#[test]
fn tracer_origin_choices() {
    let vp = Viewport::new(W, H);
    let pointer = DVec2::new(10.0, 20.0);
    assert_eq!(tracer_origin(TracerOrigin::BottomCenter, vp, pointer), DVec2::new(400.0, 600.0));
    assert_eq!(tracer_origin(TracerOrigin::TopCenter, vp, pointer), DVec2::new(400.0, 0.0));
    assert_eq!(tracer_origin(TracerOrigin::Cursor, vp, pointer), pointer);
    assert_eq!(tracer_origin(TracerOrigin::ScreenCenter, vp, pointer), DVec2::new(400.0, 300.0));

    let config = OverlayConfig {
        tracer_origin: TracerOrigin::Cursor,
        ..OverlayConfig::default()
    };
    let canvas = draw(&config, show_all, 100.0, 0.0, draw_tracer);
    let (_, _, path) = canvas.strokes().next().unwrap();
    assert_eq!(path[0], PathOp::MoveTo(pointer));
}

#[test]
fn health_colors() {
    assert_eq!(health_channels(100.0), (0, 255));
    assert_eq!(health_channels(50.0), (255, 255));
    assert_eq!(health_channels(0.0), (255, 0));
    assert_eq!(health_channels(75.0), (128, 255));
    assert_eq!(health_channels(25.0), (255, 128));
    assert_eq!(health_color(100.0), "rgb(0, 255, 0)");
    assert_eq!(health_color(0.0), "rgb(255, 0, 0)");
}

#[test]
fn hex_colors_expand_to_rgba() {
    assert_eq!(hex_to_rgba("#7b68ee", 0.25), "rgba(123, 104, 238, 0.25)");
    assert_eq!(hex_to_rgba("#zz", 0.5), "rgba(0, 0, 0, 0.5)");
}

#[test]
fn health_bar_fills_from_the_bottom() {
    let config = OverlayConfig::default();
    let canvas = draw(&config, show_all, 50.0, 0.0, draw_health_bar);
    assert_eq!(
        canvas.ops,
        vec![
            DrawOp::FillRect {
                paint: Paint::Solid("rgba(50, 50, 50, 0.8)".into()),
                rect: Rect { x: 344.0, y: 225.0, w: 4.0, h: 75.0 },
            },
            DrawOp::FillRect {
                paint: Paint::Solid("rgb(255, 255, 0)".into()),
                rect: Rect { x: 344.0, y: 262.5, w: 4.0, h: 37.5 },
            },
            DrawOp::StrokeRect {
                color: "#000".into(),
                width: 1.0,
                rect: Rect { x: 344.0, y: 225.0, w: 4.0, h: 75.0 },
            },
        ]
    );
}

#[test]
fn health_bar_needs_the_screen_box() {
    let config = OverlayConfig::default();
    let canvas = draw(&config, |p| p.y > 1.9, 50.0, 0.0, draw_health_bar);
    assert!(canvas.ops.is_empty());
}

fn text_ops(canvas: &RecordingCanvas) -> Vec<(String, String, DVec2)> {
    canvas
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillText { text, font, at, .. } => Some((text.clone(), font.clone(), *at)),
            _ => None,
        })
        .collect()
}

#[test]
fn name_and_distance_scale_with_box_height() {
    let config = OverlayConfig::default();

    let name = draw(&config, show_all, 100.0, 0.0, draw_name);
    assert_eq!(
        text_ops(&name),
        vec![(
            "Model".to_string(),
            "10.5px -apple-system, sans-serif".to_string(),
            DVec2::new(400.0, 217.5)
        )]
    );
    assert!(matches!(name.ops[0], DrawOp::StrokeText { width, .. } if width == 3.0));

    let distance = draw(&config, show_all, 100.0, 0.0, draw_distance);
    assert_eq!(
        text_ops(&distance),
        vec![(
            "[5m]".to_string(),
            "9px -apple-system, sans-serif".to_string(),
            DVec2::new(400.0, 315.0)
        )]
    );
}

#[test]
fn labels_fall_back_to_centre_without_a_box() {
    let config = OverlayConfig::default();
    let name = draw(&config, |p| p.y > 1.9, 100.0, 0.0, draw_name);
    assert_eq!(
        text_ops(&name),
        vec![(
            "Model".to_string(),
            "14px -apple-system, sans-serif".to_string(),
            DVec2::new(400.0, 252.5)
        )]
    );
}

#[test]
fn distance_text_floors_to_whole_metres() {
    assert_eq!(distance_text(5.9), "[5m]");
    assert_eq!(distance_text(0.2), "[0m]");
    assert_eq!(distance_text(12.0), "[12m]");
}

#[test]
fn hat_draws_struts_and_both_rings() {
    let config = OverlayConfig {
        show_hat: true,
        hat_color: "#ff0000".into(),
        ..OverlayConfig::default()
    };
    let canvas = draw(&config, show_all, 100.0, 0.0, draw_hat);
    let strokes: Vec<_> = canvas.strokes().collect();
    assert_eq!(strokes.len(), 16 + 2);
    assert!(strokes[..16]
        .iter()
        .all(|(c, w, _)| *c == "rgba(255, 0, 0, 0.8)" && *w == 1.0));
    for (c, w, path) in &strokes[16..] {
        assert_eq!(*c, "rgba(255, 0, 0, 0.9)");
        assert_eq!(*w, 1.5);
        assert_eq!(path.len(), 17);
    }
}

#[test]
fn hat_lifts_the_pen_over_hidden_points() {
    let config = OverlayConfig::default();
    // Brim points 0, 1, 2, 14, 15, 16 reach past x = 1 and are hidden.
    let canvas = draw(&config, |p| p.x > 1.0, 100.0, 0.0, draw_hat);
    let strokes: Vec<_> = canvas.strokes().collect();
    assert_eq!(strokes.len(), 11 + 2);
    let brim = strokes.last().unwrap().2;
    assert_eq!(brim.len(), 11);
    assert!(matches!(brim[0], PathOp::MoveTo(_)));
    assert!(brim[1..].iter().all(|op| matches!(op, PathOp::LineTo(_))));
}

#[test]
fn hat_needs_two_points_per_ring() {
    let config = OverlayConfig::default();
    let canvas = draw(&config, |p| p.y > 2.1, 100.0, 0.0, draw_hat);
    assert!(canvas.ops.is_empty());
}

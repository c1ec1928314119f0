use super::LayerFrame;
use crate::constants::*;
use crate::core::Projected;
use crate::overlay::canvas::Canvas;
use crate::overlay::color::hex_to_rgba;

/// Cuboid edges as index pairs into `Aabb::corners` order.
pub const WIREFRAME_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Cuboid faces as corner quads, in fill order.
pub const WIREFRAME_FACES: [[usize; 4]; 6] = [
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [4, 5, 6, 7],
    [0, 1, 2, 3],
    [0, 3, 7, 4],
    [1, 2, 6, 5],
];

/// 3D bounding cuboid. All eight corners must project or nothing is drawn.
/// Faces are filled without culling, then edges are double-stroked.
pub fn draw_wireframe(canvas: &mut dyn Canvas, frame: &LayerFrame) {
    let Some(corners) = project_corners(frame) else {
        return;
    };
    let config = frame.config;

    if config.box_filled {
        canvas.set_fill_color(&hex_to_rgba(&config.box_fill_color, WIREFRAME_FILL_ALPHA));
        for face in WIREFRAME_FACES {
            canvas.begin_path();
            canvas.move_to(corners[face[0]].x, corners[face[0]].y);
            for &i in &face[1..] {
                canvas.line_to(corners[i].x, corners[i].y);
            }
            canvas.close_path();
            canvas.fill();
        }
    }

    for (color, width) in [
        (OUTLINE_COLOR, WIREFRAME_OUTLINE_WIDTH),
        (config.box_color.as_str(), WIREFRAME_STROKE_WIDTH),
    ] {
        canvas.set_stroke_color(color);
        canvas.set_line_width(width);
        for (a, b) in WIREFRAME_EDGES {
            canvas.line(corners[a].xy(), corners[b].xy());
        }
    }
}

fn project_corners(frame: &LayerFrame) -> Option<[Projected; 8]> {
    let mut out = [Projected {
        x: 0.0,
        y: 0.0,
        depth: 0.0,
    }; 8];
    for (slot, corner) in out.iter_mut().zip(frame.anchors.corners) {
        *slot = frame.projector.project(corner)?;
    }
    Some(out)
}

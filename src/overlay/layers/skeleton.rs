use super::{double_stroke, LayerFrame};
use crate::constants::{SKELETON_OUTLINE_WIDTH, SKELETON_STROKE_WIDTH};
use crate::core::{Joint, Projected, BONES};
use crate::overlay::canvas::Canvas;

/// Rig bones; a bone whose endpoints don't both project is skipped alone.
pub fn draw_skeleton(canvas: &mut dyn Canvas, frame: &LayerFrame) {
    let mut joints: [Option<Projected>; Joint::COUNT] = [None; Joint::COUNT];
    for joint in Joint::ALL {
        joints[joint.index()] = frame.projector.project(frame.anchors.joint(joint));
    }

    double_stroke(
        canvas,
        &frame.config.skeleton_color,
        SKELETON_OUTLINE_WIDTH,
        SKELETON_STROKE_WIDTH,
        |c| {
            for (a, b) in BONES {
                if let (Some(p), Some(q)) = (joints[a.index()], joints[b.index()]) {
                    c.line(p.xy(), q.xy());
                }
            }
        },
    );
}

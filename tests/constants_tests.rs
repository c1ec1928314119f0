// Host-side tests for tuning constants and their relationships.

use esp_viewer::constants::*;
use esp_viewer::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn outline_pass_is_wider_than_color_pass() {
    assert!(BOX_OUTLINE_WIDTH > BOX_STROKE_WIDTH);
    assert!(TRACER_OUTLINE_WIDTH > TRACER_STROKE_WIDTH);
    assert!(SKELETON_OUTLINE_WIDTH > SKELETON_STROKE_WIDTH);
    assert!(WIREFRAME_OUTLINE_WIDTH > WIREFRAME_STROKE_WIDTH);
    assert!((BOX_OUTLINE_WIDTH / BOX_STROKE_WIDTH - 1.75).abs() < 1e-12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alphas_are_within_unit_range() {
    for a in [
        BOX_FILL_ALPHA,
        WIREFRAME_FILL_ALPHA,
        GLOW_MAX_ALPHA,
        GLOW_INNER_ALPHA,
        GLOW_CORNER_ALPHA,
        CORNER_GLOW_ALPHA,
        HAT_STRUT_ALPHA,
        HAT_RING_ALPHA,
        PULSE_BASE_ALPHA + PULSE_ALPHA_SPAN,
    ] {
        assert!((0.0..=1.0).contains(&a), "{}", a);
    }
    let stops: Vec<f64> = GLOW_GRADIENT_STOPS.iter().map(|(offset, _)| *offset).collect();
    assert!(stops.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(stops.first(), Some(&0.0));
    assert_eq!(stops.last(), Some(&1.0));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rig_heights_descend_from_the_head() {
    let heights = [
        RIG_NECK_Y,
        RIG_SPINE_TOP_Y,
        RIG_SPINE_MID_Y,
        RIG_SPINE_BOTTOM_Y,
        RIG_HIP_Y,
        RIG_KNEE_Y,
    ];
    assert!(heights.windows(2).all(|w| w[0] > w[1]));
    assert!(RIG_NECK_Y < 1.0 && RIG_KNEE_Y > 0.0);
    assert!(RIG_HAND_OUT_X > RIG_ELBOW_OUT_X);
    assert!(RIG_HAND_FWD_Z > RIG_ELBOW_FWD_Z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_health_tuning() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOV_Y_DEG > 0.0 && CAMERA_FOV_Y_DEG < 180.0);
    assert!(FRAMING_DISTANCE_FACTOR >= 1.0);
    assert_eq!(HEALTH_MID * 2.0, HEALTH_MAX);
    assert!(HEALTH_MIN_SPEED_FACTOR > 0.0 && HEALTH_MIN_SPEED_FACTOR < 1.0);
    assert!((0.0..=1.0).contains(&HEALTH_FLIP_PROBABILITY));
    assert!(CORNER_MAX_PX > 0.0 && CORNER_RATIO < 0.5);
    assert!(HAT_BRIM_RADIUS > HAT_APEX_RADIUS);
}

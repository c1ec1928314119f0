// Shared scene/rig tuning constants used by the overlay core.

// Camera defaults
pub const CAMERA_FOV_Y_DEG: f64 = 50.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 1000.0;
pub const CAMERA_INITIAL_EYE: [f64; 3] = [3.0, 3.0, 3.0];
pub const FRAMING_DISTANCE_FACTOR: f64 = 1.5; // multiple of the fov-fitted distance
pub const FRAMING_HEIGHT_RATIO: f64 = 0.7; // eye height relative to horizontal offset

// Subject motion
pub const AUTO_ROTATE_STEP_RAD: f64 = 0.01; // yaw per tick when auto-rotate is on

// Humanoid rig, as fractions of the bounding box height (measured from min.y)
pub const RIG_NECK_Y: f64 = 0.85;
pub const RIG_SPINE_TOP_Y: f64 = 0.75;
pub const RIG_SPINE_MID_Y: f64 = 0.6;
pub const RIG_SPINE_BOTTOM_Y: f64 = 0.45;
pub const RIG_HIP_Y: f64 = 0.3;
pub const RIG_KNEE_Y: f64 = 0.15;

// Rig, as fractions of box width (x) and depth (z)
pub const RIG_SHOULDER_SPAN_X: f64 = 0.4; // full shoulder width; each side is half
pub const RIG_ELBOW_OUT_X: f64 = 0.15; // beyond the shoulder
pub const RIG_HAND_OUT_X: f64 = 0.25; // beyond the shoulder
pub const RIG_ELBOW_FWD_Z: f64 = 0.1;
pub const RIG_HAND_FWD_Z: f64 = 0.15;
pub const RIG_LEG_OFFSET_X: f64 = 0.15;

// Health oscillator
pub const HEALTH_MAX: f64 = 100.0;
pub const HEALTH_MID: f64 = 50.0;
pub const HEALTH_BASE_SPEED: f64 = 0.5; // units per tick at the midpoint
pub const HEALTH_MIN_SPEED_FACTOR: f64 = 0.3; // fraction of base speed kept at the bounds
pub const HEALTH_FLIP_PROBABILITY: f64 = 0.02; // per tick, only while resting on a bound

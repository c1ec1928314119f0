/// Overlay styling constants.
///
/// Stroke widths, glow falloff, label offsets and hat geometry. Keeping them
/// here keeps magic numbers out of the layer renderers.
// Double-stroke widths: dark outline pass, then colored pass on top
pub const OUTLINE_COLOR: &str = "#000";
pub const BOX_OUTLINE_WIDTH: f64 = 3.5;
pub const BOX_STROKE_WIDTH: f64 = 2.0;
pub const TRACER_OUTLINE_WIDTH: f64 = 3.5;
pub const TRACER_STROKE_WIDTH: f64 = 2.0;
pub const SKELETON_OUTLINE_WIDTH: f64 = 3.0;
pub const SKELETON_STROKE_WIDTH: f64 = 1.5;
pub const WIREFRAME_OUTLINE_WIDTH: f64 = 3.0;
pub const WIREFRAME_STROKE_WIDTH: f64 = 2.0;

// Fills
pub const BOX_FILL_ALPHA: f64 = 0.25;
pub const WIREFRAME_FILL_ALPHA: f64 = 0.15;

// Glow box
pub const GLOW_STEPS: usize = 15;
pub const GLOW_MAX_SPREAD_RATIO: f64 = 0.4; // of min(width, height)
pub const GLOW_MAX_ALPHA: f64 = 0.15;
pub const GLOW_BASE_WIDTH: f64 = 2.0;
pub const GLOW_WIDTH_SPAN: f64 = 4.0;
pub const GLOW_RADIUS_RATIO: f64 = 0.5; // corner radius relative to spread
pub const GLOW_GRADIENT_INNER: f64 = 0.3; // of min(width, height)
pub const GLOW_GRADIENT_OUTER: f64 = 0.8;
pub const GLOW_GRADIENT_BLEED: f64 = 0.3; // gradient rect overhang per side
pub const GLOW_GRADIENT_STOPS: [(f64, f64); 4] = [(0.0, 0.8), (0.3, 0.4), (0.6, 0.2), (1.0, 0.0)];
pub const GLOW_FRAME_OUTLINE: &str = "rgba(0, 0, 0, 0.8)";
pub const GLOW_FRAME_OUTLINE_WIDTH: f64 = 4.0;
pub const GLOW_FRAME_WIDTH: f64 = 2.5;
pub const GLOW_INNER_ALPHA: f64 = 0.6;
pub const GLOW_CORNER_HALF: f64 = 3.0;
pub const GLOW_CORNER_ALPHA: f64 = 0.9;
pub const PULSE_RATE_PER_SEC: f64 = 5.0; // radians per second
pub const PULSE_BASE_ALPHA: f64 = 0.1;
pub const PULSE_ALPHA_SPAN: f64 = 0.1;
pub const PULSE_RING_RATIO: f64 = 0.2; // of the max glow spread

// Corner brackets
pub const CORNER_MAX_PX: f64 = 15.0;
pub const CORNER_RATIO: f64 = 0.15; // of width and of height
pub const CORNER_GLOW_ALPHA: f64 = 0.3;
pub const CORNER_GLOW_WIDTH: f64 = 4.0;

// Health bar
pub const HEALTH_BAR_WIDTH: f64 = 4.0;
pub const HEALTH_BAR_GAP: f64 = 2.0;
pub const HEALTH_TRACK_COLOR: &str = "rgba(50, 50, 50, 0.8)";
pub const HEALTH_BORDER_WIDTH: f64 = 1.0;

// Labels, sized relative to a 100px tall box
pub const LABEL_SCALE_REFERENCE_PX: f64 = 100.0;
pub const NAME_FONT_PX: f64 = 14.0;
pub const NAME_OFFSET_PX: f64 = 10.0; // above the box
pub const DISTANCE_FONT_PX: f64 = 12.0;
pub const DISTANCE_OFFSET_PX: f64 = 20.0; // below the box
pub const LABEL_OUTLINE_WIDTH: f64 = 3.0;
pub const LABEL_FONT_FAMILY: &str = "-apple-system, sans-serif";

// Hat, in world units around the head anchor
pub const HAT_SEGMENTS: usize = 16;
pub const HAT_APEX_RISE: f64 = 0.2;
pub const HAT_APEX_RADIUS: f64 = 0.2;
pub const HAT_BRIM_DROP: f64 = 0.4;
pub const HAT_BRIM_RADIUS: f64 = 1.5;
pub const HAT_STRUT_ALPHA: f64 = 0.8;
pub const HAT_STRUT_WIDTH: f64 = 1.0;
pub const HAT_RING_ALPHA: f64 = 0.9;
pub const HAT_RING_WIDTH: f64 = 1.5;

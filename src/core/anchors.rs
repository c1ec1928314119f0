use crate::core::bounds::Aabb;
use crate::core::config::TracerOrigin;
use crate::core::constants::*;
use crate::core::projector::Viewport;
use glam::{DVec2, DVec3};

/// Named points of the approximate humanoid rig.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Joint {
    Head,
    Neck,
    SpineTop,
    SpineMid,
    SpineBottom,
    Hip,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftHand,
    RightHand,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftFoot,
    RightFoot,
}

impl Joint {
    pub const COUNT: usize = 18;

    pub const ALL: [Joint; Joint::COUNT] = [
        Joint::Head,
        Joint::Neck,
        Joint::SpineTop,
        Joint::SpineMid,
        Joint::SpineBottom,
        Joint::Hip,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftHand,
        Joint::RightHand,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftFoot,
        Joint::RightFoot,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Skeleton segments in draw order: spine chain, left arm, right arm,
/// left leg, right leg. The two hip segments form the cross-bar.
pub const BONES: [(Joint, Joint); 17] = [
    (Joint::Head, Joint::Neck),
    (Joint::Neck, Joint::SpineTop),
    (Joint::SpineTop, Joint::SpineMid),
    (Joint::SpineMid, Joint::SpineBottom),
    (Joint::SpineBottom, Joint::Hip),
    (Joint::SpineTop, Joint::LeftShoulder),
    (Joint::LeftShoulder, Joint::LeftElbow),
    (Joint::LeftElbow, Joint::LeftHand),
    (Joint::SpineTop, Joint::RightShoulder),
    (Joint::RightShoulder, Joint::RightElbow),
    (Joint::RightElbow, Joint::RightHand),
    (Joint::Hip, Joint::LeftHip),
    (Joint::LeftHip, Joint::LeftKnee),
    (Joint::LeftKnee, Joint::LeftFoot),
    (Joint::Hip, Joint::RightHip),
    (Joint::RightHip, Joint::RightKnee),
    (Joint::RightKnee, Joint::RightFoot),
];

/// Box-edge midpoints through the centre, used to size the 2D box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Silhouette {
    pub top: DVec3,
    pub bottom: DVec3,
    pub left: DVec3,
    pub right: DVec3,
}

/// Every world-space anchor the layers draw against, for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorSet {
    pub bounds: Aabb,
    pub center: DVec3,
    pub silhouette: Silhouette,
    pub corners: [DVec3; 8],
    joints: [DVec3; Joint::COUNT],
}

impl AnchorSet {
    pub fn derive(bounds: &Aabb) -> Self {
        let center = bounds.center();
        let (min, max) = (bounds.min, bounds.max);
        let silhouette = Silhouette {
            top: DVec3::new(center.x, max.y, center.z),
            bottom: DVec3::new(center.x, min.y, center.z),
            left: DVec3::new(min.x, center.y, center.z),
            right: DVec3::new(max.x, center.y, center.z),
        };
        Self {
            bounds: *bounds,
            center,
            silhouette,
            corners: bounds.corners(),
            joints: derive_joints(bounds),
        }
    }

    #[inline]
    pub fn joint(&self, joint: Joint) -> DVec3 {
        self.joints[joint.index()]
    }

    #[inline]
    pub fn head(&self) -> DVec3 {
        self.joint(Joint::Head)
    }
}

fn derive_joints(bounds: &Aabb) -> [DVec3; Joint::COUNT] {
    let c = bounds.center();
    let size = bounds.size();
    let min_y = bounds.min.y;
    let at = |dx: f64, frac_y: f64, dz: f64| DVec3::new(c.x + dx, min_y + size.y * frac_y, c.z + dz);

    let shoulder = size.x * RIG_SHOULDER_SPAN_X / 2.0;
    let elbow = shoulder + size.x * RIG_ELBOW_OUT_X;
    let hand = shoulder + size.x * RIG_HAND_OUT_X;
    let leg = size.x * RIG_LEG_OFFSET_X;
    let elbow_z = size.z * RIG_ELBOW_FWD_Z;
    let hand_z = size.z * RIG_HAND_FWD_Z;

    let mut joints = [DVec3::ZERO; Joint::COUNT];
    for joint in Joint::ALL {
        joints[joint.index()] = match joint {
            Joint::Head => at(0.0, 1.0, 0.0),
            Joint::Neck => at(0.0, RIG_NECK_Y, 0.0),
            Joint::SpineTop => at(0.0, RIG_SPINE_TOP_Y, 0.0),
            Joint::SpineMid => at(0.0, RIG_SPINE_MID_Y, 0.0),
            Joint::SpineBottom => at(0.0, RIG_SPINE_BOTTOM_Y, 0.0),
            Joint::Hip => at(0.0, RIG_HIP_Y, 0.0),
            Joint::LeftShoulder => at(-shoulder, RIG_SPINE_TOP_Y, 0.0),
            Joint::RightShoulder => at(shoulder, RIG_SPINE_TOP_Y, 0.0),
            Joint::LeftElbow => at(-elbow, RIG_SPINE_MID_Y, elbow_z),
            Joint::RightElbow => at(elbow, RIG_SPINE_MID_Y, elbow_z),
            Joint::LeftHand => at(-hand, RIG_SPINE_BOTTOM_Y, hand_z),
            Joint::RightHand => at(hand, RIG_SPINE_BOTTOM_Y, hand_z),
            Joint::LeftHip => at(-leg, RIG_HIP_Y, 0.0),
            Joint::RightHip => at(leg, RIG_HIP_Y, 0.0),
            Joint::LeftKnee => at(-leg, RIG_KNEE_Y, 0.0),
            Joint::RightKnee => at(leg, RIG_KNEE_Y, 0.0),
            Joint::LeftFoot => at(-leg, 0.0, 0.0),
            Joint::RightFoot => at(leg, 0.0, 0.0),
        };
    }
    joints
}

/// Screen-space start of the tracer line. Not derived from the subject.
pub fn tracer_origin(origin: TracerOrigin, viewport: Viewport, pointer: DVec2) -> DVec2 {
    match origin {
        TracerOrigin::BottomCenter => DVec2::new(viewport.width / 2.0, viewport.height),
        TracerOrigin::TopCenter => DVec2::new(viewport.width / 2.0, 0.0),
        TracerOrigin::Cursor => pointer,
        TracerOrigin::ScreenCenter => viewport.center(),
    }
}

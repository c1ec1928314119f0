use glam::{DQuat, DVec3};

/// Axis-aligned bounding box in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing every point; `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    #[inline]
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// The eight corners: the four `min.y` corners as a planar loop over
    /// (x, z) = (min,min) (max,min) (max,max) (min,max), then the same four
    /// at `max.y`. Wireframe edges and faces index into this order.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
        ]
    }
}

/// The single tracked model. The overlay only ever reads its bounds.
#[derive(Clone, Debug)]
pub struct Subject {
    /// Bounds after placement, before any yaw is applied.
    pub rest_bounds: Aabb,
    /// Translation applied to the raw bounds by placement. The host moves
    /// the rendered model by the same amount.
    pub offset: DVec3,
    /// Rotation about the vertical axis through the bounds centre.
    pub yaw: f64,
    pub label: String,
}

impl Subject {
    /// Seat a freshly loaded model: centre it on x/z and rest it on y = 0.
    pub fn placed(raw: Aabb, label: impl Into<String>) -> Self {
        let c = raw.center();
        let offset = DVec3::new(-c.x, -raw.min.y, -c.z);
        Self {
            rest_bounds: raw.translated(offset),
            offset,
            yaw: 0.0,
            label: label.into(),
        }
    }

    pub fn rotate_yaw(&mut self, delta: f64) {
        self.yaw = (self.yaw + delta) % std::f64::consts::TAU;
    }

    /// Current world-space bounds; with a non-zero yaw this is the box
    /// enclosing the rotated rest bounds.
    pub fn world_bounds(&self) -> Aabb {
        if self.yaw == 0.0 {
            return self.rest_bounds;
        }
        let pivot = self.rest_bounds.center();
        let rot = DQuat::from_rotation_y(self.yaw);
        Aabb::from_points(
            self.rest_bounds
                .corners()
                .into_iter()
                .map(|p| pivot + rot * (p - pivot)),
        )
        .unwrap_or(self.rest_bounds)
    }
}

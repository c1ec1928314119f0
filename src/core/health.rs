use crate::core::constants::*;
use rand::Rng;

/// Synthetic health value that drifts between 0 and 100, easing out near
/// the bounds and resting there until a per-tick coin flip sends it back.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthOscillator {
    pub value: f64,
    /// +1 rising, -1 falling.
    pub direction: f64,
    pub base_speed: f64,
    pub flip_probability: f64,
}

impl Default for HealthOscillator {
    fn default() -> Self {
        Self {
            value: HEALTH_MAX,
            direction: -1.0,
            base_speed: HEALTH_BASE_SPEED,
            flip_probability: HEALTH_FLIP_PROBABILITY,
        }
    }
}

impl HealthOscillator {
    pub fn with_flip_probability(mut self, p: f64) -> Self {
        self.flip_probability = p;
        self
    }

    /// Triangular easing: 1 at the midpoint, 0 at either bound.
    #[inline]
    pub fn easing(value: f64) -> f64 {
        1.0 - ((value - HEALTH_MID) / HEALTH_MID).abs()
    }

    #[inline]
    pub fn speed_at(&self, value: f64) -> f64 {
        self.base_speed
            * (HEALTH_MIN_SPEED_FACTOR + (1.0 - HEALTH_MIN_SPEED_FACTOR) * Self::easing(value))
    }

    /// Advance one frame.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.value += self.direction * self.speed_at(self.value);

        // Clamp first; the reversal check only ever sees an in-range value.
        let bound_dir = if self.value <= 0.0 {
            self.value = 0.0;
            Some(1.0)
        } else if self.value >= HEALTH_MAX {
            self.value = HEALTH_MAX;
            Some(-1.0)
        } else {
            None
        };

        if let Some(dir) = bound_dir {
            if rng.gen::<f64>() < self.flip_probability {
                self.direction = dir;
            }
        }
    }

    /// Value as a fraction in [0, 1].
    #[inline]
    pub fn fraction(&self) -> f64 {
        (self.value / HEALTH_MAX).clamp(0.0, 1.0)
    }
}

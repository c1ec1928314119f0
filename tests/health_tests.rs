// Host-side tests for the synthetic health oscillator.

use esp_viewer::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn easing_peaks_at_the_midpoint() {
    assert_eq!(HealthOscillator::easing(50.0), 1.0);
    assert_eq!(HealthOscillator::easing(0.0), 0.0);
    assert_eq!(HealthOscillator::easing(100.0), 0.0);
    assert_eq!(HealthOscillator::easing(75.0), 0.5);

    let h = HealthOscillator::default();
    assert!((h.speed_at(50.0) - 0.5).abs() < 1e-12);
    assert!((h.speed_at(100.0) - 0.15).abs() < 1e-12);
}

#[test]
fn starts_full_and_falling() {
    let h = HealthOscillator::default();
    assert_eq!(h.value, 100.0);
    assert_eq!(h.direction, -1.0);
    assert_eq!(h.fraction(), 1.0);
}

#[test]
fn descends_monotonically_and_rests_on_zero() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut h = HealthOscillator::default().with_flip_probability(0.0);
    let mut last = h.value;
    for _ in 0..2_000 {
        h.tick(&mut rng);
        assert!(h.value <= last);
        assert!(h.value >= 0.0);
        last = h.value;
    }
    assert_eq!(h.value, 0.0);
    assert_eq!(h.direction, -1.0);
}

#[test]
fn certain_flip_reverses_at_the_bound() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut h = HealthOscillator::default().with_flip_probability(1.0);
    h.value = 0.1;
    h.tick(&mut rng);
    assert_eq!(h.value, 0.0);
    assert_eq!(h.direction, 1.0);
    h.tick(&mut rng);
    assert!(h.value > 0.0);
}

#[test]
fn never_reverses_mid_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut h = HealthOscillator::default().with_flip_probability(1.0);
    h.value = 60.0;
    for _ in 0..10 {
        h.tick(&mut rng);
        assert_eq!(h.direction, -1.0);
    }
}

#[test]
fn stays_in_range_and_eventually_climbs_back() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut h = HealthOscillator::default();
    let mut rose = false;
    for _ in 0..20_000 {
        h.tick(&mut rng);
        assert!((0.0..=100.0).contains(&h.value));
        rose |= h.direction > 0.0;
    }
    assert!(rose);
}

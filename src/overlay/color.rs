/// `#rrggbb` to its channels. Malformed channels read as 0.
pub fn hex_channels(hex: &str) -> [u8; 3] {
    let digits = hex.trim().trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    [channel(0), channel(2), channel(4)]
}

/// `#rrggbb` plus alpha as a CSS `rgba()` string.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let [r, g, b] = hex_channels(hex);
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

/// Red/green channels for a health value in [0, 100]: green holds at 255
/// while the red ramps in above the midpoint, then green ramps out below it.
pub fn health_channels(health: f64) -> (u8, u8) {
    let h = health.clamp(0.0, 100.0);
    if h > 50.0 {
        ((255.0 * (100.0 - h) / 50.0).round() as u8, 255)
    } else {
        (255, (255.0 * h / 50.0).round() as u8)
    }
}

pub fn health_color(health: f64) -> String {
    let (r, g) = health_channels(health);
    format!("rgb({}, {}, 0)", r, g)
}

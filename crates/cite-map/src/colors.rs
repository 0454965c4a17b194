//! Distinct display colors, one per report entry.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SATURATION_RANGE: (f64, f64) = (0.5, 0.9);
const VALUE_RANGE: (f64, f64) = (0.7, 0.95);

/// Samples random, reasonably bright colors from an injected generator.
#[derive(Debug, Clone)]
pub struct ColorAllocator<R> {
    rng: R,
}

impl ColorAllocator<StdRng> {
    /// Reproducible allocator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ColorAllocator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Exactly `n` distinct `#rrggbb` colors. No ordering is implied.
    pub fn allocate(&mut self, n: usize) -> BTreeSet<String> {
        let mut colors = BTreeSet::new();
        while colors.len() < n {
            colors.insert(self.sample());
        }
        colors
    }

    fn sample(&mut self) -> String {
        let hue = self.rng.gen_range(0.0..1.0);
        let saturation = self.rng.gen_range(SATURATION_RANGE.0..=SATURATION_RANGE.1);
        let value = self.rng.gen_range(VALUE_RANGE.0..=VALUE_RANGE.1);
        let (r, g, b) = hsv_to_rgb(hue, saturation, value);
        to_hex(r, g, b)
    }
}

/// Convert HSV (all components in `[0, 1]`) to RGB in `[0, 1]`.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (value, value, value);
    }
    let sector = (hue * 6.0).floor();
    let fraction = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));
    match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    }
}

// Channels are truncated, not rounded.
fn to_hex(r: f64, g: f64, b: f64) -> String {
    let channel = |c: f64| (c * 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

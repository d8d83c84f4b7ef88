//! Coherent noise sources for the stipple painter.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// Deterministic, continuous 3D noise with output in `[0, 1)`.
pub trait NoiseField {
    fn sample(&self, x: f64, y: f64, t: f64) -> f64;
}

impl<F> NoiseField for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    #[inline]
    fn sample(&self, x: f64, y: f64, t: f64) -> f64 {
        self(x, y, t)
    }
}

/// Largest value a [`NoiseField`] may return.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON;

/// Fractal Perlin noise remapped from `[-1, 1]` to `[0, 1)`.
///
/// Four octaves with half amplitude falloff, matching the look of classic
/// creative-coding `noise()` helpers.
pub struct PerlinField {
    fbm: Fbm<Perlin>,
}

impl PerlinField {
    pub const OCTAVES: usize = 4;
    pub const PERSISTENCE: f64 = 0.5;

    pub fn new(seed: u32) -> Self {
        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(Self::OCTAVES)
            .set_persistence(Self::PERSISTENCE);
        Self { fbm }
    }
}

impl NoiseField for PerlinField {
    fn sample(&self, x: f64, y: f64, t: f64) -> f64 {
        let v = self.fbm.get([x, y, t]);
        ((v + 1.0) * 0.5).clamp(0.0, BELOW_ONE)
    }
}

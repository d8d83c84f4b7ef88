//! Noise-driven stippled line painting ("sand" strokes).

use rand::Rng;

use crate::field::NoiseField;
use crate::geometry::{Point, Triangle};

/// Floor-based modulo: the result has the sign of `y`.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    x - (x / y).floor() * y
}

/// Stippled line painter.
///
/// A line is approximated by grains scattered along it. Each grain's position
/// along the segment comes from coherent noise sampled near the line's start,
/// offset in time by a fresh random scalar plus a slow frame-driven drift, then
/// folded with `fmod(n * fold, 1.0)` into a repeating ramp. The fold is what
/// produces the banded, sand-like texture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stippler {
    /// Grains per unit of normalized line length.
    pub density: f64,
    /// Spatial scale applied to the start point before sampling noise.
    pub resolution: f64,
    /// Noise multiplier before folding into `[0, 1)`.
    pub fold: f64,
    /// Lines shorter than this emit nothing.
    pub min_length: f64,
    /// Noise time advance per frame.
    pub time_step: f64,
}

impl Default for Stippler {
    fn default() -> Self {
        Self {
            density: 500.0,
            resolution: 0.001,
            fold: 30.0,
            min_length: 0.007,
            time_step: 0.01,
        }
    }
}

impl Stippler {
    /// Number of grains a line of `length` receives.
    ///
    /// Zero below [`min_length`](Self::min_length); otherwise
    /// `ceil(length * density)`.
    pub fn grain_count(&self, length: f64) -> usize {
        if !(length >= self.min_length) {
            return 0;
        }
        (length * self.density).ceil() as usize
    }

    /// Appends the grains for the segment `a → b` to `out` and returns how many
    /// were written.
    pub fn paint_line<R, N>(
        &self,
        a: Point,
        b: Point,
        frame: u64,
        rng: &mut R,
        noise: &N,
        out: &mut Vec<Point>,
    ) -> usize
    where
        R: Rng + ?Sized,
        N: NoiseField + ?Sized,
    {
        let grains = self.grain_count(a.distance(b));
        if grains == 0 {
            return 0;
        }

        let drift = frame as f64 * self.time_step;
        let (nx, ny) = (a.x * self.resolution, a.y * self.resolution);

        out.reserve(grains);
        for _ in 0..grains {
            let t = rng.r#gen::<f64>() + drift;
            let n = fmod(noise.sample(nx, ny, t) * self.fold, 1.0);
            out.push(a.lerp(b, n));
        }
        grains
    }

    /// Paints the three edges of `tri` in `AB, BC, CA` order.
    pub fn paint_triangle<R, N>(
        &self,
        tri: &Triangle,
        frame: u64,
        rng: &mut R,
        noise: &N,
        out: &mut Vec<Point>,
    ) -> usize
    where
        R: Rng + ?Sized,
        N: NoiseField + ?Sized,
    {
        tri.edges()
            .into_iter()
            .map(|(a, b)| self.paint_line(a, b, frame, rng, noise, out))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use crate::field::PerlinField;

    fn rng() -> Pcg64 {
        Pcg64::seed_from_u64(11)
    }

    fn flat(v: f64) -> impl Fn(f64, f64, f64) -> f64 {
        move |_, _, _| v
    }

    // ── fmod ──────────────────────────────────────────────────────────────

    #[test]
    fn fmod_wraps_into_divisor_range() {
        assert!((fmod(7.25, 1.0) - 0.25).abs() < 1e-12);
        assert!((fmod(-0.25, 1.0) - 0.75).abs() < 1e-12);
        assert_eq!(fmod(3.0, 1.0), 0.0);
    }

    // ── grain_count ───────────────────────────────────────────────────────

    #[test]
    fn short_lines_get_no_grains() {
        let s = Stippler::default();
        assert_eq!(s.grain_count(0.0), 0);
        assert_eq!(s.grain_count(0.00699), 0);
        assert_eq!(s.grain_count(f64::NAN), 0);
    }

    #[test]
    fn grain_count_scales_with_length() {
        let s = Stippler::default();
        assert_eq!(s.grain_count(0.007), 4); // 3.5 rounds up
        assert_eq!(s.grain_count(0.8), 400);
        assert_eq!(s.grain_count(1.0), 500);
    }

    // ── paint_line ────────────────────────────────────────────────────────

    #[test]
    fn below_threshold_emits_nothing() {
        let s = Stippler::default();
        let mut out = Vec::new();
        let n = s.paint_line(
            Point::new(0.5, 0.5),
            Point::new(0.503, 0.504),
            0,
            &mut rng(),
            &flat(0.3),
            &mut out,
        );
        assert_eq!(n, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn zero_length_emits_nothing() {
        let s = Stippler::default();
        let p = Point::new(0.2, 0.2);
        let mut out = Vec::new();
        assert_eq!(s.paint_line(p, p, 9, &mut rng(), &flat(0.3), &mut out), 0);
    }

    #[test]
    fn emits_about_length_times_density() {
        let s = Stippler::default();
        let noise = PerlinField::new(1);
        for (a, b) in [
            (Point::new(0.1, 0.1), Point::new(0.1, 0.9)),
            (Point::new(0.1, 0.9), Point::new(0.9, 0.1)),
            (Point::new(0.3, 0.3), Point::new(0.31, 0.3)),
        ] {
            let mut out = Vec::new();
            let n = s.paint_line(a, b, 0, &mut rng(), &noise, &mut out);
            let expected = a.distance(b) * s.density;
            assert_eq!(n, out.len());
            assert!((n as f64 - expected).abs() <= 1.0, "{n} vs {expected}");
        }
    }

    #[test]
    fn grains_lie_on_the_segment() {
        let s = Stippler::default();
        let noise = PerlinField::new(5);
        let a = Point::new(0.1, 0.9);
        let b = Point::new(0.9, 0.1);
        let mut out = Vec::new();
        s.paint_line(a, b, 120, &mut rng(), &noise, &mut out);

        let len = a.distance(b);
        for g in out {
            assert!((g.distance(a) + g.distance(b) - len).abs() < 1e-9);
        }
    }

    #[test]
    fn noise_is_folded_before_interpolating() {
        let s = Stippler::default();
        // 0.51 * 30 = 15.3 → folded to 0.3.
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let mut out = Vec::new();
        s.paint_line(a, b, 0, &mut rng(), &flat(0.51), &mut out);
        assert_eq!(out.len(), 500);
        for g in out {
            assert!((g.x - 0.3).abs() < 1e-9);
            assert_eq!(g.y, 0.0);
        }
    }

    #[test]
    fn noise_sampled_near_start_with_frame_drift() {
        let s = Stippler::default();
        let seen = std::cell::RefCell::new(Vec::new());
        let probe = |x: f64, y: f64, t: f64| {
            seen.borrow_mut().push((x, y, t));
            0.0
        };

        let mut out = Vec::new();
        s.paint_line(
            Point::new(0.2, 0.4),
            Point::new(0.2, 0.5),
            300,
            &mut rng(),
            &probe,
            &mut out,
        );

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 50);
        for (x, y, t) in seen {
            assert!((x - 0.0002).abs() < 1e-15);
            assert!((y - 0.0004).abs() < 1e-15);
            // uniform [0, 1) plus 300 * 0.01
            assert!((3.0..4.0).contains(&t), "t = {t}");
        }
    }

    #[test]
    fn same_seed_same_grains() {
        let s = Stippler::default();
        let noise = PerlinField::new(9);
        let a = Point::new(0.1, 0.1);
        let b = Point::new(0.9, 0.1);

        let mut first = Vec::new();
        let mut second = Vec::new();
        s.paint_line(a, b, 17, &mut rng(), &noise, &mut first);
        s.paint_line(a, b, 17, &mut rng(), &noise, &mut second);
        assert_eq!(first, second);
    }

    // ── paint_triangle ────────────────────────────────────────────────────

    #[test]
    fn triangle_paints_all_three_edges() {
        let s = Stippler::default();
        let t = Triangle::from([[0.1, 0.1], [0.1, 0.9], [0.9, 0.1]]);
        let mut out = Vec::new();
        let n = s.paint_triangle(&t, 0, &mut rng(), &flat(0.1), &mut out);
        // 400 + ceil(565.68) + 400
        assert_eq!(n, 400 + 566 + 400);
        assert_eq!(out.len(), n);
    }
}

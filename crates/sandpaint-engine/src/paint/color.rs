/// Linear premultiplied RGBA color.
///
/// Invariant: `r`, `g`, `b` are already multiplied by `a`. Renderers blend with
/// `One, OneMinusSrcAlpha`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a color from already premultiplied linear components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight-alpha linear components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates a color from straight-alpha sRGB-encoded components in `[0, 1]`.
    ///
    /// RGB is decoded to linear; alpha is already linear.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_straight(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a)
    }

    /// Creates a color from HSB (a.k.a. HSV) with straight alpha.
    ///
    /// `hue` is in degrees and wraps; `saturation`, `brightness` and `alpha`
    /// are in `[0, 1]`. The HSB model is defined over sRGB-encoded values.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        let (r, g, b) = hsb_to_srgb(hue, saturation, brightness);
        Self::from_srgb(r, g, b, alpha)
    }

    /// Returns a straight-alpha linear representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Same hue, new alpha (premultiplication is redone).
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let (r, g, b, _) = self.to_straight();
        Self::from_straight(r, g, b, alpha)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
            a: f64::from(self.a),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

/// sRGB electro-optical transfer function.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// HSB → straight sRGB, all channels in `[0, 1]`.
fn hsb_to_srgb(hue: f32, saturation: f32, brightness: f32) -> (f32, f32, f32) {
    let s = saturation.clamp(0.0, 1.0);
    let v = brightness.clamp(0.0, 1.0);
    let h = hue.rem_euclid(360.0) / 60.0;

    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    (r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── hsb ───────────────────────────────────────────────────────────────

    #[test]
    fn hsb_primaries() {
        assert_eq!(hsb_to_srgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(hsb_to_srgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_eq!(hsb_to_srgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn hsb_wraps_hue() {
        assert_eq!(hsb_to_srgb(360.0, 1.0, 1.0), hsb_to_srgb(0.0, 1.0, 1.0));
        assert_eq!(hsb_to_srgb(-120.0, 1.0, 1.0), hsb_to_srgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn hsb_greys_ignore_hue() {
        let (r, g, b) = hsb_to_srgb(322.0, 0.0, 0.9);
        assert!(close(r, 0.9) && close(g, 0.9) && close(b, 0.9));
    }

    #[test]
    fn hsb_magenta_palette_entry() {
        // 322° / 63% / 100%: red channel is max, green min.
        let (r, g, b) = hsb_to_srgb(322.0, 0.63, 1.0);
        assert!(close(r, 1.0));
        assert!(close(g, 0.37));
        assert!(b > g && b < r);
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn from_hsb_black_and_white() {
        assert_eq!(Color::from_hsb(0.0, 0.0, 0.0, 1.0), Color::black());
        assert_eq!(Color::from_hsb(0.0, 0.0, 1.0, 1.0), Color::white());
    }

    #[test]
    fn from_hsb_premultiplies() {
        let c = Color::from_hsb(0.0, 0.0, 1.0, 0.1);
        assert!(close(c.r, 0.1) && close(c.a, 0.1));
    }

    #[test]
    fn srgb_mid_grey_is_darker_in_linear() {
        assert!(close(srgb_to_linear(0.5), 0.2140));
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert_eq!(srgb_to_linear(1.0), 1.0);
    }

    #[test]
    fn with_alpha_roundtrips_straight_rgb() {
        let c = Color::from_straight(0.2, 0.4, 0.6, 1.0).with_alpha(0.5);
        let (r, g, b, a) = c.to_straight();
        assert!(close(r, 0.2) && close(g, 0.4) && close(b, 0.6) && close(a, 0.5));
    }
}

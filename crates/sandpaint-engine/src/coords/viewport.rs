use super::Vec2;

/// Viewport size in logical pixels.
///
/// Renderers upload this to convert logical px positions to NDC in shaders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a normalized position (`[0, 1]` spans the viewport) to logical px.
    /// Values outside `[0, 1]` map outside the viewport.
    #[inline]
    pub fn denormalize(self, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            (x * f64::from(self.width)) as f32,
            (y * f64::from(self.height)) as f32,
        )
    }

    /// Physical size in whole pixels for a given scale factor, at least 1×1.
    #[inline]
    pub fn physical_size(self, scale_factor: f32) -> (u32, u32) {
        (
            (self.width * scale_factor).round().max(1.0) as u32,
            (self.height * scale_factor).round().max(1.0) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denormalize_scales_by_extent() {
        let vp = Viewport::new(700.0, 400.0);
        assert_eq!(vp.denormalize(0.1, 0.5), Vec2::new(70.0, 200.0));
        assert_eq!(vp.denormalize(1.0, 1.0), Vec2::new(700.0, 400.0));
        assert_eq!(vp.denormalize(-0.5, 0.0), Vec2::new(-350.0, 0.0));
    }

    #[test]
    fn physical_size_rounds_and_floors_at_one() {
        assert_eq!(Viewport::new(700.0, 700.0).physical_size(1.5), (1050, 1050));
        assert_eq!(Viewport::new(0.0, 0.0).physical_size(2.0), (1, 1));
    }

    #[test]
    fn validity() {
        assert!(Viewport::new(1.0, 1.0).is_valid());
        assert!(!Viewport::new(0.0, 1.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 1.0).is_valid());
    }
}

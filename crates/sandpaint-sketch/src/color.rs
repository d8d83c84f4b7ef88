/// Hue/saturation/brightness/alpha color.
///
/// Ranges: hue `0..360` degrees, saturation and brightness `0..100`,
/// alpha `0..1`. Conversion to a GPU color happens at the draw-list boundary.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsba {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Hsba {
    #[inline]
    pub const fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    #[inline]
    pub const fn opaque(h: f32, s: f32, b: f32) -> Self {
        Self::new(h, s, b, 1.0)
    }

    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const BLACK: Hsba = Hsba::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Hsba = Hsba::opaque(0.0, 0.0, 100.0);
}

/// Stroke palette selectable with the digit keys `1`..`9`.
pub const PALETTE: [Hsba; 4] = [
    Hsba::opaque(322.0, 63.0, 100.0),
    Hsba::opaque(2.0, 79.0, 41.0),
    Hsba::opaque(54.0, 38.0, 100.0),
    Hsba::opaque(107.0, 46.0, 31.0),
];

/// Alpha applied to every keyboard-selected stroke color.
pub const STROKE_ALPHA: f32 = 0.1;

/// Stroke color for a digit key.
///
/// `0` selects black; `1`..=`9` index the palette, with digits past its end
/// repeating the last entry. Always carries [`STROKE_ALPHA`].
pub fn stroke_for_digit(digit: u8, palette: &[Hsba]) -> Option<Hsba> {
    let base = match digit {
        0 => Hsba::BLACK,
        1..=9 => {
            let last = palette.len().checked_sub(1)?;
            palette[usize::from(digit - 1).min(last)]
        }
        _ => return None,
    };
    Some(base.with_alpha(STROKE_ALPHA))
}

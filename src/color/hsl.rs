use std::fmt;

use crate::color::ColorFloat;
use crate::traits::float::Float;

/// A color in hue-saturation-lightness form.
///
/// Hue is in degrees, normalized into `[0, 360)`. Saturation and lightness
/// are unit values in `[0, 1]`, not percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: ColorFloat,
    pub s: ColorFloat,
    pub l: ColorFloat,
}

impl Hsl {
    #[inline]
    pub fn new(h: ColorFloat, s: ColorFloat, l: ColorFloat) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp01(),
            l: l.clamp01(),
        }
    }

    /// Keep hue and saturation, replace lightness.
    #[must_use]
    #[inline]
    pub fn with_lightness(self, l: ColorFloat) -> Self {
        Self {
            h: self.h,
            s: self.s,
            l: l.clamp01(),
        }
    }

    /// Same as [`Hsl::with_lightness`] but takes a whole percentage (`0..=100`).
    #[must_use]
    #[inline]
    pub fn with_lightness_percent(self, percent: u8) -> Self {
        self.with_lightness(ColorFloat::from(percent) / 100.0)
    }

    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // CSS-ish, for logs
        write!(
            f,
            "hsl({:.1} {:.1}% {:.1}%)",
            self.h,
            self.s * 100.0,
            self.l * 100.0
        )
    }
}

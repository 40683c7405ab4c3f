use std::fmt;

use crate::color::hsl::Hsl;
use crate::color::ColorFloat;
use crate::traits::float::Float;

/// RGB -> HSL on unit floats. Hue in degrees, saturation and lightness in `[0, 1]`.
///
/// Achromatic input (`max == min`) yields hue 0 and saturation 0.
fn rgb_to_hsl<T: Float>(rgb: [u8; 3]) -> [T; 3] {
    // solution from https://www.rapidtables.com/convert/color/rgb-to-hsl.html
    let d255 = T::from_f64(255.0);
    let r_prime = T::from_f64(rgb[0] as f64).div(d255);
    let g_prime = T::from_f64(rgb[1] as f64).div(d255);
    let b_prime = T::from_f64(rgb[2] as f64).div(d255);

    let c_max = r_prime.max(g_prime).max(b_prime);
    let c_min = r_prime.min(g_prime).min(b_prime);

    let delta = c_max.sub(c_min);
    // prevent tiny negative zero from noise
    let delta = if delta.abs() < T::from_f64(1e-8) {
        T::ZERO
    } else {
        delta
    };

    let sixty = T::from_f64(60.0);
    let h = if delta == T::ZERO {
        T::ZERO
    } else if r_prime == c_max {
        sixty.mul(g_prime.sub(b_prime).div(delta).rem_euclid(T::from_f64(6.0)))
    } else if g_prime == c_max {
        sixty.mul(b_prime.sub(r_prime).div(delta).add(T::from_f64(2.0)))
    } else {
        // b_prime == c_max
        sixty.mul(r_prime.sub(g_prime).div(delta).add(T::from_f64(4.0)))
    };

    let two = T::from_f64(2.0);
    let l = c_max.add(c_min).div(two);

    let s = if delta == T::ZERO {
        T::ZERO
    } else {
        delta.div(T::ONE.sub(two.mul(l).sub(T::ONE).abs()))
    };

    [h, s.clamp01(), l]
}

/// HSL -> RGB. Hue in degrees (any value, wrapped), saturation and lightness in `[0, 1]`.
fn hsl_to_rgb<T: Float>(hsl: [T; 3]) -> [u8; 3] {
    // solution from https://www.rapidtables.com/convert/color/hsl-to-rgb.html
    let h = hsl[0].rem_euclid(T::from_f64(360.0));
    let s = hsl[1].clamp01();
    let l = hsl[2].clamp01();

    let two = T::from_f64(2.0);
    let sixty = T::from_f64(60.0);

    let c = T::ONE.sub(two.mul(l).sub(T::ONE).abs()).mul(s);
    let x = c.mul(T::ONE.sub(h.div(sixty).rem_euclid(two).sub(T::ONE).abs()));
    let m = l.sub(c.div(two));

    let (r_prime, g_prime, b_prime) = match h.div(sixty).floor().to_f64() as u8 {
        0 => (c, x, T::ZERO),
        1 => (x, c, T::ZERO),
        2 => (T::ZERO, c, x),
        3 => (T::ZERO, x, c),
        4 => (x, T::ZERO, c),
        _ => (c, T::ZERO, x), // 300.0..360.0
    };

    [
        r_prime.add(m).to_channel(),
        g_prime.add(m).to_channel(),
        b_prime.add(m).to_channel(),
    ]
}

// stores 8 bit sRGB; alpha is not part of this model
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }

    #[must_use]
    #[inline]
    pub fn into_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `rrggbb`, no `#`.
    #[must_use]
    #[inline]
    pub fn into_hex6(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB`, the form scale entries are reported in.
    #[must_use]
    #[inline]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    #[must_use]
    #[inline]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_rgb(hsl_to_rgb::<ColorFloat>([hsl.h, hsl.s, hsl.l]))
    }

    #[must_use]
    #[inline]
    pub fn into_hsl(self) -> Hsl {
        let [h, s, l] = rgb_to_hsl::<ColorFloat>(self.into_rgb());
        Hsl::new(h, s, l)
    }

    #[must_use]
    #[inline]
    pub fn from_hsl_f32(hsl: [f32; 3]) -> Self {
        Self::from_rgb(hsl_to_rgb(hsl))
    }

    #[must_use]
    #[inline]
    pub fn from_hsl_f64(hsl: [f64; 3]) -> Self {
        Self::from_rgb(hsl_to_rgb(hsl))
    }

    #[must_use]
    #[inline]
    pub fn into_hsl_f32(self) -> [f32; 3] {
        rgb_to_hsl(self.into_rgb())
    }

    #[must_use]
    #[inline]
    pub fn into_hsl_f64(self) -> [f64; 3] {
        rgb_to_hsl(self.into_rgb())
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

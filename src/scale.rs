//! Ten-step lightness scale generated from one base color.
//!
//! The base color's hue and saturation are kept as-is. Each [`Step`] swaps in
//! a fixed lightness, from 96% at step 50 down to 16% at step 900.

use std::fmt;
use std::iter::{Copied, Zip};
use std::str::FromStr;
use std::{array, slice};

use thiserror::Error;
use tracing::{debug, trace};

use crate::color::hsl::Hsl;
use crate::color::model::Color;
use crate::color::parse::parse_color;
use crate::error::ValidationError;

/// One of the ten fixed scale tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

/// Step and its target lightness percentage.
const LIGHTNESS_STEPS: [(Step, u8); 10] = [
    (Step::S50, 96),
    (Step::S100, 90),
    (Step::S200, 80),
    (Step::S300, 67),
    (Step::S400, 52),
    (Step::S500, 39),
    (Step::S600, 30),
    (Step::S700, 24),
    (Step::S800, 20),
    (Step::S900, 16),
];

impl Step {
    /// Every step, ascending.
    pub const ALL: [Step; 10] = [
        Step::S50,
        Step::S100,
        Step::S200,
        Step::S300,
        Step::S400,
        Step::S500,
        Step::S600,
        Step::S700,
        Step::S800,
        Step::S900,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn value(self) -> u16 {
        match self {
            Step::S50 => 50,
            Step::S100 => 100,
            Step::S200 => 200,
            Step::S300 => 300,
            Step::S400 => 400,
            Step::S500 => 500,
            Step::S600 => 600,
            Step::S700 => 700,
            Step::S800 => 800,
            Step::S900 => 900,
        }
    }

    /// Target lightness in percent.
    pub fn lightness(self) -> u8 {
        LIGHTNESS_STEPS[self.index()].1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Step::S50 => "50",
            Step::S100 => "100",
            Step::S200 => "200",
            Step::S300 => "300",
            Step::S400 => "400",
            Step::S500 => "500",
            Step::S600 => "600",
            Step::S700 => "700",
            Step::S800 => "800",
            Step::S900 => "900",
        }
    }

    /// Steps 500 and darker read better with light text on top.
    pub fn prefers_light_text(self) -> bool {
        self >= Step::S500
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scale step {0:?}, expected one of 50, 100, 200, ..., 900")]
pub struct UnknownStep(pub String);

impl FromStr for Step {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| UnknownStep(s.to_owned()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Step {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Step {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The generated palette: one color per [`Step`], ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorScale {
    base: Color,
    colors: [Color; 10],
}

impl ColorScale {
    /// Build the scale for an already-parsed color. Cannot fail.
    pub fn from_color(base: Color) -> Self {
        let hsl = base.into_hsl();
        let colors = Step::ALL.map(|step| {
            let color = Color::from_hsl(hsl.with_lightness_percent(step.lightness()));
            trace!(%step, %color, "Scale step");
            color
        });

        Self { base, colors }
    }

    pub fn base(&self) -> Color {
        self.base
    }

    pub fn base_hsl(&self) -> Hsl {
        self.base.into_hsl()
    }

    pub fn get(&self, step: Step) -> Color {
        self.colors[step.index()]
    }

    /// `#RRGGBB` for the step.
    pub fn hex(&self, step: Step) -> String {
        self.get(step).to_hex()
    }

    /// Always 10.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn iter(&self) -> ScaleIter<'_> {
        self.into_iter()
    }

    /// `("50", "#EDFDF3")` style pairs, ascending by step.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&'static str, String)> + '_ {
        self.iter().map(|(step, color)| (step.as_str(), color.to_hex()))
    }
}

pub type ScaleIter<'a> = Zip<array::IntoIter<Step, 10>, Copied<slice::Iter<'a, Color>>>;

impl<'a> IntoIterator for &'a ColorScale {
    type Item = (Step, Color);
    type IntoIter = ScaleIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Step::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColorScale {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (step, color) in self {
            map.serialize_entry(step.as_str(), &color)?;
        }
        map.end()
    }
}

/// Validate `input` as `#RGB` / `#RRGGBB` and build its scale.
pub fn generate_scale(input: &str) -> Result<ColorScale, ValidationError> {
    let base = parse_color(input).map_err(|reason| {
        debug!(input, error = %reason, "Rejected base color");
        ValidationError::new(input, reason)
    })?;

    debug!(%base, hsl = %base.into_hsl(), "Generating color scale");
    Ok(ColorScale::from_color(base))
}

//! Color scale generation.
//!
//! Takes one base color written as `#RGB` or `#RRGGBB` and derives a
//! ten-step palette (`50` through `900`) by holding hue and saturation fixed
//! and swapping in a set lightness per step.
//!
//! ```
//! use chromascale::{generate_scale, Step};
//!
//! let scale = generate_scale("#ECFDF3")?;
//! assert_eq!(scale.hex(Step::S50), "#EDFDF3");
//! assert_eq!(scale.hex(Step::S900), "#084A23");
//!
//! for (step, hex) in scale.entries() {
//!     println!("{step}: {hex}");
//! }
//! # Ok::<(), chromascale::ValidationError>(())
//! ```
//!
//! Grays (including black and white) have no hue, so they are treated as
//! hue 0 and saturation 0 and always produce the same neutral ramp.

pub mod color;
pub mod css;
pub mod error;
pub mod scale;
pub mod traits;

pub use color::hsl::Hsl;
pub use color::model::Color;
pub use color::parse::{parse_color, ColorParseError};
pub use color::ColorFloat;
pub use css::CssVariables;
pub use error::ValidationError;
pub use scale::{generate_scale, ColorScale, Step, UnknownStep};

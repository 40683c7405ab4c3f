pub mod hsl;
pub mod model;
pub mod parse;

#[cfg(feature = "double_precision")]
pub type ColorFloat = f64;
#[cfg(not(feature = "double_precision"))]
pub type ColorFloat = f32;

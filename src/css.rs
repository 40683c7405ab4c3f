//! CSS custom-property output for a [`ColorScale`].

use std::fmt;

use crate::scale::ColorScale;

const DEFAULT_PREFIX: &str = "color";

/// Renders one `--<prefix>-<step>: <hex>;` line per step.
///
/// Lines are joined with `\n`, with no trailing newline.
#[derive(Clone, Copy, Debug)]
pub struct CssVariables<'a> {
    scale: &'a ColorScale,
    prefix: &'a str,
}

impl fmt::Display for CssVariables<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (step, color)) in self.scale.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "--{}-{}: {};", self.prefix, step, color)?;
        }
        Ok(())
    }
}

impl ColorScale {
    /// `--color-50: #EDFDF3;` ...
    pub fn css_variables(&self) -> CssVariables<'_> {
        self.css_variables_with_prefix(DEFAULT_PREFIX)
    }

    pub fn css_variables_with_prefix<'a>(&'a self, prefix: &'a str) -> CssVariables<'a> {
        CssVariables {
            scale: self,
            prefix,
        }
    }
}

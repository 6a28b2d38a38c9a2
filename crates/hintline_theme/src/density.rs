//! Display density and dp conversion

use crate::error::{Result, ThemeError};

/// Dots per inch of the baseline (mdpi) density
pub const BASELINE_DPI: f32 = 160.0;

/// Scale factor from density-independent pixels to physical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    scale: f32,
}

impl Density {
    /// One dp per pixel
    pub const BASELINE: Density = Density { scale: 1.0 };

    pub fn new(scale: f32) -> Result<Self> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Self { scale })
        } else {
            Err(ThemeError::InvalidDensity(scale))
        }
    }

    /// Density for a screen of the given dots per inch
    pub fn from_dpi(dpi: f32) -> Result<Self> {
        Self::new(dpi / BASELINE_DPI)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Convert dp to physical pixels
    pub fn dp(&self, value: f32) -> f32 {
        value * self.scale
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}

//! Output surfaces (label strips) and unit conversion.
//!
//! A surface is measured in physical units (millimetres for the strip
//! catalog). `resolution` converts units to output pixels and is only used
//! by the export side; the placement engine clamps in physical units.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Print resolution used when none is given.
pub const DEFAULT_DPI: f64 = 300.0;

/// The bounded area onto which cutouts are placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    /// Output pixels per physical unit.
    pub resolution: f64,
}

impl Surface {
    /// Create a surface.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless every value is positive and finite.
    pub fn new(width: f64, height: f64, resolution: f64) -> Result<Self, LayoutError> {
        let surface = Self {
            width,
            height,
            resolution,
        };
        surface.validate()?;
        Ok(surface)
    }

    /// Create a surface measured in millimetres, printed at `dpi`.
    pub fn from_dpi(width_mm: f64, height_mm: f64, dpi: f64) -> Result<Self, LayoutError> {
        Self::new(width_mm, height_mm, dpi / MM_PER_INCH)
    }

    /// Check that all dimensions are positive and finite.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) && valid(self.resolution) {
            Ok(())
        } else {
            Err(LayoutError::InvalidArgument(format!(
                "surface dimensions must be positive, got {}x{} at resolution {}",
                self.width, self.height, self.resolution
            )))
        }
    }

    /// Resolution expressed as dots per inch, assuming millimetre units.
    pub fn dpi(&self) -> f64 {
        self.resolution * MM_PER_INCH
    }

    pub fn to_pixels(&self, units: f64) -> f64 {
        units * self.resolution
    }

    pub fn to_units(&self, pixels: f64) -> f64 {
        pixels / self.resolution
    }

    /// Output raster size in whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.to_pixels(self.width).round() as u32,
            self.to_pixels(self.height).round() as u32,
        )
    }
}

/// A named label strip size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripPreset {
    pub name: &'static str,
    /// Width in millimetres.
    pub width: f64,
    /// Height in millimetres.
    pub height: f64,
    pub landscape: bool,
}

impl StripPreset {
    const fn new(name: &'static str, width: f64, height: f64, landscape: bool) -> Self {
        Self {
            name,
            width,
            height,
            landscape,
        }
    }

    /// Look up a preset by its display name.
    pub fn find(name: &str) -> Option<&'static StripPreset> {
        PREDEFINED_STRIPS.iter().find(|p| p.name == name)
    }

    /// The preset as a surface printed at `dpi`.
    pub fn surface(&self, dpi: f64) -> Result<Surface, LayoutError> {
        Surface::from_dpi(self.width, self.height, dpi)
    }
}

/// Common label printer strips, label sizes and paper sizes.
pub const PREDEFINED_STRIPS: [StripPreset; 18] = [
    // Continuous rolls, cut at A4 length
    StripPreset::new("62mm Continuous", 62.0, 297.0, false),
    StripPreset::new("50.8mm (2\") Continuous", 50.8, 297.0, false),
    StripPreset::new("38.1mm (1.5\") Continuous", 38.1, 297.0, false),
    StripPreset::new("25.4mm (1\") Continuous", 25.4, 297.0, false),
    // Die-cut labels
    StripPreset::new("62x100mm", 62.0, 100.0, false),
    StripPreset::new("62x150mm", 62.0, 150.0, false),
    StripPreset::new("50.8x100mm (2\"x4\")", 50.8, 101.6, false),
    StripPreset::new("38.1x88.9mm (1.5\"x3.5\")", 38.1, 88.9, false),
    // Shipping
    StripPreset::new("100x150mm", 100.0, 150.0, false),
    StripPreset::new("100x200mm", 100.0, 200.0, false),
    // Small labels
    StripPreset::new("50x70mm", 50.0, 70.0, false),
    StripPreset::new("70x50mm", 70.0, 50.0, true),
    StripPreset::new("40x60mm", 40.0, 60.0, false),
    // Paper
    StripPreset::new("A4 (210x297mm)", 210.0, 297.0, false),
    StripPreset::new("A4 Landscape", 297.0, 210.0, true),
    StripPreset::new("A5 (148x210mm)", 148.0, 210.0, false),
    StripPreset::new("A6 (105x148mm)", 105.0, 148.0, false),
    StripPreset::new("Custom", 100.0, 150.0, false),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dpi() {
        let surface = Surface::from_dpi(25.4, 50.8, 300.0).unwrap();
        assert!((surface.resolution - 300.0 / 25.4).abs() < 1e-12);
        assert!((surface.dpi() - 300.0).abs() < 1e-9);
        assert_eq!(surface.pixel_size(), (300, 600));
    }

    #[test]
    fn test_unit_conversion_round_trip() {
        let surface = Surface::from_dpi(62.0, 100.0, DEFAULT_DPI).unwrap();
        let px = surface.to_pixels(12.5);
        assert!((surface.to_units(px) - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_degenerate_surface() {
        assert!(Surface::new(0.0, 10.0, 1.0).is_err());
        assert!(Surface::new(10.0, -1.0, 1.0).is_err());
        assert!(Surface::new(10.0, 10.0, 0.0).is_err());
        assert!(Surface::from_dpi(10.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_preset_lookup() {
        let preset = StripPreset::find("62x100mm").unwrap();
        let surface = preset.surface(DEFAULT_DPI).unwrap();
        assert_eq!(surface.width, 62.0);
        assert_eq!(surface.height, 100.0);
        assert!(StripPreset::find("unknown").is_none());
    }

    #[test]
    fn test_presets_are_valid_and_landscape_flag_matches() {
        for preset in &PREDEFINED_STRIPS {
            assert!(preset.surface(DEFAULT_DPI).is_ok(), "{}", preset.name);
            if preset.landscape {
                assert!(preset.width > preset.height, "{}", preset.name);
            }
        }
    }
}

//! Low-level channel conversion utilities
//!
//! Provides conversions between 8-bit sRGB channels and CIE L*a*b*
//! components, plus hex color parsing and formatting. Higher-level code
//! should prefer [`Color`](crate::Color); these helpers exist for callers
//! that work with raw channel values.

use palette::{FromColor, Laba, Srgb, Srgba};

use crate::{RemapError, Result};

/// Converter between raw sRGB channels and L*a*b* components
#[derive(Debug, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new channel converter
    pub fn new() -> Self {
        Self
    }

    /// Convert 8-bit RGB(A) channels to L*a*b* components
    ///
    /// # Arguments
    ///
    /// * `r`, `g`, `b`, `alpha` - channel values in range [0, 255]
    ///
    /// # Returns
    ///
    /// `[L*, a*, b*, alpha]` with L* in [0, 100], a*/b* roughly in
    /// [-128, 127] and alpha in [0.0, 1.0]
    pub fn rgb_to_lab(&self, r: u8, g: u8, b: u8, alpha: u8) -> [f32; 4] {
        let srgba = Srgba::<u8>::new(r, g, b, alpha).into_format::<f32, f32>();
        let laba = Laba::from_color(srgba);
        [laba.l, laba.a, laba.b, laba.alpha]
    }

    /// Convert L*a*b* components to 8-bit sRGB channels
    ///
    /// Out-of-gamut values are clamped to the sRGB gamut before
    /// quantization.
    ///
    /// # Arguments
    ///
    /// * `l` - lightness component
    /// * `a` - green-red component
    /// * `b` - blue-yellow component
    /// * `alpha` - alpha in range [0.0, 1.0]
    ///
    /// # Returns
    ///
    /// `[r, g, b, alpha]` channel values in range [0, 255]
    pub fn lab_to_rgb(&self, l: f32, a: f32, b: f32, alpha: f32) -> [u8; 4] {
        let laba = Laba::new(l, a, b, alpha);
        let srgba = Srgba::from_color(laba);
        let clamped = Srgba::new(
            srgba.red.clamp(0.0, 1.0),
            srgba.green.clamp(0.0, 1.0),
            srgba.blue.clamp(0.0, 1.0),
            srgba.alpha.clamp(0.0, 1.0),
        );
        let out = clamped.into_format::<u8, u8>();
        [out.red, out.green, out.blue, out.alpha]
    }

    /// Format an sRGB color as a hex string (e.g. "#FF0000")
    pub fn srgb_to_hex(&self, srgb: Srgb) -> String {
        let r = (srgb.red * 255.0).round() as u8;
        let g = (srgb.green * 255.0).round() as u8;
        let b = (srgb.blue * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Parse a hex color string (e.g. "#FF0000" or "FF0000") to sRGB
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::InvalidColor`] if the string is not six hex
    /// digits after an optional leading `#`.
    pub fn hex_to_srgb(&self, hex: &str) -> Result<Srgb> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err(RemapError::InvalidColor {
                message: format!("expected 6 hex digits, got {}", hex.len()),
            });
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|e| RemapError::InvalidColor {
            message: format!("invalid red value: {}", e),
        })?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|e| RemapError::InvalidColor {
            message: format!("invalid green value: {}", e),
        })?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|e| RemapError::InvalidColor {
            message: format!("invalid blue value: {}", e),
        })?;

        Ok(Srgb::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAB_TOLERANCE: f32 = 0.1;

    // Reference vectors computed with an independent CIE Lab implementation
    const REFERENCE: [(u8, u8, u8, f32, f32, f32); 5] = [
        (0, 0, 0, 0.0, 0.0, 0.0),
        (255, 255, 255, 100.0, 0.0, 0.0),
        (178, 123, 99, 56.6163, 18.4797, 21.7240),
        (1, 254, 33, 87.4850, -85.2029, 79.2877),
        (1, 1, 1, 0.2742, 0.0000, -0.0001),
    ];

    #[test]
    fn test_rgb_to_lab_reference_values() {
        let converter = ColorConverter::new();
        for (r, g, b, l, a, bb) in REFERENCE {
            let lab = converter.rgb_to_lab(r, g, b, 255);
            assert!(
                (lab[0] - l).abs() < LAB_TOLERANCE,
                "L* for ({r},{g},{b}): got {}, expected {l}",
                lab[0]
            );
            assert!(
                (lab[1] - a).abs() < LAB_TOLERANCE,
                "a* for ({r},{g},{b}): got {}, expected {a}",
                lab[1]
            );
            assert!(
                (lab[2] - bb).abs() < LAB_TOLERANCE,
                "b* for ({r},{g},{b}): got {}, expected {bb}",
                lab[2]
            );
            assert!((lab[3] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_lab_to_rgb_reference_values() {
        let converter = ColorConverter::new();
        for (r, g, b, l, a, bb) in REFERENCE {
            let rgb = converter.lab_to_rgb(l, a, bb, 1.0);
            assert!(rgb[0].abs_diff(r) <= 1, "red for L*={l}: got {}", rgb[0]);
            assert!(rgb[1].abs_diff(g) <= 1, "green for L*={l}: got {}", rgb[1]);
            assert!(rgb[2].abs_diff(b) <= 1, "blue for L*={l}: got {}", rgb[2]);
            assert_eq!(rgb[3], 255);
        }
    }

    #[test]
    fn test_rgb_lab_roundtrip() {
        let converter = ColorConverter::new();
        for (r, g, b) in [(12, 200, 99), (255, 0, 128), (77, 77, 77)] {
            let [l, a, bb, alpha] = converter.rgb_to_lab(r, g, b, 255);
            let back = converter.lab_to_rgb(l, a, bb, alpha);
            assert!(back[0].abs_diff(r) <= 1);
            assert!(back[1].abs_diff(g) <= 1);
            assert!(back[2].abs_diff(b) <= 1);
        }
    }

    #[test]
    fn test_srgb_to_hex() {
        let converter = ColorConverter::new();
        assert_eq!(converter.srgb_to_hex(Srgb::new(1.0, 0.0, 0.0)), "#FF0000");
        assert_eq!(converter.srgb_to_hex(Srgb::new(0.0, 1.0, 0.0)), "#00FF00");
        assert_eq!(converter.srgb_to_hex(Srgb::new(0.0, 0.0, 1.0)), "#0000FF");
    }

    #[test]
    fn test_hex_to_srgb() {
        let converter = ColorConverter::new();

        let red = converter.hex_to_srgb("#FF0000").unwrap();
        assert!((red.red - 1.0).abs() < 0.01);
        assert!(red.green < 0.01);
        assert!(red.blue < 0.01);

        // Leading '#' is optional
        let green = converter.hex_to_srgb("00FF00").unwrap();
        assert!(green.red < 0.01);
        assert!((green.green - 1.0).abs() < 0.01);
        assert!(green.blue < 0.01);
    }

    #[test]
    fn test_hex_to_srgb_invalid() {
        let converter = ColorConverter::new();
        assert!(converter.hex_to_srgb("#FF").is_err());
        assert!(converter.hex_to_srgb("#GGGGGG").is_err());
        assert!(converter.hex_to_srgb("").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let converter = ColorConverter::new();
        for hex in ["#3366CC", "#000000", "#FFFFFF", "#B27B63"] {
            let srgb = converter.hex_to_srgb(hex).unwrap();
            assert_eq!(converter.srgb_to_hex(srgb), hex);
        }
    }
}

//! Color representation and distance module
//!
//! This module defines the [`Color`] type, which carries a color in one of
//! four supported color spaces, and the distance metrics used to compare
//! colors during palette matching.

use std::fmt;
use std::str::FromStr;

use palette::color_difference::Ciede2000;
use palette::{FromColor, Laba, Oklaba, Srgba, Xyza};
use serde::{Deserialize, Serialize};

use crate::{RemapError, Result};

pub mod conversion;

pub use conversion::ColorConverter;

/// Color spaces supported for storage and distance computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Non-linear sRGB
    Srgb,
    /// CIE L*a*b* (D65)
    #[default]
    Lab,
    /// Oklab perceptual space
    Oklab,
    /// CIE XYZ (D65)
    Xyz,
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorSpace::Srgb => "srgb",
            ColorSpace::Lab => "lab",
            ColorSpace::Oklab => "oklab",
            ColorSpace::Xyz => "xyz",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ColorSpace {
    type Err = RemapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "srgb" | "rgb" => Ok(ColorSpace::Srgb),
            "lab" | "cielab" => Ok(ColorSpace::Lab),
            "oklab" => Ok(ColorSpace::Oklab),
            "xyz" | "ciexyz" => Ok(ColorSpace::Xyz),
            _ => Err(RemapError::InvalidParameter {
                parameter: "color space".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A color with alpha, stored in exactly one of the supported color spaces
///
/// Conversions between spaces go through the `palette` crate. Alpha is
/// carried along unchanged and never participates in distance computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Srgb(Srgba),
    Lab(Laba),
    Oklab(Oklaba),
    Xyz(Xyza),
}

impl Color {
    /// Create a color from RGBA components in the range [0.0, 1.0]
    pub fn from_rgba(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Color::Srgb(Srgba::new(r, g, b, alpha))
    }

    /// Create a color from 8-bit RGBA components
    pub fn from_rgba8(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Color::Srgb(Srgba::<u8>::new(r, g, b, alpha).into_format::<f32, f32>())
    }

    /// Create a color from a packed 0xAARRGGBB integer
    pub fn from_argb_u32(argb: u32) -> Self {
        let a = (argb >> 24 & 0xFF) as u8;
        let r = (argb >> 16 & 0xFF) as u8;
        let g = (argb >> 8 & 0xFF) as u8;
        let b = (argb & 0xFF) as u8;
        Self::from_rgba8(r, g, b, a)
    }

    /// Pack the color into a 0xAARRGGBB integer via sRGB
    pub fn to_argb_u32(&self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Quantize the color to 8-bit RGBA, clamping to the sRGB gamut
    pub fn to_rgba8(&self) -> [u8; 4] {
        let srgba = self.to_srgba();
        let clamped = Srgba::new(
            srgba.red.clamp(0.0, 1.0),
            srgba.green.clamp(0.0, 1.0),
            srgba.blue.clamp(0.0, 1.0),
            srgba.alpha.clamp(0.0, 1.0),
        );
        let out = clamped.into_format::<u8, u8>();
        [out.red, out.green, out.blue, out.alpha]
    }

    /// Return the color space this color is currently stored in
    pub fn space(&self) -> ColorSpace {
        match self {
            Color::Srgb(_) => ColorSpace::Srgb,
            Color::Lab(_) => ColorSpace::Lab,
            Color::Oklab(_) => ColorSpace::Oklab,
            Color::Xyz(_) => ColorSpace::Xyz,
        }
    }

    /// Convert the color to the given color space
    ///
    /// Returns an equal value when the color is already stored in the
    /// target space.
    pub fn to_space(&self, space: ColorSpace) -> Color {
        match space {
            ColorSpace::Srgb => Color::Srgb(self.to_srgba()),
            ColorSpace::Lab => Color::Lab(self.to_laba()),
            ColorSpace::Oklab => Color::Oklab(self.to_oklaba()),
            ColorSpace::Xyz => Color::Xyz(self.to_xyza()),
        }
    }

    /// View the color as sRGB with alpha
    pub fn to_srgba(&self) -> Srgba {
        match *self {
            Color::Srgb(c) => c,
            Color::Lab(c) => Srgba::from_color(c),
            Color::Oklab(c) => Srgba::from_color(c),
            Color::Xyz(c) => Srgba::from_color(c),
        }
    }

    /// View the color as CIE L*a*b* with alpha
    pub fn to_laba(&self) -> Laba {
        match *self {
            Color::Srgb(c) => Laba::from_color(c),
            Color::Lab(c) => c,
            Color::Oklab(c) => Laba::from_color(c),
            Color::Xyz(c) => Laba::from_color(c),
        }
    }

    /// View the color as Oklab with alpha
    pub fn to_oklaba(&self) -> Oklaba {
        match *self {
            Color::Srgb(c) => Oklaba::from_color(c),
            Color::Lab(c) => Oklaba::from_color(c),
            Color::Oklab(c) => c,
            Color::Xyz(c) => Oklaba::from_color(c),
        }
    }

    /// View the color as CIE XYZ with alpha
    pub fn to_xyza(&self) -> Xyza {
        match *self {
            Color::Srgb(c) => Xyza::from_color(c),
            Color::Lab(c) => Xyza::from_color(c),
            Color::Oklab(c) => Xyza::from_color(c),
            Color::Xyz(c) => c,
        }
    }

    /// Distance to another color in this color's current space
    pub fn distance(&self, other: &Color) -> f32 {
        self.distance_in(other, self.space())
    }

    /// Distance to another color in an explicit color space
    ///
    /// Lab uses CIEDE2000; the other spaces use Euclidean distance over
    /// the three color channels.
    pub fn distance_in(&self, other: &Color, space: ColorSpace) -> f32 {
        match space {
            ColorSpace::Srgb => {
                let a = self.to_srgba();
                let b = other.to_srgba();
                euclidean(a.red - b.red, a.green - b.green, a.blue - b.blue)
            }
            ColorSpace::Lab => {
                let a = self.to_laba();
                let b = other.to_laba();
                a.color.difference(b.color)
            }
            ColorSpace::Oklab => {
                let a = self.to_oklaba();
                let b = other.to_oklaba();
                euclidean(a.l - b.l, a.a - b.a, a.b - b.b)
            }
            ColorSpace::Xyz => {
                let a = self.to_xyza();
                let b = other.to_xyza();
                euclidean(a.x - b.x, a.y - b.y, a.z - b.z)
            }
        }
    }
}

fn euclidean(d0: f32, d1: f32, d2: f32) -> f32 {
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

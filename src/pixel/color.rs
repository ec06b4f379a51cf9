//! Color-name and hex conversion into [`Pixel`] values.
//!
//! Write paths accept anything implementing [`IntoPixel`]: a pixel, a
//! named color (`"red"`), or a hex string (`"#ff8000"` / `"#ff8000cc"`).
//! Failed conversions surface as [`ViewError::TypeConversion`].

use super::pixel::Pixel;
use crate::error::ViewError;
use std::str::FromStr;

/// Named colors understood by [`Pixel::from_name`].
///
/// 8-bit components; scaled to Quantum depth on lookup.
const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0x00, 0x00, 0x00, 0xFF]),
    ("white", [0xFF, 0xFF, 0xFF, 0xFF]),
    ("red", [0xFF, 0x00, 0x00, 0xFF]),
    ("green", [0x00, 0x80, 0x00, 0xFF]),
    ("lime", [0x00, 0xFF, 0x00, 0xFF]),
    ("blue", [0x00, 0x00, 0xFF, 0xFF]),
    ("yellow", [0xFF, 0xFF, 0x00, 0xFF]),
    ("cyan", [0x00, 0xFF, 0xFF, 0xFF]),
    ("magenta", [0xFF, 0x00, 0xFF, 0xFF]),
    ("gray", [0x80, 0x80, 0x80, 0xFF]),
    ("grey", [0x80, 0x80, 0x80, 0xFF]),
    ("silver", [0xC0, 0xC0, 0xC0, 0xFF]),
    ("maroon", [0x80, 0x00, 0x00, 0xFF]),
    ("olive", [0x80, 0x80, 0x00, 0xFF]),
    ("navy", [0x00, 0x00, 0x80, 0xFF]),
    ("purple", [0x80, 0x00, 0x80, 0xFF]),
    ("teal", [0x00, 0x80, 0x80, 0xFF]),
    ("orange", [0xFF, 0xA5, 0x00, 0xFF]),
    ("transparent", [0x00, 0x00, 0x00, 0x00]),
];

impl Pixel {
    /// Look up a color by name or parse a `#rrggbb` / `#rrggbbaa` hex string.
    ///
    /// Names are matched case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, ViewError> {
        let trimmed = name.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::from_hex(hex)
                .ok_or_else(|| ViewError::TypeConversion(format!("malformed hex color {trimmed:?}")));
        }
        let lower = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|&(_, [r, g, b, a])| Self::from_rgba8(r, g, b, a))
            .ok_or_else(|| ViewError::TypeConversion(format!("unrecognized color {trimmed:?}")))
    }

    /// Decode the digits of a `rrggbb` or `rrggbbaa` hex color.
    fn from_hex(digits: &str) -> Option<Self> {
        if !matches!(digits.len(), 6 | 8) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        let (value, alpha) = if digits.len() == 8 {
            (value >> 8, (value & 0xFF) as u8)
        } else {
            (value, 0xFF)
        };
        Some(Self::from_rgba8(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
            alpha,
        ))
    }
}

impl FromStr for Pixel {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<&str> for Pixel {
    type Error = ViewError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_name(s)
    }
}

/// A value that can be converted into a [`Pixel`] for a write.
///
/// Conversion failure is a [`ViewError::TypeConversion`].
pub trait IntoPixel {
    /// Perform the conversion.
    fn into_pixel(self) -> Result<Pixel, ViewError>;
}

impl IntoPixel for Pixel {
    #[inline]
    fn into_pixel(self) -> Result<Pixel, ViewError> {
        Ok(self)
    }
}

impl IntoPixel for &Pixel {
    #[inline]
    fn into_pixel(self) -> Result<Pixel, ViewError> {
        Ok(*self)
    }
}

impl IntoPixel for &str {
    #[inline]
    fn into_pixel(self) -> Result<Pixel, ViewError> {
        Pixel::from_name(self)
    }
}

impl IntoPixel for &String {
    #[inline]
    fn into_pixel(self) -> Result<Pixel, ViewError> {
        Pixel::from_name(self)
    }
}

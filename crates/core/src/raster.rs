//! Raster types shared by the PNG encoder and the drawing canvas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorParseError, EncodeError, Result};

/// Largest width or height a PNG header may carry (2^31 - 1).
pub const MAX_DIMENSION: u32 = 0x7FFF_FFFF;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// One RGBA pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the background of every sprite.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    /// Color from straight (non-premultiplied) channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Fully opaque color, alpha 255.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Rgba::opaque((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Same color with alpha replaced by `a`.
    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba { a, ..self }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_bytes(px: [u8; 4]) -> Self {
        Rgba::new(px[0], px[1], px[2], px[3])
    }
}

/// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA`; the leading `#` is optional.
impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(s.to_string()));
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::Length(s.to_string()));
        }

        // All ASCII at this point, so byte slicing stays on char boundaries.
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::Digit(s.to_string()))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Where the pixels of a [`RasterImage`] come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelSource<'a> {
    /// One color replicated to every pixel.
    Solid(Rgba),
    /// Row-major RGBA bytes, top row first.
    Buffer(&'a [u8]),
}

/// A validated width x height raster.
///
/// Only constructible through [`RasterImage::new`], so the dimension and
/// buffer-length invariants hold for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterImage<'a> {
    width: u32,
    height: u32,
    pixels: PixelSource<'a>,
}

impl<'a> RasterImage<'a> {
    /// Validate dimensions and, for a buffer source, its exact length.
    pub fn new(width: u32, height: u32, pixels: PixelSource<'a>) -> Result<Self> {
        let expected = pixel_byte_len(width, height)?;
        if let PixelSource::Buffer(data) = pixels {
            if data.len() != expected {
                return Err(EncodeError::PixelBufferSizeMismatch {
                    expected,
                    actual: data.len(),
                });
            }
        }
        Ok(RasterImage { width, height, pixels })
    }

    /// Raster filled with one color.
    pub fn solid(width: u32, height: u32, color: Rgba) -> Result<Self> {
        Self::new(width, height, PixelSource::Solid(color))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> PixelSource<'a> {
        self.pixels
    }

    /// Pixel at (`x`, `y`), or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        match self.pixels {
            PixelSource::Solid(color) => Some(color),
            PixelSource::Buffer(data) => {
                let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
                let px = data.get(i..i + BYTES_PER_PIXEL)?;
                Some(Rgba::new(px[0], px[1], px[2], px[3]))
            }
        }
    }
}

/// Validate dimensions and return `width * height * 4`.
pub fn pixel_byte_len(width: u32, height: u32) -> Result<usize> {
    let invalid = || EncodeError::InvalidDimensions { width, height };
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(invalid());
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!("#8B6F47".parse::<Rgba>(), Ok(Rgba::opaque(0x8B, 0x6F, 0x47)));
        assert_eq!("d4a574".parse::<Rgba>(), Ok(Rgba::opaque(0xD4, 0xA5, 0x74)));
        assert_eq!("#FF450080".parse::<Rgba>(), Ok(Rgba::new(0xFF, 0x45, 0x00, 0x80)));
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert!(matches!("#12345".parse::<Rgba>(), Err(ColorParseError::Length(_))));
        assert!(matches!("#GG0000".parse::<Rgba>(), Err(ColorParseError::Digit(_))));
        assert!(matches!("#ÿÿÿ".parse::<Rgba>(), Err(ColorParseError::Digit(_))));
        assert!(matches!("".parse::<Rgba>(), Err(ColorParseError::Length(_))));
    }

    #[test]
    fn test_display_round_trips() {
        let c = Rgba::from_rgb_u32(0x4A90E2);
        assert_eq!(c.to_string(), "#4A90E2");
        assert_eq!(c.to_string().parse::<Rgba>(), Ok(c));
        assert_eq!(c.with_alpha(128).to_string(), "#4A90E280");
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            RasterImage::solid(0, 10, Rgba::BLACK),
            Err(EncodeError::InvalidDimensions { width: 0, height: 10 })
        );
        assert_eq!(
            RasterImage::solid(10, 0, Rgba::BLACK),
            Err(EncodeError::InvalidDimensions { width: 10, height: 0 })
        );
        assert!(RasterImage::solid(MAX_DIMENSION + 1, 1, Rgba::BLACK).is_err());
    }

    #[test]
    fn test_buffer_length_checked() {
        let data = vec![0u8; 50];
        assert_eq!(
            RasterImage::new(4, 4, PixelSource::Buffer(&data)),
            Err(EncodeError::PixelBufferSizeMismatch { expected: 64, actual: 50 })
        );
        let data = vec![0u8; 64];
        assert!(RasterImage::new(4, 4, PixelSource::Buffer(&data)).is_ok());
    }

    #[test]
    fn test_pixel_lookup() {
        let mut data = vec![0u8; 2 * 2 * 4];
        data[12..16].copy_from_slice(&[1, 2, 3, 4]);
        let img = RasterImage::new(2, 2, PixelSource::Buffer(&data)).unwrap();
        assert_eq!(img.pixel(1, 1), Some(Rgba::new(1, 2, 3, 4)));
        assert_eq!(img.pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(img.pixel(2, 0), None);

        let solid = RasterImage::solid(3, 3, Rgba::BLACK).unwrap();
        assert_eq!(solid.pixel(2, 2), Some(Rgba::BLACK));
    }
}

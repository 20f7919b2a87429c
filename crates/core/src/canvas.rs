//! In-memory RGBA canvas that `embedded-graphics` primitives draw into.
//!
//! Drawing replaces the destination pixel outright (alpha included); there
//! is no compositing. Pixels outside the canvas are clipped silently.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::prelude::*;

use crate::error::Result;
use crate::png;
use crate::raster::{self, PixelSource, RasterImage, Rgba, BYTES_PER_PIXEL};

impl PixelColor for Rgba {
    type Raw = ();
}

/// Owned `width` x `height` RGBA buffer, initially fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaCanvas {
    /// Transparent canvas. Fails with `InvalidDimensions` for an empty
    /// canvas or one whose byte count does not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = raster::pixel_byte_len(width, height)?;
        Ok(RgbaCanvas {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at (`x`, `y`), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let i = self.index(x, y)?;
        Some(Rgba::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]))
    }

    /// Overwrite one pixel; coordinates outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&color.to_bytes());
        }
    }

    /// Borrow the canvas as an encoder input.
    pub fn as_raster(&self) -> Result<RasterImage<'_>> {
        RasterImage::new(self.width, self.height, PixelSource::Buffer(&self.data))
    }

    /// Encode the canvas as a PNG file.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        png::encode_image(&self.as_raster()?)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

impl OriginDimensions for RgbaCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for RgbaCanvas {
    type Color = Rgba;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 {
                continue;
            }
            self.set_pixel(coord.x as u32, coord.y as u32, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeError;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = RgbaCanvas::new(4, 3).unwrap();
        assert_eq!(canvas.as_bytes().len(), 4 * 3 * 4);
        assert!(canvas.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(canvas.size(), Size::new(4, 3));
    }

    #[test]
    fn test_draw_replaces_and_clips() {
        let mut canvas = RgbaCanvas::new(4, 4).unwrap();
        let red = Rgba::opaque(255, 0, 0);
        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(red))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(red));
        assert_eq!(canvas.pixel(1, 1), Some(red));
        assert_eq!(canvas.pixel(2, 2), Some(Rgba::TRANSPARENT));

        // Semi-transparent ink overwrites instead of blending.
        let ghost = Rgba::new(0, 0, 255, 128);
        Line::new(Point::new(0, 0), Point::new(3, 0))
            .into_styled(PrimitiveStyle::with_stroke(ghost, 1))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(ghost));
        assert_eq!(canvas.pixel(3, 0), Some(ghost));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_encode_round_trip() {
        let mut canvas = RgbaCanvas::new(3, 2).unwrap();
        canvas.fill(Rgba::opaque(1, 2, 3));
        canvas.set_pixel(2, 1, Rgba::new(9, 8, 7, 6));
        let raster = canvas.as_raster().unwrap();
        assert_eq!(raster.pixel(2, 1), Some(Rgba::new(9, 8, 7, 6)));

        let png = canvas.encode_png().unwrap();
        assert_eq!(&png[..8], &png::PNG_SIGNATURE);
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert_eq!(
            RgbaCanvas::new(0, 5),
            Err(EncodeError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            RgbaCanvas::new(3_000_000_000, 3_000_000_000),
            Err(EncodeError::InvalidDimensions { width: 3_000_000_000, height: 3_000_000_000 })
        );
    }
}

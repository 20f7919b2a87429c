//! # monster-art-core
//!
//! Placeholder art for Monster Farm: a minimal RGBA PNG encoder plus the
//! color tables and shape drawing used to produce monster sprites, element
//! overlays, mutation icons, UI icons and terrain tiles.
//!
//! ## Architecture
//!
//! - [`png`] — PNG encoder: signature, IHDR, one zlib-compressed IDAT, IEND
//! - [`crc32`] — CRC-32 used for chunk checksums
//! - [`raster`] — [`Rgba`], [`PixelSource`] and the validated [`RasterImage`]
//! - [`palette`] — Static body schemes, elements, mutations and tile colors
//! - [`canvas`] — [`RgbaCanvas`], an `embedded-graphics` draw target
//! - [`sprites`] — Drawing routines for every sprite and icon
//! - [`error`] — [`EncodeError`] and [`ColorParseError`]
//!
//! ## Encoding
//!
//! ```
//! use monster_art_core::png;
//!
//! let tile = png::encode_solid_color(18, 18, 64, 140, 196, 255).unwrap();
//! assert_eq!(&tile[..8], &png::PNG_SIGNATURE);
//! ```
//!
//! The encoder is a pure function of its inputs: no global state, no I/O,
//! safe to call from any number of threads at once.

pub mod canvas;
pub mod crc32;
pub mod error;
pub mod palette;
pub mod png;
pub mod raster;
pub mod sprites;

pub use canvas::RgbaCanvas;
pub use error::{ColorParseError, EncodeError};
pub use png::{encode, encode_image, encode_solid_color};
pub use raster::{PixelSource, RasterImage, Rgba};

//! Minimal RGBA PNG encoder.
//!
//! Writes exactly one profile: 8-bit RGBA, non-interlaced, filter type 0
//! (None) on every scanline. The whole scanline stream is compressed into a
//! single zlib stream and stored in one IDAT chunk.
//!
//! ## File layout
//!
//! ```text
//! +---------------------------+
//! | Signature                 |  89 50 4E 47 0D 0A 1A 0A
//! +---------------------------+
//! | IHDR (13-byte payload)    |  width, height, 8, 6, 0, 0, 0
//! +---------------------------+
//! | IDAT                      |  zlib(filter byte + RGBA row, x height)
//! +---------------------------+
//! | IEND (empty payload)      |  CRC is always AE 42 60 82
//! +---------------------------+
//! ```
//!
//! Every chunk is `length (BE u32) | tag | payload | CRC-32(tag ++ payload)`.

use log::{debug, trace};
use miniz_oxide::deflate::core::{
    compress, create_comp_flags_from_zip_params, CompressorOxide, TDEFLFlush, TDEFLStatus,
};

use crate::crc32::Crc32;
use crate::error::{EncodeError, Result};
use crate::raster::{pixel_byte_len, PixelSource, RasterImage, Rgba, BYTES_PER_PIXEL};

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// zlib level used for IDAT ("best"). Affects size only, never correctness.
pub const COMPRESSION_LEVEL: u8 = 9;

const IHDR_LEN: usize = 13;
const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// Chunk payloads are limited to 2^31 - 1 bytes.
const MAX_CHUNK_LEN: usize = 0x7FFF_FFFF;

/// Framing overhead per chunk: length + tag + CRC.
const CHUNK_OVERHEAD: usize = 12;

// ─── Top-level encode ───────────────────────────────────────────────────────

/// Encode a `width` x `height` image from `pixels` as a complete PNG file.
///
/// Fails with [`EncodeError::InvalidDimensions`] for zero (or oversized)
/// dimensions and [`EncodeError::PixelBufferSizeMismatch`] when an explicit
/// buffer is not exactly `width * height * 4` bytes long.
pub fn encode(width: u32, height: u32, pixels: PixelSource<'_>) -> Result<Vec<u8>> {
    let image = RasterImage::new(width, height, pixels)?;
    encode_image(&image)
}

/// Encode a uniform tile of a single RGBA color.
pub fn encode_solid_color(width: u32, height: u32, r: u8, g: u8, b: u8, a: u8) -> Result<Vec<u8>> {
    encode(width, height, PixelSource::Solid(Rgba::new(r, g, b, a)))
}

/// Encode an already validated raster.
pub fn encode_image(image: &RasterImage<'_>) -> Result<Vec<u8>> {
    let ihdr = ihdr_payload(image.width(), image.height())?;
    let raw = assemble_scanlines(image)?;
    let idat = compress_scanlines(&raw)?;
    if idat.len() > MAX_CHUNK_LEN {
        return Err(EncodeError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }

    let mut png =
        Vec::with_capacity(PNG_SIGNATURE.len() + 3 * CHUNK_OVERHEAD + IHDR_LEN + idat.len());
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr);
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    debug!(
        "encoded {}x{} png: {} scanline bytes -> {} idat bytes, {} total",
        image.width(),
        image.height(),
        raw.len(),
        idat.len(),
        png.len()
    );
    Ok(png)
}

// ─── Chunks ─────────────────────────────────────────────────────────────────

/// Frame `payload` as a chunk tagged `tag`.
///
/// # Panics
///
/// If `tag` is not exactly 4 bytes, or the payload exceeds the PNG chunk
/// length limit. Both are programming errors in the caller.
pub fn frame_chunk(tag: &[u8], payload: &[u8]) -> Vec<u8> {
    let tag: &[u8; 4] = match tag.try_into() {
        Ok(tag) => tag,
        Err(_) => panic!("PNG chunk tag must be 4 bytes, got {}", tag.len()),
    };
    let mut out = Vec::with_capacity(CHUNK_OVERHEAD + payload.len());
    write_chunk(&mut out, tag, payload);
    out
}

/// Append a framed chunk to `out`. The CRC covers tag and payload only.
pub fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    assert!(
        payload.len() <= MAX_CHUNK_LEN,
        "PNG chunk payload of {} bytes exceeds 2^31-1",
        payload.len()
    );
    let mut crc = Crc32::new();
    crc.update(tag);
    crc.update(payload);

    out.reserve(CHUNK_OVERHEAD + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
    trace!("chunk {} ({} bytes)", String::from_utf8_lossy(tag), payload.len());
}

/// The 13-byte IHDR payload for an 8-bit RGBA, non-interlaced image.
pub fn ihdr_payload(width: u32, height: u32) -> Result<[u8; IHDR_LEN]> {
    pixel_byte_len(width, height)?;

    let mut ihdr = [0u8; IHDR_LEN];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = BIT_DEPTH;
    ihdr[9] = COLOR_TYPE_RGBA;
    // 10..13: compression 0 (deflate), filter method 0, interlace 0 (none)
    Ok(ihdr)
}

// ─── Scanlines ──────────────────────────────────────────────────────────────

/// Build the uncompressed IDAT stream: one filter byte (0) followed by the
/// row's RGBA bytes, for every row top to bottom. `height * (1 + 4 * width)`
/// bytes in total.
pub fn assemble_scanlines(image: &RasterImage<'_>) -> Result<Vec<u8>> {
    let invalid = || EncodeError::InvalidDimensions {
        width: image.width(),
        height: image.height(),
    };
    let width = image.width() as usize;
    let height = image.height() as usize;
    let pixel_bytes = width.checked_mul(BYTES_PER_PIXEL).ok_or_else(invalid)?;
    let row_len = pixel_bytes.checked_add(1).ok_or_else(invalid)?;
    let total = row_len.checked_mul(height).ok_or_else(invalid)?;

    let mut raw = Vec::with_capacity(total);
    match image.pixels() {
        PixelSource::Solid(color) => {
            // Every row is identical, so build one and repeat it.
            let mut row = Vec::with_capacity(row_len);
            row.push(FILTER_NONE);
            for _ in 0..width {
                row.extend_from_slice(&color.to_bytes());
            }
            for _ in 0..height {
                raw.extend_from_slice(&row);
            }
        }
        PixelSource::Buffer(data) => {
            for line in data.chunks_exact(pixel_bytes) {
                raw.push(FILTER_NONE);
                raw.extend_from_slice(line);
            }
        }
    }
    Ok(raw)
}

// ─── Compression ────────────────────────────────────────────────────────────

/// Compress the full scanline stream into one zlib stream at
/// [`COMPRESSION_LEVEL`].
pub fn compress_scanlines(raw: &[u8]) -> Result<Vec<u8>> {
    // window_bits > 0 asks miniz for the zlib header and Adler-32 trailer.
    let flags = create_comp_flags_from_zip_params(COMPRESSION_LEVEL as i32, 15, 0);
    let mut compressor = CompressorOxide::new(flags);

    let mut out = vec![0u8; (raw.len() / 2).max(64)];
    let mut in_pos = 0;
    let mut out_pos = 0;
    loop {
        let (status, consumed, written) = compress(
            &mut compressor,
            &raw[in_pos..],
            &mut out[out_pos..],
            TDEFLFlush::Finish,
        );
        in_pos += consumed;
        out_pos += written;

        match status {
            TDEFLStatus::Done => {
                out.truncate(out_pos);
                return Ok(out);
            }
            TDEFLStatus::Okay => {
                if out.len() - out_pos < 30 {
                    let grown = out.len().checked_mul(2).ok_or_else(|| {
                        EncodeError::CompressionFailure("output buffer overflow".into())
                    })?;
                    out.resize(grown, 0);
                }
            }
            status => {
                return Err(EncodeError::CompressionFailure(format!(
                    "deflate stopped with status {:?} after {} of {} bytes",
                    status,
                    in_pos,
                    raw.len()
                )));
            }
        }
    }
}

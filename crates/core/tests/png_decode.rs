//! Decode conformance: everything the encoder writes must load in an
//! independent PNG decoder with identical dimensions and pixels.

use monster_art_core::palette::{self, TERRAIN_TILES};
use monster_art_core::sprites::{self, MutationGlyph};
use monster_art_core::{encode, encode_solid_color, EncodeError, PixelSource, Rgba};
use proptest::prelude::*;

fn decode(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .expect("decode")
        .to_rgba8()
}

fn assert_uniform(png: &[u8], w: u32, h: u32, color: [u8; 4]) {
    let decoded = decode(png);
    assert_eq!(decoded.dimensions(), (w, h));
    assert!(decoded.pixels().all(|p| p.0 == color));
}

#[test]
fn test_ground_tile_2x2() {
    let png = encode_solid_color(2, 2, 96, 168, 104, 255).unwrap();
    assert_uniform(&png, 2, 2, [96, 168, 104, 255]);
}

#[test]
fn test_water_tile_18x18() {
    let png = encode_solid_color(18, 18, 64, 140, 196, 255).unwrap();
    assert_uniform(&png, 18, 18, [64, 140, 196, 255]);
}

#[test]
fn test_every_terrain_tile_decodes() {
    for tile in TERRAIN_TILES {
        let c = tile.color;
        let png = encode_solid_color(palette::TILE_SIZE, palette::TILE_SIZE, c.r, c.g, c.b, c.a)
            .unwrap();
        assert_uniform(&png, 18, 18, c.to_bytes());
    }
}

#[test]
fn test_extreme_aspect_ratios() {
    let png = encode_solid_color(4096, 2, 1, 2, 3, 4).unwrap();
    assert_uniform(&png, 4096, 2, [1, 2, 3, 4]);
    let png = encode_solid_color(2, 4096, 250, 0, 125, 0).unwrap();
    assert_uniform(&png, 2, 4096, [250, 0, 125, 0]);
}

#[test]
fn test_explicit_gradient() {
    let (w, h) = (256u32, 3u32);
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[x as u8, (255 - x) as u8, y as u8 * 100, 255 - y as u8]);
        }
    }
    let png = encode(w, h, PixelSource::Buffer(&data)).unwrap();
    let decoded = decode(&png);
    assert_eq!(decoded.dimensions(), (w, h));
    assert_eq!(decoded.as_raw(), &data);
}

#[test]
fn test_sprites_decode_to_canvas_contents() {
    let wolf = palette::base_scheme("wolf").unwrap();
    let canvases = [
        sprites::monster_body(wolf.body, wolf.accent, palette::SPRITE_SIZE).unwrap(),
        sprites::element_overlay(
            palette::ElementSymbol::Snowflake,
            Rgba::from_rgb_u32(0x87CEEB),
            palette::SPRITE_SIZE,
        )
        .unwrap(),
        sprites::mutation_sprite(MutationGlyph::Unstable, palette::SPRITE_SIZE).unwrap(),
        sprites::health_icon().unwrap(),
        sprites::energy_icon().unwrap(),
    ];
    for canvas in &canvases {
        let decoded = decode(&canvas.encode_png().unwrap());
        assert_eq!(decoded.dimensions(), (canvas.width(), canvas.height()));
        assert_eq!(decoded.as_raw().as_slice(), canvas.as_bytes());
    }
}

#[test]
fn test_precondition_errors() {
    let red = PixelSource::Solid(Rgba::opaque(255, 0, 0));
    assert!(matches!(encode(0, 10, red), Err(EncodeError::InvalidDimensions { .. })));
    assert!(matches!(encode(10, 0, red), Err(EncodeError::InvalidDimensions { .. })));
    let buf = [0u8; 50];
    assert_eq!(
        encode(4, 4, PixelSource::Buffer(&buf)),
        Err(EncodeError::PixelBufferSizeMismatch { expected: 64, actual: 50 })
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_solid_round_trip(w in 1u32..=96, h in 1u32..=96, px in any::<[u8; 4]>()) {
        let png = encode_solid_color(w, h, px[0], px[1], px[2], px[3]).unwrap();

        prop_assert_eq!(&png[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
        prop_assert_eq!(&png[png.len() - 12..], &[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
        prop_assert_eq!(png[24], 8);
        prop_assert_eq!(png[25], 6);

        let decoded = decode(&png);
        prop_assert_eq!(decoded.dimensions(), (w, h));
        prop_assert!(decoded.pixels().all(|p| p.0 == px));
    }

    #[test]
    fn prop_buffer_round_trip(
        (w, h, data) in (1u32..=32, 1u32..=32).prop_flat_map(|(w, h)| {
            (Just(w), Just(h), proptest::collection::vec(any::<u8>(), (w * h * 4) as usize))
        })
    ) {
        let png = encode(w, h, PixelSource::Buffer(&data)).unwrap();
        prop_assert_eq!(&png, &encode(w, h, PixelSource::Buffer(&data)).unwrap());

        let decoded = decode(&png);
        prop_assert_eq!(decoded.dimensions(), (w, h));
        prop_assert_eq!(decoded.as_raw(), &data);
    }
}

//! Asset generation: turns palette entries into PNG files under the art tree.
//!
//! ```text
//! <root>/
//!   monsters/bodies/<body>.png
//!   monsters/overlays/element_<element>.png
//!   monsters/mutations/<mutation>.png
//!   ui/health_icon.png, ui/energy_icon.png
//!   vfx/
//!   tiles/<kind>_placeholder.png
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{info, warn};

use monster_art_core::palette::{self, Element, ELEMENTS, EXTENDED_SCHEMES, MUTATIONS, TERRAIN_TILES};
use monster_art_core::sprites::{self, MutationGlyph};
use monster_art_core::{encode_solid_color, Rgba, RgbaCanvas};

use crate::batch::BatchConfig;
use crate::cli::CustomArgs;

// ─── Output tree ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ArtLayout {
    root: PathBuf,
}

impl ArtLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bodies(&self) -> PathBuf {
        self.root.join("monsters").join("bodies")
    }

    pub fn overlays(&self) -> PathBuf {
        self.root.join("monsters").join("overlays")
    }

    pub fn mutations(&self) -> PathBuf {
        self.root.join("monsters").join("mutations")
    }

    pub fn ui(&self) -> PathBuf {
        self.root.join("ui")
    }

    pub fn vfx(&self) -> PathBuf {
        self.root.join("vfx")
    }

    pub fn tiles(&self) -> PathBuf {
        self.root.join("tiles")
    }

    /// Create every sprite directory (not `tiles/`, which only the tile
    /// pass needs).
    pub fn create_dirs(&self) -> Result<()> {
        for dir in [self.bodies(), self.overlays(), self.mutations(), self.ui(), self.vfx()] {
            ensure_dir(&dir)?;
        }
        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating directory {}", dir.display()))
}

fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

pub fn save_sprite(path: &Path, canvas: &RgbaCanvas) -> Result<()> {
    let png = canvas
        .encode_png()
        .with_context(|| format!("encoding {}", path.display()))?;
    write_png(path, &png)
}

// ─── Base pack ──────────────────────────────────────────────────────────────

/// Write the full base pack and return the number of files written.
pub fn art_pack(layout: &ArtLayout, size: u32) -> Result<usize> {
    layout.create_dirs()?;
    let mut written = 0;

    for (name, scheme_name) in palette::BASE_BODIES {
        let scheme = palette::base_scheme(scheme_name)
            .ok_or_else(|| anyhow!("no color scheme named {}", scheme_name))?;
        let canvas = sprites::monster_body(scheme.body, scheme.accent, size)?;
        save_sprite(&layout.bodies().join(format!("{}.png", name)), &canvas)?;
        written += 1;
    }

    for element in palette::base_elements() {
        let accent = palette::base_scheme(element.name)
            .map(|s| s.accent)
            .unwrap_or(element.color);
        write_overlay(layout, element, accent, size)?;
        written += 1;
    }

    for name in palette::base_mutations() {
        write_mutation(layout, name, size)?;
        written += 1;
    }

    save_sprite(&layout.ui().join("health_icon.png"), &sprites::health_icon()?)?;
    save_sprite(&layout.ui().join("energy_icon.png"), &sprites::energy_icon()?)?;
    written += 2;

    Ok(written)
}

/// Write the solid terrain tiles and return the number of files written.
pub fn terrain_tiles(layout: &ArtLayout, size: u32) -> Result<usize> {
    let dir = layout.tiles();
    ensure_dir(&dir)?;
    for tile in TERRAIN_TILES {
        let c = tile.color;
        let path = dir.join(tile.file_name);
        let png = encode_solid_color(size, size, c.r, c.g, c.b, c.a)
            .with_context(|| format!("encoding {}", path.display()))?;
        write_png(&path, &png)?;
    }
    Ok(TERRAIN_TILES.len())
}

fn write_overlay(layout: &ArtLayout, element: &Element, color: Rgba, size: u32) -> Result<()> {
    let canvas = sprites::element_overlay(element.symbol, color, size)?;
    save_sprite(&layout.overlays().join(format!("element_{}.png", element.name)), &canvas)
}

fn write_mutation(layout: &ArtLayout, name: &str, size: u32) -> Result<()> {
    let canvas = sprites::mutation_sprite(MutationGlyph::for_name(name), size)?;
    save_sprite(&layout.mutations().join(format!("{}.png", name)), &canvas)
}

// ─── Custom variants ────────────────────────────────────────────────────────

/// Colors for a custom body: explicit values win, then the scheme of the
/// same name. A name with no scheme needs both colors.
pub fn resolve_body(name: &str, color: Option<Rgba>, accent: Option<Rgba>) -> Result<(Rgba, Rgba)> {
    let scheme = palette::any_scheme(name);
    let body = color
        .or(scheme.map(|s| s.body))
        .ok_or_else(|| anyhow!("body '{}' has no color scheme; pass --color and --accent", name))?;
    let accent = accent
        .or(scheme.map(|s| s.accent))
        .ok_or_else(|| anyhow!("body '{}' has no color scheme; pass --accent", name))?;
    Ok((body, accent))
}

pub fn custom_body(layout: &ArtLayout, name: &str, body: Rgba, accent: Rgba, size: u32) -> Result<PathBuf> {
    let dir = layout.bodies();
    ensure_dir(&dir)?;
    let path = dir.join(format!("{}.png", name));
    save_sprite(&path, &sprites::monster_body(body, accent, size)?)?;
    Ok(path)
}

pub fn custom_element(layout: &ArtLayout, name: &str, size: u32) -> Result<PathBuf> {
    let element = palette::element(name).ok_or_else(|| {
        let available: Vec<_> = palette::element_names().collect();
        anyhow!("unknown element '{}' (available: {})", name, available.join(", "))
    })?;
    ensure_dir(&layout.overlays())?;
    write_overlay(layout, element, element.color, size)?;
    Ok(layout.overlays().join(format!("element_{}.png", element.name)))
}

pub fn custom_mutation(layout: &ArtLayout, name: &str, size: u32) -> Result<PathBuf> {
    if MutationGlyph::for_name(name) == MutationGlyph::Generic {
        warn!("no dedicated glyph for mutation '{}', using the generic one", name);
    }
    ensure_dir(&layout.mutations())?;
    write_mutation(layout, name, size)?;
    Ok(layout.mutations().join(format!("{}.png", name)))
}

/// Run the `custom` subcommand. Returns the number of files written.
pub fn custom(layout: &ArtLayout, args: &CustomArgs) -> Result<usize> {
    let mut written = 0;
    if let Some(name) = &args.body {
        let (body, accent) = resolve_body(name, args.color, args.accent)?;
        custom_body(layout, name, body, accent, args.size)?;
        written += 1;
    }
    if let Some(name) = &args.element {
        custom_element(layout, name, args.size)?;
        written += 1;
    }
    if let Some(name) = &args.mutation {
        custom_mutation(layout, name, args.size)?;
        written += 1;
    }
    Ok(written)
}

// ─── Batch ──────────────────────────────────────────────────────────────────

/// Generate everything a batch file lists. `default_root` is used unless
/// the file names its own output directory.
pub fn run_batch(config: &BatchConfig, default_root: &Path) -> Result<usize> {
    let layout = ArtLayout::new(config.output_dir.as_deref().unwrap_or(default_root));
    // Checked before anything is written, so a bad size leaves no partial output.
    let size = config.sprite_size()?;
    let tile_size = config.tile_size()?;
    let mut written = 0;

    for entry in &config.bodies {
        let (body, accent) = resolve_body(&entry.name, entry.color, entry.accent)
            .with_context(|| format!("batch body '{}'", entry.name))?;
        custom_body(&layout, &entry.name, body, accent, size)?;
        written += 1;
    }
    for name in &config.elements {
        custom_element(&layout, name, size)?;
        written += 1;
    }
    for name in &config.mutations {
        custom_mutation(&layout, name, size)?;
        written += 1;
    }
    if config.tiles {
        written += terrain_tiles(&layout, tile_size).context("batch tiles")?;
    }
    Ok(written)
}

// ─── Listings ───────────────────────────────────────────────────────────────

pub fn color_listing() -> Vec<String> {
    EXTENDED_SCHEMES
        .iter()
        .map(|s| format!("{}: body={} accent={}", s.name, s.body, s.accent))
        .collect()
}

pub fn element_listing() -> Vec<String> {
    ELEMENTS
        .iter()
        .map(|e| format!("{}: {} ({})", e.name, e.color, e.symbol.name()))
        .collect()
}

pub fn mutation_listing() -> Vec<String> {
    MUTATIONS
        .iter()
        .map(|name| {
            let glyph = MutationGlyph::for_name(name);
            if palette::base_mutations().contains(name) {
                format!("{} (base, {})", name, glyph.name())
            } else {
                format!("{} ({})", name, glyph.name())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use monster_art_core::png::PNG_SIGNATURE;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("monster-art-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn assert_png(path: &Path) {
        let bytes = fs::read(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        assert_eq!(&bytes[..8], &PNG_SIGNATURE, "{}", path.display());
    }

    #[test]
    fn test_art_pack_tree() {
        let root = scratch("pack");
        let layout = ArtLayout::new(&root);
        let written = art_pack(&layout, palette::SPRITE_SIZE).unwrap();
        assert_eq!(written, 7 + 5 + 3 + 2);

        assert_png(&layout.bodies().join("quadruped.png"));
        assert_png(&layout.overlays().join("element_shadow.png"));
        assert_png(&layout.mutations().join("weakness.png"));
        assert_png(&layout.ui().join("health_icon.png"));
        assert_png(&layout.ui().join("energy_icon.png"));
        assert!(layout.vfx().is_dir());
        assert!(!layout.tiles().exists());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_terrain_tiles() {
        let root = scratch("tiles");
        let layout = ArtLayout::new(&root);
        assert_eq!(terrain_tiles(&layout, 2).unwrap(), 5);
        for tile in TERRAIN_TILES {
            assert_png(&layout.tiles().join(tile.file_name));
        }
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_resolve_body() {
        let phoenix = palette::extended_scheme("phoenix").unwrap();
        assert_eq!(resolve_body("phoenix", None, None).unwrap(), (phoenix.body, phoenix.accent));

        let red = Rgba::opaque(255, 0, 0);
        assert_eq!(resolve_body("phoenix", Some(red), None).unwrap(), (red, phoenix.accent));
        assert_eq!(resolve_body("kraken", Some(red), Some(red)).unwrap(), (red, red));
        assert!(resolve_body("kraken", Some(red), None).is_err());
        assert!(resolve_body("kraken", None, None).is_err());
    }

    #[test]
    fn test_unknown_element_lists_available() {
        let root = scratch("bad-element");
        let err = custom_element(&ArtLayout::new(&root), "plasma", 64).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("plasma"));
        assert!(msg.contains("fire, ice, electric"), "{}", msg);
        assert!(!root.exists());
    }

    #[test]
    fn test_custom_variants() {
        let root = scratch("custom");
        let layout = ArtLayout::new(&root);
        let body = custom_body(&layout, "kraken", Rgba::from_rgb_u32(0x204060), Rgba::BLACK, 48).unwrap();
        assert_png(&body);
        assert_png(&custom_element(&layout, "water", 64).unwrap());
        assert_png(&custom_mutation(&layout, "photosynthesis", 64).unwrap());
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_run_batch() {
        let root = scratch("batch");
        let config = BatchConfig::parse(
            r##"{
                "bodies": [{ "name": "wraith" }, { "name": "kraken", "color": "#204060", "accent": "#80A0C0" }],
                "elements": ["metal"],
                "mutations": ["armor"],
                "tiles": true,
                "tile_size": 4
            }"##,
        )
        .unwrap();
        assert_eq!(run_batch(&config, &root).unwrap(), 2 + 1 + 1 + 5);

        let layout = ArtLayout::new(&root);
        assert_png(&layout.bodies().join("wraith.png"));
        assert_png(&layout.bodies().join("kraken.png"));
        assert_png(&layout.overlays().join("element_metal.png"));
        assert_png(&layout.mutations().join("armor.png"));
        assert_png(&layout.tiles().join("water_placeholder.png"));
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_batch_size_out_of_range_is_an_error() {
        let root = scratch("batch-size");
        let oversized = BatchConfig::parse(r#"{ "size": 3000000000, "mutations": ["armor"] }"#).unwrap();
        let err = run_batch(&oversized, &root).unwrap_err();
        assert!(err.to_string().contains("\"size\""), "{}", err);

        let undersized = BatchConfig::parse(r#"{ "size": 8, "mutations": ["armor"] }"#).unwrap();
        assert!(run_batch(&undersized, &root).is_err());

        let tiles = BatchConfig::parse(r#"{ "tiles": true, "tile_size": 5000 }"#).unwrap();
        let err = run_batch(&tiles, &root).unwrap_err();
        assert!(err.to_string().contains("\"tile_size\""), "{}", err);

        assert!(!root.exists());
    }

    #[test]
    fn test_batch_body_without_scheme_names_entry() {
        let config = BatchConfig::parse(r#"{ "bodies": [{ "name": "kraken" }] }"#).unwrap();
        let err = run_batch(&config, &scratch("batch-bad")).unwrap_err();
        assert!(format!("{:#}", err).contains("batch body 'kraken'"));
    }

    #[test]
    fn test_listings() {
        let colors = color_listing();
        assert_eq!(colors.len(), EXTENDED_SCHEMES.len());
        assert_eq!(colors[0], "wolf: body=#8B6F47 accent=#D4A574");

        let elements = element_listing();
        assert!(elements.contains(&"water: #1E90FF (wave)".to_string()));

        let mutations = mutation_listing();
        assert_eq!(mutations[0], "gigantism (base, gigantism)");
        assert_eq!(mutations[6], "armor (armor)");
    }
}

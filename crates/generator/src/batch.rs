//! JSON batch configuration.
//!
//! ```json
//! {
//!   "output_dir": "build/art",
//!   "size": 64,
//!   "bodies": [
//!     { "name": "phoenix" },
//!     { "name": "kraken", "color": "#204060", "accent": "#80A0C0" }
//!   ],
//!   "elements": ["light", "water"],
//!   "mutations": ["toxic", "armor"],
//!   "tiles": true,
//!   "tile_size": 18
//! }
//! ```
//!
//! Every field is optional; unknown fields are rejected so typos surface
//! instead of silently generating nothing.

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use monster_art_core::palette::{SPRITE_SIZE, TILE_SIZE};
use monster_art_core::Rgba;

use crate::cli::{SPRITE_SIZES, TILE_SIZES};

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Overrides `--output-dir` when set.
    pub output_dir: Option<PathBuf>,
    /// Sprite edge length; the default sprite size when unset.
    pub size: Option<u32>,
    pub bodies: Vec<BodyEntry>,
    pub elements: Vec<String>,
    pub mutations: Vec<String>,
    pub tiles: bool,
    pub tile_size: Option<u32>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyEntry {
    pub name: String,
    #[serde(default)]
    pub color: Option<Rgba>,
    #[serde(default)]
    pub accent: Option<Rgba>,
}

impl BatchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading batch file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing batch file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Sprite edge length, held to the same range as `--size`.
    pub fn sprite_size(&self) -> Result<u32> {
        checked_size("size", self.size.unwrap_or(SPRITE_SIZE), SPRITE_SIZES)
    }

    /// Tile edge length, held to the same range as `tiles --size`.
    pub fn tile_size(&self) -> Result<u32> {
        checked_size("tile_size", self.tile_size.unwrap_or(TILE_SIZE), TILE_SIZES)
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty() && self.elements.is_empty() && self.mutations.is_empty() && !self.tiles
    }
}

fn checked_size(field: &str, value: u32, allowed: RangeInclusive<u32>) -> Result<u32> {
    if !allowed.contains(&value) {
        bail!(
            "batch field \"{}\" is {}, expected {}..={}",
            field,
            value,
            allowed.start(),
            allowed.end()
        );
    }
    Ok(value)
}

//! Static color tables for monsters, elements, mutations and terrain tiles.
//!
//! Everything here is compile-time data; lookups are linear scans over short
//! slices, which keeps the tables in declaration order for listings.

use crate::error::ColorParseError;
use crate::raster::Rgba;

/// Default edge length of monster, overlay and mutation sprites.
pub const SPRITE_SIZE: u32 = 64;
/// Edge length of UI icons.
pub const ICON_SIZE: u32 = 32;
/// Edge length of solid terrain tiles.
pub const TILE_SIZE: u32 = 18;

/// Body and accent colors for one monster (or element) family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyScheme {
    pub name: &'static str,
    pub body: Rgba,
    pub accent: Rgba,
}

const fn scheme(name: &'static str, body: u32, accent: u32) -> BodyScheme {
    BodyScheme {
        name,
        body: Rgba::from_rgb_u32(body),
        accent: Rgba::from_rgb_u32(accent),
    }
}

/// Schemes used by the base art pack. The element names double as the
/// source of each element overlay's accent color.
pub static BASE_SCHEMES: &[BodyScheme] = &[
    scheme("wolf", 0x8B6F47, 0xD4A574),
    scheme("golem", 0x6B7280, 0x9CA3AF),
    scheme("serpent", 0x4F7942, 0xA8D5BA),
    scheme("swarm", 0x5A4A42, 0xC4A484),
    scheme("fire", 0xFF6B35, 0xFFD60A),
    scheme("ice", 0x4A90E2, 0x87CEEB),
    scheme("electric", 0xFFD60A, 0xFFA500),
    scheme("bio", 0x00A86B, 0x90EE90),
    scheme("shadow", 0x2C2C2C, 0x696969),
];

/// Schemes available to custom bodies: the base monsters plus variants.
pub static EXTENDED_SCHEMES: &[BodyScheme] = &[
    scheme("wolf", 0x8B6F47, 0xD4A574),
    scheme("golem", 0x6B7280, 0x9CA3AF),
    scheme("serpent", 0x4F7942, 0xA8D5BA),
    scheme("swarm", 0x5A4A42, 0xC4A484),
    scheme("phoenix", 0xFF4500, 0xFFD700),
    scheme("wraith", 0x4B0082, 0x9370DB),
    scheme("dragon", 0x8B0000, 0xDC143C),
    scheme("ent", 0x654321, 0x8B4513),
    scheme("elemental", 0xE0FFFF, 0x00FFFF),
    scheme("construct", 0xA9A9A9, 0xD3D3D3),
    scheme("beast", 0x8B4513, 0xA0522D),
    scheme("insect", 0x3D3D3D, 0x696969),
];

/// Base pack body sprites: (file name, scheme name). Body archetypes
/// borrow the colors of a monster family.
pub static BASE_BODIES: &[(&str, &str)] = &[
    ("wolf", "wolf"),
    ("golem", "golem"),
    ("serpent", "serpent"),
    ("swarm", "swarm"),
    ("quadruped", "wolf"),
    ("biped", "golem"),
    ("serpentine", "serpent"),
];

/// Glyph drawn in the middle of an element overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementSymbol {
    Flame,
    Snowflake,
    Lightning,
    Leaf,
    Swirl,
    Star,
    Gear,
    Wave,
    Spiral,
}

impl ElementSymbol {
    pub fn name(self) -> &'static str {
        match self {
            ElementSymbol::Flame => "flame",
            ElementSymbol::Snowflake => "snowflake",
            ElementSymbol::Lightning => "lightning",
            ElementSymbol::Leaf => "leaf",
            ElementSymbol::Swirl => "swirl",
            ElementSymbol::Star => "star",
            ElementSymbol::Gear => "gear",
            ElementSymbol::Wave => "wave",
            ElementSymbol::Spiral => "spiral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub color: Rgba,
    pub symbol: ElementSymbol,
}

const fn element_entry(name: &'static str, color: u32, symbol: ElementSymbol) -> Element {
    Element {
        name,
        color: Rgba::from_rgb_u32(color),
        symbol,
    }
}

/// Number of leading [`ELEMENTS`] that belong to the base art pack.
const BASE_ELEMENT_COUNT: usize = 5;

pub static ELEMENTS: &[Element] = &[
    element_entry("fire", 0xFF6B35, ElementSymbol::Flame),
    element_entry("ice", 0x4A90E2, ElementSymbol::Snowflake),
    element_entry("electric", 0xFFD60A, ElementSymbol::Lightning),
    element_entry("bio", 0x00A86B, ElementSymbol::Leaf),
    element_entry("shadow", 0x2C2C2C, ElementSymbol::Swirl),
    element_entry("light", 0xFFFF99, ElementSymbol::Star),
    element_entry("metal", 0xA8A9AD, ElementSymbol::Gear),
    element_entry("water", 0x1E90FF, ElementSymbol::Wave),
    element_entry("wind", 0xD0D0FF, ElementSymbol::Spiral),
];

/// Number of leading [`MUTATIONS`] that belong to the base art pack.
const BASE_MUTATION_COUNT: usize = 3;

pub static MUTATIONS: &[&str] = &[
    "gigantism",
    "unstable",
    "weakness",
    "crystallize",
    "regenerate",
    "toxic",
    "armor",
];

/// A solid placeholder tile written straight to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainTile {
    pub file_name: &'static str,
    pub color: Rgba,
}

pub static TERRAIN_TILES: &[TerrainTile] = &[
    TerrainTile { file_name: "ground_placeholder.png", color: Rgba::opaque(96, 168, 104) },
    TerrainTile { file_name: "buildable_placeholder.png", color: Rgba::opaque(120, 120, 128) },
    TerrainTile { file_name: "hazard_placeholder.png", color: Rgba::opaque(180, 64, 148) },
    TerrainTile { file_name: "farming_placeholder.png", color: Rgba::opaque(146, 116, 74) },
    TerrainTile { file_name: "water_placeholder.png", color: Rgba::opaque(64, 140, 196) },
];

pub fn base_scheme(name: &str) -> Option<&'static BodyScheme> {
    BASE_SCHEMES.iter().find(|s| s.name == name)
}

pub fn extended_scheme(name: &str) -> Option<&'static BodyScheme> {
    EXTENDED_SCHEMES.iter().find(|s| s.name == name)
}

/// Scheme for a custom body: the extended table first, then the base one
/// (which also covers the element families).
pub fn any_scheme(name: &str) -> Option<&'static BodyScheme> {
    extended_scheme(name).or_else(|| base_scheme(name))
}

pub fn element(name: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.name == name)
}

pub fn base_elements() -> &'static [Element] {
    &ELEMENTS[..BASE_ELEMENT_COUNT]
}

pub fn base_mutations() -> &'static [&'static str] {
    &MUTATIONS[..BASE_MUTATION_COUNT]
}

pub fn element_names() -> impl Iterator<Item = &'static str> {
    ELEMENTS.iter().map(|e| e.name)
}

/// Parse `#RRGGBB` / `#RRGGBBAA` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Result<Rgba, ColorParseError> {
    s.parse()
}

//! Command-line interface.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use monster_art_core::palette::{parse_hex_color, SPRITE_SIZE, TILE_SIZE};
use monster_art_core::Rgba;

/// Where the game expects its art, relative to the repository root.
pub const DEFAULT_OUTPUT_DIR: &str = "monster-farm-gamefiles/monster-farm/art";

/// Accepted sprite edge lengths, for flags and batch files alike.
pub const SPRITE_SIZES: RangeInclusive<u32> = 16..=1024;
/// Accepted terrain tile edge lengths.
pub const TILE_SIZES: RangeInclusive<u32> = 1..=4096;

// clap's integer ranges are i64.
fn wide(range: RangeInclusive<u32>) -> RangeInclusive<i64> {
    i64::from(*range.start())..=i64::from(*range.end())
}

/// Generate placeholder sprites, icons and terrain tiles for Monster Farm.
#[derive(Parser, Debug)]
#[command(name = "monster-art")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root of the art directory tree
    #[arg(short, long, global = true, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the base art pack: bodies, element overlays, mutations, UI icons
    Art {
        /// Sprite edge length in pixels
        #[arg(long, default_value_t = SPRITE_SIZE, value_parser = clap::value_parser!(u32).range(wide(SPRITE_SIZES)))]
        size: u32,
    },
    /// Write the solid-color terrain tile placeholders
    Tiles {
        /// Tile edge length in pixels
        #[arg(long, default_value_t = TILE_SIZE, value_parser = clap::value_parser!(u32).range(wide(TILE_SIZES)))]
        size: u32,
    },
    /// Generate custom body, element or mutation sprites
    Custom(CustomArgs),
    /// Print one of the built-in color tables
    List {
        #[arg(value_enum)]
        table: ListTable,
    },
    /// Generate everything described by a JSON batch file
    Batch {
        /// Path to the batch configuration
        #[arg(value_name = "FILE")]
        config: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct CustomArgs {
    /// Body sprite name (colors default to the scheme of the same name)
    #[arg(long)]
    pub body: Option<String>,

    /// Body color, e.g. #FF0000
    #[arg(long, requires = "body", value_parser = parse_hex_color)]
    pub color: Option<Rgba>,

    /// Accent color for the body rim
    #[arg(long, requires = "body", value_parser = parse_hex_color)]
    pub accent: Option<Rgba>,

    /// Element overlay to generate
    #[arg(long)]
    pub element: Option<String>,

    /// Mutation sprite to generate
    #[arg(long)]
    pub mutation: Option<String>,

    /// Sprite edge length in pixels
    #[arg(long, default_value_t = SPRITE_SIZE, value_parser = clap::value_parser!(u32).range(wide(SPRITE_SIZES)))]
    pub size: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListTable {
    Colors,
    Elements,
    Mutations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["monster-art", "art"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(cli.log_level(), LevelFilter::Info);
        assert!(matches!(cli.command, Command::Art { size: 64 }));

        let cli = Cli::try_parse_from(["monster-art", "tiles"]).unwrap();
        assert!(matches!(cli.command, Command::Tiles { size: 18 }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["monster-art", "tiles", "-vv", "-o", "out"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["monster-art", "-q", "-v", "art"]).is_err());
        let cli = Cli::try_parse_from(["monster-art", "-q", "art"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_custom_body_colors() {
        let cli = Cli::try_parse_from([
            "monster-art", "custom", "--body", "kraken", "--color", "#204060", "--accent", "80A0C0",
        ])
        .unwrap();
        let Command::Custom(args) = cli.command else {
            panic!("expected custom");
        };
        assert_eq!(args.body.as_deref(), Some("kraken"));
        assert_eq!(args.color, Some(Rgba::opaque(0x20, 0x40, 0x60)));
        assert_eq!(args.accent, Some(Rgba::opaque(0x80, 0xA0, 0xC0)));
    }

    #[test]
    fn test_custom_rejects_bad_color_and_orphan_color() {
        assert!(Cli::try_parse_from(["monster-art", "custom", "--body", "x", "--color", "#12"]).is_err());
        assert!(Cli::try_parse_from(["monster-art", "custom", "--color", "#123456"]).is_err());
    }

    #[test]
    fn test_size_range() {
        assert!(Cli::try_parse_from(["monster-art", "tiles", "--size", "0"]).is_err());
        assert!(Cli::try_parse_from(["monster-art", "art", "--size", "8"]).is_err());
        assert!(Cli::try_parse_from(["monster-art", "art", "--size", "1025"]).is_err());
        assert!(Cli::try_parse_from(["monster-art", "tiles", "--size", "4097"]).is_err());
        assert!(Cli::try_parse_from(["monster-art", "tiles", "--size", "4096"]).is_ok());
    }

    #[test]
    fn test_list_and_batch() {
        let cli = Cli::try_parse_from(["monster-art", "list", "elements"]).unwrap();
        assert!(matches!(cli.command, Command::List { table: ListTable::Elements }));

        let cli = Cli::try_parse_from(["monster-art", "batch", "pack.json"]).unwrap();
        match cli.command {
            Command::Batch { config } => assert_eq!(config, PathBuf::from("pack.json")),
            other => panic!("unexpected {:?}", other),
        }
    }
}

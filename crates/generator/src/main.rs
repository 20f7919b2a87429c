//! Monster Farm placeholder art generator.
//!
//! - `art`: base pack (bodies, element overlays, mutations, UI icons)
//! - `tiles`: solid terrain tiles written straight through the PNG encoder
//! - `custom`: one-off bodies, overlays and mutations
//! - `list`: print the built-in color tables
//! - `batch`: everything a JSON batch file describes
//!
//! Log level follows `-v`/`-q`, or the `MONSTER_ART_LOG` environment variable.

mod batch;
mod cli;
mod generate;
mod logger;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use crate::batch::BatchConfig;
use crate::cli::{Cli, Command, ListTable};
use crate::generate::ArtLayout;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.log_level());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let layout = ArtLayout::new(&cli.output_dir);

    match cli.command {
        Command::Art { size } => {
            let n = generate::art_pack(&layout, size)?;
            info!("generated {} art files under {}", n, layout.root().display());
        }
        Command::Tiles { size } => {
            let n = generate::terrain_tiles(&layout, size)?;
            info!("generated {} terrain tiles under {}", n, layout.tiles().display());
        }
        Command::Custom(args) => {
            if generate::custom(&layout, &args)? == 0 {
                warn!("nothing to generate; pass --body, --element or --mutation");
            }
        }
        Command::List { table } => {
            let lines = match table {
                ListTable::Colors => generate::color_listing(),
                ListTable::Elements => generate::element_listing(),
                ListTable::Mutations => generate::mutation_listing(),
            };
            for line in lines {
                println!("{}", line);
            }
        }
        Command::Batch { config } => {
            let batch = BatchConfig::load(&config)?;
            if batch.is_empty() {
                warn!("{} describes no assets", config.display());
            }
            let n = generate::run_batch(&batch, &cli.output_dir)?;
            info!("batch {} generated {} files", config.display(), n);
        }
    }
    Ok(())
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RoomInfo CLI - normalize a building-model room dump into a room table.
//!
//! Reads a JSON room dump, computes net interior areas, average heights and
//! floor numbers, and writes the ordered table as JSON.
//!
//! Usage:
//!   roominfo <rooms.json> [options]

use anyhow::{Context, Result};
use roominfo_core::RoomCatalogBuilder;
use std::env;

mod config;
mod error;
mod input;
mod output;
mod progress;

use config::{parse_args, Command, Config};
use output::{write_report, CatalogReport};
use progress::LogProgress;

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout carries only the report)
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,roominfo_core=info,roominfo_cli=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1))? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let config = Config::from_env().with_args(&args);
    tracing::info!(
        input = %args.input.display(),
        unit = ?config.unit,
        decimals = config.decimals,
        validate_winding = config.validate_winding,
        "Starting room catalog extraction"
    );

    let rooms = input::load_rooms(&args.input)?;

    let builder = RoomCatalogBuilder::new(config.catalog_options());
    let mut progress = LogProgress::default();
    let outcome = builder
        .build_with_progress(&rooms, &mut progress)
        .context("room catalog construction failed")?;

    let report = CatalogReport::new(&outcome, config.unit, config.decimals);
    write_report(&report, args.output.as_deref())?;

    Ok(())
}

fn print_usage() {
    println!("Usage: roominfo <rooms.json> [options]");
    println!();
    println!("Options:");
    println!("  -o, --output <path>    Write the report to a file instead of stdout");
    println!("  --unit <unit>          Model length unit: feet, inch, metre, centimetre, millimetre");
    println!("  --decimals <n>         Decimal places of exported values (default 3)");
    println!("  --no-winding-check     Accept boundary rings with unexpected winding");
    println!("  -h, --help             Show this help");
    println!();
    println!("Environment:");
    println!("  ROOMINFO_LENGTH_UNIT, ROOMINFO_DECIMALS, ROOMINFO_VALIDATE_WINDING,");
    println!("  ROOMINFO_MIN_GROSS_AREA, RUST_LOG");
}

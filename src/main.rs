#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use fitcalc::{batch, batch::BatchPolicy, cli, packages, utils};
use std::io;

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let pkgs = match &cli.input {
        Some(path) => {
            dlog!("mode=file input={}", path.display());
            packages::load_packages(path)?
        }
        None => {
            dlog!("mode=samples");
            packages::sample_packages()
        }
    };

    let policy = if cli.skip_invalid {
        BatchPolicy::Skip
    } else {
        BatchPolicy::Abort
    };

    let stdout = io::stdout();
    batch::process(&pkgs, cli.lang, policy, &mut stdout.lock())?;

    Ok(())
}

//! vd2svg - convert Android VectorDrawable XML into SVG.

#![allow(dead_code)]

mod cli;
mod config;
mod convert;
mod logger;
mod svg;
mod vector;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::ConvertConfig;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        log!("error"; "failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ConvertConfig::load(cli)?;
    cli::convert::run_convert(cli, &config)
}

//! iconforge - normalize svg icon sources into a de-duplicated icon library.

mod cli;
mod config;
mod generator;
mod icon;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_icons, gallery::build_gallery};
use config::IconsConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = IconsConfig::load(&cli)?;

    match cli.selected_command() {
        Commands::Build => build_icons(&config).map(|_| ()),
        Commands::Gallery => build_gallery(&config),
    }
}

//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Icon library builder: normalizes svg sources into `dist/`
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root directory (default: directory of the config file, or cwd)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file path (default: iconforge.toml)
    #[arg(short = 'C', long, global = true, default_value = "iconforge.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands (default: build)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Rebuild dist/ from the icon sources
    #[command(visible_alias = "b")]
    Build,

    /// Assemble gallery data from an existing dist/
    #[command(visible_alias = "g")]
    Gallery,
}

impl Cli {
    /// The subcommand to run; a bare invocation builds.
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Build)
    }
}

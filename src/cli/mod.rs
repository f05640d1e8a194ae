//! Command-line interface module.

mod args;
pub mod build;
pub mod gallery;

pub use args::{Cli, Commands};

//! Configuration section definitions.
//!
//! Each module corresponds to a section in `iconforge.toml`:
//!
//! | Module  | TOML Section | Purpose                              |
//! |---------|--------------|--------------------------------------|
//! | `build` | `[build]`    | Attribute cleaning, name suffixes    |
//! | `paths` | `[paths]`    | Source, dist and gallery directories |

mod build;
mod paths;

pub use build::BuildSectionConfig;
pub use paths::PathsConfig;

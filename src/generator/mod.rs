//! Output generation for the `dist/` tree.
//!
//! | Module   | Output                                                 |
//! |----------|--------------------------------------------------------|
//! | `svg`    | `monochrome/<category>/<icon>.svg`, `color/<icon>.svg` |
//! | `module` | `monochrome/**/index.js`, `monochrome/**/index.d.ts`   |
//! | `index`  | `index.js`, `index.d.ts`                               |

pub mod index;
pub mod js;
pub mod module;
pub mod svg;

/// First line of every generated root index file.
pub const AUTO_GENERATED_BANNER: &str = "/** AUTO-GENERATED FILE - DO NOT EDIT **/";

//! Icon validation errors.

use thiserror::Error;

/// Fatal problems found while scanning icon sources.
///
/// Every variant aborts the whole build.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IconError {
    #[error("name `{0}` contains forbidden characters")]
    InvalidName(String),

    #[error(
        "icon `{name}` in category `{category}` already exists in `{existing}`, icon names must be unique"
    )]
    DuplicateName {
        name: String,
        category: String,
        existing: String,
    },

    #[error(
        "`{name}` and `{existing}` both generate the identifier `{identifier}`, rename one of them"
    )]
    IdentifierCollision {
        identifier: String,
        name: String,
        existing: String,
    },
}

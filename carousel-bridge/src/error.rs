use std::num::ParseIntError;

use thiserror::Error;

/// Errors originating from the carousel bridge.
///
/// None of these reach the render path: the control logs them and falls back
/// to defaults. They are returned only by the strict entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error("command string is empty")]
    EmptyCommand,

    #[error("input color string is in non valid format")]
    InvalidColorString,

    #[error("parsing color string to argb error: {0}")]
    ParsingColorString(#[from] ParseIntError),

    #[error("attributes json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("attributes payload must be a json object")]
    NotAnObject,
}

/// Convenient result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

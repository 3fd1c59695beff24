//! Error types for parsing demo settings
//!
//! Settings arrive as strings (environment variables, persisted values) and
//! are parsed into the strongly typed position enums.

use thiserror::Error;

/// Errors produced while turning strings into demo settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of the six anchor positions
    #[error("Unknown anchor position: {0}")]
    UnknownAnchorPosition(String),

    /// Neither `left` nor `right`
    #[error("Unknown submenu side: {0}")]
    UnknownSubmenuSide(String),

    /// Not a valid boolean flag
    #[error("Invalid flag: {0}")]
    InvalidFlag(String),

    /// Not a valid number, or out of range
    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

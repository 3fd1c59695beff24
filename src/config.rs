//! Application configuration
//!
//! Startup settings read from environment variables with sensible defaults.
//! Invalid values are logged and replaced by the default; they never stop
//! the application from starting.

use std::env;

use crate::error::ParseError;
use crate::state::menu::DEFAULT_MENU_DEPTH;
use crate::state::{AnchorPosition, SubmenuSide};

/// Deepest menu the demo will generate
const MAX_MENU_DEPTH: usize = 8;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial anchor position; overrides the remembered one when set
    pub position: Option<AnchorPosition>,
    /// Initial submenu side; overrides the remembered one when set
    pub submenu_position: Option<SubmenuSide>,
    /// Whether the dropdown shows a search input
    pub search_input: bool,
    /// Recursion depth of the generated submenus
    pub menu_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: None,
            submenu_position: None,
            search_input: true,
            menu_depth: DEFAULT_MENU_DEPTH,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            position: read("DROPDOWN_POSITION", &lookup, |v| v.parse::<AnchorPosition>().map(Some), None),
            submenu_position: read(
                "DROPDOWN_SUBMENU_SIDE",
                &lookup,
                |v| v.parse::<SubmenuSide>().map(Some),
                None,
            ),
            search_input: read("DROPDOWN_SEARCH", &lookup, parse_flag, defaults.search_input),
            menu_depth: read(
                "DEMO_MENU_DEPTH",
                &lookup,
                |v| parse_depth("DEMO_MENU_DEPTH", v),
                defaults.menu_depth,
            ),
        }
    }
}

/// Read and parse one variable, falling back to `default` when unset or invalid
fn read<T, F, P>(key: &str, lookup: &F, parse: P, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    P: FnOnce(&str) -> Result<T, ParseError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match parse(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "Ignoring invalid configuration value");
            default
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ParseError::InvalidFlag(value.to_string())),
    }
}

fn parse_depth(key: &'static str, value: &str) -> Result<usize, ParseError> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|depth| (1..=MAX_MENU_DEPTH).contains(depth))
        .ok_or_else(|| ParseError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}

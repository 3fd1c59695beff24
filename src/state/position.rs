// Dropdown placement values
// Anchor position of the popup and the side submenus fly out to

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Where the dropdown popup opens relative to its trigger button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnchorPosition {
    #[default]
    BottomLeft,
    BottomRight,
    BottomCenter,
    TopLeft,
    TopRight,
    TopCenter,
}

impl AnchorPosition {
    /// All positions, in the order the page shows their buttons
    pub const ALL: [AnchorPosition; 6] = [
        AnchorPosition::BottomLeft,
        AnchorPosition::BottomRight,
        AnchorPosition::BottomCenter,
        AnchorPosition::TopLeft,
        AnchorPosition::TopRight,
        AnchorPosition::TopCenter,
    ];

    /// Canonical kebab-case name, e.g. `bottom-left`
    pub fn as_str(self) -> &'static str {
        match self {
            AnchorPosition::BottomLeft => "bottom-left",
            AnchorPosition::BottomRight => "bottom-right",
            AnchorPosition::BottomCenter => "bottom-center",
            AnchorPosition::TopLeft => "top-left",
            AnchorPosition::TopRight => "top-right",
            AnchorPosition::TopCenter => "top-center",
        }
    }

    /// Button caption: the name with its dash replaced by a space
    pub fn caption(self) -> String {
        self.as_str().replacen('-', " ", 1)
    }

    /// True when the popup opens above the trigger
    pub fn opens_upward(self) -> bool {
        matches!(
            self,
            AnchorPosition::TopLeft | AnchorPosition::TopRight | AnchorPosition::TopCenter
        )
    }
}

impl fmt::Display for AnchorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        AnchorPosition::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownAnchorPosition(s.to_string()))
    }
}

/// Side on which nested submenus appear relative to their parent item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubmenuSide {
    Left,
    #[default]
    Right,
}

impl SubmenuSide {
    pub const ALL: [SubmenuSide; 2] = [SubmenuSide::Left, SubmenuSide::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            SubmenuSide::Left => "left",
            SubmenuSide::Right => "right",
        }
    }

    /// Button caption with the first letter capitalized
    pub fn caption(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Arrow hinting where a submenu will open
    pub fn arrow(self) -> &'static str {
        match self {
            SubmenuSide::Left => "◀",
            SubmenuSide::Right => "▶",
        }
    }
}

impl fmt::Display for SubmenuSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmenuSide {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(SubmenuSide::Left),
            "right" => Ok(SubmenuSide::Right),
            _ => Err(ParseError::UnknownSubmenuSide(s.to_string())),
        }
    }
}

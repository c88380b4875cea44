//! Hook edges: the named side of a box used as an alignment reference
//!
//! A hook is either a pure side (`top`, `bottom`, `left`, `right`) or a corner
//! (`top-left`, ...). Corners match the rules of both of their sides, so
//! `bottom-right` adds the height *and* the width of the box it hooks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a hook name is not one of the eight known edges
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown hook edge '{0}', expected top, bottom, left, right or a corner such as bottom-right")]
pub struct ParseHookError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Hook {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Hook {
    pub const ALL: [Hook; 8] = [
        Hook::Top,
        Hook::Bottom,
        Hook::Left,
        Hook::Right,
        Hook::TopLeft,
        Hook::TopRight,
        Hook::BottomLeft,
        Hook::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hook::Top => "top",
            Hook::Bottom => "bottom",
            Hook::Left => "left",
            Hook::Right => "right",
            Hook::TopLeft => "top-left",
            Hook::TopRight => "top-right",
            Hook::BottomLeft => "bottom-left",
            Hook::BottomRight => "bottom-right",
        }
    }

    pub fn has_top(&self) -> bool {
        matches!(self, Hook::Top | Hook::TopLeft | Hook::TopRight)
    }

    pub fn has_bottom(&self) -> bool {
        matches!(self, Hook::Bottom | Hook::BottomLeft | Hook::BottomRight)
    }

    pub fn has_left(&self) -> bool {
        matches!(self, Hook::Left | Hook::TopLeft | Hook::BottomLeft)
    }

    pub fn has_right(&self) -> bool {
        matches!(self, Hook::Right | Hook::TopRight | Hook::BottomRight)
    }

    /// Pure `top`/`bottom`: the box is centered horizontally on this edge
    pub fn centers_horizontally(&self) -> bool {
        matches!(self, Hook::Top | Hook::Bottom)
    }

    /// Pure `left`/`right`: the box is centered vertically on this edge
    pub fn centers_vertically(&self) -> bool {
        matches!(self, Hook::Left | Hook::Right)
    }

    /// Swap right and left, leaving pure vertical edges untouched
    pub fn flip_horizontal(self) -> Self {
        match self {
            Hook::Left => Hook::Right,
            Hook::Right => Hook::Left,
            Hook::TopLeft => Hook::TopRight,
            Hook::TopRight => Hook::TopLeft,
            Hook::BottomLeft => Hook::BottomRight,
            Hook::BottomRight => Hook::BottomLeft,
            other => other,
        }
    }

    /// Swap top and bottom, leaving pure horizontal edges untouched
    pub fn flip_vertical(self) -> Self {
        match self {
            Hook::Top => Hook::Bottom,
            Hook::Bottom => Hook::Top,
            Hook::TopLeft => Hook::BottomLeft,
            Hook::BottomLeft => Hook::TopLeft,
            Hook::TopRight => Hook::BottomRight,
            Hook::BottomRight => Hook::TopRight,
            other => other,
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hook {
    type Err = ParseHookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Separators are optional, so "top-right", "topRight" and "TOPRIGHT"
        // all name the same edge
        let joined: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let hook = match joined.as_str() {
            "top" => Hook::Top,
            "bottom" => Hook::Bottom,
            "left" => Hook::Left,
            "right" => Hook::Right,
            "topleft" | "lefttop" => Hook::TopLeft,
            "topright" | "righttop" => Hook::TopRight,
            "bottomleft" | "leftbottom" => Hook::BottomLeft,
            "bottomright" | "rightbottom" => Hook::BottomRight,
            _ => return Err(ParseHookError(s.to_string())),
        };

        Ok(hook)
    }
}

impl TryFrom<String> for Hook {
    type Error = ParseHookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hook> for String {
    fn from(hook: Hook) -> Self {
        hook.as_str().to_string()
    }
}

/// Which edge of the target the tip attaches to, and by which of its own edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookPair {
    pub target: Hook,
    pub tip: Hook,
}

impl HookPair {
    pub fn new(target: Hook, tip: Hook) -> Self {
        Self { target, tip }
    }

    pub fn flip_horizontal(self) -> Self {
        Self {
            target: self.target.flip_horizontal(),
            tip: self.tip.flip_horizontal(),
        }
    }

    pub fn flip_vertical(self) -> Self {
        Self {
            target: self.target.flip_vertical(),
            tip: self.tip.flip_vertical(),
        }
    }
}

impl Default for HookPair {
    fn default() -> Self {
        Self {
            target: Hook::Bottom,
            tip: Hook::Top,
        }
    }
}

//! Tooltip content and bookkeeping identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a registered target inside one widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target#{}", self.0)
    }
}

/// Identifies one started fade so a late completion can be matched to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FadeTicket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FadeDirection {
    In,
    Out,
}

/// Axes on which the placement was mirrored to stay inside the viewport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorFlags {
    pub horizontal: bool,
    pub vertical: bool,
}

impl MirrorFlags {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Tooltip text split into a title and an optional body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipText {
    pub title: String,
    pub body: Option<String>,
}

impl TooltipText {
    /// Split captured text on the first occurrence of `delimiter`.
    ///
    /// Everything after the first delimiter is the body, so `"a:b:c"` gives
    /// title `a` and body `b:c`. Text without the delimiter has no body.
    pub fn parse(raw: &str, delimiter: &str) -> Self {
        if delimiter.is_empty() {
            return Self {
                title: raw.to_string(),
                body: None,
            };
        }

        match raw.split_once(delimiter) {
            Some((title, body)) => Self {
                title: title.to_string(),
                body: Some(body.to_string()),
            },
            None => Self {
                title: raw.to_string(),
                body: None,
            },
        }
    }
}

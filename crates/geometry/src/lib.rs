//! Tooltip placement
//!
//! Pure geometry: `resolve` hooks a floating box onto an anchor, `mirror`
//! flips the hooks when the result leaves the viewport. Nothing in this crate
//! touches the DOM; callers measure sizes and apply the returned placement.

pub mod mirror;
pub mod resolver;

pub use mirror::{mirror, overflow, place, Placement};
pub use resolver::{resolve, Anchor};

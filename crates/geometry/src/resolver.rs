//! Hooking a floating box onto an anchor

use hovertips_shared::{HookPair, Offset, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// What the tooltip is positioned against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    /// Box of the hovered target in document coordinates
    Target(Rect),
    /// Last recorded pointer position; behaves like a zero-sized box
    Pointer(Point),
}

impl Anchor {
    /// Anchor on a target's document box, corrected for scrolled ancestors.
    ///
    /// `scrolled_ancestors` holds the scroll offset of every ancestor between
    /// the target and the document body; each one is subtracted.
    pub fn from_target(document_box: Rect, scrolled_ancestors: &[Offset]) -> Self {
        let mut origin = document_box.origin;
        for scroll in scrolled_ancestors {
            origin.x -= scroll.x;
            origin.y -= scroll.y;
        }
        Anchor::Target(Rect::at(origin, document_box.size))
    }

    pub fn rect(&self) -> Rect {
        match *self {
            Anchor::Target(rect) => rect,
            Anchor::Pointer(point) => Rect::at(point, Size::default()),
        }
    }
}

/// Integer halving, truncated toward zero
fn half(length: f64) -> f64 {
    (length / 2.0).trunc()
}

/// Compute the top-left corner of a floating box of size `floating` hooked
/// onto `anchor`.
///
/// The target edge moves the starting point onto the anchor (`bottom` adds the
/// anchor height, `right` its width, pure `top`/`bottom` center horizontally,
/// pure `left`/`right` center vertically). The tip edge applies the same rules
/// with the floating size subtracted. The offset is added last.
pub fn resolve(anchor: &Anchor, floating: Size, hook: HookPair, offset: Offset) -> Point {
    let target = anchor.rect();
    let mut position = target.origin;

    if hook.target.has_bottom() {
        position.y += target.size.height;
    }
    if hook.target.has_right() {
        position.x += target.size.width;
    }
    if hook.target.centers_horizontally() {
        position.x += half(target.size.width);
    }
    if hook.target.centers_vertically() {
        position.y += half(target.size.height);
    }

    if hook.tip.has_bottom() {
        position.y -= floating.height;
    }
    if hook.tip.has_right() {
        position.x -= floating.width;
    }
    if hook.tip.centers_horizontally() {
        position.x -= half(floating.width);
    }
    if hook.tip.centers_vertically() {
        position.y -= half(floating.height);
    }

    position.x += offset.x;
    position.y += offset.y;

    log::trace!(
        "resolved {} -> {} against {:?}: ({}, {})",
        hook.target,
        hook.tip,
        target,
        position.x,
        position.y
    );

    position
}

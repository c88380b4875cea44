//! Keeping the floating box inside the viewport
//!
//! When a placement overflows an axis the hooks are mirrored on that axis
//! (right/left or top/bottom), the offset component is negated and the
//! position is resolved again. Each axis is mirrored at most once, so a box
//! larger than the viewport settles instead of flipping back and forth.

use crate::resolver::{resolve, Anchor};
use hovertips_shared::{HookPair, MirrorFlags, Offset, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Upper bound on overflow checks per placement
const MAX_PASSES: usize = 2;

/// Final position together with the hooks and offset that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Point,
    pub hook: HookPair,
    pub offset: Offset,
    pub flags: MirrorFlags,
}

/// Axes on which a box of size `floating` at `position` leaves `viewport`
pub fn overflow(position: Point, floating: Size, viewport: Rect) -> MirrorFlags {
    let bounds = Rect::at(position, floating);
    MirrorFlags {
        horizontal: bounds.right() > viewport.right() || bounds.left() < viewport.left(),
        vertical: bounds.bottom() > viewport.bottom() || bounds.top() < viewport.top(),
    }
}

/// Mirror `candidate` (resolved from `hook` and `offset`) back into `viewport`
pub fn mirror(
    candidate: Point,
    anchor: &Anchor,
    floating: Size,
    hook: HookPair,
    offset: Offset,
    viewport: Rect,
) -> Placement {
    let mut placement = Placement {
        position: candidate,
        hook,
        offset,
        flags: MirrorFlags::default(),
    };

    for _ in 0..MAX_PASSES {
        let overflowing = overflow(placement.position, floating, viewport);
        let horizontal = overflowing.horizontal && !placement.flags.horizontal;
        let vertical = overflowing.vertical && !placement.flags.vertical;

        if !horizontal && !vertical {
            break;
        }

        if horizontal {
            placement.hook = placement.hook.flip_horizontal();
            placement.offset.x = -placement.offset.x;
            placement.flags.horizontal = true;
        }
        if vertical {
            placement.hook = placement.hook.flip_vertical();
            placement.offset.y = -placement.offset.y;
            placement.flags.vertical = true;
        }

        placement.position = resolve(anchor, floating, placement.hook, placement.offset);
    }

    if placement.flags.any() {
        log::trace!(
            "mirrored {:?} into {:?}: {} -> {}",
            placement.flags,
            viewport,
            placement.hook.target,
            placement.hook.tip
        );
    }

    placement
}

/// Resolve and mirror in one step
pub fn place(
    anchor: &Anchor,
    floating: Size,
    hook: HookPair,
    offset: Offset,
    viewport: Rect,
) -> Placement {
    let candidate = resolve(anchor, floating, hook, offset);
    mirror(candidate, anchor, floating, hook, offset, viewport)
}

//! Events fed into the interaction controller by the host environment

use crate::{FadeTicket, Point, TargetId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipEvent {
    /// The pointer entered a registered target
    PointerEnter(TargetId),
    /// The pointer left a registered target
    PointerLeave(TargetId),
    /// The pointer moved over the document body (page coordinates)
    PointerMove(Point),
    /// The debounce timer started for this target fired
    ShowDelayElapsed(TargetId),
    /// The image referenced by this target finished loading
    ImageLoaded(TargetId),
    /// A fade ran to completion without being cancelled
    FadeFinished(FadeTicket),
}

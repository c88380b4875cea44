//! Hover state shared by all targets of one widget
//!
//! There is a single outstanding piece of pending work per widget: either
//! the debounce timer or an image load wait. Arming new work always cancels
//! the old one first, so entering a second target before the first one's
//! delay elapsed starves the first show.
//!
//! An image that does not gate the show is tracked separately: the text is
//! already visible and the image is attached when its load event arrives.

use crate::host::Host;
use hovertips_shared::TargetId;

/// Coarse state reported for diagnostics and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Pending(TargetId),
    Visible(TargetId),
}

enum Pending<H: Host> {
    Nothing,
    Delay {
        target: TargetId,
        timer: H::Timer,
    },
    ImageLoad {
        target: TargetId,
        image: H::Element,
        listener: H::LoadListener,
    },
}

struct LateImage<H: Host> {
    target: TargetId,
    image: H::Element,
    listener: H::LoadListener,
}

pub struct HoverState<H: Host> {
    pending: Pending<H>,
    late_image: Option<LateImage<H>>,
    shown: Option<TargetId>,
}

impl<H: Host> Default for HoverState<H> {
    fn default() -> Self {
        Self {
            pending: Pending::Nothing,
            late_image: None,
            shown: None,
        }
    }
}

impl<H: Host> HoverState<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        if let Some(target) = self.pending_target() {
            InteractionState::Pending(target)
        } else if let Some(target) = self.shown {
            InteractionState::Visible(target)
        } else {
            InteractionState::Idle
        }
    }

    pub fn pending_target(&self) -> Option<TargetId> {
        match &self.pending {
            Pending::Nothing => None,
            Pending::Delay { target, .. } | Pending::ImageLoad { target, .. } => Some(*target),
        }
    }

    /// Cancel the timer or detach the image load listener, whichever is armed
    pub fn cancel_pending(&mut self, host: &mut H) {
        match std::mem::replace(&mut self.pending, Pending::Nothing) {
            Pending::Nothing => {}
            Pending::Delay { target, timer } => {
                log::trace!("cancelled show delay for {}", target);
                host.cancel_timer(timer);
            }
            Pending::ImageLoad {
                target, listener, ..
            } => {
                log::trace!("detached image load for {}", target);
                host.detach_load(listener);
            }
        }
    }

    /// Cancel pending work, then start the debounce timer for `target`
    pub fn arm_delay(&mut self, host: &mut H, target: TargetId, delay_ms: u32) {
        self.cancel_pending(host);
        let timer = host.schedule_show(target, delay_ms);
        self.pending = Pending::Delay { target, timer };
    }

    /// Cancel pending work, then wait for `image` to load before showing
    pub fn await_image(&mut self, host: &mut H, target: TargetId, image: H::Element) {
        self.cancel_pending(host);
        let listener = host.listen_load(&image, target);
        self.pending = Pending::ImageLoad {
            target,
            image,
            listener,
        };
    }

    /// Consume the timer if it belongs to `target`; stale timers return false
    pub fn take_elapsed(&mut self, target: TargetId) -> bool {
        if !matches!(&self.pending, Pending::Delay { target: armed, .. } if *armed == target) {
            return false;
        }
        self.pending = Pending::Nothing;
        true
    }

    /// Consume the image wait if it belongs to `target`, returning the image
    pub fn take_loaded(&mut self, target: TargetId) -> Option<H::Element> {
        if !matches!(&self.pending, Pending::ImageLoad { target: armed, .. } if *armed == target) {
            return None;
        }
        match std::mem::replace(&mut self.pending, Pending::Nothing) {
            Pending::ImageLoad { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Wait for the image of an already shown `target`, replacing any
    /// earlier wait
    pub fn await_late_image(&mut self, host: &mut H, target: TargetId, image: H::Element) {
        self.cancel_late_image(host);
        let listener = host.listen_load(&image, target);
        self.late_image = Some(LateImage {
            target,
            image,
            listener,
        });
    }

    /// Consume the late image wait if it belongs to `target`
    pub fn take_late_image(&mut self, host: &mut H, target: TargetId) -> Option<H::Element> {
        if !self.late_image.as_ref().is_some_and(|late| late.target == target) {
            return None;
        }
        let late = self.late_image.take()?;
        host.detach_load(late.listener);
        Some(late.image)
    }

    pub fn cancel_late_image(&mut self, host: &mut H) {
        if let Some(late) = self.late_image.take() {
            log::trace!("detached late image load for {}", late.target);
            host.detach_load(late.listener);
        }
    }

    pub fn shown(&self) -> Option<TargetId> {
        self.shown
    }

    pub fn set_shown(&mut self, target: TargetId) {
        self.shown = Some(target);
    }

    pub fn take_shown(&mut self) -> Option<TargetId> {
        self.shown.take()
    }
}

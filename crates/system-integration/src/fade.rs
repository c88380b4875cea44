//! Serializes fades on the shared surface
//!
//! At most one fade is current. Starting a fade cancels the current one
//! first, and a completion only counts when its ticket is still current, so a
//! fade-out that was overtaken by a show can never hide the surface later.

use crate::host::FadeHandle;
use hovertips_shared::{FadeDirection, FadeTicket};

struct RunningFade<F> {
    ticket: FadeTicket,
    direction: FadeDirection,
    handle: F,
}

pub struct FadeCoordinator<F: FadeHandle> {
    current: Option<RunningFade<F>>,
    next_ticket: u64,
}

impl<F: FadeHandle> Default for FadeCoordinator<F> {
    fn default() -> Self {
        Self {
            current: None,
            next_ticket: 0,
        }
    }
}

impl<F: FadeHandle> FadeCoordinator<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the current fade, then start a new one through `begin`
    pub fn start(
        &mut self,
        direction: FadeDirection,
        begin: impl FnOnce(FadeTicket) -> F,
    ) -> FadeTicket {
        self.cancel();

        let ticket = FadeTicket(self.next_ticket);
        self.next_ticket += 1;

        let handle = begin(ticket);
        self.current = Some(RunningFade {
            ticket,
            direction,
            handle,
        });
        ticket
    }

    /// Cancel the current fade, returning its direction
    pub fn cancel(&mut self) -> Option<FadeDirection> {
        let mut running = self.current.take()?;
        running.handle.cancel();
        log::trace!("cancelled fade {:?} ({:?})", running.ticket, running.direction);
        Some(running.direction)
    }

    /// Retire `ticket` if it is current; stale tickets return `None`
    pub fn finish(&mut self, ticket: FadeTicket) -> Option<FadeDirection> {
        let is_current = self
            .current
            .as_ref()
            .is_some_and(|running| running.ticket == ticket);
        if !is_current {
            return None;
        }
        self.current.take().map(|running| running.direction)
    }

    pub fn current(&self) -> Option<(FadeTicket, FadeDirection)> {
        self.current
            .as_ref()
            .map(|running| (running.ticket, running.direction))
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }
}

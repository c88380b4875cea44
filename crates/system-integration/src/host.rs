//! Host environment seams
//!
//! The controller never talks to a browser directly. `Dom` covers element
//! queries, mutation and measurement; `EventSource` installs listeners that
//! later come back as [`TooltipEvent`](hovertips_shared::TooltipEvent)s;
//! `Scheduler` owns the debounce timer and `Animator` the fades.

use hovertips_shared::{
    FadeDirection, FadeTicket, HoverTipsResult, Offset, Point, Rect, Size, TargetId,
};
use std::fmt;

/// Element tree queries, mutation and measurement
pub trait Dom {
    /// Handle to an element; equality is element identity
    type Element: Clone + PartialEq + fmt::Debug;

    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    fn create_element(&self, tag: &str, class: &str) -> HoverTipsResult<Self::Element>;
    fn append_child(&self, parent: &Self::Element, child: &Self::Element);
    fn append_to_body(&self, element: &Self::Element) -> HoverTipsResult<()>;
    fn remove(&self, element: &Self::Element);

    fn set_text(&self, element: &Self::Element, text: &str);
    fn set_displayed(&self, element: &Self::Element, displayed: bool);
    fn is_displayed(&self, element: &Self::Element) -> bool;
    fn set_opacity(&self, element: &Self::Element, opacity: f64);
    fn opacity(&self, element: &Self::Element) -> f64;
    fn set_class(&self, element: &Self::Element, class: &str, enabled: bool);

    /// Take the element out of flow so it can be placed with `move_to`
    fn set_absolute(&self, element: &Self::Element);
    fn move_to(&self, element: &Self::Element, position: Point);

    /// Rendered width and height; only meaningful while displayed
    fn rendered_size(&self, element: &Self::Element) -> Size;
    /// Cumulative document offset plus size, `None` when it cannot be measured
    fn document_box(&self, element: &Self::Element) -> Option<Rect>;
    /// Scroll offsets of the ancestors between `element` and the body
    fn scrolled_ancestors(&self, element: &Self::Element) -> Vec<Offset>;
    /// Visible part of the document: scroll offset plus viewport size
    fn viewport(&self) -> Rect;
}

/// Listener installation
pub trait EventSource: Dom {
    /// Keeps an image load listener attached until detached or dropped
    type LoadListener;

    /// Report pointer enter/leave on `element` as events for `target`.
    /// Returns false when the listeners could not be attached.
    fn listen_hover(&mut self, element: &Self::Element, target: TargetId) -> bool;
    /// Report pointer moves over the document body
    fn track_pointer(&mut self);
    fn listen_load(&mut self, image: &Self::Element, target: TargetId) -> Self::LoadListener;
    fn detach_load(&mut self, listener: Self::LoadListener);
}

/// Debounce timer
pub trait Scheduler {
    type Timer;

    /// Fire `ShowDelayElapsed(target)` after `delay_ms`
    fn schedule_show(&mut self, target: TargetId, delay_ms: u32) -> Self::Timer;
    fn cancel_timer(&mut self, timer: Self::Timer);
}

/// A running fade
pub trait FadeHandle {
    /// Stop the fade where it is; no completion is reported afterwards
    fn cancel(&mut self);
}

/// Opacity transitions
pub trait Animator: Dom {
    type Fade: FadeHandle;

    /// Fade every layer together. Completion is reported as
    /// `FadeFinished(ticket)` unless the returned handle is cancelled first.
    fn fade(
        &mut self,
        layers: &[Self::Element],
        direction: FadeDirection,
        duration_ms: u32,
        ticket: FadeTicket,
    ) -> Self::Fade;
}

/// Everything the controller needs from its environment
pub trait Host: Dom + EventSource + Scheduler + Animator {}

impl<T: Dom + EventSource + Scheduler + Animator> Host for T {}

/// Extra visual layer that follows the tooltip surface (e.g. a drop shadow)
pub trait Decoration<H: Dom> {
    /// Elements shown, hidden and faded together with the surface
    fn layers(&self) -> Vec<H::Element>;
    /// Called after every reposition with the surface's document frame
    fn sync(&mut self, dom: &H, frame: Rect);
}

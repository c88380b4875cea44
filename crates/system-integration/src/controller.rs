//! Interaction controller: one widget instance
//!
//! Owns the target registry, the shared surface, the hover state and the
//! fade coordinator, and advances them from [`TooltipEvent`]s:
//!
//! ```text
//! Idle --enter--> Pending(timer) --elapsed--> [image load] --> Visible
//!   ^                  |                                         |
//!   +------leave-------+-----------------leave-------------------+
//! ```

use crate::fade::FadeCoordinator;
use crate::host::{Decoration, Host};
use crate::interaction::{HoverState, InteractionState};
use crate::registry::{ScanSummary, TargetRegistry};
use crate::surface::TooltipSurface;
use crate::Result;
use hovertips_config::TooltipConfig;
use hovertips_geometry::{place, Anchor, Placement};
use hovertips_shared::{FadeDirection, FadeTicket, Point, Rect, TargetId, TooltipEvent, TooltipText};

pub struct TooltipController<H: Host> {
    host: H,
    config: TooltipConfig,
    registry: TargetRegistry<H::Element>,
    surface: TooltipSurface<H::Element>,
    hover: HoverState<H>,
    fades: FadeCoordinator<H::Fade>,
    pointer: Option<Point>,
    decoration: Option<Box<dyn Decoration<H>>>,
}

impl<H: Host> TooltipController<H> {
    /// Register the targets matched by `selector`, then build the surface
    pub fn new(mut host: H, selector: &str, config: TooltipConfig) -> Result<Self> {
        let mut registry = TargetRegistry::new(selector);
        let summary = registry.scan(&mut host, &config.image_attribute);

        let surface = TooltipSurface::build(&host, &config)?;

        if !config.fixed {
            host.track_pointer();
        }

        log::info!(
            "Tooltips attached to {} target(s) matching '{}' ({} mode)",
            summary.total,
            selector,
            if config.fixed { "fixed" } else { "follow-mouse" }
        );

        Ok(Self {
            host,
            config,
            registry,
            surface,
            hover: HoverState::new(),
            fades: FadeCoordinator::new(),
            pointer: None,
            decoration: None,
        })
    }

    /// Re-scan the selector; known targets keep their listeners
    pub fn reload(&mut self) -> ScanSummary {
        let summary = self.registry.scan(&mut self.host, &self.config.image_attribute);
        log::info!(
            "Reloaded tooltips: {} target(s), {} new, {} recaptured, {} dropped",
            summary.total,
            summary.discovered,
            summary.recaptured,
            summary.dropped
        );
        summary
    }

    /// The floating container, for external decoration
    pub fn surface_element(&self) -> &H::Element {
        self.surface.container()
    }

    /// Add a layer that follows the surface and shares its fades
    pub fn attach_decoration(&mut self, decoration: Box<dyn Decoration<H>>) {
        let container = self.surface.container();
        let displayed = self.host.is_displayed(container);
        let opacity = self.host.opacity(container);
        for layer in decoration.layers() {
            self.host.set_displayed(&layer, displayed);
            self.host.set_opacity(&layer, opacity);
        }

        self.decoration = Some(decoration);
        if self.hover.shown().is_some() {
            self.reposition();
        }
    }

    pub fn handle_event(&mut self, event: TooltipEvent) {
        match event {
            TooltipEvent::PointerEnter(target) => self.pointer_enter(target),
            TooltipEvent::PointerLeave(target) => self.pointer_leave(target),
            TooltipEvent::PointerMove(position) => self.pointer_move(position),
            TooltipEvent::ShowDelayElapsed(target) => self.show_delay_elapsed(target),
            TooltipEvent::ImageLoaded(target) => self.image_loaded(target),
            TooltipEvent::FadeFinished(ticket) => self.fade_finished(ticket),
        }
    }

    pub fn state(&self) -> InteractionState {
        self.hover.state()
    }

    pub fn target_count(&self) -> usize {
        self.registry.len()
    }

    pub fn registry(&self) -> &TargetRegistry<H::Element> {
        &self.registry
    }

    pub fn surface(&self) -> &TooltipSurface<H::Element> {
        &self.surface
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn pointer_enter(&mut self, target: TargetId) {
        if !self.registry.contains(target) {
            log::trace!("ignoring enter on unregistered {}", target);
            return;
        }
        self.hover
            .arm_delay(&mut self.host, target, self.config.show_delay_ms);
    }

    /// Leaves are honoured for dropped targets too, so a tooltip shown for
    /// an element that a reload removed can still be hidden
    fn pointer_leave(&mut self, target: TargetId) {
        if !self.registry.contains(target) {
            log::trace!("leave on unregistered {}", target);
        }
        self.hover.cancel_pending(&mut self.host);
        self.hover.cancel_late_image(&mut self.host);
        if let Some(shown) = self.hover.take_shown() {
            log::debug!("hiding tooltip for {}", shown);
            self.hide();
        }
    }

    fn pointer_move(&mut self, position: Point) {
        self.pointer = Some(position);
        if !self.config.fixed && self.hover.shown().is_some() {
            self.reposition();
        }
    }

    fn show_delay_elapsed(&mut self, target: TargetId) {
        if !self.hover.take_elapsed(target) {
            log::trace!("stale show delay for {}", target);
            return;
        }
        let Some(entry) = self.registry.get(target) else {
            return;
        };

        let text = TooltipText::parse(&entry.text, &self.config.delimiter);
        let image = entry
            .image
            .clone()
            .and_then(|src| self.create_image(&src));

        match image {
            Some(image) if self.config.preload_images => {
                log::debug!("waiting for image of {} before showing", target);
                self.hover.await_image(&mut self.host, target, image);
            }
            Some(image) => {
                // Text first; the image joins once it has dimensions
                self.present(target, text, None);
                self.hover.await_late_image(&mut self.host, target, image);
            }
            None => self.present(target, text, None),
        }
    }

    fn image_loaded(&mut self, target: TargetId) {
        if let Some(image) = self.hover.take_loaded(target) {
            let Some(entry) = self.registry.get(target) else {
                return;
            };
            let text = TooltipText::parse(&entry.text, &self.config.delimiter);
            self.present(target, text, Some(image));
            return;
        }

        if self.hover.shown() == Some(target) {
            if let Some(image) = self.hover.take_late_image(&mut self.host, target) {
                log::debug!("image for {} arrived, re-placing", target);
                self.surface.attach_image(&self.host, image);
                self.reposition();
                return;
            }
        }
        log::trace!("stale image load for {}", target);
    }

    fn fade_finished(&mut self, ticket: FadeTicket) {
        match self.fades.finish(ticket) {
            Some(FadeDirection::In) => self.set_layers_opacity(1.0),
            Some(FadeDirection::Out) => self.set_layers_displayed(false),
            None => log::trace!("stale fade completion {:?}", ticket),
        }
    }

    fn create_image(&self, src: &str) -> Option<H::Element> {
        match self.host.create_element("img", &self.config.classes.image) {
            Ok(image) => {
                self.host.set_attribute(&image, "src", src);
                Some(image)
            }
            Err(e) => {
                log::warn!("Failed to create tooltip image: {}", e);
                None
            }
        }
    }

    fn present(&mut self, target: TargetId, text: TooltipText, image: Option<H::Element>) {
        log::debug!("showing tooltip for {}: {:?}", target, text.title);

        self.hover.cancel_late_image(&mut self.host);
        self.surface.fill(&self.host, &text, image);
        self.hover.set_shown(target);

        // A fade-out in flight continues from its current opacity; otherwise
        // start invisible but laid out, so the placement can measure it
        let overtaken = self.fades.cancel().is_some();
        if !(self.config.fade && overtaken) {
            self.set_layers_opacity(0.0);
        }
        self.set_layers_displayed(true);
        self.reposition();

        if self.config.fade {
            let layers = self.layers();
            let duration = self.config.fade_duration_ms;
            let host = &mut self.host;
            self.fades.start(FadeDirection::In, |ticket| {
                host.fade(&layers, FadeDirection::In, duration, ticket)
            });
        } else {
            self.set_layers_opacity(1.0);
        }
    }

    fn hide(&mut self) {
        if self.config.fade {
            let layers = self.layers();
            let duration = self.config.fade_duration_ms;
            let host = &mut self.host;
            self.fades.start(FadeDirection::Out, |ticket| {
                host.fade(&layers, FadeDirection::Out, duration, ticket)
            });
        } else {
            self.fades.cancel();
            self.set_layers_displayed(false);
        }
    }

    /// Anchor for the shown target, or `None` when it cannot be resolved
    fn anchor(&self) -> Option<Anchor> {
        if self.config.fixed {
            let entry = self.registry.get(self.hover.shown()?)?;
            let document_box = self.host.document_box(&entry.element)?;
            let scrolled = self.host.scrolled_ancestors(&entry.element);
            Some(Anchor::from_target(document_box, &scrolled))
        } else {
            self.pointer.map(Anchor::Pointer)
        }
    }

    /// Place the surface against the current anchor; a no-op without one
    fn reposition(&mut self) -> Option<Placement> {
        let anchor = self.anchor()?;
        let viewport = self.host.viewport();
        let config = &self.config;
        let host = &self.host;
        let surface = &self.surface;

        let (placement, size) = surface.with_measured_size(host, |size| {
            let placement = place(&anchor, size, config.hook, config.offset, viewport);
            surface.apply_placement(host, &placement, &config.classes);
            (placement, size)
        });

        if let Some(decoration) = self.decoration.as_mut() {
            decoration.sync(&self.host, Rect::at(placement.position, size));
        }
        Some(placement)
    }

    fn layers(&self) -> Vec<H::Element> {
        let mut layers = vec![self.surface.container().clone()];
        if let Some(decoration) = &self.decoration {
            layers.extend(decoration.layers());
        }
        layers
    }

    fn set_layers_opacity(&self, opacity: f64) {
        for layer in self.layers() {
            self.host.set_opacity(&layer, opacity);
        }
    }

    fn set_layers_displayed(&self, displayed: bool) {
        for layer in self.layers() {
            self.host.set_displayed(&layer, displayed);
        }
    }
}

//! Browser host backed by `web-sys`
//!
//! DOM listeners only capture the instance id and the event to report; the
//! closures are owned here (or by the returned handles) for as long as the
//! listener must stay attached.

use hovertips_integration::{Animator, Dom, EventSource, FadeHandle, Scheduler};
use hovertips_shared::{
    FadeDirection, FadeTicket, HoverTipsError, HoverTipsResult, Offset, Point, Rect, Size,
    TargetId, TooltipEvent,
};
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Animation, Document, Element, HtmlElement, HtmlImageElement, MouseEvent, Window};

use crate::instance_manager::InstanceManager;

type Listener = Closure<dyn FnMut(web_sys::Event)>;

pub struct WebHost {
    instance_id: Uuid,
    window: Window,
    document: Document,
    listeners: Vec<Listener>,
}

/// Pending show delay
pub struct WebTimer {
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

/// Attached `onload` and `onerror` handlers of a tooltip image. A broken
/// image settles like a loaded one so the text is not held back.
pub struct WebLoadListener {
    image: HtmlImageElement,
    _on_load: Closure<dyn FnMut()>,
}

/// Running opacity animation over every tooltip layer
pub struct WebFade {
    window: Window,
    layers: Vec<Element>,
    animations: Vec<Animation>,
    _on_finish: Option<Closure<dyn FnMut()>>,
}

impl WebHost {
    pub fn new(instance_id: Uuid) -> HoverTipsResult<Self> {
        let window = web_sys::window().ok_or_else(|| HoverTipsError::DomUnavailable {
            message: "No window object".to_string(),
        })?;
        let document = window.document().ok_or_else(|| HoverTipsError::DomUnavailable {
            message: "No document object".to_string(),
        })?;

        Ok(Self {
            instance_id,
            window,
            document,
            listeners: Vec::new(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Attach and keep `listener`; false when the browser refused it
    fn listen(&mut self, target: &web_sys::EventTarget, kind: &str, listener: Listener) -> bool {
        if let Err(e) =
            target.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
        {
            log::warn!("Failed to add {} listener: {:?}", kind, e);
            return false;
        }
        self.listeners.push(listener);
        true
    }

    fn report(&self, event: TooltipEvent) -> Listener {
        let instance_id = self.instance_id;
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            InstanceManager::dispatch(instance_id, event);
        }) as Box<dyn FnMut(web_sys::Event)>)
    }
}

fn style_of(element: &Element) -> Option<web_sys::CssStyleDeclaration> {
    element.dyn_ref::<HtmlElement>().map(|html| html.style())
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(style) = style_of(element) {
        if let Err(e) = style.set_property(property, value) {
            log::warn!("Failed to set {}: {:?}", property, e);
        }
    }
}

fn style_value(element: &Element, property: &str) -> String {
    style_of(element)
        .and_then(|style| style.get_property_value(property).ok())
        .unwrap_or_default()
}

fn opacity_keyframes(from: f64, to: f64) -> js_sys::Object {
    let frames = js_sys::Array::new();
    for opacity in [from, to] {
        let frame = js_sys::Object::new();
        // Setting a property on a fresh plain object cannot fail
        let _ = js_sys::Reflect::set(&frame, &"opacity".into(), &JsValue::from_f64(opacity));
        frames.push(&frame);
    }
    frames.into()
}

impl Dom for WebHost {
    type Element = Element;

    fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("Invalid selector '{}': {:?}", selector, e);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        if let Err(e) = element.set_attribute(name, value) {
            log::warn!("Failed to set attribute {}: {:?}", name, e);
        }
    }

    fn create_element(&self, tag: &str, class: &str) -> HoverTipsResult<Element> {
        let element =
            self.document
                .create_element(tag)
                .map_err(|e| HoverTipsError::JsInterop {
                    message: format!("Failed to create <{}>: {:?}", tag, e),
                })?;
        element.set_class_name(class);
        Ok(element)
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        if let Err(e) = parent.append_child(child) {
            log::warn!("Failed to append child: {:?}", e);
        }
    }

    fn append_to_body(&self, element: &Element) -> HoverTipsResult<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| HoverTipsError::DomUnavailable {
                message: "No document body".to_string(),
            })?;
        body.append_child(element)
            .map_err(|e| HoverTipsError::JsInterop {
                message: format!("Failed to attach tooltip: {:?}", e),
            })?;
        Ok(())
    }

    fn remove(&self, element: &Element) {
        element.remove();
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_displayed(&self, element: &Element, displayed: bool) {
        if displayed {
            set_style(element, "display", "");
        } else {
            set_style(element, "display", "none");
        }
    }

    fn is_displayed(&self, element: &Element) -> bool {
        style_value(element, "display") != "none"
    }

    fn set_opacity(&self, element: &Element, opacity: f64) {
        set_style(element, "opacity", &opacity.to_string());
    }

    fn opacity(&self, element: &Element) -> f64 {
        style_value(element, "opacity").parse().unwrap_or(1.0)
    }

    fn set_class(&self, element: &Element, class: &str, enabled: bool) {
        let classes = element.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle class {}: {:?}", class, e);
        }
    }

    fn set_absolute(&self, element: &Element) {
        set_style(element, "position", "absolute");
    }

    fn move_to(&self, element: &Element, position: Point) {
        set_style(element, "left", &format!("{}px", position.x));
        set_style(element, "top", &format!("{}px", position.y));
    }

    fn rendered_size(&self, element: &Element) -> Size {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => Size::new(html.offset_width() as f64, html.offset_height() as f64),
            None => Size::default(),
        }
    }

    fn document_box(&self, element: &Element) -> Option<Rect> {
        let html = element.dyn_ref::<HtmlElement>()?;
        let size = Size::new(html.offset_width() as f64, html.offset_height() as f64);

        let mut origin = Point::default();
        let mut current = Some(html.clone());
        while let Some(node) = current {
            origin.x += node.offset_left() as f64;
            origin.y += node.offset_top() as f64;
            current = node
                .offset_parent()
                .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
        }
        Some(Rect::at(origin, size))
    }

    fn scrolled_ancestors(&self, element: &Element) -> Vec<Offset> {
        let body: Option<Element> = self.document.body().map(Into::into);
        let mut scrolls = Vec::new();
        let mut current = element.parent_element();
        while let Some(ancestor) = current {
            if Some(&ancestor) == body.as_ref() {
                break;
            }
            let scroll = Offset::new(ancestor.scroll_left() as f64, ancestor.scroll_top() as f64);
            if scroll.x != 0.0 || scroll.y != 0.0 {
                scrolls.push(scroll);
            }
            current = ancestor.parent_element();
        }
        scrolls
    }

    fn viewport(&self) -> Rect {
        let scroll_x = self.window.scroll_x().unwrap_or(0.0);
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let (width, height) = match self.document.document_element() {
            Some(root) => (root.client_width() as f64, root.client_height() as f64),
            None => (
                self.window
                    .inner_width()
                    .ok()
                    .and_then(|w| w.as_f64())
                    .unwrap_or(0.0),
                self.window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0),
            ),
        };
        Rect::new(scroll_x, scroll_y, width, height)
    }
}

impl EventSource for WebHost {
    type LoadListener = WebLoadListener;

    fn listen_hover(&mut self, element: &Element, target: TargetId) -> bool {
        let enter = self.report(TooltipEvent::PointerEnter(target));
        let leave = self.report(TooltipEvent::PointerLeave(target));
        let entered = self.listen(element, "mouseenter", enter);
        let left = self.listen(element, "mouseleave", leave);
        entered && left
    }

    fn track_pointer(&mut self) {
        let Some(body) = self.document.body() else {
            log::warn!("No document body to track the pointer on");
            return;
        };

        let instance_id = self.instance_id;
        let on_move = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let position = Point::new(mouse.page_x() as f64, mouse.page_y() as f64);
                InstanceManager::dispatch(instance_id, TooltipEvent::PointerMove(position));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        self.listen(&body, "mousemove", on_move);
    }

    fn listen_load(&mut self, image: &Element, target: TargetId) -> WebLoadListener {
        let instance_id = self.instance_id;
        let on_load = Closure::wrap(Box::new(move || {
            InstanceManager::dispatch(instance_id, TooltipEvent::ImageLoaded(target));
        }) as Box<dyn FnMut()>);

        let image: HtmlImageElement = image.clone().unchecked_into();
        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_load.as_ref().unchecked_ref()));
        WebLoadListener {
            image,
            _on_load: on_load,
        }
    }

    fn detach_load(&mut self, listener: WebLoadListener) {
        listener.image.set_onload(None);
        listener.image.set_onerror(None);
    }
}

impl Scheduler for WebHost {
    type Timer = WebTimer;

    fn schedule_show(&mut self, target: TargetId, delay_ms: u32) -> WebTimer {
        let instance_id = self.instance_id;
        let callback = Closure::wrap(Box::new(move || {
            InstanceManager::dispatch(instance_id, TooltipEvent::ShowDelayElapsed(target));
        }) as Box<dyn FnMut()>);

        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| log::warn!("Failed to schedule show delay: {:?}", e))
            .ok();

        WebTimer {
            handle,
            _callback: callback,
        }
    }

    fn cancel_timer(&mut self, timer: WebTimer) {
        if let Some(handle) = timer.handle {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl FadeHandle for WebFade {
    fn cancel(&mut self) {
        // Keep the opacity reached so far instead of snapping back
        for layer in &self.layers {
            let current = self
                .window
                .get_computed_style(layer)
                .ok()
                .flatten()
                .and_then(|style| style.get_property_value("opacity").ok());
            if let Some(opacity) = current {
                set_style(layer, "opacity", &opacity);
            }
        }
        for animation in &self.animations {
            animation.set_onfinish(None);
            animation.cancel();
        }
    }
}

impl Animator for WebHost {
    type Fade = WebFade;

    fn fade(
        &mut self,
        layers: &[Element],
        direction: FadeDirection,
        duration_ms: u32,
        ticket: FadeTicket,
    ) -> WebFade {
        let animations: Vec<Animation> = layers
            .iter()
            .map(|layer| {
                let (from, to) = match direction {
                    FadeDirection::In => (self.opacity(layer), 1.0),
                    FadeDirection::Out => (self.opacity(layer), 0.0),
                };
                let keyframes = opacity_keyframes(from, to);
                layer.animate_with_f64(Some(&keyframes), duration_ms as f64)
            })
            .collect();

        // Layers run in lockstep; the first one reports completion
        let on_finish = animations.first().map(|first| {
            let instance_id = self.instance_id;
            let on_finish = Closure::wrap(Box::new(move || {
                InstanceManager::dispatch(instance_id, TooltipEvent::FadeFinished(ticket));
            }) as Box<dyn FnMut()>);
            first.set_onfinish(Some(on_finish.as_ref().unchecked_ref()));
            on_finish
        });

        WebFade {
            window: self.window.clone(),
            layers: layers.to_vec(),
            animations,
            _on_finish: on_finish,
        }
    }
}

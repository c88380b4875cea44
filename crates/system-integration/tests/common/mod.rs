//! Recording host used by the integration tests
//!
//! Elements are indices into a flat node table. Every listener, timer, fade
//! and measurement the controller asks for is recorded so tests can assert on
//! it and feed the matching events back in by hand.

#![allow(dead_code)]

use hovertips_integration::{Animator, Dom, EventSource, FadeHandle, Scheduler};
use hovertips_shared::{
    FadeDirection, FadeTicket, HoverTipsError, HoverTipsResult, Offset, Point, Rect, Size,
    TargetId,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockElement(pub usize);

#[derive(Debug, Clone)]
pub struct Node {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub displayed: bool,
    pub opacity: f64,
    pub absolute: bool,
    pub position: Option<Point>,
    pub children: Vec<MockElement>,
    pub in_body: bool,
    pub document_box: Option<Rect>,
    pub scrolled_ancestors: Vec<Offset>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: HashMap::new(),
            text: String::new(),
            displayed: true,
            opacity: 1.0,
            absolute: false,
            position: None,
            children: Vec::new(),
            in_body: false,
            document_box: None,
            scrolled_ancestors: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFade {
    pub ticket: FadeTicket,
    pub direction: FadeDirection,
    pub layers: Vec<MockElement>,
    pub duration_ms: u32,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub nodes: Vec<Node>,
    pub hover_listeners: Vec<(MockElement, TargetId)>,
    pub pointer_tracked: usize,
    pub load_listeners: Vec<(u64, MockElement, TargetId)>,
    pub detached_loads: usize,
    pub timers: Vec<(u64, TargetId, u32)>,
    pub cancelled_timers: usize,
    pub fades: Vec<RecordedFade>,
    pub cancelled_fades: Vec<FadeTicket>,
    pub measurements: usize,
    pub floating_size: Size,
    pub viewport: Rect,
    pub fail_create: bool,
    /// Hover listeners fail to attach while set
    pub refuse_listeners: bool,
    next_handle: u64,
}

impl MockState {
    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

#[derive(Clone)]
pub struct MockHost {
    pub state: Rc<RefCell<MockState>>,
}

pub struct MockTimer(pub u64);

pub struct MockLoadListener(pub u64);

pub struct MockFade {
    ticket: FadeTicket,
    state: Rc<RefCell<MockState>>,
}

impl FadeHandle for MockFade {
    fn cancel(&mut self) {
        self.state.borrow_mut().cancelled_fades.push(self.ticket);
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    pub fn new() -> Self {
        let state = MockState {
            floating_size: Size::new(80.0, 30.0),
            viewport: Rect::new(0.0, 0.0, 1000.0, 800.0),
            ..MockState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Add a page element with class `tip` at `document_box`
    pub fn add_target(&self, title: &str, document_box: Rect) -> MockElement {
        let mut state = self.state.borrow_mut();
        let mut node = Node::new("a");
        node.classes.push("tip".to_string());
        node.attributes.insert("title".to_string(), title.to_string());
        node.in_body = true;
        node.document_box = Some(document_box);
        state.nodes.push(node);
        MockElement(state.nodes.len() - 1)
    }

    pub fn node(&self, element: MockElement) -> Node {
        self.state.borrow().nodes[element.0].clone()
    }

    pub fn with_node(&self, element: MockElement, update: impl FnOnce(&mut Node)) {
        update(&mut self.state.borrow_mut().nodes[element.0]);
    }

    pub fn has_class(&self, element: MockElement, class: &str) -> bool {
        self.node(element).classes.iter().any(|c| c == class)
    }

    pub fn last_timer(&self) -> Option<(u64, TargetId, u32)> {
        self.state.borrow().timers.last().copied()
    }

    pub fn last_fade(&self) -> Option<RecordedFade> {
        self.state.borrow().fades.last().cloned()
    }

    pub fn fade_count(&self) -> usize {
        self.state.borrow().fades.len()
    }

    pub fn measurements(&self) -> usize {
        self.state.borrow().measurements
    }

    pub fn hover_listener_count(&self) -> usize {
        self.state.borrow().hover_listeners.len()
    }

    pub fn target_id(&self, element: MockElement) -> Option<TargetId> {
        self.state
            .borrow()
            .hover_listeners
            .iter()
            .find(|(listened, _)| *listened == element)
            .map(|(_, id)| *id)
    }
}

impl Dom for MockHost {
    type Element = MockElement;

    fn query_selector_all(&self, selector: &str) -> Vec<MockElement> {
        let class = selector.trim_start_matches('.');
        self.state
            .borrow()
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.in_body && node.classes.iter().any(|c| c == class))
            .map(|(index, _)| MockElement(index))
            .collect()
    }

    fn attribute(&self, element: &MockElement, name: &str) -> Option<String> {
        self.state.borrow().nodes[element.0].attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &MockElement, name: &str, value: &str) {
        self.with_node(*element, |node| {
            node.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn create_element(&self, tag: &str, class: &str) -> HoverTipsResult<MockElement> {
        let mut state = self.state.borrow_mut();
        if state.fail_create {
            return Err(HoverTipsError::DomUnavailable {
                message: format!("cannot create <{}>", tag),
            });
        }
        let mut node = Node::new(tag);
        node.classes.push(class.to_string());
        state.nodes.push(node);
        Ok(MockElement(state.nodes.len() - 1))
    }

    fn append_child(&self, parent: &MockElement, child: &MockElement) {
        self.with_node(*parent, |node| node.children.push(*child));
    }

    fn append_to_body(&self, element: &MockElement) -> HoverTipsResult<()> {
        self.with_node(*element, |node| node.in_body = true);
        Ok(())
    }

    fn remove(&self, element: &MockElement) {
        let mut state = self.state.borrow_mut();
        for node in state.nodes.iter_mut() {
            node.children.retain(|child| child != element);
        }
        state.nodes[element.0].in_body = false;
    }

    fn set_text(&self, element: &MockElement, text: &str) {
        self.with_node(*element, |node| node.text = text.to_string());
    }

    fn set_displayed(&self, element: &MockElement, displayed: bool) {
        self.with_node(*element, |node| node.displayed = displayed);
    }

    fn is_displayed(&self, element: &MockElement) -> bool {
        self.node(*element).displayed
    }

    fn set_opacity(&self, element: &MockElement, opacity: f64) {
        self.with_node(*element, |node| node.opacity = opacity);
    }

    fn opacity(&self, element: &MockElement) -> f64 {
        self.node(*element).opacity
    }

    fn set_class(&self, element: &MockElement, class: &str, enabled: bool) {
        self.with_node(*element, |node| {
            node.classes.retain(|c| c != class);
            if enabled {
                node.classes.push(class.to_string());
            }
        });
    }

    fn set_absolute(&self, element: &MockElement) {
        self.with_node(*element, |node| node.absolute = true);
    }

    fn move_to(&self, element: &MockElement, position: Point) {
        self.with_node(*element, |node| node.position = Some(position));
    }

    fn rendered_size(&self, element: &MockElement) -> Size {
        let mut state = self.state.borrow_mut();
        state.measurements += 1;
        if state.nodes[element.0].displayed {
            state.floating_size
        } else {
            Size::default()
        }
    }

    fn document_box(&self, element: &MockElement) -> Option<Rect> {
        self.node(*element).document_box
    }

    fn scrolled_ancestors(&self, element: &MockElement) -> Vec<Offset> {
        self.node(*element).scrolled_ancestors
    }

    fn viewport(&self) -> Rect {
        self.state.borrow().viewport
    }
}

impl EventSource for MockHost {
    type LoadListener = MockLoadListener;

    fn listen_hover(&mut self, element: &MockElement, target: TargetId) -> bool {
        let mut state = self.state.borrow_mut();
        if state.refuse_listeners {
            return false;
        }
        state.hover_listeners.push((*element, target));
        true
    }

    fn track_pointer(&mut self) {
        self.state.borrow_mut().pointer_tracked += 1;
    }

    fn listen_load(&mut self, image: &MockElement, target: TargetId) -> MockLoadListener {
        let mut state = self.state.borrow_mut();
        let handle = state.next_handle();
        state.load_listeners.push((handle, *image, target));
        MockLoadListener(handle)
    }

    fn detach_load(&mut self, listener: MockLoadListener) {
        let mut state = self.state.borrow_mut();
        state.load_listeners.retain(|(handle, _, _)| *handle != listener.0);
        state.detached_loads += 1;
    }
}

impl Scheduler for MockHost {
    type Timer = MockTimer;

    fn schedule_show(&mut self, target: TargetId, delay_ms: u32) -> MockTimer {
        let mut state = self.state.borrow_mut();
        let handle = state.next_handle();
        state.timers.push((handle, target, delay_ms));
        MockTimer(handle)
    }

    fn cancel_timer(&mut self, timer: MockTimer) {
        let mut state = self.state.borrow_mut();
        state.timers.retain(|(handle, _, _)| *handle != timer.0);
        state.cancelled_timers += 1;
    }
}

impl Animator for MockHost {
    type Fade = MockFade;

    fn fade(
        &mut self,
        layers: &[MockElement],
        direction: FadeDirection,
        duration_ms: u32,
        ticket: FadeTicket,
    ) -> MockFade {
        self.state.borrow_mut().fades.push(RecordedFade {
            ticket,
            direction,
            layers: layers.to_vec(),
            duration_ms,
        });
        MockFade {
            ticket,
            state: self.state.clone(),
        }
    }
}

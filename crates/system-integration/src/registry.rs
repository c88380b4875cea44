//! Watched targets
//!
//! A scan queries the selector, captures each element's `title` into the
//! registry (blanking the attribute so the native tooltip stays quiet) and
//! installs hover listeners on elements it has not seen before (or whose
//! listeners failed to attach last time). Elements that
//! no longer match are dropped from the registry but keep their listeners;
//! enter events from them carry ids that are no longer registered and are
//! ignored, while a leave still hides whatever is shown.

use crate::host::EventSource;
use hovertips_shared::TargetId;

/// Attribute the tooltip text is captured from
pub const TITLE_ATTRIBUTE: &str = "title";

#[derive(Debug, Clone)]
pub struct TargetEntry<E> {
    pub id: TargetId,
    pub element: E,
    /// Captured tooltip text, split on the delimiter when shown
    pub text: String,
    /// Optional image URL shown beneath the content
    pub image: Option<String>,
    /// Hover listeners are attached; retried on the next scan otherwise
    pub listening: bool,
}

/// Outcome of one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Elements seen for the first time (listeners installed)
    pub discovered: usize,
    /// Known elements whose text was captured again
    pub recaptured: usize,
    /// Previously registered elements that no longer match
    pub dropped: usize,
    pub total: usize,
}

pub struct TargetRegistry<E> {
    selector: String,
    entries: Vec<TargetEntry<E>>,
    next_id: u64,
}

impl<E: Clone + PartialEq> TargetRegistry<E> {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Re-query the selector and refresh the registry
    pub fn scan<H>(&mut self, host: &mut H, image_attribute: &str) -> ScanSummary
    where
        H: EventSource<Element = E>,
    {
        let matched = host.query_selector_all(&self.selector);
        let mut previous = std::mem::take(&mut self.entries);
        let mut summary = ScanSummary::default();

        for element in matched {
            let title = host
                .attribute(&element, TITLE_ATTRIBUTE)
                .filter(|title| !title.is_empty());
            if title.is_some() {
                host.set_attribute(&element, TITLE_ATTRIBUTE, "");
            }
            let image = host
                .attribute(&element, image_attribute)
                .filter(|src| !src.is_empty());

            let known = previous.iter().position(|entry| entry.element == element);
            let entry = match known {
                Some(index) => {
                    let mut entry = previous.swap_remove(index);
                    if let Some(text) = title {
                        entry.text = text;
                        summary.recaptured += 1;
                    }
                    entry.image = image;
                    if !entry.listening {
                        entry.listening = host.listen_hover(&entry.element, entry.id);
                    }
                    entry
                }
                None if self.entries.iter().any(|entry| entry.element == element) => {
                    // Matched twice by the same selector list
                    continue;
                }
                None => {
                    let id = TargetId(self.next_id);
                    self.next_id += 1;
                    let listening = host.listen_hover(&element, id);
                    if !listening {
                        log::warn!("Could not attach hover listeners to {}", id);
                    }
                    summary.discovered += 1;
                    TargetEntry {
                        id,
                        element,
                        text: title.unwrap_or_default(),
                        image,
                        listening,
                    }
                }
            };
            self.entries.push(entry);
        }

        summary.dropped = previous.len();
        summary.total = self.entries.len();
        summary
    }

    pub fn get(&self, id: TargetId) -> Option<&TargetEntry<E>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetEntry<E>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

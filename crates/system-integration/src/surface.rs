//! The single floating tooltip box
//!
//! Built once per widget: a container holding the title, the content and the
//! stem, plus an image slot filled per show. The container is absolutely
//! positioned, hidden until the first show and never removed.

use crate::host::Dom;
use hovertips_config::{ClassNames, TooltipConfig};
use hovertips_geometry::Placement;
use hovertips_shared::{HoverTipsResult, Size, TooltipText};

pub struct TooltipSurface<E> {
    container: E,
    title: E,
    content: E,
    stem: E,
    image: Option<E>,
}

impl<E: Clone + PartialEq> TooltipSurface<E> {
    /// Create the element structure and attach it, hidden, to the body
    pub fn build<D>(dom: &D, config: &TooltipConfig) -> HoverTipsResult<Self>
    where
        D: Dom<Element = E>,
    {
        let classes = &config.classes;
        let container = dom.create_element("div", &classes.container)?;
        let title = dom.create_element(&config.title_tag_name, &classes.title)?;
        let content = dom.create_element("div", &classes.content)?;
        let stem = dom.create_element("div", &classes.stem)?;

        dom.append_child(&container, &title);
        dom.append_child(&container, &content);
        dom.append_child(&container, &stem);

        dom.set_absolute(&container);
        dom.set_displayed(&container, false);
        dom.append_to_body(&container)?;

        Ok(Self {
            container,
            title,
            content,
            stem,
            image: None,
        })
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    pub fn stem(&self) -> &E {
        &self.stem
    }

    pub fn image(&self) -> Option<&E> {
        self.image.as_ref()
    }

    /// Replace the shown content. The content region is hidden when the
    /// text has no body; the previous image is always removed.
    pub fn fill<D>(&mut self, dom: &D, text: &TooltipText, image: Option<E>)
    where
        D: Dom<Element = E>,
    {
        if let Some(previous) = self.image.take() {
            dom.remove(&previous);
        }

        dom.set_text(&self.title, &text.title);
        match &text.body {
            Some(body) => {
                dom.set_text(&self.content, body);
                dom.set_displayed(&self.content, true);
            }
            None => {
                dom.set_text(&self.content, "");
                dom.set_displayed(&self.content, false);
            }
        }

        if let Some(image) = image {
            self.attach_image(dom, image);
        }
    }

    /// Append `image` after the text, replacing any earlier one
    pub fn attach_image<D>(&mut self, dom: &D, image: E)
    where
        D: Dom<Element = E>,
    {
        if let Some(previous) = self.image.take() {
            dom.remove(&previous);
        }
        dom.append_child(&self.container, &image);
        self.image = Some(image);
    }

    /// Run `place` with the container's rendered size.
    ///
    /// The container is made transparent and displayed for the measurement,
    /// then its previous display state and opacity are restored.
    pub fn with_measured_size<D, R>(&self, dom: &D, place: impl FnOnce(Size) -> R) -> R
    where
        D: Dom<Element = E>,
    {
        let was_displayed = dom.is_displayed(&self.container);
        let opacity = dom.opacity(&self.container);

        dom.set_opacity(&self.container, 0.0);
        dom.set_displayed(&self.container, true);

        let size = dom.rendered_size(&self.container);
        let result = place(size);

        dom.set_displayed(&self.container, was_displayed);
        dom.set_opacity(&self.container, opacity);
        result
    }

    /// Move the container and toggle the mirror classes
    pub fn apply_placement<D>(&self, dom: &D, placement: &Placement, classes: &ClassNames)
    where
        D: Dom<Element = E>,
    {
        dom.set_class(&self.container, &classes.mirror, false);
        dom.set_class(&self.container, &classes.vertical_mirror, false);
        dom.set_class(&self.container, &classes.horizontal_mirror, false);

        if placement.flags.any() {
            dom.set_class(&self.container, &classes.mirror, true);
        }
        if placement.flags.vertical {
            dom.set_class(&self.container, &classes.vertical_mirror, true);
        }
        if placement.flags.horizontal {
            dom.set_class(&self.container, &classes.horizontal_mirror, true);
        }

        dom.move_to(&self.container, placement.position);
    }
}

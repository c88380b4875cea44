//! Drop shadow that follows the tooltip surface

use hovertips_integration::{Decoration, Dom};
use hovertips_shared::{HoverTipsError, HoverTipsResult, Rect};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::web_host::WebHost;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropShadowOptions {
    /// Offset of the shadow from the surface, both axes
    pub distance: f64,
    pub color: String,
    pub class_name: String,
}

impl Default for DropShadowOptions {
    fn default() -> Self {
        Self {
            distance: 4.0,
            color: "rgba(0, 0, 0, 0.3)".to_string(),
            class_name: "tooltip-shadow".to_string(),
        }
    }
}

impl DropShadowOptions {
    pub fn validate(&self) -> HoverTipsResult<()> {
        if !self.distance.is_finite() {
            return Err(HoverTipsError::InvalidConfig {
                message: "distance must be a finite number".to_string(),
                field: Some("distance".to_string()),
            });
        }
        if self.class_name.trim().is_empty() || self.class_name.contains(char::is_whitespace) {
            return Err(HoverTipsError::InvalidConfig {
                message: "className must be a single class name".to_string(),
                field: Some("className".to_string()),
            });
        }
        Ok(())
    }
}

pub struct DropShadow {
    layer: Element,
    distance: f64,
}

impl DropShadow {
    /// Create the shadow layer behind `surface`, hidden until the next show
    pub fn create(
        host: &WebHost,
        surface: &Element,
        options: &DropShadowOptions,
    ) -> HoverTipsResult<Self> {
        options.validate()?;

        let layer = host.create_element("div", &options.class_name)?;
        host.set_absolute(&layer);
        host.set_displayed(&layer, false);
        if let Some(style) = layer.dyn_ref::<web_sys::HtmlElement>().map(|html| html.style()) {
            let _ = style.set_property("background-color", &options.color);
            let _ = style.set_property("pointer-events", "none");
        }

        // Insert before the surface so the surface paints on top
        let anchor: &Node = surface;
        match surface.parent_node() {
            Some(parent) => {
                parent
                    .insert_before(&layer, Some(anchor))
                    .map_err(|e| HoverTipsError::JsInterop {
                        message: format!("Failed to insert shadow: {:?}", e),
                    })?;
            }
            None => host.append_to_body(&layer)?,
        }

        Ok(Self {
            layer,
            distance: options.distance,
        })
    }
}

impl Decoration<WebHost> for DropShadow {
    fn layers(&self) -> Vec<Element> {
        vec![self.layer.clone()]
    }

    fn sync(&mut self, _dom: &WebHost, frame: Rect) {
        let Some(style) = self
            .layer
            .dyn_ref::<web_sys::HtmlElement>()
            .map(|html| html.style())
        else {
            return;
        };
        let _ = style.set_property("left", &format!("{}px", frame.left() + self.distance));
        let _ = style.set_property("top", &format!("{}px", frame.top() + self.distance));
        let _ = style.set_property("width", &format!("{}px", frame.size.width));
        let _ = style.set_property("height", &format!("{}px", frame.size.height));
    }
}

//! WASM bridge for hovertips
//! Exposes the `ToolTips` class to JavaScript and drives the tooltip
//! controller with a `web-sys` host.

use hovertips_config::{ConfigParser, TooltipOptions};
use hovertips_integration::TooltipController;
use hovertips_shared::{ErrorResponse, HoverTipsError};
use std::sync::Once;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

pub mod decoration;
pub mod instance_manager;
pub mod web_host;

use decoration::{DropShadow, DropShadowOptions};
use instance_manager::InstanceManager;
use web_host::WebHost;

static INIT: Once = Once::new();

/// Install the panic hook and console logger once per page
fn init_logging() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        // Another crate on the page may already own the logger
        let _ = console_log::init_with_level(log::Level::Info);
    });
}

fn to_js_error(error: HoverTipsError, operation: &str) -> JsValue {
    JsValue::from_str(
        &ErrorResponse::new(error)
            .with_context("ToolTips", operation)
            .to_json(),
    )
}

/// Deserialize an options object; `undefined` and `null` mean defaults
fn options_from_js<T>(options: JsValue, operation: &str) -> Result<T, JsValue>
where
    T: serde::de::DeserializeOwned + Default,
{
    if options.is_undefined() || options.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| {
        to_js_error(
            HoverTipsError::InvalidConfig {
                message: e.to_string(),
                field: None,
            },
            operation,
        )
    })
}

fn instance_missing(operation: &str) -> JsValue {
    to_js_error(
        HoverTipsError::Internal {
            message: "Tooltip instance not found".to_string(),
        },
        operation,
    )
}

#[wasm_bindgen]
pub struct ToolTips {
    instance_id: Uuid,
}

#[wasm_bindgen]
impl ToolTips {
    /// Attach tooltips to every element matching `selector`
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, options: JsValue) -> Result<ToolTips, JsValue> {
        init_logging();

        let options: TooltipOptions = options_from_js(options, "new")?;
        let config = ConfigParser::from_options(options)
            .map_err(|e| to_js_error(e.into(), "new"))?;

        let instance_id = Uuid::new_v4();
        let host = WebHost::new(instance_id).map_err(|e| to_js_error(e, "new"))?;
        let controller = TooltipController::new(host, selector, config)
            .map_err(|e| to_js_error(e.into(), "new"))?;

        InstanceManager::insert_instance(instance_id, controller);
        log::debug!("Created tooltip instance {}", instance_id);

        Ok(ToolTips { instance_id })
    }

    /// Re-scan the selector, returning the number of registered targets
    #[wasm_bindgen]
    pub fn reload(&self) -> Result<usize, JsValue> {
        InstanceManager::with_instance_mut(&self.instance_id, |controller| {
            controller.reload().total
        })
        .ok_or_else(|| instance_missing("reload"))
    }

    /// The floating container element, e.g. for external styling
    #[wasm_bindgen(js_name = getToolTipContainer)]
    pub fn get_tool_tip_container(&self) -> Option<web_sys::Element> {
        InstanceManager::with_instance(&self.instance_id, |controller| {
            controller.surface_element().clone()
        })
    }

    /// Add a drop shadow that follows the tooltip
    #[wasm_bindgen(js_name = attachDecoration)]
    pub fn attach_decoration(&self, options: JsValue) -> Result<(), JsValue> {
        let options: DropShadowOptions = options_from_js(options, "attachDecoration")?;

        InstanceManager::with_instance_mut(&self.instance_id, |controller| {
            let shadow = DropShadow::create(controller.host(), controller.surface_element(), &options)
                .map_err(|e| to_js_error(e, "attachDecoration"))?;
            controller.attach_decoration(Box::new(shadow));
            Ok(())
        })
        .ok_or_else(|| instance_missing("attachDecoration"))?
    }

    #[wasm_bindgen(js_name = targetCount)]
    pub fn target_count(&self) -> usize {
        InstanceManager::with_instance(&self.instance_id, |controller| controller.target_count())
            .unwrap_or(0)
    }
}

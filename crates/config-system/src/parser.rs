//! Option parsing and merging
//!
//! `TooltipOptions` mirrors the options object accepted from JavaScript. Every
//! field is optional; `ConfigParser::merge` lays the given options over a base
//! configuration field by field and validates the result.

use crate::{ConfigError, ConfigValidator, Result, TooltipConfig};
use hovertips_shared::Hook;
use serde::{Deserialize, Serialize};

/// Partial offset; a missing axis keeps the base value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OffsetOptions {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Partial hook pair given as edge names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HookOptions {
    pub target: Option<String>,
    pub tip: Option<String>,
}

/// Options object as passed by callers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub fixed: Option<bool>,
    pub offset: Option<OffsetOptions>,
    pub show_delay: Option<u32>,
    pub fade: Option<bool>,
    pub fade_speed: Option<u32>,
    pub hook: Option<HookOptions>,
    pub delimiter: Option<String>,
    pub title_tag_name: Option<String>,
    pub preload_images: Option<bool>,
    pub image_attribute: Option<String>,

    pub container_class: Option<String>,
    pub title_class: Option<String>,
    pub content_class: Option<String>,
    pub stem_class: Option<String>,
    pub image_class: Option<String>,
    pub mirror_class: Option<String>,
    pub vertical_mirror_class: Option<String>,
    pub horizontal_mirror_class: Option<String>,
}

/// Configuration parser
pub struct ConfigParser;

impl ConfigParser {
    /// Parse a JSON options object and merge it over the defaults
    pub fn parse_json(content: &str) -> Result<TooltipConfig> {
        let options: TooltipOptions = serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))?;
        Self::from_options(options)
    }

    /// Merge options over the defaults
    pub fn from_options(options: TooltipOptions) -> Result<TooltipConfig> {
        Self::merge(TooltipConfig::default(), options)
    }

    /// Merge options over `base`, with the options taking precedence
    pub fn merge(base: TooltipConfig, options: TooltipOptions) -> Result<TooltipConfig> {
        let mut config = base;

        if let Some(fixed) = options.fixed {
            config.fixed = fixed;
        }
        if let Some(offset) = options.offset {
            config.offset.x = offset.x.unwrap_or(config.offset.x);
            config.offset.y = offset.y.unwrap_or(config.offset.y);
        }
        if let Some(delay) = options.show_delay {
            config.show_delay_ms = delay;
        }
        if let Some(fade) = options.fade {
            config.fade = fade;
        }
        if let Some(speed) = options.fade_speed {
            config.fade_duration_ms = speed;
        }
        if let Some(hook) = options.hook {
            if let Some(target) = hook.target {
                config.hook.target = Self::parse_hook("hook.target", &target)?;
            }
            if let Some(tip) = hook.tip {
                config.hook.tip = Self::parse_hook("hook.tip", &tip)?;
            }
        }
        if let Some(delimiter) = options.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(tag) = options.title_tag_name {
            config.title_tag_name = tag;
        }
        if let Some(preload) = options.preload_images {
            config.preload_images = preload;
        }
        if let Some(attribute) = options.image_attribute {
            config.image_attribute = attribute;
        }

        let classes = &mut config.classes;
        for (slot, value) in [
            (&mut classes.container, options.container_class),
            (&mut classes.title, options.title_class),
            (&mut classes.content, options.content_class),
            (&mut classes.stem, options.stem_class),
            (&mut classes.image, options.image_class),
            (&mut classes.mirror, options.mirror_class),
            (&mut classes.vertical_mirror, options.vertical_mirror_class),
            (&mut classes.horizontal_mirror, options.horizontal_mirror_class),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }

        ConfigValidator::validate(&config)?;
        log::debug!("Tooltip configuration resolved: {:?}", config);
        Ok(config)
    }

    fn parse_hook(field: &str, name: &str) -> Result<Hook> {
        name.parse().map_err(|e: hovertips_shared::hook::ParseHookError| {
            ConfigError::Validation {
                field: field.to_string(),
                message: e.to_string(),
            }
        })
    }
}

//! Configuration system for hovertips
//! Typed per-instance configuration, option merging and validation

use hovertips_shared::{Hook, HookPair, HoverTipsError, Offset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parser;
pub mod validation;

pub use parser::{ConfigParser, HookOptions, OffsetOptions, TooltipOptions};
pub use validation::ConfigValidator;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error in '{field}': {message}")]
    Validation { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ConfigError> for HoverTipsError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Parse(message) => HoverTipsError::InvalidConfig {
                message,
                field: None,
            },
            ConfigError::Validation { field, message } => HoverTipsError::InvalidConfig {
                message,
                field: Some(field),
            },
        }
    }
}

/// Class names applied to the tooltip surface and its regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassNames {
    pub container: String,
    pub title: String,
    pub content: String,
    pub stem: String,
    pub image: String,
    pub mirror: String,
    pub vertical_mirror: String,
    pub horizontal_mirror: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "tooltip-container".to_string(),
            title: "tooltip-title".to_string(),
            content: "tooltip-content".to_string(),
            stem: "tooltip-stem".to_string(),
            image: "tooltip-image".to_string(),
            mirror: "mirrored".to_string(),
            vertical_mirror: "vertical".to_string(),
            horizontal_mirror: "horizontal".to_string(),
        }
    }
}

/// Immutable per-instance tooltip configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Track the hovered element instead of following the mouse
    pub fixed: bool,
    /// Added to the hooked position; negated per axis when mirrored
    pub offset: Offset,
    /// Hover dwell time before the tooltip is shown
    pub show_delay_ms: u32,
    pub fade: bool,
    pub fade_duration_ms: u32,
    pub hook: HookPair,
    /// Splits the captured title into tooltip title and body
    pub delimiter: String,
    pub title_tag_name: String,
    /// Wait for a referenced image to load before showing
    pub preload_images: bool,
    /// Attribute holding the optional image URL of a target
    pub image_attribute: String,
    pub classes: ClassNames,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            fixed: true,
            offset: Offset::new(0.0, 10.0),
            show_delay_ms: 200,
            fade: true,
            fade_duration_ms: 300,
            hook: HookPair::new(Hook::Bottom, Hook::Top),
            delimiter: ":".to_string(),
            title_tag_name: "h2".to_string(),
            preload_images: false,
            image_attribute: "data-tooltip-image".to_string(),
            classes: ClassNames::default(),
        }
    }
}

impl TooltipConfig {
    pub fn builder() -> TooltipConfigBuilder {
        TooltipConfigBuilder::default()
    }
}

/// Builder for Rust callers; starts from the defaults and validates on build
#[derive(Debug, Clone, Default)]
pub struct TooltipConfigBuilder {
    config: TooltipConfig,
}

impl TooltipConfigBuilder {
    pub fn fixed(mut self, fixed: bool) -> Self {
        self.config.fixed = fixed;
        self
    }

    pub fn follow_mouse(self) -> Self {
        self.fixed(false)
    }

    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.config.offset = Offset::new(x, y);
        self
    }

    pub fn show_delay_ms(mut self, delay: u32) -> Self {
        self.config.show_delay_ms = delay;
        self
    }

    pub fn fade(mut self, fade: bool) -> Self {
        self.config.fade = fade;
        self
    }

    pub fn fade_duration_ms(mut self, duration: u32) -> Self {
        self.config.fade_duration_ms = duration;
        self
    }

    pub fn hook(mut self, target: Hook, tip: Hook) -> Self {
        self.config.hook = HookPair::new(target, tip);
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    pub fn title_tag_name(mut self, tag: impl Into<String>) -> Self {
        self.config.title_tag_name = tag.into();
        self
    }

    pub fn preload_images(mut self, preload: bool) -> Self {
        self.config.preload_images = preload;
        self
    }

    pub fn image_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.config.image_attribute = attribute.into();
        self
    }

    pub fn classes(mut self, classes: ClassNames) -> Self {
        self.config.classes = classes;
        self
    }

    pub fn build(self) -> Result<TooltipConfig> {
        ConfigValidator::validate(&self.config)?;
        Ok(self.config)
    }
}

//! Configuration validation utilities

use crate::{ClassNames, ConfigError, Result, TooltipConfig};

/// Longest accepted show delay or fade duration
pub const MAX_DURATION_MS: u32 = 60_000;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &TooltipConfig) -> Result<()> {
        Self::validate_timing(config)?;
        Self::validate_geometry(config)?;
        Self::validate_content(config)?;
        Self::validate_classes(&config.classes)?;
        Ok(())
    }

    fn validate_timing(config: &TooltipConfig) -> Result<()> {
        if config.show_delay_ms > MAX_DURATION_MS {
            return Err(Self::error(
                "showDelay",
                format!(
                    "Invalid show delay: {}ms. Must be at most {}ms",
                    config.show_delay_ms, MAX_DURATION_MS
                ),
            ));
        }

        if config.fade && (config.fade_duration_ms == 0 || config.fade_duration_ms > MAX_DURATION_MS) {
            return Err(Self::error(
                "fadeSpeed",
                format!(
                    "Invalid fade duration: {}ms. Must be between 1 and {}ms when fading is enabled",
                    config.fade_duration_ms, MAX_DURATION_MS
                ),
            ));
        }

        Ok(())
    }

    fn validate_geometry(config: &TooltipConfig) -> Result<()> {
        if !config.offset.is_finite() {
            return Err(Self::error(
                "offset",
                format!("Offset must be finite, got {:?}", config.offset),
            ));
        }
        Ok(())
    }

    fn validate_content(config: &TooltipConfig) -> Result<()> {
        if config.delimiter.is_empty() {
            return Err(Self::error("delimiter", "Delimiter cannot be empty".to_string()));
        }

        let tag = &config.title_tag_name;
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Self::error(
                "titleTagName",
                format!("Invalid title tag name: '{}'", tag),
            ));
        }

        if config.image_attribute.trim().is_empty()
            || config.image_attribute.chars().any(char::is_whitespace)
        {
            return Err(Self::error(
                "imageAttribute",
                format!("Invalid image attribute: '{}'", config.image_attribute),
            ));
        }

        Ok(())
    }

    fn validate_classes(classes: &ClassNames) -> Result<()> {
        for (field, name) in [
            ("containerClass", &classes.container),
            ("titleClass", &classes.title),
            ("contentClass", &classes.content),
            ("stemClass", &classes.stem),
            ("imageClass", &classes.image),
            ("mirrorClass", &classes.mirror),
            ("verticalMirrorClass", &classes.vertical_mirror),
            ("horizontalMirrorClass", &classes.horizontal_mirror),
        ] {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(Self::error(
                    field,
                    format!("Class name must be a single non-empty token, got '{}'", name),
                ));
            }
        }
        Ok(())
    }

    fn error(field: &str, message: String) -> ConfigError {
        ConfigError::Validation {
            field: field.to_string(),
            message,
        }
    }
}

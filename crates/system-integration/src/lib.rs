//! Tooltip system integration
//!
//! Ties the geometry and configuration crates to a host environment. The
//! host (a browser DOM in production, a recording mock in tests) is reached
//! only through the traits in [`host`]; everything here is single-threaded
//! and driven by [`TooltipEvent`](hovertips_shared::TooltipEvent)s fed into
//! [`TooltipController`].

pub mod controller;
pub mod fade;
pub mod host;
pub mod interaction;
pub mod registry;
pub mod surface;

pub use controller::TooltipController;
pub use fade::FadeCoordinator;
pub use host::{Animator, Decoration, Dom, EventSource, FadeHandle, Host, Scheduler};
pub use interaction::{HoverState, InteractionState};
pub use registry::{ScanSummary, TargetEntry, TargetRegistry};
pub use surface::TooltipSurface;

use hovertips_config::ConfigError;
use hovertips_shared::HoverTipsError;
use thiserror::Error;

/// System integration errors
#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Shared error: {0}")]
    Shared(#[from] HoverTipsError),
}

pub type Result<T> = std::result::Result<T, IntegrationError>;

impl From<IntegrationError> for HoverTipsError {
    fn from(err: IntegrationError) -> Self {
        match err {
            IntegrationError::Configuration(e) => e.into(),
            IntegrationError::Shared(e) => e,
        }
    }
}

//! ruler-rs: tick planning and drawing core for ruler widgets.
//!
//! Given a visible numeric range and a pixel allocation, the crate picks the
//! spacing between labelled major ticks, subdivides each major segment into
//! minor ticks while they stay distinguishable, and maps ruler space to pixel
//! space for horizontal and vertical rulers alike.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{Ruler, RulerConfig, RulerState};
pub use error::{RulerError, RulerResult};

//! Host-facing ruler API: configuration, mutable state and the render facade.

mod render_frame_builder;
mod ruler;
mod ruler_config;
mod ruler_state;
mod snapshot;
mod validation;

pub use ruler::Ruler;
pub use ruler_config::{
    DEFAULT_DESIRED_SIZE_PX, DEFAULT_FONT_SIZE_PX, DEFAULT_MAJOR_TICK_LENGTH,
    DEFAULT_TICK_WIDTH_PX, RulerConfig, RulerStyle,
};
pub use ruler_state::{RedrawRequest, RulerState, SizeRequest};
pub use snapshot::RulerSnapshot;
pub use validation::{MAX_MAJOR_TICK_LENGTH, MIN_MAJOR_TICK_LENGTH};

pub mod coordinate;
pub mod interval;
pub mod orientation;
pub mod ticks;
pub mod types;

pub use coordinate::{CoordinateMapper, pixel_spacing, to_pixel};
pub use interval::{
    DEFAULT_INTERVAL, DEFAULT_MIN_MAJOR_TICK_SPACING_PX, INTERVAL_LADDER, MAX_LADDER_INTERVAL,
    first_major_tick, select_interval, try_select_interval,
};
pub use orientation::{LabelAnchor, Segment, TickGeometry};
pub use ticks::{
    DEFAULT_MAX_TICK_DEPTH, DEFAULT_MIN_MINOR_TICK_SPACING_PX, MinorTicks, TickPlan,
    TickPlanTuning, TickPlanner, TickSpec,
};
pub use types::{Allocation, Orientation, Range};

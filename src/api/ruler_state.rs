use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    Allocation, CoordinateMapper, DEFAULT_MIN_MAJOR_TICK_SPACING_PX, Orientation, Range,
    TickPlan, TickPlanTuning, TickPlanner, select_interval,
};
use crate::error::RulerResult;

use super::ruler_config::{DEFAULT_DESIRED_SIZE_PX, DEFAULT_MAJOR_TICK_LENGTH};
use super::validation::{
    validate_desired_size, validate_major_tick_length, validate_min_major_tick_spacing,
    validate_tick_tuning,
};
use super::{RulerConfig, RulerSnapshot};

/// Work the host should schedule after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedrawRequest {
    pub redraw: bool,
    pub relayout: bool,
}

impl RedrawRequest {
    #[must_use]
    pub fn is_pending(self) -> bool {
        self.redraw || self.relayout
    }
}

/// Size negotiation answer for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRequest {
    pub minimum: i32,
    pub natural: i32,
}

/// Mutable ruler state: range, allocation, orientation and tuning, plus the
/// major tick interval derived from them.
///
/// The interval stays `None` until the allocation along the active axis is
/// positive. Every setter validates before touching state, so a rejected
/// update leaves the previous values in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerState {
    range: Range,
    allocation: Allocation,
    orientation: Orientation,
    interval: Option<i64>,
    desired_width: i32,
    desired_height: i32,
    major_tick_length: f64,
    min_major_tick_spacing: i32,
    tick_tuning: TickPlanTuning,
    pending: RedrawRequest,
}

impl Default for RulerState {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl RulerState {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            range: Range::default(),
            allocation: Allocation::default(),
            orientation,
            interval: None,
            desired_width: DEFAULT_DESIRED_SIZE_PX,
            desired_height: DEFAULT_DESIRED_SIZE_PX,
            major_tick_length: DEFAULT_MAJOR_TICK_LENGTH,
            min_major_tick_spacing: DEFAULT_MIN_MAJOR_TICK_SPACING_PX,
            tick_tuning: TickPlanTuning::default(),
            pending: RedrawRequest::default(),
        }
    }

    pub fn from_config(config: &RulerConfig) -> RulerResult<Self> {
        config.validate()?;

        let mut state = Self {
            range: config.range,
            allocation: config.allocation,
            orientation: config.orientation,
            interval: None,
            desired_width: config.desired_width,
            desired_height: config.desired_height,
            major_tick_length: config.major_tick_length,
            min_major_tick_spacing: config.min_major_tick_spacing,
            tick_tuning: config.tick_tuning,
            pending: RedrawRequest::default(),
        };
        state.update_interval();
        Ok(state)
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    #[must_use]
    pub fn lower_limit(&self) -> f64 {
        self.range.lower()
    }

    #[must_use]
    pub fn upper_limit(&self) -> f64 {
        self.range.upper()
    }

    /// Replaces the visible range and recomputes the interval.
    pub fn set_range(&mut self, lower: f64, upper: f64) -> RulerResult<()> {
        let range = Range::new(lower, upper).inspect_err(|err| {
            warn!(error = %err, "rejecting ruler range update");
        })?;
        self.apply_range(range);
        Ok(())
    }

    /// Replaces the visible range with an already validated one.
    pub fn set_range_value(&mut self, range: Range) {
        self.apply_range(range);
    }

    fn apply_range(&mut self, range: Range) {
        debug!(lower = range.lower(), upper = range.upper(), "set ruler range");
        self.range = range;
        self.update_interval();
    }

    #[must_use]
    pub fn allocation(&self) -> Allocation {
        self.allocation
    }

    /// Records the size handed out by the host layout pass.
    ///
    /// Returns `true` when the allocation changed.
    pub fn set_allocation(&mut self, allocation: Allocation) -> bool {
        if self.allocation == allocation {
            return false;
        }
        debug!(
            width = allocation.width,
            height = allocation.height,
            "ruler allocation changed"
        );
        self.allocation = allocation;
        self.update_interval();
        true
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Switches the active orientation. Returns `true` when it changed.
    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        if self.orientation == orientation {
            return false;
        }
        debug!(?orientation, "switch ruler orientation");
        self.orientation = orientation;
        self.update_interval();
        true
    }

    #[must_use]
    pub fn interval(&self) -> Option<i64> {
        self.interval
    }

    #[must_use]
    pub fn desired_width(&self) -> i32 {
        self.desired_width
    }

    pub fn set_desired_width(&mut self, width: i32) -> RulerResult<bool> {
        validate_desired_size("width", width)?;
        if self.desired_width == width {
            return Ok(false);
        }
        self.desired_width = width;
        self.pending.relayout = true;
        Ok(true)
    }

    #[must_use]
    pub fn desired_height(&self) -> i32 {
        self.desired_height
    }

    pub fn set_desired_height(&mut self, height: i32) -> RulerResult<bool> {
        validate_desired_size("height", height)?;
        if self.desired_height == height {
            return Ok(false);
        }
        self.desired_height = height;
        self.pending.relayout = true;
        Ok(true)
    }

    /// Minimum and natural size along `axis`. Desired sizes only feed layout.
    #[must_use]
    pub fn measure(&self, axis: Orientation) -> SizeRequest {
        let natural = match axis {
            Orientation::Horizontal => self.desired_width,
            Orientation::Vertical => self.desired_height,
        };
        SizeRequest {
            minimum: 1,
            natural,
        }
    }

    #[must_use]
    pub fn major_tick_length(&self) -> f64 {
        self.major_tick_length
    }

    /// Sets major tick length as a fraction of the cross axis.
    pub fn set_major_tick_length(&mut self, length: f64) -> RulerResult<bool> {
        validate_major_tick_length(length)?;
        if self.major_tick_length == length {
            return Ok(false);
        }
        debug!(length, "set ruler major tick length");
        self.major_tick_length = length;
        self.pending.redraw = true;
        Ok(true)
    }

    #[must_use]
    pub fn min_major_tick_spacing(&self) -> i32 {
        self.min_major_tick_spacing
    }

    pub fn set_min_major_tick_spacing(&mut self, spacing: i32) -> RulerResult<bool> {
        validate_min_major_tick_spacing(spacing)?;
        if self.min_major_tick_spacing == spacing {
            return Ok(false);
        }
        debug!(spacing, "set ruler min major tick spacing");
        self.min_major_tick_spacing = spacing;
        self.update_interval();
        Ok(true)
    }

    #[must_use]
    pub fn tick_tuning(&self) -> TickPlanTuning {
        self.tick_tuning
    }

    pub fn set_tick_tuning(&mut self, tuning: TickPlanTuning) -> RulerResult<bool> {
        validate_tick_tuning(tuning)?;
        if self.tick_tuning == tuning {
            return Ok(false);
        }
        self.tick_tuning = tuning;
        self.pending.redraw = true;
        Ok(true)
    }

    /// Drains the pending redraw/relayout request.
    pub fn take_redraw_request(&mut self) -> RedrawRequest {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending_redraw_request(&self) -> RedrawRequest {
        self.pending
    }

    pub(super) fn request_redraw(&mut self) {
        self.pending.redraw = true;
    }

    pub(super) fn mark_drawn(&mut self) {
        self.pending.redraw = false;
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        self.orientation.mapper(self.range, self.allocation)
    }

    /// Pixel distance between two ruler positions along the active axis.
    #[must_use]
    pub fn pixel_spacing(&self, lower: f64, upper: f64) -> i32 {
        self.orientation
            .pixel_spacing(self.range, self.allocation, lower, upper)
    }

    /// Ticks for the current state; empty until an interval exists.
    #[must_use]
    pub fn plan_ticks(&self) -> TickPlan {
        match self.interval {
            Some(interval) => TickPlanner::new(self.mapper(), self.tick_tuning)
                .plan(interval, self.major_tick_length),
            None => TickPlan::default(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> RulerSnapshot {
        RulerSnapshot {
            orientation: self.orientation,
            range: self.range,
            allocation: self.allocation,
            interval: self.interval,
            major_tick_length: self.major_tick_length,
            min_major_tick_spacing: self.min_major_tick_spacing,
            ticks: self.plan_ticks().ticks,
        }
    }

    fn update_interval(&mut self) {
        let span = self.orientation.axis_span(self.allocation);
        if span > 0 {
            let interval = select_interval(span, self.min_major_tick_spacing, self.range.size());
            if self.interval != Some(interval) {
                debug!(
                    interval,
                    span,
                    range_size = self.range.size(),
                    "ruler interval recomputed"
                );
            }
            self.interval = Some(interval);
        }
        self.pending.redraw = true;
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{
    Allocation, DEFAULT_MIN_MAJOR_TICK_SPACING_PX, Orientation, Range, TickPlanTuning,
};
use crate::error::RulerResult;
use crate::render::Color;

use super::validation::{
    validate_desired_size, validate_major_tick_length, validate_min_major_tick_spacing,
    validate_style, validate_tick_tuning,
};

pub const DEFAULT_DESIRED_SIZE_PX: i32 = 25;
pub const DEFAULT_MAJOR_TICK_LENGTH: f64 = 0.8;
pub const DEFAULT_TICK_WIDTH_PX: f64 = 1.0;
pub const DEFAULT_FONT_SIZE_PX: f64 = 11.0;

/// Colors and stroke settings applied uniformly to the ruler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerStyle {
    #[serde(default = "default_foreground")]
    pub foreground: Color,
    #[serde(default)]
    pub background: Option<Color>,
    #[serde(default = "default_tick_width")]
    pub tick_width: f64,
    #[serde(default = "default_font_size")]
    pub font_size_px: f64,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            foreground: default_foreground(),
            background: None,
            tick_width: DEFAULT_TICK_WIDTH_PX,
            font_size_px: DEFAULT_FONT_SIZE_PX,
        }
    }
}

/// Public ruler bootstrap configuration.
///
/// Serializable so hosts can persist ruler setup alongside their own layout
/// state. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerConfig {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub range: Range,
    #[serde(default)]
    pub allocation: Allocation,
    #[serde(default = "default_desired_size")]
    pub desired_width: i32,
    #[serde(default = "default_desired_size")]
    pub desired_height: i32,
    #[serde(default = "default_major_tick_length")]
    pub major_tick_length: f64,
    #[serde(default = "default_min_major_tick_spacing")]
    pub min_major_tick_spacing: i32,
    #[serde(default)]
    pub tick_tuning: TickPlanTuning,
    #[serde(default)]
    pub style: RulerStyle,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl RulerConfig {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            range: Range::default(),
            allocation: Allocation::default(),
            desired_width: default_desired_size(),
            desired_height: default_desired_size(),
            major_tick_length: default_major_tick_length(),
            min_major_tick_spacing: default_min_major_tick_spacing(),
            tick_tuning: TickPlanTuning::default(),
            style: RulerStyle::default(),
        }
    }

    #[must_use]
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_allocation(mut self, allocation: Allocation) -> Self {
        self.allocation = allocation;
        self
    }

    #[must_use]
    pub fn with_desired_size(mut self, width: i32, height: i32) -> Self {
        self.desired_width = width;
        self.desired_height = height;
        self
    }

    #[must_use]
    pub fn with_major_tick_length(mut self, length: f64) -> Self {
        self.major_tick_length = length;
        self
    }

    #[must_use]
    pub fn with_min_major_tick_spacing(mut self, spacing: i32) -> Self {
        self.min_major_tick_spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_tick_tuning(mut self, tuning: TickPlanTuning) -> Self {
        self.tick_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RulerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> RulerResult<()> {
        validate_desired_size("width", self.desired_width)?;
        validate_desired_size("height", self.desired_height)?;
        validate_major_tick_length(self.major_tick_length)?;
        validate_min_major_tick_spacing(self.min_major_tick_spacing)?;
        validate_tick_tuning(self.tick_tuning)?;
        validate_style(self.style)
    }
}

fn default_desired_size() -> i32 {
    DEFAULT_DESIRED_SIZE_PX
}

fn default_major_tick_length() -> f64 {
    DEFAULT_MAJOR_TICK_LENGTH
}

fn default_min_major_tick_spacing() -> i32 {
    DEFAULT_MIN_MAJOR_TICK_SPACING_PX
}

fn default_foreground() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_tick_width() -> f64 {
    DEFAULT_TICK_WIDTH_PX
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE_PX
}

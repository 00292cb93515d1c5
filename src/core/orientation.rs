//! Orientation-specific ruler geometry.
//!
//! Horizontal and vertical rulers share all tick math; they only differ in
//! which allocation axis carries the range and how outline, ticks and labels
//! are laid out. [`Orientation`] dispatches between the two layouts with a
//! plain `match`, so switching orientation is a value reassignment.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::core::coordinate::CoordinateMapper;
use crate::core::types::{Allocation, Orientation, Range};

/// Positions are shifted by half a stroke so 1px lines land on pixel centres.
pub const LINE_COORD_OFFSET: f64 = 0.5;

/// Gap in pixels between a major tick and its label.
pub const LABEL_OFFSET_PX: f64 = 4.0;

/// Label centre, as a fraction of the tick length measured from the ruler edge.
pub const LABEL_ALIGN: f64 = 0.65;

/// Straight stroke in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Where a tick label is anchored.
///
/// The label is vertically centred on `(x, y)` in its own (rotated) frame.
/// Horizontal labels start at the anchor; vertical labels are rotated by
/// `rotation_rad` and end at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
    pub rotation_rad: f64,
}

/// Pixel geometry of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickGeometry {
    pub pixel: i32,
    pub stroke: Segment,
    pub label_anchor: LabelAnchor,
}

impl Orientation {
    /// Pixel length of the axis the range is laid out along.
    #[must_use]
    pub fn axis_span(self, allocation: Allocation) -> i32 {
        match self {
            Self::Horizontal => allocation.width,
            Self::Vertical => allocation.height,
        }
    }

    /// Pixel length of the axis ticks grow along.
    #[must_use]
    pub fn cross_span(self, allocation: Allocation) -> i32 {
        match self {
            Self::Horizontal => allocation.height,
            Self::Vertical => allocation.width,
        }
    }

    #[must_use]
    pub fn mapper(self, range: Range, allocation: Allocation) -> CoordinateMapper {
        CoordinateMapper::new(range, self.axis_span(allocation))
    }

    /// Pixel distance between two ruler positions along the active axis.
    #[must_use]
    pub fn pixel_spacing(self, range: Range, allocation: Allocation, lower: f64, upper: f64) -> i32 {
        self.mapper(range, allocation).pixel_spacing(lower, upper)
    }

    /// Two end caps plus the edge ticks are anchored to.
    #[must_use]
    pub fn outline(self, allocation: Allocation, stroke_width: f64) -> [Segment; 3] {
        let width = f64::from(allocation.width);
        let height = f64::from(allocation.height);
        let offset = stroke_width * LINE_COORD_OFFSET;

        match self {
            Self::Horizontal => [
                Segment::new(offset, 0.0, offset, height),
                Segment::new(width - offset, 0.0, width - offset, height),
                Segment::new(0.0, height - offset, width, height - offset),
            ],
            Self::Vertical => [
                Segment::new(0.0, offset, width, offset),
                Segment::new(0.0, height - offset, width, height - offset),
                Segment::new(width - offset, 0.0, width - offset, height),
            ],
        }
    }

    /// Stroke and label anchor of a tick at ruler-space `position`.
    #[must_use]
    pub fn tick(
        self,
        mapper: CoordinateMapper,
        allocation: Allocation,
        position: f64,
        length_fraction: f64,
        stroke_width: f64,
    ) -> TickGeometry {
        let pixel = mapper.to_pixel(position);
        let along = f64::from(pixel) + stroke_width * LINE_COORD_OFFSET;
        let edge = f64::from(self.cross_span(allocation));
        let length = (edge * length_fraction).round();
        let label_cross = edge - LABEL_ALIGN * length;

        match self {
            Self::Horizontal => TickGeometry {
                pixel,
                stroke: Segment::new(along, edge, along, edge - length),
                label_anchor: LabelAnchor {
                    x: f64::from(pixel) + LABEL_OFFSET_PX,
                    y: label_cross,
                    rotation_rad: 0.0,
                },
            },
            Self::Vertical => TickGeometry {
                pixel,
                stroke: Segment::new(edge, along, edge - length, along),
                label_anchor: LabelAnchor {
                    x: label_cross,
                    y: f64::from(pixel) + LABEL_OFFSET_PX,
                    rotation_rad: -FRAC_PI_2,
                },
            },
        }
    }
}

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::coordinate::CoordinateMapper;
use crate::core::interval::first_major_tick;

/// Maximum number of binary subdivisions below a major tick.
pub const DEFAULT_MAX_TICK_DEPTH: u32 = 2;

/// Minimum pixel width of a segment before it is split by a minor tick.
pub const DEFAULT_MIN_MINOR_TICK_SPACING_PX: i32 = 5;

/// Minor ticks produced between two major ticks at the default depth.
pub type MinorTicks = SmallVec<[TickSpec; 3]>;

/// Tuning for minor tick subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickPlanTuning {
    pub max_depth: u32,
    pub min_minor_spacing_px: i32,
}

impl Default for TickPlanTuning {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_TICK_DEPTH,
            min_minor_spacing_px: DEFAULT_MIN_MINOR_TICK_SPACING_PX,
        }
    }
}

/// One tick produced by a planning pass, in ruler space.
///
/// `depth` is the subdivision level of a minor tick (0 for the midpoint
/// between two majors). Major ticks always report depth 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSpec {
    pub position: f64,
    pub is_major: bool,
    pub depth: u32,
    pub length_fraction: f64,
    pub label: Option<String>,
}

impl TickSpec {
    #[must_use]
    pub fn major(position: i64, length_fraction: f64) -> Self {
        Self {
            position: position as f64,
            is_major: true,
            depth: 0,
            length_fraction,
            label: Some(position.to_string()),
        }
    }

    #[must_use]
    pub fn minor(position: f64, depth: u32, length_fraction: f64) -> Self {
        Self {
            position,
            is_major: false,
            depth,
            length_fraction,
            label: None,
        }
    }
}

/// Ordered ticks for one render pass.
///
/// Each major tick is followed by the minor ticks of the segment it opens,
/// in midpoint-first order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickPlan {
    pub interval: i64,
    pub ticks: Vec<TickSpec>,
}

impl TickPlan {
    pub fn majors(&self) -> impl Iterator<Item = &TickSpec> {
        self.ticks.iter().filter(|tick| tick.is_major)
    }

    pub fn minors(&self) -> impl Iterator<Item = &TickSpec> {
        self.ticks.iter().filter(|tick| !tick.is_major)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }
}

/// Walks a range emitting labelled major ticks and their minor subdivisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlanner {
    mapper: CoordinateMapper,
    tuning: TickPlanTuning,
}

impl TickPlanner {
    #[must_use]
    pub fn new(mapper: CoordinateMapper, tuning: TickPlanTuning) -> Self {
        Self { mapper, tuning }
    }

    /// Positions of every major tick from the first multiple of `interval`
    /// at or below the range start up to (excluding) the range end.
    ///
    /// Empty when that first multiple does not fit in an `i64`.
    pub fn major_positions(self, interval: i64) -> impl Iterator<Item = i64> {
        let range = self.mapper.range();
        let upper = range.upper();
        let first = first_major_tick(range.lower(), interval);
        if first.is_none() && interval > 0 {
            warn!(
                lower = range.lower(),
                interval, "ruler range start outside i64 tick domain, skipping majors"
            );
        }
        std::iter::successors(first, move |pos| pos.checked_add(interval))
            .take_while(move |pos| (*pos as f64) < upper)
    }

    /// Plans the full tick sequence for `interval`, with major ticks spanning
    /// `major_tick_length` of the cross axis.
    #[must_use]
    pub fn plan(self, interval: i64, major_tick_length: f64) -> TickPlan {
        if interval <= 0 {
            warn!(interval, "refusing to plan ruler ticks for non-positive interval");
            return TickPlan::default();
        }

        let mut ticks = Vec::new();
        for pos in self.major_positions(interval) {
            ticks.push(TickSpec::major(pos, major_tick_length));
            ticks.extend(self.minor_ticks(
                pos as f64,
                pos as f64 + interval as f64,
                0.5 * major_tick_length,
            ));
        }

        trace!(
            interval,
            tick_count = ticks.len(),
            span = self.mapper.span(),
            "planned ruler ticks"
        );
        TickPlan { interval, ticks }
    }

    /// Minor ticks between `lower` and `upper`, the first one `length_fraction` long.
    #[must_use]
    pub fn minor_ticks(self, lower: f64, upper: f64, length_fraction: f64) -> MinorTicks {
        let mut out = MinorTicks::new();
        self.subdivide(lower, upper, 0, length_fraction, &mut out);
        out
    }

    fn subdivide(
        self,
        lower: f64,
        upper: f64,
        depth: u32,
        length_fraction: f64,
        out: &mut MinorTicks,
    ) {
        if depth >= self.tuning.max_depth {
            return;
        }
        if self.mapper.pixel_spacing(lower, upper) < self.tuning.min_minor_spacing_px {
            return;
        }

        let mid = lower + (upper - lower) / 2.0;
        out.push(TickSpec::minor(mid, depth, length_fraction));

        self.subdivide(lower, mid, depth + 1, 0.5 * length_fraction, out);
        self.subdivide(mid, upper, depth + 1, 0.5 * length_fraction, out);
    }
}

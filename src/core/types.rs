use serde::{Deserialize, Serialize};

use crate::error::{RulerError, RulerResult};

/// Numeric span currently visible on the ruler.
///
/// Always satisfies `lower < upper` with both bounds finite. A range is
/// replaced wholesale; there is no way to mutate one bound in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    pub fn new(lower: f64, upper: f64) -> RulerResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(RulerError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Builds the range exposed by a scrolled viewport: `[offset, offset + page_size)`.
    pub fn from_scroll(offset: f64, page_size: f64) -> RulerResult<Self> {
        Self::new(offset, offset + page_size)
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn size(self) -> f64 {
        self.upper - self.lower
    }
}

impl Default for Range {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 10.0,
        }
    }
}

impl TryFrom<(f64, f64)> for Range {
    type Error = RulerError;

    fn try_from((lower, upper): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

impl From<Range> for (f64, f64) {
    fn from(range: Range) -> Self {
        (range.lower, range.upper)
    }
}

/// Pixel size assigned to the ruler by the host layout pass.
///
/// A zero allocation is legal: the host has not laid the widget out yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Allocation {
    pub width: i32,
    pub height: i32,
}

impl Allocation {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Direction along which the ruler axis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_inverted_and_empty_bounds() {
        assert!(Range::new(5.0, 3.0).is_err());
        assert!(Range::new(3.0, 3.0).is_err());
        assert!(Range::new(f64::NAN, 3.0).is_err());
        assert!(Range::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn scroll_range_spans_one_page() {
        let range = Range::from_scroll(120.0, 640.0).expect("valid page");
        assert_eq!(range.lower(), 120.0);
        assert_eq!(range.upper(), 760.0);
        assert_eq!(range.size(), 640.0);
    }

    #[test]
    fn empty_page_is_not_a_range() {
        assert!(Range::from_scroll(12.0, 0.0).is_err());
    }

    #[test]
    fn range_deserialization_is_validated() {
        let ok: Range = serde_json::from_str("[-3.0, 7.5]").expect("valid range json");
        assert_eq!(ok.lower(), -3.0);
        assert!(serde_json::from_str::<Range>("[7.5, -3.0]").is_err());
    }
}

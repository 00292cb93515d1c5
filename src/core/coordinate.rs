use crate::core::types::Range;

/// Maps ruler-space `pos` to a pixel offset along an axis of `span` pixels
/// showing `[lower, upper]`.
///
/// Positions outside the range map outside `[0, span]`; clamping is the
/// caller's policy. `upper` must be greater than `lower`.
#[must_use]
pub fn to_pixel(lower: f64, upper: f64, pos: f64, span: i32) -> i32 {
    let scale = f64::from(span) / (upper - lower);
    (scale * (pos - lower)).round() as i32
}

/// Pixel distance between two ruler-space positions after rounding both.
#[must_use]
pub fn pixel_spacing(lower: f64, upper: f64, pos_a: f64, pos_b: f64, span: i32) -> i32 {
    to_pixel(lower, upper, pos_b, span) - to_pixel(lower, upper, pos_a, span)
}

/// Convenience wrapper binding the mapping to a validated [`Range`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    range: Range,
    span: i32,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(range: Range, span: i32) -> Self {
        Self { range, span }
    }

    #[must_use]
    pub fn range(self) -> Range {
        self.range
    }

    #[must_use]
    pub fn span(self) -> i32 {
        self.span
    }

    #[must_use]
    pub fn to_pixel(self, pos: f64) -> i32 {
        to_pixel(self.range.lower(), self.range.upper(), pos, self.span)
    }

    #[must_use]
    pub fn pixel_spacing(self, pos_a: f64, pos_b: f64) -> i32 {
        pixel_spacing(
            self.range.lower(),
            self.range.upper(),
            pos_a,
            pos_b,
            self.span,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_maps_to_half_span() {
        assert_eq!(to_pixel(0.0, 10.0, 5.0, 100), 50);
    }

    #[test]
    fn positions_outside_range_are_not_clamped() {
        assert_eq!(to_pixel(0.0, 10.0, -5.0, 100), -50);
        assert_eq!(to_pixel(0.0, 10.0, 15.0, 100), 150);
    }

    #[test]
    fn spacing_uses_rounded_endpoints() {
        // 0.26px and 0.74px round to 0 and 1.
        assert_eq!(pixel_spacing(0.0, 100.0, 0.26, 0.74, 100), 1);
        assert_eq!(pixel_spacing(0.0, 10.0, 2.0, 4.0, 100), 20);
        assert_eq!(pixel_spacing(0.0, 10.0, 4.0, 2.0, 100), -20);
    }

    #[test]
    fn mapper_wraps_free_functions() {
        let range = Range::new(-3.0, 7.0).expect("valid range");
        let mapper = CoordinateMapper::new(range, 200);
        assert_eq!(mapper.to_pixel(-3.0), 0);
        assert_eq!(mapper.to_pixel(7.0), 200);
        assert_eq!(mapper.pixel_spacing(0.0, 1.0), 20);
    }
}

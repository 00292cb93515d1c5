use approx::assert_relative_eq;
use proptest::prelude::*;
use ruler_rs::core::{Allocation, CoordinateMapper, Orientation, Range, pixel_spacing, to_pixel};

#[test]
fn midpoint_of_unit_range_maps_to_half_span() {
    assert_eq!(to_pixel(0.0, 10.0, 5.0, 100), 50);
}

#[test]
fn negative_ranges_map_from_zero() {
    assert_eq!(to_pixel(-50.0, -10.0, -50.0, 400), 0);
    assert_eq!(to_pixel(-50.0, -10.0, -30.0, 400), 200);
    assert_eq!(to_pixel(-50.0, -10.0, -10.0, 400), 400);
}

#[test]
fn spacing_sign_follows_argument_order() {
    assert_eq!(pixel_spacing(0.0, 10.0, 1.0, 3.0, 100), 20);
    assert_eq!(pixel_spacing(0.0, 10.0, 3.0, 1.0, 100), -20);
}

#[test]
fn orientation_picks_the_axis_for_spacing() {
    let range = Range::new(0.0, 100.0).expect("valid range");
    let allocation = Allocation::new(1_000, 50);
    assert_eq!(
        Orientation::Horizontal.pixel_spacing(range, allocation, 0.0, 10.0),
        100
    );
    assert_eq!(
        Orientation::Vertical.pixel_spacing(range, allocation, 0.0, 10.0),
        5
    );
}

#[test]
fn mapper_scale_matches_free_function() {
    let range = Range::new(2.5, 7.5).expect("valid range");
    let mapper = CoordinateMapper::new(range, 333);
    let scale = f64::from(mapper.to_pixel(7.5) - mapper.to_pixel(2.5)) / range.size();
    assert_relative_eq!(scale, 333.0 / 5.0, max_relative = 1e-12);
}

proptest! {
    #[test]
    fn range_ends_map_to_allocation_ends(
        lower in -1_000_000.0f64..1_000_000.0,
        size in 0.001f64..1_000_000.0,
        span in 1i32..8_192,
    ) {
        let upper = lower + size;
        prop_assume!(upper > lower);
        prop_assert_eq!(to_pixel(lower, upper, lower, span), 0);
        let end = to_pixel(lower, upper, upper, span);
        prop_assert!((end - span).abs() <= 1, "end {} vs span {}", end, span);
    }
}

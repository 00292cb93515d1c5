use proptest::prelude::*;
use ruler_rs::core::{
    CoordinateMapper, DEFAULT_MIN_MINOR_TICK_SPACING_PX, Range, TickPlan, TickPlanTuning,
    TickPlanner, select_interval,
};

fn plan_for(lower: f64, upper: f64, span: i32) -> TickPlan {
    let range = Range::new(lower, upper).expect("valid range");
    let interval = select_interval(span, 80, range.size());
    TickPlanner::new(CoordinateMapper::new(range, span), TickPlanTuning::default())
        .plan(interval, 0.8)
}

#[test]
fn majors_are_labelled_integers_covering_the_range() {
    let plan = plan_for(-3.0, 95.0, 800);
    assert_eq!(plan.interval, 10);
    let labels: Vec<&str> = plan
        .majors()
        .filter_map(|tick| tick.label.as_deref())
        .collect();
    assert_eq!(
        labels,
        vec!["-10", "0", "10", "20", "30", "40", "50", "60", "70", "80", "90"]
    );
    assert!(plan.minors().all(|tick| tick.label.is_none()));
}

#[test]
fn minor_ticks_shrink_with_depth() {
    let plan = plan_for(0.0, 100.0, 800);
    let major_length = 0.8;
    for tick in plan.minors() {
        let expected = major_length * 0.5_f64.powi(tick.depth as i32 + 1);
        assert!((tick.length_fraction - expected).abs() < 1e-12);
        assert!(tick.length_fraction < major_length);
    }
}

#[test]
fn dense_ruler_has_no_minor_ticks() {
    // 10-unit segments are 4px wide, below the minor spacing threshold.
    let range = Range::new(0.0, 100.0).expect("valid range");
    let planner = TickPlanner::new(
        CoordinateMapper::new(range, 40),
        TickPlanTuning::default(),
    );
    let plan = planner.plan(10, 0.8);
    assert_eq!(plan.minors().count(), 0);
    assert_eq!(plan.majors().count(), 10);
}

#[test]
fn custom_depth_allows_deeper_subdivision() {
    let range = Range::new(0.0, 10.0).expect("valid range");
    let tuning = TickPlanTuning {
        max_depth: 3,
        min_minor_spacing_px: DEFAULT_MIN_MINOR_TICK_SPACING_PX,
    };
    let plan = TickPlanner::new(CoordinateMapper::new(range, 1_000), tuning).plan(10, 0.8);
    assert_eq!(plan.minors().count(), 7);
    assert_eq!(plan.minors().map(|tick| tick.depth).max(), Some(2));
}

#[test]
fn zero_depth_disables_minor_ticks() {
    let range = Range::new(0.0, 10.0).expect("valid range");
    let tuning = TickPlanTuning {
        max_depth: 0,
        min_minor_spacing_px: DEFAULT_MIN_MINOR_TICK_SPACING_PX,
    };
    let plan = TickPlanner::new(CoordinateMapper::new(range, 1_000), tuning).plan(10, 0.8);
    assert_eq!(plan.minors().count(), 0);
}

proptest! {
    #[test]
    fn minor_ticks_respect_depth_and_spacing(
        lower in -10_000.0f64..10_000.0,
        size in 0.5f64..50_000.0,
        span in 1i32..4_096,
    ) {
        let upper = lower + size;
        let range = Range::new(lower, upper).expect("valid range");
        let mapper = CoordinateMapper::new(range, span);
        let interval = select_interval(span, 80, range.size());
        let plan = TickPlanner::new(mapper, TickPlanTuning::default()).plan(interval, 0.8);

        prop_assert!(plan.majors().count() >= 1);
        for tick in plan.minors() {
            prop_assert!(tick.depth <= 1, "depth {}", tick.depth);
            let half = interval as f64 / 2_f64.powi(tick.depth as i32 + 1);
            let spacing = mapper.pixel_spacing(tick.position - half, tick.position + half);
            prop_assert!(spacing >= DEFAULT_MIN_MINOR_TICK_SPACING_PX, "spacing {}", spacing);
        }
    }
}

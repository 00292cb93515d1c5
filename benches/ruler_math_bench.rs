use criterion::{Criterion, criterion_group, criterion_main};
use ruler_rs::api::{Ruler, RulerConfig};
use ruler_rs::core::{
    Allocation, CoordinateMapper, Orientation, Range, TickPlanTuning, TickPlanner,
    select_interval,
};
use ruler_rs::render::NullRenderer;
use std::hint::black_box;

fn bench_select_interval(c: &mut Criterion) {
    c.bench_function("select_interval_sweep", |b| {
        b.iter(|| {
            let mut acc = 0_i64;
            for range_size in [7.0, 37.0, 100.0, 2_300.0, 48_000.0, 1.0e9] {
                acc += select_interval(black_box(1920), black_box(80), black_box(range_size));
            }
            acc
        })
    });
}

fn bench_plan_ticks_wide_ruler(c: &mut Criterion) {
    let range = Range::new(-1_250.0, 3_840.0).expect("valid range");
    let mapper = CoordinateMapper::new(range, 3_840);
    let planner = TickPlanner::new(mapper, TickPlanTuning::default());
    let interval = select_interval(3_840, 80, range.size());

    c.bench_function("plan_ticks_3840px", |b| {
        b.iter(|| black_box(planner).plan(black_box(interval), black_box(0.8)))
    });
}

fn bench_build_render_frame(c: &mut Criterion) {
    let config = RulerConfig::new(Orientation::Vertical)
        .with_range(Range::new(0.0, 2_160.0).expect("valid range"))
        .with_allocation(Allocation::new(25, 2_160));
    let ruler = Ruler::new(NullRenderer::default(), config).expect("ruler init");

    c.bench_function("build_render_frame_vertical_2160px", |b| {
        b.iter(|| ruler.build_render_frame().expect("frame"))
    });
}

criterion_group!(
    benches,
    bench_select_interval,
    bench_plan_ticks_wide_ruler,
    bench_build_render_frame
);
criterion_main!(benches);

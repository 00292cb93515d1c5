use std::f64::consts::FRAC_PI_2;

use ruler_rs::api::{Ruler, RulerConfig, RulerStyle};
use ruler_rs::core::{Allocation, Orientation, Range};
use ruler_rs::error::RulerError;
use ruler_rs::render::{Color, NullRenderer, TextHAlign, TextVAlign};

fn ruler(orientation: Orientation, width: i32, height: i32, lower: f64, upper: f64) -> Ruler<NullRenderer> {
    let config = RulerConfig::new(orientation)
        .with_range(Range::new(lower, upper).expect("valid range"))
        .with_allocation(Allocation::new(width, height));
    Ruler::new(NullRenderer::default(), config).expect("ruler init")
}

#[test]
fn frame_contains_outline_ticks_and_labels() {
    let ruler = ruler(Orientation::Horizontal, 800, 25, 0.0, 100.0);
    let frame = ruler.build_render_frame().expect("build frame");
    frame.validate().expect("valid frame");

    // 3 outline strokes, 10 majors, 3 minors per 80px segment.
    assert_eq!(frame.lines.len(), 3 + 10 + 30);
    assert_eq!(frame.texts.len(), 10);
    assert_eq!(frame.texts[0].text, "0");
    assert_eq!(frame.texts[9].text, "90");
}

#[test]
fn null_renderer_receives_frame_counts() {
    let mut ruler = ruler(Orientation::Horizontal, 800, 25, 0.0, 100.0);
    ruler.render().expect("render");
    assert!(!ruler.take_redraw_request().redraw);

    let renderer = ruler.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 43);
    assert_eq!(renderer.last_text_count, 10);
}

#[test]
fn unallocated_ruler_refuses_to_render() {
    let mut ruler = Ruler::new(NullRenderer::default(), RulerConfig::default()).expect("init");
    assert!(matches!(
        ruler.render(),
        Err(RulerError::InvalidAllocation { width: 0, height: 0 })
    ));
    assert!(ruler.plan_ticks().is_empty());
}

#[test]
fn horizontal_labels_sit_right_of_their_tick() {
    let ruler = ruler(Orientation::Horizontal, 800, 25, 0.0, 100.0);
    let frame = ruler.build_render_frame().expect("build frame");
    let label = &frame.texts[1];
    assert_eq!(label.text, "10");
    assert_eq!(label.x, 84.0);
    assert_eq!(label.h_align, TextHAlign::Left);
    assert_eq!(label.v_align, TextVAlign::Middle);
    assert_eq!(label.rotation_rad, 0.0);
}

#[test]
fn vertical_labels_are_rotated_and_end_at_tick() {
    let ruler = ruler(Orientation::Vertical, 25, 800, 0.0, 100.0);
    let frame = ruler.build_render_frame().expect("build frame");
    let label = &frame.texts[1];
    assert_eq!(label.y, 84.0);
    assert_eq!(label.h_align, TextHAlign::Right);
    assert_eq!(label.rotation_rad, -FRAC_PI_2);
}

#[test]
fn orientation_switch_mirrors_pixel_geometry() {
    let mut ruler = ruler(Orientation::Horizontal, 400, 400, -3.0, 47.0);
    let horizontal = ruler.build_render_frame().expect("horizontal frame");
    assert!(ruler.set_orientation(Orientation::Vertical));
    let vertical = ruler.build_render_frame().expect("vertical frame");

    assert_eq!(horizontal.lines.len(), vertical.lines.len());
    for (h, v) in horizontal.lines.iter().zip(&vertical.lines) {
        assert_eq!((h.x1, h.y1, h.x2, h.y2), (v.y1, v.x1, v.y2, v.x2));
    }
    let h_labels: Vec<&str> = horizontal.texts.iter().map(|t| t.text.as_str()).collect();
    let v_labels: Vec<&str> = vertical.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(h_labels, v_labels);
}

#[test]
fn style_drives_colors_and_background() {
    let mut ruler = ruler(Orientation::Horizontal, 800, 25, 0.0, 100.0);
    let style = RulerStyle {
        foreground: Color::rgb(0.97, 0.97, 0.95),
        background: Some(Color::rgb(0.16, 0.16, 0.21)),
        ..RulerStyle::default()
    };
    ruler.set_style(style).expect("valid style");
    let frame = ruler.build_render_frame().expect("build frame");
    assert_eq!(frame.background, style.background);
    assert!(frame.lines.iter().all(|line| line.color == style.foreground));

    let invalid = RulerStyle {
        foreground: Color::rgb(2.0, 0.0, 0.0),
        ..RulerStyle::default()
    };
    assert!(ruler.set_style(invalid).is_err());
    assert_eq!(ruler.style(), style);
}

#[test]
fn scroll_follow_updates_range() {
    let mut ruler = ruler(Orientation::Horizontal, 800, 25, 0.0, 100.0);
    ruler.set_range_from_scroll(250.0, 100.0).expect("valid page");
    assert_eq!(ruler.state().lower_limit(), 250.0);
    assert_eq!(ruler.state().upper_limit(), 350.0);
    assert!(ruler.set_range_from_scroll(250.0, 0.0).is_err());
    assert_eq!(ruler.state().upper_limit(), 350.0);
}

#[test]
fn snapshot_json_round_trips_major_labels() {
    let ruler = ruler(Orientation::Vertical, 25, 300, -20.0, 20.0);
    let json = ruler.snapshot_json_pretty().expect("snapshot json");
    let snapshot: ruler_rs::api::RulerSnapshot = serde_json::from_str(&json).expect("parse");
    assert_eq!(snapshot, ruler.snapshot());
    // 300px / 80px -> 3 segments -> smallest interval 14 -> 50.
    assert_eq!(snapshot.interval, Some(50));
    assert_eq!(snapshot.major_labels().collect::<Vec<_>>(), vec!["-50", "0"]);
}

#[test]
fn far_scroll_offset_draws_outline_only() {
    let mut ruler = ruler(Orientation::Horizontal, 800, 25, 0.0, 100.0);
    ruler
        .set_range_from_scroll(-1.0e19, 1.0e6)
        .expect("finite page");
    let frame = ruler.build_render_frame().expect("build frame");
    assert_eq!(frame.lines.len(), 3);
    assert!(frame.texts.is_empty());
}

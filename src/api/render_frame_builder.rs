use tracing::trace;

use crate::core::Orientation;
use crate::error::{RulerError, RulerResult};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{RulerState, RulerStyle};

/// Materializes outline, ticks and labels for the current state.
pub(super) fn build_render_frame(state: &RulerState, style: RulerStyle) -> RulerResult<RenderFrame> {
    let allocation = state.allocation();
    if !allocation.is_valid() {
        return Err(RulerError::InvalidAllocation {
            width: allocation.width,
            height: allocation.height,
        });
    }

    let orientation = state.orientation();
    let mut frame = RenderFrame::new(allocation);
    frame.background = style.background;

    for segment in orientation.outline(allocation, style.tick_width) {
        frame
            .lines
            .push(LinePrimitive::from_segment(segment, style.tick_width, style.foreground));
    }

    // Horizontal labels read left to right from the tick; rotated vertical
    // labels end at the tick.
    let label_align = match orientation {
        Orientation::Horizontal => TextHAlign::Left,
        Orientation::Vertical => TextHAlign::Right,
    };

    let mapper = state.mapper();
    let plan = state.plan_ticks();
    for tick in &plan.ticks {
        let geometry = orientation.tick(
            mapper,
            allocation,
            tick.position,
            tick.length_fraction,
            style.tick_width,
        );
        frame.lines.push(LinePrimitive::from_segment(
            geometry.stroke,
            style.tick_width,
            style.foreground,
        ));

        if let Some(label) = &tick.label {
            frame.texts.push(TextPrimitive::anchored(
                label.as_str(),
                geometry.label_anchor,
                style.font_size_px,
                style.foreground,
                label_align,
            ));
        }
    }

    trace!(
        lines = frame.lines.len(),
        texts = frame.texts.len(),
        "built ruler render frame"
    );
    Ok(frame)
}

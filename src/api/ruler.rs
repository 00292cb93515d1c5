use tracing::debug;

use crate::core::{Allocation, Orientation, TickPlan, TickPlanTuning};
use crate::error::RulerResult;
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::build_render_frame;
use super::validation::validate_style;
use super::{RedrawRequest, RulerConfig, RulerSnapshot, RulerState, RulerStyle, SizeRequest};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Ruler facade consumed by host widgets.
///
/// `Ruler` owns the mutable [`RulerState`], the uniform style and the
/// renderer. Hosts push range and allocation changes in, drain redraw
/// requests, and call [`Ruler::render`] from their draw callback.
pub struct Ruler<R: Renderer> {
    renderer: R,
    state: RulerState,
    style: RulerStyle,
}

impl<R: Renderer> Ruler<R> {
    pub fn new(renderer: R, config: RulerConfig) -> RulerResult<Self> {
        let state = RulerState::from_config(&config)?;
        debug!(
            orientation = ?config.orientation,
            interval = ?state.interval(),
            "ruler initialized"
        );
        Ok(Self {
            renderer,
            state,
            style: config.style,
        })
    }

    #[must_use]
    pub fn state(&self) -> &RulerState {
        &self.state
    }

    #[must_use]
    pub fn style(&self) -> RulerStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RulerStyle) -> RulerResult<()> {
        validate_style(style)?;
        self.style = style;
        self.state.request_redraw();
        Ok(())
    }

    pub fn set_range(&mut self, lower: f64, upper: f64) -> RulerResult<()> {
        self.state.set_range(lower, upper)
    }

    /// Follows a scrolled viewport: shows `[offset, offset + page_size)`.
    pub fn set_range_from_scroll(&mut self, offset: f64, page_size: f64) -> RulerResult<()> {
        self.state.set_range(offset, offset + page_size)
    }

    pub fn set_allocation(&mut self, width: i32, height: i32) -> bool {
        self.state.set_allocation(Allocation::new(width, height))
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        self.state.set_orientation(orientation)
    }

    pub fn set_desired_width(&mut self, width: i32) -> RulerResult<bool> {
        self.state.set_desired_width(width)
    }

    pub fn set_desired_height(&mut self, height: i32) -> RulerResult<bool> {
        self.state.set_desired_height(height)
    }

    pub fn set_major_tick_length(&mut self, length: f64) -> RulerResult<bool> {
        self.state.set_major_tick_length(length)
    }

    pub fn set_min_major_tick_spacing(&mut self, spacing: i32) -> RulerResult<bool> {
        self.state.set_min_major_tick_spacing(spacing)
    }

    pub fn set_tick_tuning(&mut self, tuning: TickPlanTuning) -> RulerResult<bool> {
        self.state.set_tick_tuning(tuning)
    }

    #[must_use]
    pub fn measure(&self, axis: Orientation) -> SizeRequest {
        self.state.measure(axis)
    }

    pub fn take_redraw_request(&mut self) -> RedrawRequest {
        self.state.take_redraw_request()
    }

    #[must_use]
    pub fn plan_ticks(&self) -> TickPlan {
        self.state.plan_ticks()
    }

    pub fn build_render_frame(&self) -> RulerResult<RenderFrame> {
        build_render_frame(&self.state, self.style)
    }

    pub fn render(&mut self) -> RulerResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.state.mark_drawn();
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> RulerResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.state.mark_drawn();
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> RulerSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_json_pretty(&self) -> RulerResult<String> {
        self.snapshot().to_json_pretty()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

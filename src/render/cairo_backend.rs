use cairo::{Antialias, Context, Format, ImageSurface, LineCap};
use pango::FontDescription;

use crate::error::{RulerError, RulerResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign};

const FONT_FAMILY: &str = "Sans";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` draw function).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RulerResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Supports offscreen image-surface rendering through `Renderer::render` and
/// in-place rendering on an external Cairo context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> RulerResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(RulerError::InvalidAllocation { width, height });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RulerResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.last_stats = draw_frame(&context, frame)?;
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RulerResult<()> {
        self.last_stats = draw_frame(context, frame)?;
        Ok(())
    }
}

/// Cairo renderer without a surface of its own, for widgets whose toolkit
/// hands out the context on every draw.
///
/// `Renderer::render` only validates the frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetCairoRenderer {
    last_stats: CairoRenderStats,
}

impl WidgetCairoRenderer {
    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }
}

impl Renderer for WidgetCairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RulerResult<()> {
        frame.validate()
    }
}

impl CairoContextRenderer for WidgetCairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RulerResult<()> {
        self.last_stats = draw_frame(context, frame)?;
        Ok(())
    }
}

fn draw_frame(context: &Context, frame: &RenderFrame) -> RulerResult<CairoRenderStats> {
    frame.validate()?;

    if let Some(background) = frame.background {
        apply_color(context, background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to paint background", err))?;
    }

    // Crisp 1px ticks: no antialiasing, square caps reach the ruler edge.
    context.set_antialias(Antialias::None);
    context.set_line_cap(LineCap::Square);

    let mut stats = CairoRenderStats::default();

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for text in &frame.texts {
        draw_text(context, text)?;
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

fn draw_text(context: &Context, text: &TextPrimitive) -> RulerResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description =
        FontDescription::from_string(&format!("{FONT_FAMILY} {}px", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let text_width = f64::from(text_width);
    let text_height = f64::from(text_height);
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -text_width / 2.0,
        TextHAlign::Right => -text_width,
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Middle => -text_height / 2.0,
        TextVAlign::Bottom => -text_height,
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    apply_color(context, text.color);
    context.translate(text.x, text.y);
    context.rotate(text.rotation_rad);
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> RulerError {
    RulerError::InvalidData(format!("{prefix}: {err}"))
}

//! GTK4 embedding: a `DrawingArea` driven by a [`Ruler`] and fed by scroll adjustments.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::api::{Ruler, RulerConfig};
use crate::core::Orientation;
use crate::error::RulerResult;
use crate::render::WidgetCairoRenderer;

/// CSS node name hosts can style rulers with.
pub const RULER_CSS_NAME: &str = "ruler";

type SharedRuler = Rc<RefCell<Ruler<WidgetCairoRenderer>>>;

pub struct GtkRulerAdapter {
    area: gtk::DrawingArea,
    ruler: SharedRuler,
}

impl GtkRulerAdapter {
    pub fn new(config: RulerConfig) -> RulerResult<Self> {
        let ruler: SharedRuler = Rc::new(RefCell::new(Ruler::new(
            WidgetCairoRenderer::default(),
            config,
        )?));

        let area = gtk::DrawingArea::new();
        area.add_css_class(RULER_CSS_NAME);
        area.set_content_width(config.desired_width);
        area.set_content_height(config.desired_height);
        apply_expand(&area, config.orientation);

        let draw_ruler = Rc::clone(&ruler);
        area.set_draw_func(move |_, context, width, height| {
            let mut ruler = draw_ruler.borrow_mut();
            ruler.set_allocation(width, height);
            if let Err(err) = ruler.render_on_cairo_context(context) {
                warn!(error = %err, "ruler draw failed");
            }
        });

        let resize_ruler = Rc::clone(&ruler);
        area.connect_resize(move |area, width, height| {
            if resize_ruler.borrow_mut().set_allocation(width, height) {
                area.queue_draw();
            }
        });

        Ok(Self { area, ruler })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn ruler(&self) -> SharedRuler {
        Rc::clone(&self.ruler)
    }

    /// Keeps the ruler range equal to the page `adjustment` exposes.
    pub fn follow_adjustment(&self, adjustment: &gtk::Adjustment) {
        let ruler = Rc::clone(&self.ruler);
        let area = self.area.clone();
        let sync = move |adjustment: &gtk::Adjustment| sync_range(&ruler, &area, adjustment);

        adjustment.connect_changed(sync.clone());
        adjustment.connect_value_changed(sync.clone());
        sync(adjustment);
    }

    pub fn set_orientation(&self, orientation: Orientation) -> bool {
        let changed = self.ruler.borrow_mut().set_orientation(orientation);
        if changed {
            apply_expand(&self.area, orientation);
            self.area.queue_resize();
        }
        changed
    }

    pub fn set_desired_size(&self, width: i32, height: i32) -> RulerResult<()> {
        let mut ruler = self.ruler.borrow_mut();
        ruler.set_desired_width(width)?;
        ruler.set_desired_height(height)?;
        if ruler.take_redraw_request().relayout {
            self.area.set_content_width(width);
            self.area.set_content_height(height);
            self.area.queue_resize();
        }
        Ok(())
    }
}

fn sync_range(ruler: &SharedRuler, area: &gtk::DrawingArea, adjustment: &gtk::Adjustment) {
    let offset = adjustment.value();
    let page_size = adjustment.page_size();
    match ruler.borrow_mut().set_range_from_scroll(offset, page_size) {
        Ok(()) => area.queue_draw(),
        // Adjustments report an empty page until their child is laid out.
        Err(err) => debug!(error = %err, "ignoring adjustment without a visible page"),
    }
}

fn apply_expand(area: &gtk::DrawingArea, orientation: Orientation) {
    area.set_hexpand(orientation == Orientation::Horizontal);
    area.set_vexpand(orientation == Orientation::Vertical);
}

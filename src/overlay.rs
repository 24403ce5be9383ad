use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{OverlayTimer, ViewerConfig, OVERLAY_HIDE_MS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The photo overlay shown after a camera-view transition lands.
pub struct ImageOverlay {
    overlay_id: String,
    image_id: String,
    visible_class: String,
    timer: OverlayTimer,
}

impl ImageOverlay {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            overlay_id: config.overlay_id.clone(),
            image_id: config.overlay_image_id.clone(),
            visible_class: config.overlay_visible_class.clone(),
            timer: OverlayTimer::default(),
        }
    }

    fn set_visible(&self, document: &web::Document, visible: bool) {
        if let Some(el) = document.get_element_by_id(&self.overlay_id) {
            let classes = el.class_list();
            _ = if visible {
                classes.add_1(&self.visible_class)
            } else {
                classes.remove_1(&self.visible_class)
            };
        }
    }
}

/// Show `src` in the overlay and hide it after [`OVERLAY_HIDE_MS`]. A newer
/// image restarts the delay.
pub fn show_image(overlay: &Rc<RefCell<ImageOverlay>>, src: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let ticket = {
        let mut o = overlay.borrow_mut();
        match document
            .get_element_by_id(&o.image_id)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        {
            Some(img) => img.set_src(src),
            None => log::warn!("[overlay] missing #{}", o.image_id),
        }
        o.set_visible(&document, true);
        o.timer.show(src)
    };
    log::info!("[overlay] showing {}", src);

    let overlay = overlay.clone();
    dom::set_timeout(OVERLAY_HIDE_MS, move || {
        let mut o = overlay.borrow_mut();
        if o.timer.expire(ticket) {
            if let Some(document) = dom::window_document() {
                o.set_visible(&document, false);
            }
        }
    });
}

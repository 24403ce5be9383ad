use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{ViewerConfig, ViewerController};
use web_sys as web;

/// "Next view" steps through camera records in file order; "Reset view"
/// returns to the whole-cloud framing. Both are ignored mid-transition.
pub fn wire_navigation_buttons(
    document: &web::Document,
    config: &ViewerConfig,
    controller: Rc<RefCell<ViewerController>>,
) {
    let controller_next = controller.clone();
    dom::add_click_listener(document, &config.next_button_id, move || {
        let mut c = controller_next.borrow_mut();
        if c.next_camera(dom::now_ms()) {
            log::info!("[next] camera {}", c.current_index());
        }
    });

    let controller_reset = controller;
    dom::add_click_listener(document, &config.reset_button_id, move || {
        if controller_reset.borrow_mut().reset_view(dom::now_ms()) {
            log::info!("[reset] framing whole cloud");
        }
    });
}

use crate::fetch;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{
    load_camera_records, load_point_cloud, LoadingIndicator, PreparedCloud, ViewerConfig,
    ViewerController,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// `#loading` and its text line. Either may be absent from the page.
pub struct DomLoadingIndicator {
    root: Option<web::HtmlElement>,
    text: Option<web::Element>,
}

impl DomLoadingIndicator {
    pub fn find(document: &web::Document, config: &ViewerConfig) -> Self {
        Self {
            root: document
                .get_element_by_id(&config.loading_id)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
            text: document
                .query_selector(&config.loading_text_selector)
                .ok()
                .flatten(),
        }
    }
}

impl LoadingIndicator for DomLoadingIndicator {
    fn set_text(&mut self, text: &str) {
        if let Some(el) = &self.text {
            el.set_text_content(Some(text));
        }
    }

    fn hide(&mut self) {
        if let Some(el) = &self.root {
            _ = el.style().set_property("display", "none");
        }
    }
}

/// Fetch camera records in the background and hand them to the controller.
pub fn spawn_camera_load(url: String, controller: Rc<RefCell<ViewerController>>) {
    spawn_local(async move {
        let records = load_camera_records(|| fetch::fetch_text(&url)).await;
        controller.borrow_mut().set_records(records);
    });
}

/// Fetch the point cloud in the background. On success the controller refits
/// the scene, the decoded cloud is parked in `pending` for the renderer, and
/// the loading indicator is hidden.
pub fn spawn_cloud_load(
    url: String,
    mut indicator: DomLoadingIndicator,
    controller: Rc<RefCell<ViewerController>>,
    pending: Rc<RefCell<Option<PreparedCloud>>>,
) {
    spawn_local(async move {
        let loaded = load_point_cloud(
            || fetch::fetch_bytes(&url),
            || fetch::xhr_bytes(&url),
            &mut indicator,
        )
        .await;
        if let Some((prepared, _source)) = loaded {
            controller
                .borrow_mut()
                .on_cloud_loaded(prepared.bounds, prepared.point_size);
            *pending.borrow_mut() = Some(prepared);
            indicator.hide();
        }
    });
}

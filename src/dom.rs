use crate::constants::{CANVAS_ID, CANVAS_STYLE, CONFIG_ELEMENT_ID, QUERY_OVERRIDE_KEYS};
use viewer_core::ViewerConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Wall-clock milliseconds, the time base for transitions.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[dom] missing #{}", element_id),
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let callback = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            ms,
        );
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Create the render canvas and append it to `#container_id`.
pub fn create_canvas(
    document: &web::Document,
    container_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Page configuration: embedded JSON (if any) over the defaults, then query-string overrides.
pub fn load_config(document: &web::Document) -> ViewerConfig {
    let base = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .map(|json| {
            ViewerConfig::from_json(&json).unwrap_or_else(|e| {
                log::warn!("[config] ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                ViewerConfig::default()
            })
        })
        .unwrap_or_default();
    base.with_overrides(query_params(&QUERY_OVERRIDE_KEYS))
}

fn query_params(keys: &[&str]) -> Vec<(String, String)> {
    let search = match web::window().map(|w| w.location().search()) {
        Some(Ok(s)) => s,
        _ => return Vec::new(),
    };
    let params = match web::UrlSearchParams::new_with_str(&search) {
        Ok(p) => p,
        Err(_) => return Vec::new(),
    };
    keys.iter()
        .filter_map(|k| params.get(k).map(|v| (k.to_string(), v)))
        .collect()
}

#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::ViewerController;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fetch;
mod frame;
mod input;
mod loading;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = Rc::new(dom::load_config(&document));
    log::info!(
        "[config] cloud={} cameras={} images={:?}",
        config.cloud_url,
        config.cameras_url,
        config.image_prefix
    );

    let canvas = dom::create_canvas(&document, &config.container_id)?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let controller = Rc::new(RefCell::new(ViewerController::new(aspect)));
    let pending_cloud = Rc::new(RefCell::new(None));
    let overlay = Rc::new(RefCell::new(overlay::ImageOverlay::new(&config)));

    events::wire_navigation_buttons(&document, &config, controller.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        controller: controller.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    });

    // Both loads run concurrently with GPU setup
    loading::spawn_camera_load(config.cameras_url.clone(), controller.clone());
    loading::spawn_cloud_load(
        config.cloud_url.clone(),
        loading::DomLoadingIndicator::find(&document, &config),
        controller.clone(),
        pending_cloud.clone(),
    );

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        overlay,
        config,
        canvas,
        pending_cloud,
        gpu,
        uploaded_helpers: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

use crate::dom;
use crate::overlay::{self, ImageOverlay};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{mesh, PreparedCloud, ViewerConfig, ViewerController, ViewerEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<ViewerController>>,
    pub overlay: Rc<RefCell<ImageOverlay>>,
    pub config: Rc<ViewerConfig>,
    pub canvas: web::HtmlCanvasElement,

    // Decoded cloud waiting for upload; the load may finish before the GPU is ready
    pub pending_cloud: Rc<RefCell<Option<PreparedCloud>>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub uploaded_helpers: Option<u64>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = dom::now_ms();
        let w = self.canvas.width();
        let h = self.canvas.height();

        let event = {
            let mut c = self.controller.borrow_mut();
            c.resize(w, h);
            c.tick(now)
        };
        match event {
            Some(ViewerEvent::ShowImage { index, image }) => {
                log::info!("[view] arrived at camera {}", index);
                overlay::show_image(&self.overlay, &self.config.image_url(&image));
            }
            Some(ViewerEvent::TransitionFinished) => log::debug!("[view] transition finished"),
            None => {}
        }

        if let Some(g) = &mut self.gpu {
            if let Some(cloud) = self.pending_cloud.borrow_mut().take() {
                g.upload_cloud(&cloud);
            }
            let c = self.controller.borrow();
            if self.uploaded_helpers != Some(c.helpers_revision()) {
                g.upload_helpers(&mesh::helper_line_vertices(&c.helpers));
                self.uploaded_helpers = Some(c.helpers_revision());
            }
            g.resize_if_needed(w, h);
            match g.render(&c.camera, c.markers()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

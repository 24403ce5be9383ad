use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::ViewerController;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<ViewerController>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_contextmenu(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        w.pointer
            .borrow_mut()
            .press(pos, ev.button(), ev.shift_key());
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let (delta, pan) = {
            let mut p = w.pointer.borrow_mut();
            (p.drag_to(pos), p.pan)
        };
        let Some(delta) = delta else {
            return;
        };

        let mut guard = w.controller.borrow_mut();
        // the running transition owns the camera
        if guard.is_transitioning() {
            return;
        }
        let height = input::canvas_css_size(&w.canvas).y;
        let c = &mut *guard;
        if pan {
            c.controls.pan_by_pixels(delta.x, delta.y, &c.camera, height);
        } else {
            c.controls.rotate_by_pixels(delta.x, delta.y, height);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        if !w.pointer.borrow_mut().release() {
            return;
        }
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        if !(ndc.x.is_finite() && ndc.y.is_finite()) {
            return;
        }
        let picked = w.controller.borrow_mut().on_click(ndc, dom::now_ms());
        if picked.is_none() {
            log::debug!("[click] nothing picked at ({:.3}, {:.3})", ndc.x, ndc.y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let mut c = w.controller.borrow_mut();
        if c.is_transitioning() {
            return;
        }
        c.controls
            .dolly(input::wheel_delta_px(ev.delta_y(), ev.delta_mode()));
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_contextmenu(w: &InputWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

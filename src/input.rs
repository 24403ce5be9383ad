use crate::constants::{
    BUTTON_PRIMARY, BUTTON_SECONDARY, CLICK_DRAG_TOLERANCE_PX, WHEEL_LINE_PX, WHEEL_PAGE_PX,
};
use glam::Vec2;
use web_sys as web;

/// Press/drag bookkeeping for one pointer on the canvas.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub down: bool,
    pub button: i16,
    pub pan: bool,
    pub last: Vec2,
    pub travel: f32,
}

impl PointerState {
    pub fn press(&mut self, pos: Vec2, button: i16, shift: bool) {
        self.down = true;
        self.button = button;
        self.pan = button == BUTTON_SECONDARY || shift;
        self.last = pos;
        self.travel = 0.0;
    }

    /// Movement since the last sample while pressed.
    pub fn drag_to(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.down {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        self.travel += delta.length();
        Some(delta)
    }

    /// Release the pointer; true when the press counts as a primary click.
    pub fn release(&mut self) -> bool {
        let click =
            self.down && self.button == BUTTON_PRIMARY && self.travel <= CLICK_DRAG_TOLERANCE_PX;
        self.down = false;
        self.pan = false;
        click
    }
}

/// CSS-pixel position inside an element of `size` to normalized device coordinates.
#[inline]
pub fn css_to_ndc(pos: Vec2, size: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(pos.x / size.x * 2.0 - 1.0, 1.0 - pos.y / size.y * 2.0)
}

/// Wheel delta in pixels for any `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        1 => d * WHEEL_LINE_PX,
        2 => d * WHEEL_PAGE_PX,
        _ => d,
    }
}

// ---------------- DOM-facing helpers ----------------
#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    css_to_ndc(pointer_css_px(ev, canvas), canvas_css_size(canvas))
}

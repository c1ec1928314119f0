use crate::dom;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Last known pointer position in overlay-canvas pixels. Feeds the cursor
/// tracer origin.
pub type PointerState = Rc<RefCell<DVec2>>;

#[inline]
fn canvas_px(canvas: &web::HtmlCanvasElement, client_x: i32, client_y: i32) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(
        client_x as f64 - rect.left(),
        client_y as f64 - rect.top(),
    )
}

/// Window-wide tracking; the overlay canvas spans the window.
pub fn track_window_pointer(pointer: &PointerState) {
    if let Some(window) = web::window() {
        let p = pointer.clone();
        dom::add_listener(&window, "mousemove", move |ev: web::MouseEvent| {
            *p.borrow_mut() = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        });
    }
}

/// Mouse and single-finger touch on the 3D viewer canvas, mapped into
/// overlay-canvas pixels.
pub fn wire_pointer_handlers(
    viewer_canvas: &web::HtmlCanvasElement,
    overlay_canvas: &web::HtmlCanvasElement,
    pointer: &PointerState,
) {
    for event in ["mousedown", "mousemove", "mouseup", "mouseleave"] {
        let p = pointer.clone();
        let overlay = overlay_canvas.clone();
        dom::add_listener(viewer_canvas, event, move |ev: web::MouseEvent| {
            *p.borrow_mut() = canvas_px(&overlay, ev.client_x(), ev.client_y());
        });
    }

    for event in ["touchstart", "touchmove"] {
        let p = pointer.clone();
        let overlay = overlay_canvas.clone();
        dom::add_listener(viewer_canvas, event, move |ev: web::TouchEvent| {
            let touches = ev.touches();
            if touches.length() != 1 {
                return;
            }
            ev.prevent_default();
            if let Some(touch) = touches.get(0) {
                *p.borrow_mut() = canvas_px(&overlay, touch.client_x(), touch.client_y());
            }
        });
    }

    dom::add_listener(viewer_canvas, "touchend", |ev: web::TouchEvent| {
        ev.prevent_default();
    });
}

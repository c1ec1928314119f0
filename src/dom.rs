use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

const MESSAGE_ID: &str = "message";
const INTRO_ID: &str = "intro";
const INTRO_VISIBLE_MS: i32 = 4000;
const INTRO_FADE_MS: i32 = 700;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` to `target` for `event` for the lifetime of the page.
pub fn add_listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn window_inner_size() -> Option<(u32, u32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width as u32, height as u32))
}

/// Match the overlay canvas backing store to the window. Returns the new
/// size when it changed.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Option<(u32, u32)> {
    let (w, h) = window_inner_size()?;
    let (w, h) = (w.max(1), h.max(1));
    if canvas.width() == w && canvas.height() == h {
        return None;
    }
    canvas.set_width(w);
    canvas.set_height(h);
    log::debug!("[frame] overlay canvas resized to {}x{}", w, h);
    Some((w, h))
}

/// Show the status line with `text`.
pub fn show_message(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(MESSAGE_ID) {
        el.set_text_content(Some(text));
        _ = el.class_list().remove_1("hidden");
    }
}

pub fn hide_message(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MESSAGE_ID) {
        _ = el.class_list().add_1("hidden");
    }
}

fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ms,
    );
    closure.forget();
}

/// Fade the intro panel out after a short delay, then remove it from layout.
pub fn schedule_intro_fade(document: &web::Document) {
    let Some(intro) = document
        .get_element_by_id(INTRO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    set_timeout(INTRO_VISIBLE_MS, move || {
        _ = intro.style().set_property("opacity", "0");
        set_timeout(INTRO_FADE_MS, move || {
            _ = intro.style().set_property("display", "none");
        });
    });
}

use crate::core::OverlayConfig;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn write_option(config: &Rc<RefCell<OverlayConfig>>, key: &str, value: &str) {
    match config.borrow_mut().set(key, value) {
        Ok(true) => log::debug!("[config] {} = {}", key, value),
        Ok(false) => {}
        Err(e) => log::warn!("[config] {}", e),
    }
}

/// Bind the settings panel to the overlay configuration. Each control's
/// element id names the option it writes.
pub fn wire_controls(document: &web::Document, config: &Rc<RefCell<OverlayConfig>>) {
    for checkbox in dom::query_all(document, ".checkbox") {
        let config = config.clone();
        let el = checkbox.clone();
        dom::add_listener(&checkbox, "click", move |_: web::Event| {
            let classes = el.class_list();
            _ = classes.toggle("checked");
            let checked = classes.contains("checked");
            write_option(&config, &el.id(), if checked { "true" } else { "false" });
        });
    }

    for picker in dom::query_all(document, ".color-picker") {
        let config = config.clone();
        dom::add_listener(&picker, "input", move |ev: web::Event| {
            if let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            {
                write_option(&config, &input.id(), &input.value());
            }
        });
    }

    for id in ["boxType", "tracerStart"] {
        let Some(select) = document.get_element_by_id(id) else {
            log::warn!("[config] missing #{} control", id);
            continue;
        };
        let config = config.clone();
        dom::add_listener(&select, "change", move |ev: web::Event| {
            if let Some(select) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlSelectElement>().ok())
            {
                write_option(&config, id, &select.value());
            }
        });
    }

    for title in dom::query_all(document, ".section-title") {
        let el = title.clone();
        dom::add_listener(&title, "click", move |_: web::Event| {
            if let Some(parent) = el.parent_element() {
                _ = parent.class_list().toggle("expanded");
            }
        });
    }
}

//! Scroll-triggered section reveals. Pages mark sections with a `reveal`
//! class and register their selectors here; CSS owns the actual transition.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Attaches a scroll listener that appends a `visible` class to each
/// selector once it enters the lower part of the viewport. Reveals are
/// one-way. Returns the detach closure for the caller's effect cleanup.
pub fn attach_reveal_listener(selectors: &'static [&'static str]) -> impl FnOnce() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let window_for_check = window.clone();

    let scroll_callback = Closure::wrap(Box::new(move || {
        let viewport = window_for_check
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        for selector in selectors {
            if let Some(section) = document.query_selector(selector).ok().flatten() {
                if section.get_bounding_client_rect().top() < viewport * 0.85 {
                    let classes = section.class_name();
                    if !classes.contains("visible") {
                        section.set_class_name(&format!("{} visible", classes));
                    }
                }
            }
        }
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        .unwrap();

    // Reveal whatever is already on screen before the first scroll event.
    scroll_callback
        .as_ref()
        .unchecked_ref::<web_sys::js_sys::Function>()
        .call0(&JsValue::NULL)
        .unwrap();

    move || {
        window
            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            .unwrap();
    }
}

use crate::constants::CONFIG_ATTR_PREFIX;
use morph_core::FieldConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("missing #{element_id}; click action unavailable");
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Size of the browser viewport in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Match the canvas backing store to the viewport. Writes only on change,
/// since assigning a canvas dimension clears it.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let (width, height) = viewport_size(&w);
        if canvas.width() != width {
            canvas.set_width(width);
        }
        if canvas.height() != height {
            canvas.set_height(height);
        }
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_to_viewport(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_to_viewport(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Apply `data-*` overrides found on the canvas. Bad values are logged and
/// the default kept.
pub fn read_config_overrides(canvas: &web::HtmlCanvasElement, config: &mut FieldConfig) {
    for key in FieldConfig::OVERRIDE_KEYS {
        let attr = format!("{CONFIG_ATTR_PREFIX}{key}");
        if let Some(value) = canvas.get_attribute(&attr) {
            match config.apply_override(key, &value) {
                Ok(()) => log::info!("config override {attr}={value}"),
                Err(e) => log::warn!("ignoring {attr}: {e}"),
            }
        }
    }
}

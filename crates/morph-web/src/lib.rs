#![cfg(target_arch = "wasm32")]
use instant::Instant;
use morph_core::{FieldConfig, FrameDriver, RenderError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod render;

use constants::{CANVAS_ID, MORPH_BUTTON_ID, RESET_BUTTON_ID};

fn wire_buttons(document: &web::Document, driver: &frame::SharedDriver) {
    let driver_morph = driver.clone();
    dom::add_click_listener(document, MORPH_BUTTON_ID, move || {
        driver_morph.borrow_mut().request_morph();
    });

    let driver_reset = driver.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        driver_reset.borrow_mut().reset();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("morph-web starting");

    spawn_local(async move {
        // Setup failures are final: report once and leave the page alone
        if let Err(e) = init().await {
            log::error!("particle field disabled: {:#}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or(RenderError::NoWindow)?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| RenderError::MissingElement(CANVAS_ID.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;

    // Keep the canvas backing store matched to the viewport
    dom::wire_canvas_resize(&canvas);

    let mut config = FieldConfig::default();
    dom::read_config_overrides(&canvas, &mut config);

    let gpu = render::GpuState::new(canvas.clone()).await?;
    let viewport = (canvas.width(), canvas.height());
    let driver: frame::SharedDriver =
        Rc::new(RefCell::new(FrameDriver::new(config, gpu, viewport)));

    wire_buttons(&document, &driver);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        canvas,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

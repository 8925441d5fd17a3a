use crate::dom;
use crate::render::GpuState;
use instant::Instant;
use morph_core::FrameDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedDriver = Rc<RefCell<FrameDriver<GpuState>>>;

pub struct FrameContext {
    pub driver: SharedDriver,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        dom::sync_canvas_to_viewport(&self.canvas);
        let viewport = (self.canvas.width(), self.canvas.height());
        let time_sec = self.started.elapsed().as_secs_f32();
        let mut driver = self.driver.borrow_mut();
        if let Err(e) = driver.render_frame(viewport, time_sec) {
            if e.is_fatal() {
                log::error!("frame failed: {}", e);
            } else if driver.failed_frames() == 1 {
                log::warn!("frame skipped: {}", e);
            } else {
                // Only the first of a run reaches warn
                log::debug!("frame skipped ({} in a row): {}", driver.failed_frames(), e);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

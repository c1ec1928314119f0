use crate::core::{HealthOscillator, OverlayConfig, SceneState};
use crate::dom;
use crate::events::PointerState;
use crate::overlay::{self, FrameInput};
use glam::DVec2;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct FrameContext {
    pub overlay_canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,

    pub config: Rc<RefCell<OverlayConfig>>,
    pub scene: Rc<RefCell<SceneState>>,
    pub pointer: PointerState,
    /// Host callback run first each tick to advance and render the 3D scene.
    pub scene_hook: Rc<RefCell<Option<js_sys::Function>>>,

    pub health: HealthOscillator,
    pub rng: StdRng,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Rotate before the host renders so model and overlay agree.
        self.scene.borrow_mut().advance();
        let yaw = self.scene.borrow().subject_transform().map_or(0.0, |(_, yaw)| yaw);

        // Cloned so the hook may call back into the viewer.
        let hook = self.scene_hook.borrow().clone();
        if let Some(hook) = hook {
            if let Err(e) = hook.call1(&JsValue::NULL, &JsValue::from_f64(yaw)) {
                log::error!("[frame] scene hook failed: {:?}", e);
            }
        }

        self.health.tick(&mut self.rng);

        if let Some((w, h)) = dom::sync_canvas_to_window(&self.overlay_canvas) {
            self.scene.borrow_mut().resize(w as f64, h as f64);
            *self.pointer.borrow_mut() = DVec2::new(w as f64 / 2.0, h as f64 / 2.0);
        }

        let config = self.config.borrow();
        let scene = self.scene.borrow();
        let input = FrameInput {
            config: &config,
            subject: scene.subject.as_ref(),
            camera: scene.camera_view(),
            health: self.health.value,
            pointer: *self.pointer.borrow(),
            now: self.started.elapsed().as_secs_f64(),
        };
        overlay::compose(&mut self.ctx2d, &input);
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
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

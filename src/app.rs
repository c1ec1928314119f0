use crate::core::{Aabb, HealthOscillator, MatrixCamera, OverlayConfig, SceneState};
use crate::dom;
use crate::events::{self, PointerState};
use crate::frame::{self, FrameContext};
use glam::{DVec2, DVec3};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const VIEWER_CANVAS_ID: &str = "modelViewer";
const DEFAULT_LABEL: &str = "Model";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("esp-viewer starting");
    Ok(())
}

/// Overlay handle owned by the page script. The script owns the 3D scene and
/// asset loading; it reports the subject and camera here.
#[wasm_bindgen]
pub struct EspViewer {
    document: web::Document,
    config: Rc<RefCell<OverlayConfig>>,
    scene: Rc<RefCell<SceneState>>,
    scene_hook: Rc<RefCell<Option<js_sys::Function>>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
    running: bool,
}

#[wasm_bindgen]
impl EspViewer {
    #[wasm_bindgen(constructor)]
    pub fn new(overlay_canvas_id: &str) -> Result<EspViewer, JsValue> {
        init(overlay_canvas_id).map_err(|e| {
            log::error!("init error: {:?}", e);
            JsValue::from_str(&e.to_string())
        })
    }

    /// Raw world-space bounds of a freshly loaded model.
    #[allow(clippy::too_many_arguments)]
    pub fn subject_ready(
        &self,
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
        label: Option<String>,
    ) {
        let raw = Aabb::new(
            DVec3::new(min_x, min_y, min_z),
            DVec3::new(max_x, max_y, max_z),
        );
        let label = label.unwrap_or_else(|| DEFAULT_LABEL.to_string());
        self.scene.borrow_mut().subject_ready(raw, label);
        dom::hide_message(&self.document);
    }

    pub fn subject_failed(&self, message: &str) {
        log::error!("[loader] error loading model: {}", message);
        self.scene.borrow_mut().clear_subject();
        dom::show_message(&self.document, &format!("Error loading model: {}", message));
    }

    pub fn load_progress(&self, loaded: f64, total: f64) {
        let text = if total > 0.0 {
            format!("Loading model... {:.2}%", loaded / total * 100.0)
        } else {
            "Loading model...".to_string()
        };
        log::debug!("[loader] {}", text);
        dom::show_message(&self.document, &text);
    }

    pub fn clear_subject(&self) {
        self.scene.borrow_mut().clear_subject();
    }

    /// Column-major view-projection matrix plus camera eye. Returns false
    /// (and keeps the previous camera) unless the matrix has 16 entries.
    pub fn set_camera_matrix(&self, view_proj: &[f64], eye_x: f64, eye_y: f64, eye_z: f64) -> bool {
        match MatrixCamera::from_cols(view_proj, DVec3::new(eye_x, eye_y, eye_z)) {
            Some(cam) => {
                self.scene.borrow_mut().host_camera = Some(cam);
                true
            }
            None => {
                log::warn!("[camera] expected 16 matrix entries, got {}", view_proj.len());
                false
            }
        }
    }

    /// Go back to the built-in framing camera.
    pub fn use_builtin_camera(&self) {
        self.scene.borrow_mut().host_camera = None;
    }

    /// Write an overlay option by UI id. False for unknown ids or bad values.
    pub fn set_option(&self, key: &str, value: &str) -> bool {
        match self.config.borrow_mut().set(key, value) {
            Ok(applied) => applied,
            Err(e) => {
                log::warn!("[config] {}", e);
                false
            }
        }
    }

    pub fn get_option(&self, key: &str) -> Option<String> {
        self.config.borrow().get(key)
    }

    pub fn set_auto_rotate(&self, on: bool) {
        self.scene.borrow_mut().auto_rotate = on;
    }

    /// Placement offset `[x, y, z]` of the current subject; empty when none
    /// is loaded. Add it to the rendered model's position.
    pub fn subject_offset(&self) -> Vec<f64> {
        self.scene
            .borrow()
            .subject_transform()
            .map_or_else(Vec::new, |(offset, _)| offset.to_array().to_vec())
    }

    /// Current subject yaw in radians about the vertical axis.
    pub fn subject_yaw(&self) -> f64 {
        self.scene
            .borrow()
            .subject_transform()
            .map_or(0.0, |(_, yaw)| yaw)
    }

    /// Built-in camera eye `[x, y, z]`, for hosts rendering through it.
    pub fn camera_eye(&self) -> Vec<f64> {
        self.scene.borrow().camera.eye.to_array().to_vec()
    }

    /// Built-in camera look-at target `[x, y, z]`.
    pub fn camera_target(&self) -> Vec<f64> {
        self.scene.borrow().camera.target.to_array().to_vec()
    }

    /// Called every tick with the subject yaw, after auto-rotate and before
    /// the overlay draws.
    pub fn set_scene_hook(&self, hook: Option<js_sys::Function>) {
        *self.scene_hook.borrow_mut() = hook;
    }

    /// Start the animation loop. Idempotent.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        frame::start_loop(self.frame_ctx.clone());
    }
}

fn init(overlay_canvas_id: &str) -> anyhow::Result<EspViewer> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let overlay_canvas: web::HtmlCanvasElement = document
        .get_element_by_id(overlay_canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", overlay_canvas_id))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx2d: web::CanvasRenderingContext2d = overlay_canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_to_window(&overlay_canvas);
    let (w, h) = (overlay_canvas.width() as f64, overlay_canvas.height() as f64);

    let config = Rc::new(RefCell::new(OverlayConfig::default()));
    let scene = Rc::new(RefCell::new(SceneState::new(w / h.max(1.0))));
    let pointer: PointerState = Rc::new(RefCell::new(DVec2::new(w / 2.0, h / 2.0)));
    let scene_hook = Rc::new(RefCell::new(None));

    events::wire_controls(&document, &config);
    events::track_window_pointer(&pointer);
    match document
        .get_element_by_id(VIEWER_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(viewer_canvas) => events::wire_pointer_handlers(&viewer_canvas, &overlay_canvas, &pointer),
        None => log::warn!("missing #{}; touch input not tracked", VIEWER_CANVAS_ID),
    }

    dom::show_message(&document, "Loading model...");
    dom::schedule_intro_fade(&document);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        overlay_canvas,
        ctx2d,
        config: config.clone(),
        scene: scene.clone(),
        pointer,
        scene_hook: scene_hook.clone(),
        health: HealthOscillator::default(),
        rng: StdRng::from_entropy(),
        started: Instant::now(),
    }));

    Ok(EspViewer {
        document,
        config,
        scene,
        scene_hook,
        frame_ctx,
        running: false,
    })
}

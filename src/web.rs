//! Browser host: wires window scroll/resize events and
//! `requestAnimationFrame` to a [`ScrollSceneEngine`].
//!
//! JS owns the WebGL renderer. Each frame it receives the camera block and
//! the per-mesh transforms as two `Float32Array`s:
//!
//! ```js
//! import init, { mount } from "./parallax.js";
//! await init();
//! const handle = mount(null, (camera, meshes) => renderer.draw(camera, meshes));
//! renderer.uploadParticles(handle.particle_positions());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Float32Array, Function};
use wasm_bindgen::prelude::{wasm_bindgen, Closure, JsValue};
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};

use crate::engine::{FrameSink, ScrollSceneEngine, Viewport};
use crate::error::ParallaxError;
use crate::options::Options;
use crate::scene::{FrameInfo, FrameSnapshot, Scene};
use crate::util::frame_timing::FrameClock;

impl From<ParallaxError> for JsValue {
    fn from(e: ParallaxError) -> Self {
        Self::from_str(&e.to_string())
    }
}

// ── Frame output ─────────────────────────────────────────────────────────

/// Forwards each frame to a JS callback `(camera, meshes) => void`.
struct JsFrameSink {
    callback: Function,
}

impl FrameSink for JsFrameSink {
    fn submit(&mut self, scene: &Scene, info: FrameInfo) {
        let snapshot = FrameSnapshot::capture(scene, info);
        let camera = Float32Array::from(snapshot.camera.as_floats());
        let meshes = Float32Array::from(snapshot.mesh_floats());
        if let Err(e) = self.callback.call2(&JsValue::NULL, &camera, &meshes) {
            log::error!("frame {} callback threw: {e:?}", info.frame);
        }
    }
}

// ── Entry point ──────────────────────────────────────────────────────────

/// Handle returned by [`mount`]; keeps the engine reachable from JS.
#[wasm_bindgen]
pub struct ParallaxHandle {
    engine: Rc<RefCell<ScrollSceneEngine>>,
}

#[wasm_bindgen]
impl ParallaxHandle {
    /// Particle shell positions, `x, y, z` per point.
    pub fn particle_positions(&self) -> Float32Array {
        Float32Array::from(self.engine.borrow().scene().particles().as_flat())
    }

    /// Full scene (meshes, ground, lights, camera) as JSON.
    pub fn scene_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.engine.borrow().scene())
            .map_err(|e| ParallaxError::from(e).into())
    }

    /// Current section index.
    pub fn section(&self) -> usize {
        self.engine.borrow().scroll_state().section_index
    }

    /// Smoothed frame rate.
    pub fn fps(&self) -> f64 {
        self.engine.borrow().fps()
    }
}

/// JSON schema of the options TOML, for tooling.
#[wasm_bindgen]
pub fn options_schema() -> Result<String, JsValue> {
    serde_json::to_string(&Options::json_schema())
        .map_err(|e| ParallaxError::from(e).into())
}

/// Build the engine and start the frame loop.
///
/// `options_toml` overrides the default scene; `on_frame` receives
/// `(camera: Float32Array, meshes: Float32Array)` every frame.
#[wasm_bindgen]
pub fn mount(
    options_toml: Option<String>,
    on_frame: Function,
) -> Result<ParallaxHandle, JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = window()?;
    let options = match options_toml {
        Some(text) => Options::from_toml(&text)?,
        None => Options::default(),
    };
    let engine = Rc::new(RefCell::new(ScrollSceneEngine::new(
        options,
        viewport_of(&window),
    )?));

    install_listeners(&window, &engine)?;
    start_frame_loop(&engine, JsFrameSink { callback: on_frame })?;

    log::info!("parallax mounted");
    Ok(ParallaxHandle { engine })
}

// ── Host plumbing ────────────────────────────────────────────────────────

fn window() -> Result<Window, ParallaxError> {
    web_sys::window()
        .ok_or_else(|| ParallaxError::Web("no global window".into()))
}

fn web_err(what: &str, e: &JsValue) -> ParallaxError {
    ParallaxError::Web(format!("{what}: {e:?}"))
}

fn viewport_of(window: &Window) -> Viewport {
    let dimension = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Viewport {
        width: dimension(window.inner_width()),
        height: dimension(window.inner_height()),
        pixel_ratio: window.device_pixel_ratio(),
    }
}

fn install_listeners(
    window: &Window,
    engine: &Rc<RefCell<ScrollSceneEngine>>,
) -> Result<(), ParallaxError> {
    let passive = AddEventListenerOptions::new();
    passive.set_passive(true);

    // scroll
    let on_scroll = {
        let engine = Rc::clone(engine);
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || match window.scroll_y() {
            Ok(offset) => {
                let _ = engine.borrow_mut().handle_scroll(offset);
            }
            Err(e) => log::warn!("scroll offset unavailable: {e:?}"),
        })
    };
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &passive,
        )
        .map_err(|e| web_err("scroll listener", &e))?;
    on_scroll.forget();

    // resize
    let on_resize = {
        let engine = Rc::clone(engine);
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            engine.borrow_mut().resize(viewport_of(&window));
        })
    };
    window
        .add_event_listener_with_callback(
            "resize",
            on_resize.as_ref().unchecked_ref(),
        )
        .map_err(|e| web_err("resize listener", &e))?;
    on_resize.forget();

    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(
    callback: &Closure<dyn FnMut()>,
) -> Result<i32, ParallaxError> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| web_err("requestAnimationFrame", &e))
}

/// Tick once per animation frame for the lifetime of the page.
fn start_frame_loop(
    engine: &Rc<RefCell<ScrollSceneEngine>>,
    mut sink: JsFrameSink,
) -> Result<(), ParallaxError> {
    let clock = FrameClock::start();
    let engine = Rc::clone(engine);

    // The closure re-registers itself through this slot.
    let slot: FrameCallback = Rc::new(RefCell::new(None));
    let self_ref = Rc::clone(&slot);

    *slot.borrow_mut() = Some(Closure::new(move || {
        engine.borrow_mut().tick(clock.elapsed_secs(), &mut sink);
        if let Some(callback) = self_ref.borrow().as_ref() {
            if let Err(e) = request_frame(callback) {
                log::error!("frame loop stopped: {e}");
            }
        }
    }));

    let first = slot.borrow();
    match first.as_ref() {
        Some(callback) => request_frame(callback).map(|_| ()),
        None => Err(ParallaxError::Web("frame loop not installed".into())),
    }
}

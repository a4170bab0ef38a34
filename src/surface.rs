//! Browser bridge to the tldraw-style drawing surface.
//!
//! The surface is a JS object owned by the host page. The bridge calls its
//! API reflectively (`setCamera`, `replacePageContent`, `patchState`) so the
//! crate is not tied to generated bindings for one surface build; content sets
//! cross the boundary as JSON. Every failure is logged and dropped: an
//! unreachable surface downgrades every command to a no-op, never an error.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::camera::Camera;
use crate::content::ContentSet;
use crate::engine::{Command, SurfaceChange, ViewportCore};
use crate::geometry::DisplayArea;
use crate::store::RecordingStore;

/// Handle to the mounted drawing surface.
pub struct Surface {
    app: JsValue,
}

impl Surface {
    /// Wrap the surface app object handed over by the host on mount.
    #[must_use]
    pub fn new(app: JsValue) -> Self {
        Self { app }
    }

    /// The surface's current page id, if it exposes one.
    #[must_use]
    pub fn page_id(&self) -> Option<String> {
        match Reflect::get(&self.app, &JsValue::from_str("currentPageId")) {
            Ok(value) => value.as_string(),
            Err(_) => None,
        }
    }

    /// Apply one engine command to the surface.
    pub fn apply(&self, command: &Command) {
        match command {
            Command::SetCamera(camera) => self.set_camera(*camera),
            Command::ReplaceContent(content) => self.replace_content(content),
            Command::ClearSelection => self.clear_selection(),
        }
    }

    fn set_camera(&self, camera: Camera) {
        let point = Array::of2(&JsValue::from_f64(camera.x), &JsValue::from_f64(camera.y));
        let args = Array::of2(&point, &JsValue::from_f64(camera.zoom));
        self.call("setCamera", &args);
    }

    fn replace_content(&self, content: &ContentSet) {
        let Some(shapes) = to_js(&serde_json::Value::Object(content.shapes.clone())) else {
            return;
        };
        let Some(assets) = to_js(&serde_json::Value::Object(content.assets.clone())) else {
            return;
        };
        // Bindings are never recorded; the middle argument is always empty.
        let bindings = js_sys::Object::new();
        let args = Array::of3(&shapes, &bindings, &assets);
        self.call("replacePageContent", &args);
    }

    fn clear_selection(&self) {
        let Some(page_id) = self.page_id() else {
            return;
        };
        let mut page_states = serde_json::Map::new();
        page_states.insert(page_id, serde_json::json!({ "selectedIds": [], "brush": null }));
        let patch = serde_json::json!({ "document": { "pageStates": page_states } });
        let Some(patch) = to_js(&patch) else {
            return;
        };
        self.call("patchState", &Array::of1(&patch));
    }

    /// Invoke `method` on the app object, logging and dropping any failure.
    fn call(&self, method: &str, args: &Array) {
        let value = match Reflect::get(&self.app, &JsValue::from_str(method)) {
            Ok(value) => value,
            Err(_) => {
                log::warn!("surface method {method} is missing");
                return;
            }
        };
        let Some(function) = value.dyn_ref::<Function>() else {
            log::warn!("surface method {method} is not callable");
            return;
        };
        if Reflect::apply(function, &self.app, args).is_err() {
            log::warn!("surface method {method} failed");
        }
    }
}

/// Serialize `value` into a JS object via JSON.
fn to_js(value: &serde_json::Value) -> Option<JsValue> {
    let text = match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("content serialization failed: {err}");
            return None;
        }
    };
    match js_sys::JSON::parse(&text) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("content JSON was rejected by the host");
            None
        }
    }
}

/// The full playback viewport. Wraps [`ViewportCore`] and owns the surface handle.
#[derive(Default)]
pub struct Player {
    surface: Option<Surface>,
    pub core: ViewportCore,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the recording and sync the surface if one is mounted.
    pub fn load_recording(&mut self, store: RecordingStore) {
        let commands = self.core.load_recording(store);
        self.run(&commands);
    }

    /// Read the document origin used to absolutize slide asset URLs.
    pub fn use_document_origin(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.location().origin() {
            Ok(origin) => self.core.set_origin(origin),
            Err(_) => log::warn!("document origin is unavailable"),
        }
    }

    // --- Events ---

    /// The host mounted the surface app object.
    pub fn on_surface_mounted(&mut self, app: JsValue) {
        let surface = Surface::new(app);
        let page_id = surface.page_id();
        self.surface = Some(surface);
        let commands = self.core.on_surface_mounted(page_id);
        self.run(&commands);
    }

    /// The host unmounted the surface.
    pub fn on_surface_unmounted(&mut self) {
        self.surface = None;
        self.core.on_surface_unmounted();
    }

    /// The container was resized.
    pub fn on_resized(&mut self, width: f64, height: f64) {
        let commands = self.core.on_resized(DisplayArea::new(width, height));
        self.run(&commands);
    }

    /// Playback advanced or seeked.
    pub fn on_time_changed(&mut self, time: f64) {
        let commands = self.core.on_time_changed(time);
        self.run(&commands);
    }

    /// The surface reported a change, possibly user-initiated.
    pub fn on_surface_changed(&mut self, reason: Option<String>, brush_active: bool, selected_count: usize) {
        let change = SurfaceChange { reason, brush_active, selected_count };
        let commands = self.core.on_surface_changed(&change);
        self.run(&commands);
    }

    fn run(&self, commands: &[Command]) {
        let Some(surface) = &self.surface else {
            return;
        };
        for command in commands {
            surface.apply(command);
        }
    }

    // --- Host-facing queries ---

    /// Fitted width in pixels; zero while inactive.
    #[must_use]
    pub fn fitted_width(&self) -> f64 {
        self.core.fitted_size().width
    }

    /// Fitted height in pixels; zero while inactive.
    #[must_use]
    pub fn fitted_height(&self) -> f64 {
        self.core.fitted_size().height
    }

    /// Whether playback has reached the first pan/zoom keyframe.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.core.is_active()
    }

    /// Current slide index, `-1` while none is selected.
    #[must_use]
    pub fn slide_index(&self) -> i32 {
        raw_index(self.core.selection().slide)
    }

    /// Current pan/zoom keyframe index, `-1` while none is selected.
    #[must_use]
    pub fn panzoom_index(&self) -> i32 {
        raw_index(self.core.selection().panzoom)
    }
}

/// Convert an index option to the host's `-1` sentinel convention.
fn raw_index(index: Option<usize>) -> i32 {
    match index {
        Some(value) => i32::try_from(value).unwrap_or(-1),
        None => -1,
    }
}

//! Viewport engine: playback and surface events in, surface commands out.
//!
//! [`ViewportCore`] is the state machine behind the read-only whiteboard
//! mirror. It owns the loaded recording and the last-derived fit, consumes
//! plain events (time moved, container resized, surface mounted, surface
//! changed), and returns the [`Command`]s the host must apply to the drawing
//! surface, in order, before presenting the next frame. Every handler is
//! synchronous and derives its output from current inputs only, so re-running
//! one with unchanged inputs yields the same commands.
//!
//! The surface is untrusted: any pan, zoom, or selection it reports that the
//! engine did not order is answered by re-asserting the derived state.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{Camera, Point};
use crate::content::{ContentSet, slide_content};
use crate::cursor::cursor_position;
use crate::geometry::{DisplayArea, FittedSize, fitted_size};
use crate::store::{RecordingStore, Selection};

/// Commands returned from event handlers for the host to apply to the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Apply this camera, overriding whatever the surface holds.
    SetCamera(Camera),
    /// Replace the surface page content with this full set.
    ReplaceContent(ContentSet),
    /// Clear any selection or marquee the surface has accumulated.
    ClearSelection,
}

/// A change notification from the drawing surface.
///
/// `reason` is the surface's own tag for what changed; user-initiated camera
/// mutations arrive with tags containing `"panned"` or `"zoomed"`.
#[derive(Debug, Clone, Default)]
pub struct SurfaceChange {
    /// Reason tag as reported by the surface, if any.
    pub reason: Option<String>,
    /// A selection marquee is being drawn on the surface.
    pub brush_active: bool,
    /// Number of ids the surface currently reports selected.
    pub selected_count: usize,
}

impl SurfaceChange {
    /// Whether this change is an unauthorized pan or zoom.
    #[must_use]
    pub fn is_camera_mutation(&self) -> bool {
        self.reason
            .as_deref()
            .is_some_and(|reason| reason.contains("panned") || reason.contains("zoomed"))
    }

    /// Whether this change carries an unauthorized selection or marquee.
    #[must_use]
    pub fn is_selection_mutation(&self) -> bool {
        self.brush_active || self.selected_count != 0
    }
}

/// Core viewport state — all logic that doesn't depend on the browser.
///
/// Separated from [`crate::surface::Player`] so it can be tested without
/// WASM/browser dependencies. Holds nothing beyond the loaded recording, the
/// current inputs, and the last-derived fit.
#[derive(Debug, Default)]
pub struct ViewportCore {
    store: RecordingStore,
    display: DisplayArea,
    selection: Selection,
    time: f64,
    page_id: Option<String>,
    origin: String,
    mounted: bool,
    fitted: FittedSize,
    camera: Option<Camera>,
}

impl ViewportCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the recording and re-derive everything for the current time.
    pub fn load_recording(&mut self, store: RecordingStore) -> Vec<Command> {
        self.store = store;
        self.selection = self.store.selection_at(self.time);
        self.refit();
        self.sync_commands()
    }

    /// Set the document origin used to absolutize slide asset URLs.
    pub fn set_origin(&mut self, origin: String) {
        self.origin = origin;
    }

    // --- Events ---

    /// The surface handle is mounted and reports its current page id.
    ///
    /// Emits the full sync (camera, then content) for the current selection.
    pub fn on_surface_mounted(&mut self, page_id: Option<String>) -> Vec<Command> {
        self.mounted = true;
        self.page_id = page_id;
        self.sync_commands()
    }

    /// The surface handle went away; commands stop until the next mount.
    pub fn on_surface_unmounted(&mut self) {
        self.mounted = false;
        self.page_id = None;
    }

    /// The container was resized; re-fit and re-lock the camera.
    pub fn on_resized(&mut self, area: DisplayArea) -> Vec<Command> {
        self.display = area;
        self.refit();
        if !self.mounted {
            return Vec::new();
        }
        match self.camera {
            Some(camera) => vec![Command::SetCamera(camera)],
            None => Vec::new(),
        }
    }

    /// Playback time moved; re-derive the selection.
    ///
    /// Emits a camera command when the pan/zoom keyframe changed and exactly
    /// one content replacement when the slide or drawing interval changed.
    pub fn on_time_changed(&mut self, time: f64) -> Vec<Command> {
        self.time = time;
        let selection = self.store.selection_at(time);
        let camera_dirty = selection.panzoom != self.selection.panzoom;
        let content_dirty = selection.slide != self.selection.slide
            || selection.interval != self.selection.interval;
        if !camera_dirty && !content_dirty {
            return Vec::new();
        }
        self.selection = selection;
        if camera_dirty {
            self.refit();
        }
        if !self.mounted {
            return Vec::new();
        }
        let mut commands = Vec::new();
        if camera_dirty {
            if let Some(camera) = self.camera {
                commands.push(Command::SetCamera(camera));
            }
        }
        if content_dirty {
            commands.push(Command::ReplaceContent(self.content()));
        }
        commands
    }

    /// The surface reported a change; undo anything the engine didn't order.
    ///
    /// Re-applying an unchanged camera is deliberate: the lock must land
    /// before the next presented frame, and reapplying the same state is a
    /// no-op on the surface.
    #[must_use]
    pub fn on_surface_changed(&self, change: &SurfaceChange) -> Vec<Command> {
        if !self.mounted {
            return Vec::new();
        }
        let mut commands = Vec::new();
        if change.is_selection_mutation() {
            commands.push(Command::ClearSelection);
        }
        if change.is_camera_mutation() {
            if let Some(camera) = self.camera {
                commands.push(Command::SetCamera(camera));
            }
        }
        commands
    }

    // --- Queries ---

    /// Whether a pan/zoom keyframe is currently selected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.selection.is_active()
    }

    /// The current fitted size; zero while inactive or degenerate.
    #[must_use]
    pub fn fitted_size(&self) -> FittedSize {
        self.fitted
    }

    /// The current locked camera; `None` while inactive or degenerate.
    #[must_use]
    pub fn camera(&self) -> Option<Camera> {
        self.camera
    }

    /// The current selection snapshot.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Display position of the presenter cursor, when it should be drawn.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        let record = self.store.cursor_at(self.time)?;
        let camera = self.camera?;
        cursor_position(record, camera, self.fitted)
    }

    // --- Derivation ---

    /// Re-derive fit and camera from the current selection and display area.
    fn refit(&mut self) {
        let view_box = self.store.view_box_for(&self.selection);
        self.fitted = fitted_size(view_box, self.display);
        self.camera = Camera::fit(view_box, self.fitted);
    }

    /// Commands that re-assert the whole derived state on the surface.
    fn sync_commands(&self) -> Vec<Command> {
        if !self.mounted {
            return Vec::new();
        }
        let mut commands = Vec::new();
        if let Some(camera) = self.camera {
            commands.push(Command::SetCamera(camera));
        }
        commands.push(Command::ReplaceContent(self.content()));
        commands
    }

    fn content(&self) -> ContentSet {
        slide_content(&self.store, &self.selection, self.page_id.as_deref(), &self.origin)
    }
}

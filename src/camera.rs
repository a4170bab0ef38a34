//! Camera derivation and coordinate conversions.
//!
//! The drawing surface's camera maps board coordinates to display pixels. For
//! a read-only mirror the camera is never free: it is always derived from the
//! presenter's view box and the fitted size, anchored at the view box origin.
//! Whatever the surface does to its own camera, this derivation is the single
//! source of truth the engine re-applies.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::geometry::{FittedSize, ViewBox};

/// A point in either display or board space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state applied to the drawing surface.
///
/// `x` / `y` are the board-space point pinned to the display origin.
/// `zoom` is the board-to-display scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Camera {
    /// Derive the camera that shows `view_box` inside `fitted`.
    ///
    /// The zoom is the minimum of the two axis scale factors, the same value
    /// whichever axis bound the fit. Returns `None` for a degenerate view box,
    /// whose scale factors are undefined.
    #[must_use]
    pub fn fit(view_box: ViewBox, fitted: FittedSize) -> Option<Self> {
        if view_box.is_degenerate() {
            return None;
        }
        let zoom = (fitted.width / view_box.width).min(fitted.height / view_box.height);
        Some(Self { x: view_box.x, y: view_box.y, zoom })
    }

    /// Convert a board-space point to display pixels under this camera.
    #[must_use]
    pub fn board_to_display(&self, board: Point) -> Point {
        Point {
            x: (board.x - self.x) * self.zoom,
            y: (board.y - self.y) * self.zoom,
        }
    }

    /// Convert a display-pixel point back to board space.
    #[must_use]
    pub fn display_to_board(&self, display: Point) -> Point {
        Point {
            x: display.x / self.zoom + self.x,
            y: display.y / self.zoom + self.y,
        }
    }
}

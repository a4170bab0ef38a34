//! Fit geometry: view box, display area, and the aspect-ratio fit.
//!
//! The presenter's pan/zoom state is recorded as a view box: the rectangle of
//! the board that was visible on the presenter's screen. Fitting scales that
//! rectangle into the pixel area available to the player, preserving its
//! aspect ratio and binding on whichever axis runs out of room first. The
//! fitted size drives both the wrapper element's extent and the camera derived
//! in [`crate::camera`].

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// The rectangle of the board visible to the presenter, in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width; non-positive marks a degenerate view box.
    pub width: f64,
    /// Height; non-positive marks a degenerate view box.
    pub height: f64,
}

impl ViewBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether this view box carries no drawable area.
    ///
    /// Degenerate view boxes have undefined scale factors; callers short-circuit
    /// to the inactive rendering instead of dividing by their extents.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Pixel size of the container available to render into.
///
/// Both dimensions may be zero before the host layout settles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayArea {
    pub width: f64,
    pub height: f64,
}

impl DisplayArea {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Aspect-ratio-preserving size of the displayed board within a [`DisplayArea`].
///
/// Never exceeds the display area in either dimension and never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FittedSize {
    pub width: f64,
    pub height: f64,
}

impl FittedSize {
    /// Zero extents; the inactive and degenerate fallback.
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };
}

/// Fit `view_box` into `area`, preserving its aspect ratio.
///
/// The width axis binds when the view box is proportionally wider than the
/// area; otherwise the height axis binds. Degenerate view boxes and negative
/// results collapse to zero, so no renderer ever receives a negative extent.
#[must_use]
pub fn fitted_size(view_box: ViewBox, area: DisplayArea) -> FittedSize {
    if view_box.is_degenerate() {
        return FittedSize::ZERO;
    }
    let candidate_width = area.height * view_box.width / view_box.height;
    let (width, height) = if area.width < candidate_width {
        (area.width, area.height * area.width / candidate_width)
    } else {
        (candidate_width, area.height)
    };
    FittedSize { width: width.max(0.0), height: height.max(0.0) }
}

//! Presenter cursor overlay mapping.
//!
//! The recording samples the presenter's cursor in board coordinates, with
//! negative coordinates meaning "hidden". The overlay needs that cursor in
//! display pixels under the current fitted camera, and only while it lands
//! inside the fitted area.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::camera::{Camera, Point};
use crate::geometry::FittedSize;
use crate::store::CursorRecord;

/// Display position for a cursor sample, or `None` when it should not be drawn.
///
/// The cursor is hidden when the sample carries negative coordinates or when
/// it maps outside the fitted area.
#[must_use]
pub fn cursor_position(record: CursorRecord, camera: Camera, fitted: FittedSize) -> Option<Point> {
    if record.x < 0.0 || record.y < 0.0 {
        return None;
    }
    let display = camera.board_to_display(Point::new(record.x, record.y));
    let inside = display.x >= 0.0
        && display.y >= 0.0
        && display.x <= fitted.width
        && display.y <= fitted.height;
    inside.then_some(display)
}

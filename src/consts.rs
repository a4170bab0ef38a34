//! Shared identifiers for the background content.

// ── Background content ──────────────────────────────────────────

/// Fixed id of the locked slide-background image shape.
pub const BACKGROUND_SHAPE_ID: &str = "slide-background-shape";

/// Prefix for per-slide background asset ids.
pub const BACKGROUND_ASSET_PREFIX: &str = "slide-background-asset-";

/// Child index that keeps the background beneath every drawn shape.
pub const BACKGROUND_CHILD_INDEX: i32 = -1;

/// Background asset id for a slide id.
#[must_use]
pub fn background_asset_id(slide_id: &str) -> String {
    format!("{BACKGROUND_ASSET_PREFIX}{slide_id}")
}

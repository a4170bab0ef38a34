//! Content sets pushed to the drawing surface.
//!
//! The surface never receives diffs. Whenever the slide or the drawing
//! interval changes, the player rebuilds the complete shape and asset maps and
//! replaces the page content wholesale: the slide image as a locked background
//! shape plus every visible recorded shape, each re-parented to the surface's
//! current page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde_json::{Map, Value};

use crate::consts::{BACKGROUND_CHILD_INDEX, BACKGROUND_SHAPE_ID, background_asset_id};
use crate::store::{RecordingStore, Selection};

/// Full replacement set for the surface page: shapes and assets keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentSet {
    pub shapes: Map<String, Value>,
    pub assets: Map<String, Value>,
}

impl ContentSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.assets.is_empty()
    }
}

/// Make `src` a full address, as the surface requires for image assets.
///
/// Slide sources are recorded relative to the player deployment; anything not
/// already absolute is prefixed with the document origin.
#[must_use]
pub fn absolute_url(src: &str, origin: &str) -> String {
    if src.starts_with("http") {
        src.to_string()
    } else {
        format!("{origin}{src}")
    }
}

/// Build the full content set for `selection`.
///
/// No slide selected yields an empty set. Otherwise the set holds the slide
/// background asset and locked background shape, plus every visible entry of
/// the current drawing interval, all re-parented to `page_id`.
#[must_use]
pub fn slide_content(
    store: &RecordingStore,
    selection: &Selection,
    page_id: Option<&str>,
    origin: &str,
) -> ContentSet {
    let mut content = ContentSet::default();

    let Some(slide) = selection.slide.and_then(|index| store.slides.get(index)) else {
        return content;
    };

    let asset_id = background_asset_id(&slide.id);
    content.assets.insert(
        asset_id.clone(),
        serde_json::json!({
            "id": asset_id,
            "size": [slide.width, slide.height],
            "src": absolute_url(&slide.src, origin),
            "type": "image",
        }),
    );
    content.shapes.insert(
        BACKGROUND_SHAPE_ID.to_string(),
        serde_json::json!({
            "assetId": asset_id,
            "childIndex": BACKGROUND_CHILD_INDEX,
            "id": BACKGROUND_SHAPE_ID,
            "name": "Image",
            "type": "image",
            "parentId": page_id,
            "point": [0.0, 0.0],
            "isLocked": true,
            "size": [slide.width, slide.height],
            "style": { "dash": "draw", "size": "medium", "color": "blue" },
        }),
    );

    let Some(interval) = &selection.interval else {
        return content;
    };
    let Some(record) = store.draws.get(interval.index) else {
        return content;
    };
    for (entry, visible) in record.data.iter().zip(interval.visible.iter().copied()) {
        if !visible {
            continue;
        }
        let Some(id) = entry.shape.get("id").and_then(Value::as_str) else {
            continue;
        };
        let mut shape = entry.shape.clone();
        if let Some(fields) = shape.as_object_mut() {
            fields.insert("parentId".to_string(), serde_json::json!(page_id));
        }
        content.shapes.insert(id.to_string(), shape);
    }

    content
}

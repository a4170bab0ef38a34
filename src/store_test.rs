#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn slide(id: &str, timestamp: f64) -> SlideRecord {
    SlideRecord {
        id: id.to_string(),
        src: format!("/presentation/{id}.png"),
        width: 1000.0,
        height: 500.0,
        timestamp,
    }
}

fn panzoom(timestamp: f64, width: f64, height: f64) -> PanzoomRecord {
    PanzoomRecord { timestamp, view_box: ViewBox::new(0.0, 0.0, width, height) }
}

fn entry(id: &str, timestamp: f64) -> DrawEntry {
    DrawEntry { timestamp, shape: json!({ "id": id, "type": "draw" }) }
}

fn store() -> RecordingStore {
    RecordingStore {
        slides: vec![slide("s1", 0.0), slide("s2", 10.0), slide("s3", 20.0)],
        panzooms: vec![panzoom(5.0, 1000.0, 500.0), panzoom(15.0, 500.0, 250.0)],
        draws: vec![
            DrawRecord { timestamp: 0.0, data: vec![entry("a", 2.0), entry("b", 8.0)] },
            DrawRecord { timestamp: 10.0, data: vec![entry("c", 12.0)] },
        ],
        cursors: vec![
            CursorRecord { timestamp: 1.0, x: 100.0, y: 50.0 },
            CursorRecord { timestamp: 3.0, x: -1.0, y: -1.0 },
        ],
    }
}

// =============================================================
// Index lookup
// =============================================================

#[test]
fn slide_before_first_record_is_none() {
    assert_eq!(store().slide_at(-1.0), None);
}

#[test]
fn slide_on_record_timestamp_selects_it() {
    assert_eq!(store().slide_at(10.0), Some(1));
}

#[test]
fn slide_between_records_selects_earlier() {
    assert_eq!(store().slide_at(12.5), Some(1));
}

#[test]
fn slide_after_last_record_selects_last() {
    assert_eq!(store().slide_at(999.0), Some(2));
}

#[test]
fn slide_at_time_zero_selects_first() {
    assert_eq!(store().slide_at(0.0), Some(0));
}

#[test]
fn panzoom_before_first_record_is_none() {
    assert_eq!(store().panzoom_at(4.9), None);
}

#[test]
fn panzoom_lookup_in_empty_store_is_none() {
    assert_eq!(RecordingStore::default().panzoom_at(100.0), None);
}

// =============================================================
// Intervals
// =============================================================

#[test]
fn interval_before_first_batch_is_none() {
    assert_eq!(store().interval_at(-0.5), None);
}

#[test]
fn interval_flags_entries_up_to_time() {
    let interval = store().interval_at(5.0).unwrap();
    assert_eq!(interval.index, 0);
    assert_eq!(interval.visible, vec![true, false]);
}

#[test]
fn interval_flags_all_entries_after_batch_completes() {
    let interval = store().interval_at(9.0).unwrap();
    assert_eq!(interval.visible, vec![true, true]);
}

#[test]
fn interval_switches_to_next_batch() {
    let interval = store().interval_at(11.0).unwrap();
    assert_eq!(interval.index, 1);
    assert_eq!(interval.visible, vec![false]);
}

#[test]
fn interval_entry_visible_on_exact_timestamp() {
    let interval = store().interval_at(2.0).unwrap();
    assert_eq!(interval.visible, vec![true, false]);
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_resolves_latest_sample() {
    let cursor = store().cursor_at(2.0).unwrap();
    assert_eq!(cursor.x, 100.0);
    assert_eq!(cursor.y, 50.0);
}

#[test]
fn cursor_hidden_sample_is_carried_through() {
    let cursor = store().cursor_at(4.0).unwrap();
    assert!(cursor.x < 0.0);
}

#[test]
fn cursor_before_first_sample_is_none() {
    assert!(store().cursor_at(0.5).is_none());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selection_before_everything_is_default() {
    let selection = store().selection_at(-1.0);
    assert_eq!(selection, Selection::default());
    assert!(!selection.is_active());
}

#[test]
fn selection_is_inactive_without_panzoom() {
    // Slides and drawings exist at t=2 but no pan/zoom keyframe yet.
    let selection = store().selection_at(2.0);
    assert_eq!(selection.slide, Some(0));
    assert!(!selection.is_active());
}

#[test]
fn selection_activates_on_first_panzoom() {
    let selection = store().selection_at(5.0);
    assert_eq!(selection.panzoom, Some(0));
    assert!(selection.is_active());
}

#[test]
fn selection_combines_all_families() {
    let selection = store().selection_at(15.0);
    assert_eq!(selection.slide, Some(1));
    assert_eq!(selection.panzoom, Some(1));
    assert_eq!(selection.interval.unwrap().index, 1);
}

#[test]
fn view_box_for_active_selection() {
    let s = store();
    let selection = s.selection_at(15.0);
    assert_eq!(s.view_box_for(&selection), ViewBox::new(0.0, 0.0, 500.0, 250.0));
}

#[test]
fn view_box_for_inactive_selection_is_degenerate() {
    let s = store();
    let selection = s.selection_at(0.0);
    assert!(s.view_box_for(&selection).is_degenerate());
}

// =============================================================
// Serde
// =============================================================

#[test]
fn panzoom_record_flattens_view_box() {
    let record: PanzoomRecord =
        serde_json::from_value(json!({ "timestamp": 5.0, "x": 1.0, "y": 2.0, "width": 100.0, "height": 50.0 }))
            .unwrap();
    assert_eq!(record.view_box, ViewBox::new(1.0, 2.0, 100.0, 50.0));
}

#[test]
fn store_deserializes_with_missing_families() {
    let store: RecordingStore = serde_json::from_value(json!({
        "slides": [{ "id": "s1", "src": "/s1.png", "width": 800.0, "height": 600.0, "timestamp": 0.0 }]
    }))
    .unwrap();
    assert_eq!(store.slides.len(), 1);
    assert!(store.panzooms.is_empty());
    assert!(store.cursors.is_empty());
}

#[test]
fn draw_entry_keeps_shape_payload() {
    let store: RecordingStore = serde_json::from_value(json!({
        "draws": [{ "timestamp": 0.0, "data": [{ "timestamp": 1.0, "shape": { "id": "x", "style": {} } }] }]
    }))
    .unwrap();
    assert_eq!(store.draws[0].data[0].shape["id"], "x");
}

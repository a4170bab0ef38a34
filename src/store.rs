//! Recording store: slides, pan/zoom keyframes, drawing batches, cursor trail.
//!
//! The recording processor emits one sorted-by-timestamp list per record
//! family (timestamps are seconds from the start of the recording). The store
//! is immutable once loaded; playback addresses it purely by time, and every
//! lookup resolves to the last record at or before that time. `None` plays the
//! role of the host's `-1` "nothing selected yet" sentinel and is converted
//! back to `-1` at the browser boundary.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};

use crate::geometry::ViewBox;

/// One slide change in the recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Stable slide id assigned by the recording processor.
    pub id: String,
    /// Slide image URL, possibly relative to the document origin.
    pub src: String,
    /// Intrinsic image width in board units.
    pub width: f64,
    /// Intrinsic image height in board units.
    pub height: f64,
    /// Seconds from recording start when this slide became current.
    pub timestamp: f64,
}

/// One presenter pan/zoom keyframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanzoomRecord {
    /// Seconds from recording start when this keyframe applied.
    pub timestamp: f64,
    /// The board rectangle visible on the presenter's screen.
    #[serde(flatten)]
    pub view_box: ViewBox,
}

/// One recorded shape and the time it reached this state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawEntry {
    /// Seconds from recording start when the shape reached this state.
    pub timestamp: f64,
    /// The shape as recorded: an open-ended JSON object keyed by `"id"`.
    pub shape: serde_json::Value,
}

/// The batch of drawing entries associated with one slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRecord {
    /// Seconds from recording start when this batch became current.
    pub timestamp: f64,
    /// Entries in recording order; visibility is decided per entry timestamp.
    pub data: Vec<DrawEntry>,
}

/// One presenter cursor sample, in board coordinates.
///
/// Negative coordinates mean the cursor is hidden.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CursorRecord {
    /// Seconds from recording start.
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
}

/// Which entries of the current drawing batch are visible at some time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Index of the current [`DrawRecord`].
    pub index: usize,
    /// Per-entry visibility flags for that record's `data`.
    pub visible: Vec<bool>,
}

/// Read-only snapshot of what is selected at one playback time.
///
/// Passed per computation call; no component reads the store behind the
/// engine's back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Current slide index, if any slide has appeared yet.
    pub slide: Option<usize>,
    /// Current pan/zoom keyframe index, if any.
    pub panzoom: Option<usize>,
    /// Current drawing interval, if any drawing batch has appeared yet.
    pub interval: Option<Interval>,
}

impl Selection {
    /// A viewport is active once a pan/zoom keyframe is selected.
    ///
    /// Inactive viewports render zero extents and issue no camera call.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.panzoom.is_some()
    }
}

/// Immutable in-memory recording.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingStore {
    /// Slide changes, sorted by timestamp.
    #[serde(default)]
    pub slides: Vec<SlideRecord>,
    /// Pan/zoom keyframes, sorted by timestamp.
    #[serde(default)]
    pub panzooms: Vec<PanzoomRecord>,
    /// Per-slide drawing batches, sorted by timestamp.
    #[serde(default)]
    pub draws: Vec<DrawRecord>,
    /// Presenter cursor trail, sorted by timestamp.
    #[serde(default)]
    pub cursors: Vec<CursorRecord>,
}

impl RecordingStore {
    /// Index of the last record at or before `time`, or `None` before the first.
    fn index_at<T>(records: &[T], time: f64, timestamp: impl Fn(&T) -> f64) -> Option<usize> {
        let count = records.partition_point(|record| timestamp(record) <= time);
        count.checked_sub(1)
    }

    /// Current slide index at `time`.
    #[must_use]
    pub fn slide_at(&self, time: f64) -> Option<usize> {
        Self::index_at(&self.slides, time, |record| record.timestamp)
    }

    /// Current pan/zoom keyframe index at `time`.
    #[must_use]
    pub fn panzoom_at(&self, time: f64) -> Option<usize> {
        Self::index_at(&self.panzooms, time, |record| record.timestamp)
    }

    /// Current drawing interval at `time`.
    ///
    /// Resolves the current batch, then flags each of its entries visible when
    /// the entry timestamp has been reached.
    #[must_use]
    pub fn interval_at(&self, time: f64) -> Option<Interval> {
        let index = Self::index_at(&self.draws, time, |record| record.timestamp)?;
        let record = self.draws.get(index)?;
        let visible = record.data.iter().map(|entry| entry.timestamp <= time).collect();
        Some(Interval { index, visible })
    }

    /// Current cursor sample at `time`.
    #[must_use]
    pub fn cursor_at(&self, time: f64) -> Option<CursorRecord> {
        Self::index_at(&self.cursors, time, |record| record.timestamp)
            .and_then(|index| self.cursors.get(index).copied())
    }

    /// Everything selected at `time`, as one read-only snapshot.
    #[must_use]
    pub fn selection_at(&self, time: f64) -> Selection {
        Selection {
            slide: self.slide_at(time),
            panzoom: self.panzoom_at(time),
            interval: self.interval_at(time),
        }
    }

    /// The view box of the pan/zoom keyframe named by `selection`.
    ///
    /// A degenerate default stands in while the viewport is inactive.
    #[must_use]
    pub fn view_box_for(&self, selection: &Selection) -> ViewBox {
        selection
            .panzoom
            .and_then(|index| self.panzooms.get(index))
            .map(|record| record.view_box)
            .unwrap_or_default()
    }
}

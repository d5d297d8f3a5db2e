//! Chart events.
//!
//! UI code never mutates the chart directly; it translates egui input into
//! [`ChartEvent`]s and hands them to [`Chart::dispatch`](crate::data::chart::Chart::dispatch).
//! Selection events run the update pipeline, pointer events drive hover state.

pub use crate::data::selection::SelectionEvent;

/// Pointer activity over the plot area, in scene pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved {
        position: [f64; 2],
        /// Point hit radius per axis in scene pixels (marker radius scaled by the
        /// current zoom of the rendering surface).
        hit_radius: [f64; 2],
    },
    /// Pointer left the plot area.
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Selection(SelectionEvent),
    Pointer(PointerEvent),
}

impl From<SelectionEvent> for ChartEvent {
    fn from(e: SelectionEvent) -> Self {
        ChartEvent::Selection(e)
    }
}

impl From<PointerEvent> for ChartEvent {
    fn from(e: PointerEvent) -> Self {
        ChartEvent::Pointer(e)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hover target
// ─────────────────────────────────────────────────────────────────────────────

/// What the pointer is currently over.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Hover {
    #[default]
    Nothing,
    /// The plot background (hit target).
    Plot,
    /// A point mark; it covers the hit target, so no difference readout.
    Point(crate::data::scene::PointHit),
}

//! Render engine: persistent visual elements and their reconciliation.
//!
//! The scene lives in plot-area pixel space (x to the right, y downwards, origin at
//! the top-left corner of the plot area). Every element is kept across updates and
//! moved with a [`Tween`], so a selection change animates instead of redrawing.
//! Point marks are keyed by [`RowKey`]: marks for rows that left the visible subset
//! are dropped, new rows get new marks, surviving marks move.

use std::collections::HashMap;

use super::dataset::Dataset;
use super::filter::VisibleSubset;
use super::record::{Condition, RowKey};
use super::regression::Regression;
use super::scale::{tick_decimals, LinearScale, ScaleManager, DEFAULT_DOMAIN, TICK_COUNT};
use super::transition::Tween;

/// Label of the y axis.
pub const Y_AXIS_LABEL: &str = "Mean QoM (millimeters/second)";

// ─────────────────────────────────────────────────────────────────────────────
// Elements
// ─────────────────────────────────────────────────────────────────────────────

/// One circle of a point series.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMark {
    pub key: RowKey,
    /// Index of the record in the dataset.
    pub record: usize,
    pub position: Tween<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointSeries {
    pub condition: Condition,
    /// Marks in visible-subset order.
    pub marks: Vec<PointMark>,
}

/// Regression line segment across the full x domain: `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionSegment {
    pub condition: Condition,
    pub endpoints: Tween<[f64; 4]>,
    /// `false` while the fit is undefined.
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisState {
    pub label: String,
    pub domain: Tween<[f64; 2]>,
    pub range: [f64; 2],
}

impl AxisState {
    fn new(label: &str, range: [f64; 2]) -> Self {
        Self {
            label: label.to_string(),
            domain: Tween::fixed(DEFAULT_DOMAIN),
            range,
        }
    }

    /// The axis scale as drawn at time `now`.
    pub fn scale_at(&self, now: f64) -> LinearScale {
        LinearScale::new(self.domain.value_at(now), self.range)
    }

    pub fn ticks_at(&self, now: f64) -> Vec<AxisTick> {
        let scale = self.scale_at(now);
        scale
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|value| AxisTick {
                value,
                position: scale.forward(value),
            })
            .collect()
    }

    /// Decimals needed for tick labels at time `now`.
    pub fn tick_decimals_at(&self, now: f64) -> usize {
        let ticks = self.scale_at(now).ticks(TICK_COUNT);
        match ticks.as_slice() {
            [a, b, ..] => tick_decimals((b - a).abs()),
            _ => 0,
        }
    }
}

/// Invisible rectangle covering the plot area that receives pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTarget {
    pub width: f64,
    pub height: f64,
}

impl HitTarget {
    pub fn contains(&self, pos: [f64; 2]) -> bool {
        (0.0..=self.width).contains(&pos[0]) && (0.0..=self.height).contains(&pos[1])
    }
}

/// Elements in paint order, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneElement {
    HitTarget,
    XAxis,
    YAxis,
    Segment(Condition),
    Points(Condition),
    Indicator,
}

/// Point mark found under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct PointHit {
    pub condition: Condition,
    pub record: usize,
    pub key: RowKey,
}

/// Per-point tooltip content.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub condition: Condition,
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Marks entered, moved and removed by one reconciliation, summed over both series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Everything the render engine reconciles against.
pub struct SceneInput<'a> {
    pub dataset: &'a Dataset,
    pub subset: &'a VisibleSubset,
    pub x_field: &'a str,
    pub scales: &'a ScaleManager,
    /// Indexed by [`Condition::index`].
    pub fits: &'a [Regression; 2],
}

// ─────────────────────────────────────────────────────────────────────────────
// RenderEngine
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct RenderEngine {
    pub series: [PointSeries; 2],
    pub segments: [RegressionSegment; 2],
    pub x_axis: AxisState,
    pub y_axis: AxisState,
    pub hit_target: HitTarget,
    /// Transition duration in seconds.
    pub duration: f64,
}

impl RenderEngine {
    pub fn new(width: f64, height: f64, duration: f64) -> Self {
        Self {
            series: Condition::ALL.map(|condition| PointSeries {
                condition,
                marks: Vec::new(),
            }),
            segments: Condition::ALL.map(|condition| RegressionSegment {
                condition,
                endpoints: Tween::fixed([0.0; 4]),
                visible: false,
            }),
            x_axis: AxisState::new("", [0.0, width]),
            y_axis: AxisState::new(Y_AXIS_LABEL, [height, 0.0]),
            hit_target: HitTarget { width, height },
            duration,
        }
    }

    pub fn paint_order(&self) -> [SceneElement; 8] {
        [
            SceneElement::HitTarget,
            SceneElement::XAxis,
            SceneElement::YAxis,
            SceneElement::Segment(Condition::WithMusic),
            SceneElement::Segment(Condition::WithoutMusic),
            SceneElement::Points(Condition::WithMusic),
            SceneElement::Points(Condition::WithoutMusic),
            SceneElement::Indicator,
        ]
    }

    pub fn series(&self, condition: Condition) -> &PointSeries {
        &self.series[condition.index()]
    }

    pub fn segment(&self, condition: Condition) -> &RegressionSegment {
        &self.segments[condition.index()]
    }

    /// Bring every element in line with `input`, starting transitions at `now`.
    pub fn reconcile(&mut self, input: &SceneInput<'_>, now: f64) -> ReconcileStats {
        let duration = self.duration;
        let scales = input.scales;

        self.x_axis.label = input.x_field.to_string();
        self.x_axis.domain.retarget(scales.x.domain, now, duration);
        self.y_axis.domain.retarget(scales.y.domain, now, duration);

        let mut stats = ReconcileStats::default();
        for series in self.series.iter_mut() {
            let condition = series.condition;
            let mut previous: HashMap<RowKey, PointMark> = series
                .marks
                .drain(..)
                .map(|m| (m.key.clone(), m))
                .collect();
            for &idx in input.subset.indices() {
                let record = &input.dataset.records()[idx];
                let (Some(x), Some(y)) = (record.number(input.x_field), record.response(condition))
                else {
                    continue;
                };
                let target = [scales.x.forward(x), scales.y.forward(y)];
                let mark = match previous.remove(&record.key) {
                    Some(mut mark) => {
                        mark.record = idx;
                        mark.position.retarget(target, now, duration);
                        stats.updated += 1;
                        mark
                    }
                    None => {
                        stats.entered += 1;
                        PointMark {
                            key: record.key.clone(),
                            record: idx,
                            position: Tween::new([0.0, 0.0], target, now, duration),
                        }
                    }
                };
                series.marks.push(mark);
            }
            stats.exited += previous.len();
        }

        let [x0, x1] = scales.x.domain;
        for segment in self.segments.iter_mut() {
            match input.fits[segment.condition.index()].defined() {
                Some(line) => {
                    let target = [
                        scales.x.forward(x0),
                        scales.y.forward(line.at(x0)),
                        scales.x.forward(x1),
                        scales.y.forward(line.at(x1)),
                    ];
                    segment.endpoints.retarget(target, now, duration);
                    segment.visible = true;
                }
                None => segment.visible = false,
            }
        }
        stats
    }

    /// Whether any transition is still running at `now`.
    pub fn is_animating(&self, now: f64) -> bool {
        !self.x_axis.domain.is_settled(now)
            || !self.y_axis.domain.is_settled(now)
            || self
                .segments
                .iter()
                .any(|s| s.visible && !s.endpoints.is_settled(now))
            || self
                .series
                .iter()
                .flat_map(|s| s.marks.iter())
                .any(|m| !m.position.is_settled(now))
    }

    /// Topmost point mark within `radius` (per-axis, pixels) of `pos`.
    pub fn hit_test(&self, now: f64, pos: [f64; 2], radius: [f64; 2]) -> Option<PointHit> {
        if radius[0] <= 0.0 || radius[1] <= 0.0 {
            return None;
        }
        // Later series and later marks paint on top.
        for series in self.series.iter().rev() {
            for mark in series.marks.iter().rev() {
                let p = mark.position.value_at(now);
                let dx = (p[0] - pos[0]) / radius[0];
                let dy = (p[1] - pos[1]) / radius[1];
                if dx * dx + dy * dy <= 1.0 {
                    return Some(PointHit {
                        condition: series.condition,
                        record: mark.record,
                        key: mark.key.clone(),
                    });
                }
            }
        }
        None
    }
}

/// Tooltip for a hovered point: subject, group, x value and the series' response.
pub fn tooltip(dataset: &Dataset, x_field: &str, hit: &PointHit, decimals: usize) -> Option<Tooltip> {
    let record = dataset.records().get(hit.record)?;
    let x = record.number(x_field)?;
    let y = record.response(hit.condition)?;
    Some(Tooltip {
        condition: hit.condition,
        lines: vec![
            format!("Subject: {}", record.subject()),
            format!("Group: {}", record.group),
            format!("{}: {}", x_field, x),
            format!("{}: {:.*}", hit.condition.response_label(), decimals, y),
        ],
    })
}

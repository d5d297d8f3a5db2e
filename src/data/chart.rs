//! Update orchestrator.
//!
//! [`Chart`] owns the dataset, the selection and the scene. Every selection change
//! runs the same pipeline synchronously:
//!
//! 1. filter the dataset ([`filter`])
//! 2. derive the axis domains ([`ScaleManager::derive`])
//! 3. fit one regression per condition ([`fit`])
//! 4. reconcile the scene ([`RenderEngine::reconcile`])
//!
//! Pointer events only touch hover state; the difference readout is recomputed from
//! the current fits whenever it is asked for.

use tracing::debug;

use super::dataset::Dataset;
use super::filter::{filter, VisibleSubset};
use super::interaction::{DiffReadout, InteractionLayer, InteractionState};
use super::record::Condition;
use super::regression::{fit, fit_points, Regression};
use super::scale::ScaleManager;
use super::scene::{tooltip, ReconcileStats, RenderEngine, SceneInput, Tooltip};
use super::selection::{Selection, SelectionEvent};
use crate::config::QomPlotConfig;
use crate::error::ChartError;
use crate::events::{ChartEvent, Hover, PointerEvent};

pub struct Chart {
    dataset: Dataset,
    selection: Selection,
    subset: VisibleSubset,
    scales: ScaleManager,
    fits: [Regression; 2],
    scene: RenderEngine,
    interaction: InteractionLayer,
    hover: Hover,
    readout_decimals: usize,
}

impl Chart {
    /// Build the chart and run the first update at time `now`.
    pub fn new(dataset: Dataset, config: &QomPlotConfig, now: f64) -> Self {
        let width = config.geometry.plot_width();
        let height = config.geometry.plot_height();
        let selection = Selection::initial(&dataset, &config.default_x_variable);
        let empty = fit_points(&[]);
        let mut chart = Self {
            dataset,
            selection,
            subset: VisibleSubset::default(),
            scales: ScaleManager::empty(width, height),
            fits: [empty, empty],
            scene: RenderEngine::new(width, height, config.transition_secs.max(0.0)),
            interaction: InteractionLayer::default(),
            hover: Hover::Nothing,
            readout_decimals: config.readout_decimals,
        };
        chart.on_selection_change(now);
        chart
    }

    /// Route one event. Selection events run the full update pipeline.
    pub fn dispatch(&mut self, event: ChartEvent, now: f64) -> Result<(), ChartError> {
        match event {
            ChartEvent::Selection(e) => self.select(e, now).map(|_| ()),
            ChartEvent::Pointer(e) => {
                self.pointer(e, now);
                Ok(())
            }
        }
    }

    /// Apply a control change, then update. Rejected changes skip the update.
    pub fn select(
        &mut self,
        event: SelectionEvent,
        now: f64,
    ) -> Result<ReconcileStats, ChartError> {
        if let Err(e) = self.selection.apply(event, &self.dataset) {
            tracing::warn!(error = %e, "selection change rejected");
            return Err(e);
        }
        Ok(self.on_selection_change(now))
    }

    /// Filter → scales → fits → reconcile, once.
    pub fn on_selection_change(&mut self, now: f64) -> ReconcileStats {
        let x_field = self.selection.x_variable.as_str();
        self.subset = filter(self.dataset.records(), &self.selection);
        self.scales = ScaleManager::derive(
            &self.dataset,
            &self.subset,
            x_field,
            self.scene.hit_target.width,
            self.scene.hit_target.height,
        );
        self.fits = Condition::ALL.map(|c| {
            fit(
                self.subset.records(&self.dataset),
                x_field,
                c.response_column(),
            )
        });
        for c in Condition::ALL {
            let reg = &self.fits[c.index()];
            if !reg.is_defined() {
                debug!(
                    condition = ?c,
                    samples = reg.samples,
                    "regression undefined; line hidden"
                );
            }
        }

        let stats = self.scene.reconcile(
            &SceneInput {
                dataset: &self.dataset,
                subset: &self.subset,
                x_field,
                scales: &self.scales,
                fits: &self.fits,
            },
            now,
        );

        if let Hover::Point(hit) = &self.hover {
            let still_there = self
                .scene
                .series(hit.condition)
                .marks
                .iter()
                .any(|m| m.key == hit.key);
            if !still_there {
                self.hover = Hover::Nothing;
            }
        }
        if self.subset.is_empty() {
            self.interaction.leave();
        }

        debug!(
            x_variable = %self.selection.x_variable,
            knees_locked = self.selection.knees_locked,
            eyes_closed = self.selection.eyes_closed,
            visible = self.subset.len(),
            entered = stats.entered,
            updated = stats.updated,
            exited = stats.exited,
            "chart updated"
        );
        stats
    }

    fn pointer(&mut self, event: PointerEvent, now: f64) {
        match event {
            PointerEvent::Moved {
                position,
                hit_radius,
            } => {
                if let Some(hit) = self.scene.hit_test(now, position, hit_radius) {
                    self.hover = Hover::Point(hit);
                    self.interaction.leave();
                } else if self.scene.hit_target.contains(position) {
                    self.hover = Hover::Plot;
                    if self.subset.is_empty() {
                        self.interaction.leave();
                    } else {
                        self.interaction.track(position[0]);
                    }
                } else {
                    self.hover = Hover::Nothing;
                    self.interaction.leave();
                }
            }
            PointerEvent::Left => {
                self.hover = Hover::Nothing;
                self.interaction.leave();
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn visible(&self) -> &VisibleSubset {
        &self.subset
    }

    pub fn scales(&self) -> &ScaleManager {
        &self.scales
    }

    pub fn fits(&self) -> &[Regression; 2] {
        &self.fits
    }

    pub fn fit_for(&self, condition: Condition) -> &Regression {
        &self.fits[condition.index()]
    }

    pub fn scene(&self) -> &RenderEngine {
        &self.scene
    }

    pub fn hover(&self) -> &Hover {
        &self.hover
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn readout_decimals(&self) -> usize {
        self.readout_decimals
    }

    /// Difference readout for the tracked pointer position, if any.
    pub fn readout(&self) -> Option<DiffReadout> {
        self.interaction.readout(&self.scales, &self.fits)
    }

    /// Tooltip of the hovered point, if any.
    pub fn tooltip(&self) -> Option<Tooltip> {
        match &self.hover {
            Hover::Point(hit) => tooltip(
                &self.dataset,
                &self.selection.x_variable,
                hit,
                self.readout_decimals,
            ),
            _ => None,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.scene.is_animating(now)
    }
}

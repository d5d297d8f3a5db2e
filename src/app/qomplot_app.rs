//! Standalone application wrapper.
//!
//! [`QomPlotApp`] owns the [`Chart`] and the panels that present it, and
//! implements [`eframe::App`]. Panels only read the chart while they are laid
//! out; the events they return are dispatched once the frame's widgets are done.

use eframe::egui;
use tracing::warn;

use crate::config::QomPlotConfig;
use crate::data::chart::Chart;
use crate::data::dataset::Dataset;
use crate::events::ChartEvent;
use crate::panels::{ControlsPanel, Panel, ScatterPanel};

pub struct QomPlotApp {
    pub chart: Chart,

    /// Panels docked to the left of the plot.
    pub left_side_panels: Vec<Box<dyn Panel>>,

    /// The scatter plot filling the central area.
    pub scatter: ScatterPanel,

    /// Heading shown above the plot.
    pub headline: Option<String>,
}

impl QomPlotApp {
    pub fn new(dataset: Dataset, config: &QomPlotConfig) -> Self {
        Self {
            chart: Chart::new(dataset, config, 0.0),
            left_side_panels: vec![Box::new(ControlsPanel::default())],
            scatter: ScatterPanel::new(&config.style),
            headline: Some(config.title.clone()).filter(|t| !t.is_empty()),
        }
    }

    /// Dispatch the events collected during one frame.
    pub fn apply_events(&mut self, events: Vec<ChartEvent>, now: f64) {
        for event in events {
            if let Err(e) = self.chart.dispatch(event, now) {
                warn!(error = %e, "event ignored");
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for QomPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let mut events = Vec::new();

        if let Some(h) = &self.headline {
            egui::TopBottomPanel::top("qomplot_headline").show(ctx, |ui| {
                ui.heading(h);
            });
        }

        if self.left_side_panels.iter().any(|p| p.state().visible) {
            egui::SidePanel::left("qomplot_left_sidebar")
                .resizable(true)
                .default_width(260.0)
                .min_width(160.0)
                .show(ctx, |ui| {
                    for panel in self.left_side_panels.iter_mut() {
                        if panel.state().visible {
                            events.extend(panel.render_panel(ui, &self.chart, now));
                        }
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            events.extend(self.scatter.render_panel(ui, &self.chart, now));
        });

        self.apply_events(events, now);

        // Pointer input repaints on its own; transitions need frames of their own.
        if self.chart.is_animating(now) {
            ctx.request_repaint();
        }
    }
}

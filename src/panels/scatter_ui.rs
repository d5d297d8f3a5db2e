//! Scatter plot panel: draws the chart scene with `egui_plot`.
//!
//! Plot coordinates are scene pixels with the y axis flipped (`plot_y = height -
//! scene_y`), so the plot bounds are fixed to the plot area and the axes get their
//! tick positions and labels from the scene's animated axis scales.

use egui::{Align2, Color32, RichText, Ui};
use egui_phosphor::regular::CHART_LINE;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoint, Points, Text};

use super::panel_trait::{Panel, PanelState};
use crate::config::ChartStyle;
use crate::data::chart::Chart;
use crate::data::scene::AxisState;
use crate::data::series_look::{series_looks, IndicatorLook, SeriesLook};
use crate::events::{ChartEvent, Hover, PointerEvent};

pub struct ScatterPanel {
    pub state: PanelState,
    looks: [SeriesLook; 2],
    indicator: IndicatorLook,
}

impl Default for ScatterPanel {
    fn default() -> Self {
        Self::new(&ChartStyle::default())
    }
}

impl ScatterPanel {
    pub const NO_DATA_LABEL: &'static str = "No records match the current selection";

    pub fn new(style: &ChartStyle) -> Self {
        Self {
            state: PanelState::new("Scatter", CHART_LINE),
            looks: series_looks(style),
            indicator: IndicatorLook::default(),
        }
    }
}

/// Grid marks for an axis at time `now`, in plot coordinates.
fn grid_marks(axis: &AxisState, now: f64, flip: Option<f64>) -> Vec<GridMark> {
    let ticks = axis.ticks_at(now);
    let step = match ticks.as_slice() {
        [a, b, ..] => (b.position - a.position).abs(),
        _ => (axis.range[1] - axis.range[0]).abs(),
    };
    ticks
        .iter()
        .map(|t| GridMark {
            value: flip.map_or(t.position, |h| h - t.position),
            step_size: step,
        })
        .collect()
}

fn format_tick(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

impl Panel for ScatterPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, chart: &Chart, now: f64) -> Vec<ChartEvent> {
        let scene = chart.scene();
        let width = scene.hit_target.width;
        let height = scene.hit_target.height;

        let x_scale = scene.x_axis.scale_at(now);
        let y_scale = scene.y_axis.scale_at(now);
        let x_decimals = scene.x_axis.tick_decimals_at(now);
        let y_decimals = scene.y_axis.tick_decimals_at(now);
        let x_marks = grid_marks(&scene.x_axis, now, None);
        let y_marks = grid_marks(&scene.y_axis, now, Some(height));

        let plot = Plot::new("qom_scatter")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .x_axis_label(scene.x_axis.label.clone())
            .y_axis_label(scene.y_axis.label.clone())
            .legend(Legend::default())
            .x_grid_spacer(move |_input| x_marks.clone())
            .y_grid_spacer(move |_input| y_marks.clone())
            .x_axis_formatter(move |mark, _range| {
                format_tick(x_scale.invert(mark.value), x_decimals)
            })
            .y_axis_formatter(move |mark, _range| {
                format_tick(y_scale.invert(height - mark.value), y_decimals)
            });

        let readout = chart.readout();
        let decimals = chart.readout_decimals();
        let looks = &self.looks;
        let indicator = &self.indicator;
        let empty = chart.visible().is_empty();

        let plot_resp = plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(0.0..=width);
            plot_ui.set_plot_bounds_y(0.0..=height);

            for (segment, look) in scene.segments.iter().zip(looks.iter()) {
                if !segment.visible {
                    continue;
                }
                let [x1, y1, x2, y2] = segment.endpoints.value_at(now);
                plot_ui.line(
                    Line::new(look.label(), vec![[x1, height - y1], [x2, height - y2]])
                        .color(look.line_color())
                        .width(look.line_width),
                );
            }

            for (series, look) in scene.series.iter().zip(looks.iter()) {
                if series.marks.is_empty() {
                    continue;
                }
                let pts: Vec<[f64; 2]> = series
                    .marks
                    .iter()
                    .map(|m| {
                        let [x, y] = m.position.value_at(now);
                        [x, height - y]
                    })
                    .collect();
                plot_ui.points(
                    Points::new(look.label(), pts)
                        .radius(look.point_radius)
                        .shape(look.marker)
                        .color(look.color)
                        .filled(true),
                );
            }

            if let Some(readout) = &readout {
                if let Some(ind) = readout.indicator {
                    plot_ui.line(
                        Line::new("", vec![[ind.x, height - ind.y1], [ind.x, height - ind.y2]])
                            .color(indicator.color)
                            .width(indicator.width)
                            .style(indicator.style),
                    );
                }
                let [ax, ay] = readout.anchor;
                let text = RichText::new(readout.text(decimals))
                    .color(Color32::BLACK)
                    .background_color(Color32::from_white_alpha(242));
                plot_ui.text(
                    Text::new("", PlotPoint::new(ax + 8.0, height - ay), text)
                        .anchor(Align2::LEFT_CENTER),
                );
            }

            if empty {
                plot_ui.text(
                    Text::new(
                        "",
                        PlotPoint::new(width / 2.0, height / 2.0),
                        RichText::new(Self::NO_DATA_LABEL).weak(),
                    )
                    .anchor(Align2::CENTER_CENTER),
                );
            }
        });

        let mut events = Vec::new();
        match plot_resp.response.hover_pos() {
            Some(screen_pos) => {
                let p = plot_resp.transform.value_from_position(screen_pos);
                let dv = plot_resp.transform.dvalue_dpos();
                let r = f64::from(self.looks[0].point_radius);
                events.push(
                    PointerEvent::Moved {
                        position: [p.x, height - p.y],
                        hit_radius: [r * dv[0].abs(), r * dv[1].abs()],
                    }
                    .into(),
                );
                if let Some(tip) = chart.tooltip() {
                    let color = self.looks[tip.condition.index()].color;
                    egui::Area::new(egui::Id::new("qom_point_tooltip"))
                        .order(egui::Order::Tooltip)
                        .interactable(false)
                        .fixed_pos(screen_pos + egui::vec2(10.0, -20.0))
                        .show(ui.ctx(), |ui| {
                            egui::Frame::popup(ui.style())
                                .fill(color.gamma_multiply(0.9))
                                .show(ui, |ui| {
                                    ui.label(RichText::new(tip.text()).color(Color32::WHITE));
                                });
                        });
                }
            }
            None => {
                if !matches!(chart.hover(), Hover::Nothing) {
                    events.push(PointerEvent::Left.into());
                }
            }
        }
        events
    }
}

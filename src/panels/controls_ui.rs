use egui::{RichText, Ui};
use egui_phosphor::regular::SLIDERS;

use super::panel_trait::{Panel, PanelState};
use crate::data::chart::Chart;
use crate::data::record::Condition;
use crate::events::{ChartEvent, SelectionEvent};

/// X-variable picker, the two setup toggles and a short fit summary.
pub struct ControlsPanel {
    pub state: PanelState,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Controls", SLIDERS),
        }
    }
}

impl ControlsPanel {
    pub const X_VARIABLE_LABEL: &'static str = "X variable";
    pub const KNEES_LOCKED_LABEL: &'static str = "Knees locked";
    pub const EYES_CLOSED_LABEL: &'static str = "Eyes closed";
}

impl Panel for ControlsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, chart: &Chart, _now: f64) -> Vec<ChartEvent> {
        let mut events = Vec::new();
        let selection = chart.selection();

        ui.heading(self.title_and_icon());
        ui.add_space(4.0);

        let mut x_variable = selection.x_variable.clone();
        egui::ComboBox::from_label(Self::X_VARIABLE_LABEL)
            .selected_text(x_variable.as_str())
            .show_ui(ui, |ui| {
                for name in chart.dataset().candidate_variables() {
                    ui.selectable_value(&mut x_variable, name.clone(), name.as_str());
                }
            });
        if x_variable != selection.x_variable {
            events.push(SelectionEvent::XVariable(x_variable).into());
        }

        let mut knees_locked = selection.knees_locked;
        if ui
            .checkbox(&mut knees_locked, Self::KNEES_LOCKED_LABEL)
            .changed()
        {
            events.push(SelectionEvent::KneesLocked(knees_locked).into());
        }
        let mut eyes_closed = selection.eyes_closed;
        if ui
            .checkbox(&mut eyes_closed, Self::EYES_CLOSED_LABEL)
            .changed()
        {
            events.push(SelectionEvent::EyesClosed(eyes_closed).into());
        }

        ui.separator();
        ui.label(format!(
            "{} of {} records visible",
            chart.visible().len(),
            chart.dataset().len()
        ));
        let decimals = chart.readout_decimals();
        for c in Condition::ALL {
            let text = match chart.fit_for(c).defined() {
                Some(line) => format!(
                    "{}: y = {:.*}·x + {:.*}",
                    c.short_label(),
                    decimals,
                    line.slope,
                    decimals,
                    line.intercept
                ),
                None => format!("{}: no regression", c.short_label()),
            };
            ui.label(RichText::new(text).weak());
        }
        events
    }
}

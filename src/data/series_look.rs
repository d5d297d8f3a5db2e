//! SeriesLook: visual styling for the two response series.

use eframe::egui;
use egui_plot::{LineStyle, MarkerShape};

use super::record::Condition;
use crate::config::ChartStyle;

/// The visual presentation of one condition's points and regression line.
#[derive(Debug, Clone)]
pub struct SeriesLook {
    pub condition: Condition,
    pub color: egui::Color32,
    pub point_radius: f32,
    pub marker: MarkerShape,
    pub line_width: f32,
    pub line_opacity: f32,
}

impl SeriesLook {
    pub fn new(condition: Condition, style: &ChartStyle) -> Self {
        let rgb = match condition {
            Condition::WithMusic => style.colors.with_music,
            Condition::WithoutMusic => style.colors.without_music,
        };
        Self {
            condition,
            color: egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]),
            point_radius: style.point_radius.max(0.5),
            marker: MarkerShape::Circle,
            line_width: style.line_width.max(0.1),
            line_opacity: style.line_opacity.clamp(0.0, 1.0),
        }
    }

    /// Legend entry; points and regression line share it so they toggle together.
    pub fn label(&self) -> &'static str {
        self.condition.legend_label()
    }

    /// Colour of the regression line (series colour at `line_opacity`).
    pub fn line_color(&self) -> egui::Color32 {
        self.color.gamma_multiply(self.line_opacity)
    }
}

/// Style of the dashed vertical indicator between the two fitted lines.
#[derive(Debug, Clone)]
pub struct IndicatorLook {
    pub color: egui::Color32,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for IndicatorLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            width: 1.5,
            style: LineStyle::Dashed { length: 4.0 },
        }
    }
}

/// Looks for both conditions, indexed by [`Condition::index`].
pub fn series_looks(style: &ChartStyle) -> [SeriesLook; 2] {
    Condition::ALL.map(|c| SeriesLook::new(c, style))
}

//! Configuration for the QoM plot.
//!
//! A [`QomPlotConfig`] can be built in code or loaded from a YAML or JSON file.
//! Every key is optional; missing keys fall back to [`Default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Column picked as x variable when the chart first opens.
pub const DEFAULT_X_VARIABLE: &str = "Music listening hours/week";

// ─────────────────────────────────────────────────────────────────────────────
// Plot geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 50.0,
            bottom: 70.0,
            left: 80.0,
        }
    }
}

/// Size of the drawing surface. Scene coordinates live inside the plot area,
/// i.e. the surface minus its margins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            margins: Margins::default(),
        }
    }
}

impl PlotGeometry {
    /// Width of the plot area (x range is `[0, plot_width]`).
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(1.0)
    }

    /// Height of the plot area (y range is `[plot_height, 0]`).
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(1.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Styling
// ─────────────────────────────────────────────────────────────────────────────

/// RGB colours of the two response series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesColors {
    pub with_music: [u8; 3],
    pub without_music: [u8; 3],
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self {
            with_music: [0x1f, 0x77, 0xb4],
            without_music: [0xd6, 0x27, 0x28],
        }
    }
}

/// Marker and line appearance shared by both series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Point marker radius in pixels.
    pub point_radius: f32,
    /// Regression line width in pixels.
    pub line_width: f32,
    /// Regression line opacity (0..=1).
    pub line_opacity: f32,
    pub colors: SeriesColors,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            point_radius: 5.0,
            line_width: 2.0,
            line_opacity: 0.6,
            colors: SeriesColors::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// QomPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field                | Purpose |
/// |----------------------|---------|
/// | `data_path`          | CSV file loaded at startup |
/// | `default_x_variable` | Initial x variable |
/// | `geometry`           | Drawing surface size and margins |
/// | `transition_secs`    | Duration of every animated attribute change |
/// | `readout_decimals`   | Precision of the difference readout and tooltips |
/// | `style`              | Marker/line appearance and series colours |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QomPlotConfig {
    /// Native window title.
    pub title: String,
    pub data_path: PathBuf,
    pub default_x_variable: String,
    pub geometry: PlotGeometry,
    pub transition_secs: f64,
    pub readout_decimals: usize,
    pub style: ChartStyle,
}

impl Default for QomPlotConfig {
    fn default() -> Self {
        Self {
            title: "Quantity of Movement".to_string(),
            data_path: PathBuf::from("reports.csv"),
            default_x_variable: DEFAULT_X_VARIABLE.to_string(),
            geometry: PlotGeometry::default(),
            transition_secs: 0.5,
            readout_decimals: 2,
            style: ChartStyle::default(),
        }
    }
}

impl QomPlotConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a config file, picking the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&read()?),
            Some("json") => Self::from_json_str(&read()?),
            _ => Err(ConfigError::UnknownFormat(path.to_path_buf())),
        }
    }
}

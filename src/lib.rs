//! QoM plot crate root: re-exports and module wiring.
//!
//! An interactive scatter plot of quantity-of-movement (QoM) measures recorded with
//! and without music, with one least-squares line per condition and a pointer-driven
//! readout of the predicted gap between them.
//!
//! - `data`: dataset store, filtering, regression, scales and the scene model
//! - `events`: chart event types dispatched by the UI
//! - `config`: configuration and file loading
//! - `error`: typed errors for loading and chart control
//! - `panels`: egui panels (controls, scatter plot)
//! - `app`: eframe application and run helper

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_qomplot, QomPlotApp};
pub use config::QomPlotConfig;
pub use data::chart::Chart;
pub use data::dataset::Dataset;
pub use error::{ChartError, ConfigError, DatasetError};
pub use events::{ChartEvent, PointerEvent, SelectionEvent};

//! Application shell.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`qomplot_app`]  | [`QomPlotApp`] (eframe) owning the chart and its panels |
//! | [`run`]          | Top-level [`run_qomplot()`] entry point and icon loading |

mod qomplot_app;
mod run;

pub use qomplot_app::QomPlotApp;
pub use run::run_qomplot;

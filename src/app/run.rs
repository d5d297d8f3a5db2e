//! Top-level entry point for running the QoM plot as a native window.

use eframe::egui;
use tracing::info;

use crate::config::QomPlotConfig;
use crate::data::dataset::Dataset;

use super::qomplot_app::QomPlotApp;

/// Open a native window showing `dataset` and block until it is closed.
pub fn run_qomplot(dataset: Dataset, cfg: QomPlotConfig) -> eframe::Result<()> {
    let app = QomPlotApp::new(dataset, &cfg);

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(
        (cfg.geometry.width + 300.0) as f32,
        (cfg.geometry.height + 80.0) as f32,
    ));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    info!(
        records = app.chart.dataset().len(),
        x_variable = %app.chart.selection().x_variable,
        "opening window"
    );

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}

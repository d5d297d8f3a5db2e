// qomplot: interactive QoM scatter plot.
//
// Usage: qomplot [--config <file.yaml|file.json>] [<data.csv>]
//
// Without a config file the built-in defaults are used. The csv path given on
// the command line overrides `data_path` from the config.

use std::path::PathBuf;

use qomplot::{run_qomplot, Dataset, QomPlotConfig};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut config_path: Option<PathBuf> = None;
    let mut csv_path: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = Some(PathBuf::from(
                args.next().ok_or("--config expects a file path")?,
            ));
        } else if csv_path.is_none() {
            csv_path = Some(PathBuf::from(arg));
        }
    }

    let mut cfg = match &config_path {
        Some(path) => QomPlotConfig::load(path)?,
        None => QomPlotConfig::default(),
    };
    if let Some(path) = csv_path {
        cfg.data_path = path;
    }
    info!(config = ?config_path, data = ?cfg.data_path, "starting");

    let dataset = Dataset::from_path(&cfg.data_path)?;
    run_qomplot(dataset, cfg)?;
    Ok(())
}

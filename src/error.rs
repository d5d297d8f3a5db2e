//! Error types for dataset loading, configuration and chart control.

use std::path::PathBuf;

/// Failure while loading the tabular dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column {0:?} is missing from the header")]
    MissingColumn(String),
    #[error("dataset has no numeric column usable as x variable")]
    NoCandidateVariables,
}

/// Failure while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format {0:?} (expected .yaml, .yml or .json)")]
    UnknownFormat(PathBuf),
}

/// Rejected chart control request. The chart state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("{0:?} is not a numeric column of the dataset")]
    UnknownVariable(String),
}

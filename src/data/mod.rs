pub mod chart;
pub mod dataset;
pub mod filter;
pub mod interaction;
pub mod record;
pub mod regression;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod series_look;
pub mod transition;

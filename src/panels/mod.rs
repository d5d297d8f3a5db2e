pub mod controls_ui;
pub mod panel_trait;
pub mod scatter_ui;

pub use controls_ui::ControlsPanel;
pub use panel_trait::{Panel, PanelState};
pub use scatter_ui::ScatterPanel;

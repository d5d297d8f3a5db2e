use qomplot::config::{QomPlotConfig, DEFAULT_X_VARIABLE};
use qomplot::ConfigError;

#[test]
fn defaults() {
    let cfg = QomPlotConfig::default();
    assert_eq!(cfg.default_x_variable, DEFAULT_X_VARIABLE);
    assert_eq!(cfg.transition_secs, 0.5);
    assert_eq!(cfg.readout_decimals, 2);
    assert_eq!(cfg.geometry.plot_width(), 770.0);
    assert_eq!(cfg.geometry.plot_height(), 480.0);
    assert_eq!(cfg.style.colors.with_music, [0x1f, 0x77, 0xb4]);
}

#[test]
fn yaml_keys_override_defaults() {
    let cfg = QomPlotConfig::from_yaml_str(
        "transition_secs: 0.25\nstyle:\n  point_radius: 3.0\ndata_path: sessions.csv\n",
    )
    .unwrap();
    assert_eq!(cfg.transition_secs, 0.25);
    assert_eq!(cfg.style.point_radius, 3.0);
    assert_eq!(cfg.style.line_width, 2.0);
    assert_eq!(cfg.data_path.to_str(), Some("sessions.csv"));
    assert_eq!(cfg.readout_decimals, 2);
}

#[test]
fn json_nested_geometry() {
    let cfg = QomPlotConfig::from_json_str(r#"{"geometry": {"width": 1000}}"#).unwrap();
    assert_eq!(cfg.geometry.height, 600.0);
    assert_eq!(cfg.geometry.plot_width(), 870.0);
}

#[test]
fn config_roundtrips_through_yaml() {
    let cfg = QomPlotConfig {
        readout_decimals: 3,
        ..Default::default()
    };
    let text = serde_yaml::to_string(&cfg).unwrap();
    assert_eq!(QomPlotConfig::from_yaml_str(&text).unwrap(), cfg);
}

#[test]
fn load_picks_parser_by_extension() {
    assert!(matches!(
        QomPlotConfig::load("settings.toml"),
        Err(ConfigError::UnknownFormat(_))
    ));
    assert!(matches!(
        QomPlotConfig::load("no/such/dir/settings.yaml"),
        Err(ConfigError::Io { .. })
    ));
    assert!(matches!(
        QomPlotConfig::from_yaml_str("transition_secs: [1, 2]"),
        Err(ConfigError::Yaml(_))
    ));
}

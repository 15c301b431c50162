use super::*;

#[test]
fn defaults_validate() {
    let cfg = ViewerConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.animation_rate, 0.3);
    assert_eq!(cfg.control_path, PathBuf::from("control.txt"));
    assert_eq!(cfg.marker_segments, 100);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = ViewerConfig::from_json(r#"{ "animation_rate": 1.5, "ease": "linear" }"#).unwrap();
    assert_eq!(cfg.animation_rate, 1.5);
    assert_eq!(cfg.ease, Ease::Linear);
    assert_eq!(cfg.world_height, 20.0);
}

#[test]
fn empty_object_equals_default() {
    assert_eq!(
        ViewerConfig::from_json("{}").unwrap(),
        ViewerConfig::default()
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ViewerConfig::from_json(r#"{ "animation_speed": 2 }"#).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn out_of_range_values_are_rejected() {
    for json in [
        r#"{ "animation_rate": 0 }"#,
        r#"{ "world_height": -1 }"#,
        r#"{ "marker_segments": 2 }"#,
        r#"{ "grid_ramp_period": 1 }"#,
        r#"{ "grid_half_extent": -1 }"#,
        r#"{ "grid_half_extent": 1073741824 }"#,
        r#"{ "axis_width_px": -3 }"#,
    ] {
        assert!(ViewerConfig::from_json(json).is_err(), "{json}");
    }
}

#[test]
fn json_roundtrip_preserves_values() {
    let cfg = ViewerConfig {
        ease: Ease::Linear,
        marker_radius: 0.75,
        ..ViewerConfig::default()
    };
    let text = serde_json::to_string(&cfg).unwrap();
    assert_eq!(ViewerConfig::from_json(&text).unwrap(), cfg);
}

#[test]
fn missing_file_is_a_config_error() {
    let err = ViewerConfig::from_path("target/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, LaLineaError::Config(_)));
}

#[test]
fn grid_half_extent_bound_is_inclusive() {
    let cfg = ViewerConfig {
        grid_half_extent: MAX_GRID_HALF_EXTENT,
        ..ViewerConfig::default()
    };
    assert!(cfg.validate().is_ok());

    let err = ViewerConfig {
        grid_half_extent: MAX_GRID_HALF_EXTENT + 1,
        ..ViewerConfig::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("grid_half_extent"));
}

use termcandle::ChartError;
use termcandle::axis::{AxisConfig, RoundingDirection, RoundingPolicy};

#[test]
fn default_config_validates() {
    let config = AxisConfig::default().validate().expect("default is valid");
    assert_eq!(config.tick_spacing, 4);
    assert_eq!(config.rounding.multiplier, 0.0);
}

#[test]
fn zero_tick_spacing_is_rejected() {
    let config = AxisConfig {
        tick_spacing: 0,
        ..AxisConfig::default()
    };
    let err = config.validate().expect_err("spacing must be >= 1");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn negative_rounding_multiplier_is_rejected() {
    let config = AxisConfig {
        rounding: RoundingPolicy {
            multiplier: -1.0,
            ..RoundingPolicy::default()
        },
        ..AxisConfig::default()
    };
    let err = config.validate().expect_err("multiplier must be >= 0");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn non_finite_rounding_multiplier_is_rejected() {
    let config = AxisConfig {
        rounding: RoundingPolicy {
            multiplier: f64::NAN,
            ..RoundingPolicy::default()
        },
        ..AxisConfig::default()
    };
    let err = config.validate().expect_err("multiplier must be finite");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn config_loads_from_json_with_defaults_for_missing_fields() {
    let config = AxisConfig::from_json_str("{}").expect("empty object uses defaults");
    assert_eq!(config, AxisConfig::default());

    let config = AxisConfig::from_json_str(
        r#"{
            "format": { "int_width": 6, "dec_precision": 3 },
            "tick_spacing": 2,
            "rounding": { "multiplier": 1.0, "direction": "up" }
        }"#,
    )
    .expect("explicit config parses");
    assert_eq!(config.format.int_width, 6);
    assert_eq!(config.format.dec_precision, 3);
    assert_eq!(config.tick_spacing, 2);
    assert_eq!(config.rounding.direction, RoundingDirection::Up);
}

#[test]
fn invalid_json_config_is_rejected_before_use() {
    let err = AxisConfig::from_json_str(r#"{ "tick_spacing": 0 }"#)
        .expect_err("validation runs after parsing");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = AxisConfig::from_json_str("not json").expect_err("parse error surfaces");
    assert!(matches!(err, ChartError::Json(_)));
}

#[test]
fn config_round_trips_through_json() {
    let config = AxisConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let parsed = AxisConfig::from_json_str(&json).expect("parse back");
    assert_eq!(parsed, config);
}

use geomemo_core::{ConfigError, Coordinate, EngineConfig};

#[test]
fn empty_document_yields_defaults() {
    let config = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.nearby_radius_meters, 10.0);
    assert_eq!(config.trending_limit, 6);
    assert_eq!(config.max_note_chars, 1000);
    assert_eq!(config.default_location, Coordinate::new(51.505, -0.09));
    assert!(config.follow_live_while_simulating);
}

#[test]
fn partial_document_overrides_only_named_fields() {
    let config = EngineConfig::from_json_str(
        r#"{ "nearby_radius_meters": 25.5, "default_location": { "lat": 40.0, "lng": -74.0 } }"#,
    )
    .unwrap();
    assert_eq!(config.nearby_radius_meters, 25.5);
    assert_eq!(config.default_location, Coordinate::new(40.0, -74.0));
    assert_eq!(config.trending_limit, 6);
}

#[test]
fn invalid_values_are_rejected() {
    let radius = EngineConfig::from_json_str(r#"{ "nearby_radius_meters": -1 }"#).unwrap_err();
    assert!(matches!(radius, ConfigError::InvalidRadius(value) if value == -1.0));

    let limit = EngineConfig::from_json_str(r#"{ "trending_limit": 0 }"#).unwrap_err();
    assert!(matches!(limit, ConfigError::InvalidTrendingLimit));

    let chars = EngineConfig::from_json_str(r#"{ "max_note_chars": 5000 }"#).unwrap_err();
    assert!(matches!(chars, ConfigError::InvalidMaxNoteChars(5000)));

    let location = EngineConfig::from_json_str(
        r#"{ "default_location": { "lat": 100.0, "lng": 0.0 } }"#,
    )
    .unwrap_err();
    assert!(matches!(location, ConfigError::InvalidDefaultLocation(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = EngineConfig::from_json_str("[1, 2").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid engine config"));
}

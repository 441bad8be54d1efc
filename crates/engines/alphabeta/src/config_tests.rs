use super::*;

#[test]
fn test_empty_document_gives_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_partial_weights_keep_other_defaults() {
    let config = EngineConfig::from_toml_str(
        r#"
        max_depth = 5
        move_time_ms = 250
        key_seed = 9

        [weights]
        capture = 2.5

        [ordering]
        check = 3.0
        "#,
    )
    .unwrap();
    assert_eq!(config.max_depth, 5);
    assert_eq!(config.move_time(), Some(Duration::from_millis(250)));
    assert_eq!(config.key_seed, Some(9));
    assert_eq!(config.weights.capture, 2.5);
    assert_eq!(config.weights.checkmate, EvalWeights::default().checkmate);
    assert_eq!(config.ordering.check, 3.0);
    assert_eq!(config.ordering.capture, OrderingWeights::default().capture);

    let limits = config.search_limits();
    assert!(limits.iterative);
    assert_eq!(limits.depth, 5);
    assert_eq!(limits.move_time, Some(Duration::from_millis(250)));
}

#[test]
fn test_piece_values_table() {
    let config = EngineConfig::from_toml_str(
        r#"
        [weights.piece_values]
        king = 100.0
        queen = 10.0
        right = 7.0
        knight = 3.0
        bishop = 3.0
        pawn = 1.0
        "#,
    )
    .unwrap();
    assert_eq!(config.weights.piece_values.king, 100.0);
    assert_eq!(config.weights.centre_values, EvalWeights::default().centre_values);
}

#[test]
fn test_zero_depth_is_rejected() {
    let err = EngineConfig::from_toml_str("max_depth = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_parallel_threshold_is_rejected() {
    let err = EngineConfig::from_toml_str("parallel_threshold = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let err = EngineConfig::from_toml_str("max_depth = \"deep\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = EngineConfig::load("/definitely/not/here/engine.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_round_trip_through_toml() {
    let mut config = EngineConfig::default();
    config.parallel_threshold = Some(4);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
}

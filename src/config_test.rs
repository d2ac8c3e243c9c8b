#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_block_yields_defaults() {
    let cfg = EffectsConfig::from_json("  ").unwrap();
    assert_eq!(cfg, EffectsConfig::default());
}

#[test]
fn defaults_match_page_constants() {
    let cfg = EffectsConfig::default();
    assert_eq!(cfg.parallax_factor, 0.5);
    assert_eq!(cfg.navbar_shadow_threshold_px, 100.0);
    assert_eq!(cfg.reveal_threshold, 0.1);
    assert_eq!(cfg.reveal_root_margin, "0px 0px -100px 0px");
    assert_eq!(cfg.counter_steps, 30);
    assert_eq!(cfg.counter_tick_ms, 30);
    assert_eq!(cfg.submit_delay_ms, 1500);
    assert_eq!(cfg.success_hide_ms, 5000);
    assert_eq!(cfg.ripple_lifetime_ms, 600);
    assert!(cfg.contact_endpoint.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_block_overrides_only_named_keys() {
    let cfg = EffectsConfig::from_json(r#"{ "counterSteps": 10, "contactEndpoint": "/api/contacto" }"#).unwrap();
    assert_eq!(cfg.counter_steps, 10);
    assert_eq!(cfg.contact_endpoint.as_deref(), Some("/api/contacto"));
    assert_eq!(cfg.submit_delay_ms, 1500);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn malformed_json_is_parse_error() {
    let err = EffectsConfig::from_json("{ counterSteps: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_key_is_parse_error() {
    let err = EffectsConfig::from_json(r#"{ "counterStep": 10 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let err = EffectsConfig::from_json(r#"{ "revealThreshold": 1.5 }"#).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { field: "revealThreshold", reason: "1.5 is outside [0, 1]".to_owned() });
}

#[test]
fn zero_counter_steps_is_rejected() {
    let err = EffectsConfig::from_json(r#"{ "counterSteps": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "counterSteps", .. }));
}

#[test]
fn blank_endpoint_is_rejected() {
    let err = EffectsConfig::from_json(r#"{ "contactEndpoint": "  " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "contactEndpoint", .. }));
}

#[test]
fn root_margin_accepts_px_and_percent_lengths() {
    for margin in ["0px", "10% 0px", "0px 0px -100px", "0px 5% -100px 0px"] {
        assert!(is_root_margin(margin), "{margin}");
    }
}

#[test]
fn malformed_root_margin_is_rejected() {
    for margin in ["bogus", "", "10", "10em", "1px 2px 3px 4px 5px", "NaNpx"] {
        assert!(!is_root_margin(margin), "{margin}");
    }
    let err = EffectsConfig::from_json(r#"{ "revealRootMargin": "bogus" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "revealRootMargin", .. }));
}

#[test]
fn negative_parallax_is_rejected() {
    let err = EffectsConfig::from_json(r#"{ "parallaxFactor": -0.2 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "parallaxFactor", .. }));
}

#[test]
fn log_level_parses_known_levels() {
    let cfg = EffectsConfig::from_json(r#"{ "logLevel": "debug" }"#).unwrap();
    assert_eq!(cfg.log_level(), log::Level::Debug);
    let err = EffectsConfig::from_json(r#"{ "logLevel": "loud" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "logLevel", .. }));
}

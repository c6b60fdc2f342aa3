use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = FxConfig::from_json("{}").unwrap();
    assert_eq!(cfg, FxConfig::default());
    assert_eq!(cfg.alert_delay_ms, 4000);
    assert_eq!(cfg.alert_fade_ms, 600);
    assert_eq!(cfg.ripple_ms, 600);
    assert_eq!(cfg.storage_key, "theme");
    assert_eq!(cfg.strength_palette, vec!["#ff4e4e", "#ff8c00", "#fcd307", "#8efc7d", "#00e676"]);
    assert_eq!(cfg.valid_color, "#4caf50");
    assert_eq!(cfg.invalid_color, "#ff6b6b");
    assert_eq!(cfg.level().unwrap(), log::Level::Info);
}

#[test]
fn partial_object_overrides_only_named_fields() {
    let cfg = FxConfig::from_json(r#"{"alert_delay_ms": 6000, "log_level": "debug"}"#).unwrap();
    assert_eq!(cfg.alert_delay_ms, 6000);
    assert_eq!(cfg.alert_fade_ms, 600);
    assert_eq!(cfg.level().unwrap(), log::Level::Debug);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = FxConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, FxError::ConfigParse(_)));
}

#[test]
fn wrong_field_type_is_a_parse_error() {
    let err = FxConfig::from_json(r#"{"ripple_ms": "slow"}"#).unwrap_err();
    assert!(matches!(err, FxError::ConfigParse(_)));
}

#[test]
fn ripple_shorter_than_animation_is_rejected() {
    let err = FxConfig::from_json(r#"{"ripple_ms": 599}"#).unwrap_err();
    assert!(matches!(err, FxError::InvalidConfig(msg) if msg.contains("ripple_ms 599")));
}

#[test]
fn ripple_equal_to_or_longer_than_animation_is_accepted() {
    assert_eq!(FxConfig::from_json(r#"{"ripple_ms": 600}"#).unwrap().ripple_ms, 600);
    assert_eq!(FxConfig::from_json(r#"{"ripple_ms": 900}"#).unwrap().ripple_ms, 900);
}

#[test]
fn palette_must_have_one_color_per_point() {
    let err = FxConfig::from_json(r##"{"strength_palette": ["#000", "#111"]}"##).unwrap_err();
    assert!(matches!(err, FxError::InvalidConfig(msg) if msg.contains("got 2")));
}

#[test]
fn blank_storage_key_is_rejected() {
    let err = FxConfig::from_json(r#"{"storage_key": "  "}"#).unwrap_err();
    assert!(matches!(err, FxError::InvalidConfig(_)));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = FxConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(matches!(err, FxError::InvalidConfig(msg) if msg.contains("loud")));
}

#[test]
fn from_attribute_falls_back_to_defaults() {
    assert_eq!(FxConfig::from_attribute(None), FxConfig::default());
    assert_eq!(FxConfig::from_attribute(Some("   ")), FxConfig::default());
    assert_eq!(FxConfig::from_attribute(Some("{broken")), FxConfig::default());
    assert_eq!(FxConfig::from_attribute(Some(r#"{"ripple_ms": 10}"#)), FxConfig::default());
}

#[test]
fn from_attribute_uses_valid_json() {
    let cfg = FxConfig::from_attribute(Some(r#" {"storage_key": "hub-theme"} "#));
    assert_eq!(cfg.storage_key, "hub-theme");
}

#[test]
fn alert_lifetime_is_delay_plus_fade() {
    assert_eq!(FxConfig::default().alert_lifetime_ms(), 4600);
    let cfg = FxConfig { alert_delay_ms: u32::MAX, ..FxConfig::default() };
    assert_eq!(cfg.alert_lifetime_ms(), u32::MAX);
}

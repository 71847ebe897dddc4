use super::*;

#[test]
fn checked_config_defaults_when_absent() {
    assert_eq!(checked_config(None), PreviewConfig::default());
}

#[test]
fn checked_config_keeps_valid_config() {
    let config = PreviewConfig { scale: 0.8, ..PreviewConfig::default() };
    assert_eq!(checked_config(Some(config.clone())), config);
}

#[test]
fn checked_config_replaces_zero_scale() {
    let config = PreviewConfig { scale: 0.0, ..PreviewConfig::default() };
    assert_eq!(checked_config(Some(config)), PreviewConfig::default());
}

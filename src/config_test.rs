use super::*;

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ClientConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base, "/api");
    assert_eq!(cfg.tokens, TokenLifetimes { access_days: 7, refresh_days: 30 });
}

#[test]
fn from_lookup_applies_overrides_and_trims_base() {
    let cfg = ClientConfig::from_lookup(|key| match key {
        "COURSE_SELECT_API_BASE" => Some("https://campus.example/api/"),
        "COURSE_SELECT_SYSTEM_NAME" => Some("Course Portal"),
        "COURSE_SELECT_ACCESS_TOKEN_DAYS" => Some("1"),
        "COURSE_SELECT_REFRESH_TOKEN_DAYS" => Some(" 14 "),
        "COURSE_SELECT_NOTICE_MS" => Some("500"),
        _ => None,
    })
    .unwrap();
    assert_eq!(cfg.api_base, "https://campus.example/api");
    assert_eq!(cfg.system_name, "Course Portal");
    assert_eq!(cfg.tokens, TokenLifetimes { access_days: 1, refresh_days: 14 });
    assert_eq!(cfg.notice_ms, 500);
}

#[test]
fn from_lookup_blank_values_fall_back_to_defaults() {
    let cfg = ClientConfig::from_lookup(|key| match key {
        "COURSE_SELECT_API_BASE" | "COURSE_SELECT_SYSTEM_NAME" | "COURSE_SELECT_NOTICE_MS" => Some("  "),
        _ => None,
    })
    .unwrap();
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn from_lookup_rejects_non_numeric_lifetime() {
    let err = ClientConfig::from_lookup(|key| (key == "COURSE_SELECT_ACCESS_TOKEN_DAYS").then_some("week")).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber { key: "COURSE_SELECT_ACCESS_TOKEN_DAYS", value: "week".to_owned() }
    );
}

#[test]
fn from_lookup_rejects_zero_lifetime() {
    let err = ClientConfig::from_lookup(|key| (key == "COURSE_SELECT_REFRESH_TOKEN_DAYS").then_some("0")).unwrap_err();
    assert_eq!(err, ConfigError::Zero { key: "COURSE_SELECT_REFRESH_TOKEN_DAYS" });
}

#[test]
fn from_build_env_succeeds_without_overrides() {
    assert!(ClientConfig::from_build_env().is_ok());
}

use super::*;

#[test]
fn defaults_match_built_in_constants() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.breakpoints, Breakpoints { lg: 1024.0, md: 640.0 });
    assert_eq!(cfg.notifications, NotificationTimings { display_ms: 3000, exit_ms: 300 });
    assert_eq!(cfg.scroll.section_offset_px, 100.0);
    assert_eq!(cfg.scroll.header_scrolled_px, 50.0);
    assert_eq!(cfg.autoplay_ms, DEFAULT_AUTOPLAY_MS);
    assert!(cfg.autoplay_enabled());
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let cfg = PageConfig::from_json(r#"{ "breakpoints": { "lg": 1280 }, "autoplay_ms": 0 }"#).unwrap();
    assert_eq!(cfg.breakpoints.lg, 1280.0);
    assert_eq!(cfg.breakpoints.md, 640.0);
    assert_eq!(cfg.notifications, NotificationTimings::default());
    assert!(!cfg.autoplay_enabled());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = PageConfig::from_json("{ nope").unwrap_err();
    assert!(err.to_string().starts_with("invalid page config:"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_uses_defaults() {
    assert_eq!(PageConfig::load(), PageConfig::default());
}

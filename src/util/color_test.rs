use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #3B82F6 "), Some((59, 130, 246)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("3B82F6"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
}

#[test]
fn rgba_formats_channels_and_alpha() {
    assert_eq!(rgba("#3B82F6", 0.3), "rgba(59, 130, 246, 0.3)");
    assert_eq!(rgba("#fff", 1.0), "rgba(255, 255, 255, 1)");
}

#[test]
fn rgba_of_invalid_hex_is_transparent() {
    assert_eq!(rgba("blue", 0.4), "rgba(0, 0, 0, 0)");
}

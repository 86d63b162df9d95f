//! Hex color parsing shared by the theme stylesheet generator.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex.get(0..1)?.repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex.get(1..2)?.repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex.get(2..3)?.repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Render `hex` as a CSS `rgba()` with the given alpha.
///
/// Unparseable input renders as transparent black rather than emitting
/// invalid CSS.
pub fn rgba(hex: &str, alpha: f64) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => format!("rgba({r}, {g}, {b}, {alpha})"),
        None => "rgba(0, 0, 0, 0)".to_owned(),
    }
}

//! Per-axis scroll offsets
//!
//! An offset is resolved in this order:
//! 1. an explicit value from [`ScrollConfig`](crate::ScrollConfig)
//! 2. the `--ss-scroll-offset-x` / `--ss-scroll-offset-y` custom property in
//!    the container's inline `style` attribute, in `px` or `rem`
//! 3. zero
//!
//! The inline attribute is matched with a fixed pattern rather than read
//! through computed style, since computed custom properties inherit.

use std::sync::OnceLock;

use regex::Regex;

use crate::host::Axis;

/// Custom property carrying the horizontal offset
pub const OFFSET_X_PROPERTY: &str = "--ss-scroll-offset-x";
/// Custom property carrying the vertical offset
pub const OFFSET_Y_PROPERTY: &str = "--ss-scroll-offset-y";

fn offset_pattern(axis: Axis) -> &'static Regex {
    static X: OnceLock<Regex> = OnceLock::new();
    static Y: OnceLock<Regex> = OnceLock::new();

    let (cell, property) = match axis {
        Axis::X => (&X, OFFSET_X_PROPERTY),
        Axis::Y => (&Y, OFFSET_Y_PROPERTY),
    };
    cell.get_or_init(|| {
        Regex::new(&format!(r"{property}:\s*(\d+(?:\.\d+)?)(rem|px)"))
            .expect("valid offset pattern")
    })
}

/// Convert a CSS length to pixels
///
/// Only `px` and `rem` are understood; `rem` scales by the root font size.
/// Anything else is zero.
pub fn convert_to_px(value: f64, unit: &str, root_font_size: f64) -> f64 {
    match unit {
        "px" => value,
        "rem" => value * root_font_size,
        _ => 0.0,
    }
}

/// Read an axis offset from an inline style string, in pixels
///
/// Returns zero when the declaration is missing or malformed.
pub fn parse_style_offset(style: &str, axis: Axis, root_font_size: f64) -> f64 {
    let Some(captures) = offset_pattern(axis).captures(style) else {
        let property = match axis {
            Axis::X => OFFSET_X_PROPERTY,
            Axis::Y => OFFSET_Y_PROPERTY,
        };
        if style.contains(property) {
            tracing::debug!(style, property, "Ignoring unparseable scroll offset declaration");
        }
        return 0.0;
    };

    let value = captures[1].parse::<f64>().unwrap_or(0.0);
    convert_to_px(value, &captures[2], root_font_size)
}

/// Resolve the offset for one axis
pub fn resolve_offset(
    explicit: Option<f64>,
    style: Option<&str>,
    axis: Axis,
    root_font_size: f64,
) -> f64 {
    if let Some(offset) = explicit {
        return offset;
    }
    style
        .map(|style| parse_style_offset(style, axis, root_font_size))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rem_scales_by_root_font_size() {
        assert_eq!(parse_style_offset("--ss-scroll-offset-x: 2rem", Axis::X, 16.0), 32.0);
        assert_eq!(parse_style_offset("--ss-scroll-offset-y:1.5rem", Axis::Y, 20.0), 30.0);
    }

    #[test]
    fn test_px_passes_through() {
        let style = "color: red; --ss-scroll-offset-y: 64px; --ss-scroll-offset-x: 12.5px";
        assert_eq!(parse_style_offset(style, Axis::Y, 16.0), 64.0);
        assert_eq!(parse_style_offset(style, Axis::X, 16.0), 12.5);
    }

    #[test]
    fn test_axes_do_not_leak() {
        assert_eq!(parse_style_offset("--ss-scroll-offset-x: 10px", Axis::Y, 16.0), 0.0);
        assert_eq!(parse_style_offset("--ss-scroll-offset-y: 10px", Axis::X, 16.0), 0.0);
    }

    #[test]
    fn test_malformed_declarations_are_zero() {
        assert_eq!(parse_style_offset("--ss-scroll-offset-y: 3em", Axis::Y, 16.0), 0.0);
        assert_eq!(parse_style_offset("--ss-scroll-offset-y: -10px", Axis::Y, 16.0), 0.0);
        assert_eq!(parse_style_offset("--ss-scroll-offset-y: px", Axis::Y, 16.0), 0.0);
        assert_eq!(parse_style_offset("", Axis::Y, 16.0), 0.0);
    }

    #[test]
    fn test_convert_to_px_unknown_unit() {
        assert_eq!(convert_to_px(4.0, "vh", 16.0), 0.0);
    }

    #[test]
    fn test_explicit_offset_wins_over_style() {
        let style = Some("--ss-scroll-offset-y: 2rem");
        assert_eq!(resolve_offset(Some(5.0), style, Axis::Y, 16.0), 5.0);
        assert_eq!(resolve_offset(Some(0.0), style, Axis::Y, 16.0), 0.0);
        assert_eq!(resolve_offset(None, style, Axis::Y, 16.0), 32.0);
        assert_eq!(resolve_offset(None, None, Axis::Y, 16.0), 0.0);
    }
}

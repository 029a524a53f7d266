//! Pure shading math for the bubble painter
//!
//! Everything here is platform-free so gradient tables, color parsing
//! and font arithmetic stay unit-testable on native. The wasm painter
//! only feeds these values to the canvas API.

/// Gradient/highlight center offset toward the light source, as a
/// fraction of the visual radius (up and to the left)
pub const LIGHT_OFFSET: f32 = -0.35;
/// Inner radius of the body gradient, as a fraction of the visual radius
pub const BODY_INNER_RADIUS: f32 = 0.05;
/// Specular gradient center offset, as a fraction of the visual radius
pub const SPECULAR_OFFSET: f32 = -0.45;
/// Specular disc radius, as a fraction of the visual radius
pub const SPECULAR_RADIUS: f32 = 0.28;

/// Label text fill
pub const LABEL_FILL: &str = "rgba(0,0,0,0.9)";
/// Labels never drop below this size (px)
pub const MIN_LABEL_PX: f32 = 10.0;
/// Label size as a fraction of the visual radius
pub const LABEL_SCALE: f32 = 0.62;

/// Parse a `#rrggbb` triplet into a CSS `rgba(...)` color
///
/// Malformed input shades as black rather than failing; this is a
/// best-effort cosmetic layer.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let c = hex.strip_prefix('#').unwrap_or(hex);
    let channel = |i: usize| {
        c.get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    format!("rgba({},{},{},{})", channel(0), channel(2), channel(4), alpha)
}

/// Color stops for a bubble body gradient
///
/// A near-white specular core falls through the base color at partial
/// opacity to a fully transparent rim.
pub fn body_stops(color: &str) -> [(f32, String); 5] {
    [
        (0.0, "rgba(255,255,255,0.95)".to_string()),
        (0.12, "rgba(255,255,255,0.6)".to_string()),
        (0.26, hex_to_rgba(color, 0.85)),
        (0.56, hex_to_rgba(color, 0.45)),
        (1.0, "rgba(0,0,0,0)".to_string()),
    ]
}

/// Color stops for the secondary specular highlight disc
pub fn specular_stops() -> [(f32, &'static str); 2] {
    [(0.0, "rgba(255,255,255,0.9)"), (1.0, "rgba(255,255,255,0)")]
}

/// Fill for the per-frame fade rectangle
///
/// A low alpha leaves motion trails; alpha 1.0 degenerates to a hard
/// clear (used for reduced motion).
pub fn fade_fill(alpha: f32) -> String {
    format!("rgba(0,0,0,{alpha})")
}

/// Font declaration for a bubble label at visual radius `r`
pub fn label_font(r: f32) -> String {
    format!("{}px Poppins, Arial", (r * LABEL_SCALE).max(MIN_LABEL_PX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba_parses_triplet() {
        assert_eq!(hex_to_rgba("#ff6b6b", 0.85), "rgba(255,107,107,0.85)");
        assert_eq!(hex_to_rgba("#000000", 1.0), "rgba(0,0,0,1)");
    }

    #[test]
    fn test_hex_to_rgba_accepts_missing_hash() {
        assert_eq!(hex_to_rgba("ffd43b", 0.5), "rgba(255,212,59,0.5)");
    }

    #[test]
    fn test_hex_to_rgba_malformed_shades_black() {
        assert_eq!(hex_to_rgba("#zzz", 0.45), "rgba(0,0,0,0.45)");
        assert_eq!(hex_to_rgba("", 1.0), "rgba(0,0,0,1)");
        assert_eq!(hex_to_rgba("#ab", 1.0), "rgba(0,0,0,1)");
    }

    #[test]
    fn test_body_stops_ordered_and_fade_to_transparent() {
        let stops = body_stops("#74c0fc");
        for pair in stops.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        assert_eq!(stops[0].0, 0.0);
        assert_eq!(stops[4], (1.0, "rgba(0,0,0,0)".to_string()));
        // Base color present at both partial opacities
        assert_eq!(stops[2].1, "rgba(116,192,252,0.85)");
        assert_eq!(stops[3].1, "rgba(116,192,252,0.45)");
    }

    #[test]
    fn test_label_font_floor() {
        // 40 px radius: 24.8 px label
        assert_eq!(label_font(40.0), "24.8px Poppins, Arial");
        // Tiny radius clamps to the floor
        assert_eq!(label_font(10.0), "10px Poppins, Arial");
        assert_eq!(label_font(0.0), "10px Poppins, Arial");
    }

    #[test]
    fn test_fade_fill_alpha() {
        assert_eq!(fade_fill(0.2), "rgba(0,0,0,0.2)");
        assert_eq!(fade_fill(1.0), "rgba(0,0,0,1)");
    }
}

use progress_button::{clamp, color_to_hex, parse_hex_color, Color};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn clamp_limits_percent_range() {
    assert_eq!(clamp(0.4, 0.0, 1.0), 0.4);
    assert_eq!(clamp(-0.1, 0.0, 1.0), 0.0);
    assert_eq!(clamp(1.1, 0.0, 1.0), 1.0);
}

#[test]
fn mid_gray_hex() {
    assert_eq!(color_to_hex(0.5, 0.5, 0.5, 1.0), "#808080");
}

#[test]
fn translucent_color_keeps_alpha_byte() {
    assert_eq!(color_to_hex(0.2, 0.4, 0.6, 0.5), "#33669980");
}

#[test]
fn out_of_range_channels_are_clamped() {
    assert_eq!(color_to_hex(-0.1, 1.2, 0.501, 1.0), "#00FF80");
}

#[test]
fn parse_accepts_missing_hash_and_whitespace() {
    let (r, g, b, a) = parse_hex_color("  1e90ff ").expect("valid rgb hex");
    assert!(approx_eq(r, 30.0 / 255.0));
    assert!(approx_eq(g, 144.0 / 255.0));
    assert!(approx_eq(b, 1.0));
    assert!(approx_eq(a, 1.0));
}

#[test]
fn parse_rejects_short_long_and_non_hex() {
    assert!(parse_hex_color("#FFF").is_none());
    assert!(parse_hex_color("#FF00FF0000").is_none());
    assert!(parse_hex_color("#GG0000").is_none());
    assert!(parse_hex_color("#ÀÀÀ").is_none());
}

#[test]
fn parse_rejects_sign_characters() {
    assert!(parse_hex_color("#+F+F+F").is_none());
    assert!(parse_hex_color("+F+F+F+F").is_none());
    assert!(Color::from_hex("#-1-1-1").is_err());
}

#[test]
fn color_type_hex_roundtrip_with_alpha() {
    let color = Color::from_hex("#112233CC").unwrap();
    assert!(approx_eq(color.a, 204.0 / 255.0));
    assert_eq!(color.to_hex(), "#112233CC");
}

#[test]
fn color_type_serializes_as_hex_string() {
    let json = serde_json::to_string(&Color::rgba(1.0, 0.0, 0.0, 1.0)).unwrap();
    assert_eq!(json, "\"#FF0000\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_hex(), "#FF0000");
}

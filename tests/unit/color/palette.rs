use super::*;

#[test]
fn hsl_primaries() {
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb8::new(255, 0, 0));
    assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb8::new(0, 255, 0));
    assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Rgb8::new(0, 0, 255));
    assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Rgb8::new(255, 255, 255));
}

#[test]
fn hsl_paint_color_at_hue_zero() {
    // c = 0.63, m = 0.235 -> r = 0.865, g = b = 0.235
    assert_eq!(hsl_to_rgb(0.0, 0.70, 0.55), Rgb8::new(221, 60, 60));
}

#[test]
fn palette_has_seven_colors_in_offset_order() {
    let p = Palette::from_base_hue(0);
    assert_eq!(p.colors().len(), 7);
    assert_eq!(p.colors()[0], hsl_to_rgb(0.0, 0.70, 0.55));
    assert_eq!(p.colors()[1], hsl_to_rgb(20.0, 0.70, 0.55));
    assert_eq!(p.colors()[2], hsl_to_rgb(160.0, 0.70, 0.55));
    assert_eq!(p.colors()[3], hsl_to_rgb(200.0, 0.70, 0.55));
    assert_eq!(p.colors()[4], hsl_to_rgb(300.0, 0.70, 0.55));
    assert_eq!(p.colors()[5], hsl_to_rgb(40.0, 0.55, 0.70));
    assert_eq!(p.colors()[6], hsl_to_rgb(220.0, 0.50, 0.75));
}

#[test]
fn palette_offsets_wrap_around_360() {
    let p = Palette::from_base_hue(350);
    assert_eq!(p.colors()[1], hsl_to_rgb(10.0, 0.70, 0.55));
    assert_eq!(p.colors()[6], hsl_to_rgb(210.0, 0.50, 0.75));
}

#[test]
fn palette_depends_only_on_text() {
    let a = Palette::from_source_text("a,b\n1,2\n3,4\n");
    let b = Palette::from_source_text("a,b\n1,2\n3,4\n");
    assert_eq!(a, b);
    assert!(a.base_hue() < 360);
    assert_eq!(a.base_hue(), sha256_mod("a,b\n1,2\n3,4\n", 360) as u32);
}

#[test]
fn row_color_is_a_palette_entry_and_stable() {
    let p = Palette::from_source_text("text");
    let c1 = p.color_for("{\"shape\": \"blob\"}");
    let c2 = p.color_for("{\"shape\": \"blob\"}");
    assert_eq!(c1, c2);
    assert!(p.colors().contains(&c1));
}

#[test]
fn hsl_channels_round_half_to_even() {
    // The blue channel lands on exactly 8.5.
    assert_eq!(hsl_to_rgb(160.0, 1.0, 0.025), Rgb8::new(0, 13, 8));
}

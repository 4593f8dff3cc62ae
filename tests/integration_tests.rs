//! Integration tests for the icon render pipeline

use icon_render::{
    calculate_dimension, get_attributes, get_svg, normalize, AttrValue, Dimension, IconData,
    IdGenerator, RenderOptions, SvgRenderer,
};
use pretty_assertions::assert_eq;

fn square_icon(body: &str) -> IconData {
    IconData::new(body).with_size(16.0, 16.0)
}

/// Extract the value of the first `name="..."` attribute
fn attr<'a>(svg: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(r#" {}=""#, name);
    let start = svg.find(&needle)? + needle.len();
    let end = svg[start..].find('"')?;
    Some(&svg[start..start + end])
}

#[test]
fn test_normalize_fills_and_keeps_fields() {
    let filled = normalize(&IconData::new("").with_size(20.0, 14.0).with_origin(0.0, 1.0));
    assert_eq!(filled.inline_top, 1.0);
    assert_eq!(filled.inline_height, 14.0);
    assert_eq!(filled.vertical_align, -0.143);

    let explicit = normalize(
        &IconData::new("")
            .with_size(20.0, 14.0)
            .with_inline_box(3.0, 18.0)
            .with_vertical_align(-0.2),
    );
    assert_eq!(explicit.inline_top, 3.0);
    assert_eq!(explicit.inline_height, 18.0);
    assert_eq!(explicit.vertical_align, -0.2);
}

#[test]
fn test_vertical_align_parity() {
    for (height, expected) in [(14.0, -0.143), (16.0, -0.125), (21.0, -0.143), (56.0, -0.125)] {
        let icon = normalize(&IconData::new("").with_size(16.0, height));
        assert_eq!(icon.vertical_align, expected, "height {}", height);
    }
}

#[test]
fn test_calculate_dimension_examples() {
    assert_eq!(
        calculate_dimension(&AttrValue::Number(10.0), 1.0, 100.0),
        AttrValue::Number(10.0)
    );
    assert_eq!(
        calculate_dimension(&AttrValue::Number(10.0), 2.0, 100.0),
        AttrValue::Number(20.0)
    );
    assert_eq!(
        calculate_dimension(&AttrValue::from("10px"), 2.0, 100.0),
        AttrValue::from("20px")
    );
}

#[test]
fn test_default_render() {
    let svg = get_svg(&normalize(&square_icon(r#"<path id="a"/>"#)), &RenderOptions::new());

    assert_eq!(attr(&svg, "viewBox"), Some("0 0 16 16"));
    assert_eq!(attr(&svg, "width"), Some("1em"));
    assert_eq!(attr(&svg, "height"), Some("1em"));
    let id = attr(&svg, "id").expect("id attribute");
    assert_ne!(id, "a");
}

#[test]
fn test_repeated_renders_get_fresh_ids() {
    let icon = normalize(&square_icon(r#"<path id="a"/>"#));
    let first = get_svg(&icon, &RenderOptions::new());
    let second = get_svg(&icon, &RenderOptions::new());
    assert_ne!(attr(&first, "id"), attr(&second, "id"));
}

#[test]
fn test_isolated_generators_count_independently() {
    let icon = normalize(&square_icon(r#"<path id="a"/>"#));
    let ids = IdGenerator::with_prefix("x");
    let renderer = SvgRenderer::with_ids(&ids);

    let first = renderer.attributes(&icon, &RenderOptions::new());
    let second = renderer.attributes(&icon, &RenderOptions::new());
    assert_eq!(first.body, r#"<path id="x0"/>"#);
    assert_eq!(second.body, r#"<path id="x1"/>"#);
    assert_eq!(ids.issued(), 2);
}

#[test]
fn test_rotation_modulo_four() {
    let icon = normalize(&IconData::new("<path/>").with_size(24.0, 16.0));
    let five = get_attributes(&icon, &RenderOptions::new().with_rotate(5));
    let one = get_attributes(&icon, &RenderOptions::new().with_rotate(1));
    assert_eq!(five, one);
}

#[test]
fn test_rotation_strings() {
    let icon = normalize(&IconData::new("<path/>").with_size(24.0, 16.0));
    let percent = get_attributes(&icon, &RenderOptions::new().with_rotate("50%"));
    let half = get_attributes(&icon, &RenderOptions::new().with_rotate(2));
    assert_eq!(percent, half);

    let degrees = get_attributes(&icon, &RenderOptions::new().with_rotate("100deg"));
    let quarter = get_attributes(&icon, &RenderOptions::new().with_rotate(1));
    assert_eq!(degrees, quarter);

    let ignored = get_attributes(&icon, &RenderOptions::new().with_rotate("1rad"));
    let plain = get_attributes(&icon, &RenderOptions::new());
    assert_eq!(ignored, plain);
}

#[test]
fn test_extreme_icon_rotation_renders() {
    let data = IconData::new("<path/>").with_size(24.0, 16.0);
    let icon = normalize(&data.clone().with_rotate(i64::MAX));
    let wrapped = get_attributes(&icon, &RenderOptions::new().with_rotate(1));
    let plain = get_attributes(&normalize(&data), &RenderOptions::new());
    assert_eq!(wrapped, plain);
}

#[test]
fn test_double_flip_equals_half_turn() {
    let icon = normalize(&IconData::new("<path/>").with_size(24.0, 16.0).with_origin(1.0, 2.0));
    let flipped = get_attributes(&icon, &RenderOptions::new().with_flip("horizontal vertical"));
    let rotated = get_attributes(&icon, &RenderOptions::new().with_rotate(2));

    assert_eq!(flipped.attributes.view_box, rotated.attributes.view_box);
    assert_eq!(flipped.body, rotated.body);
    assert!(!flipped.body.contains("scale("));
}

#[test]
fn test_icon_flip_toggled_by_option() {
    let icon = normalize(&square_icon("<path/>").with_flip(true, false));
    let result = get_attributes(&icon, &RenderOptions::new().with_h_flip("true"));
    assert_eq!(result.body, "<path/>");
}

#[test]
fn test_width_false_and_height_auto() {
    let icon = normalize(&IconData::new("").with_size(24.0, 20.0));

    let no_width = get_attributes(&icon, &RenderOptions::new().with_width(Dimension::Suppressed));
    assert_eq!(no_width.attributes.width, None);
    assert!(no_width.attributes.height.is_some());

    let auto_height = get_attributes(&icon, &RenderOptions::new().with_height("auto"));
    assert_eq!(auto_height.attributes.height, Some(AttrValue::Number(20.0)));
    assert_eq!(auto_height.attributes.width, Some(AttrValue::Number(24.0)));
}

#[test]
fn test_options_from_toml_render() {
    let options = RenderOptions::from_toml_str("width = false\nheight = 32").unwrap();
    let svg = get_svg(&normalize(&square_icon("")), &options);
    assert_eq!(attr(&svg, "width"), None);
    assert_eq!(attr(&svg, "height"), Some("32"));
}

#[test]
fn test_color_replacement() {
    let body = r#"<path fill="currentColor"/><path stroke="currentColor" class="currentColorful"/>"#;
    let result = get_attributes(
        &normalize(&square_icon(body)),
        &RenderOptions::new().with_color("red"),
    );
    assert_eq!(
        result.body,
        r#"<path fill="red"/><path stroke="red" class="redful"/>"#
    );
}

#[test]
fn test_align_right_top_crop() {
    let result = get_attributes(
        &normalize(&square_icon("")),
        &RenderOptions::new().with_align("right top crop"),
    );
    assert_eq!(result.attributes.preserve_aspect_ratio, "xMaxYMin slice");
}

#[test]
fn test_malformed_options_ignored() {
    let icon = normalize(&square_icon("<path/>"));
    let messy = RenderOptions::new()
        .with_rotate("sideways")
        .with_flip("diagonal")
        .with_align("everywhere")
        .with_inline("yes");
    assert_eq!(
        get_attributes(&icon, &messy),
        get_attributes(&icon, &RenderOptions::new())
    );
}

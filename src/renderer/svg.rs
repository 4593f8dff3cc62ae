//! SVG generation from normalized icons

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use indexmap::IndexMap;

use crate::icon::NormalizedIcon;
use crate::options::RenderOptions;

use super::align::Alignment;
use super::attributes::{fmt_number, SvgAttributes};
use super::dimension::resolve_dimensions;
use super::ids::IdGenerator;
use super::transform::{apply_transform, transform_attribute, IconBox, IconTransform};
use super::SvgConfig;

const SVG_OPEN: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink""#;

/// Style that forces a no-op transform to avoid subpixel rendering glitches
const ROTATION_WORKAROUND: &str =
    "-ms-transform: rotate(360deg); -webkit-transform: rotate(360deg); transform: rotate(360deg);";

/// Structured render output
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    pub attributes: SvgAttributes,
    /// Markup to place inside the `<svg>` element
    pub body: String,
    /// Inline style properties
    pub style: IndexMap<String, String>,
}

impl RenderResult {
    /// Serialize into a standalone `<svg>` element
    pub fn to_svg(&self, config: &SvgConfig) -> String {
        let mut svg = String::from(SVG_OPEN);
        for (name, value) in self.attributes.entries() {
            svg.push_str(&format!(r#" {}="{}""#, name, value));
        }

        let mut style = Vec::new();
        if config.rotation_workaround {
            style.push(ROTATION_WORKAROUND.to_string());
        }
        style.extend(self.style.iter().map(|(name, value)| format!("{}: {};", name, value)));
        if !style.is_empty() {
            svg.push_str(&format!(r#" style="{}""#, style.join(" ")));
        }

        svg.push('>');
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }

    /// Serialize into a base64 `data:` URI for use in `<img src>` or CSS
    pub fn to_data_uri(&self, config: &SvgConfig) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(self.to_svg(config))
        )
    }
}

/// Renders normalized icons with a given config and id source
#[derive(Debug, Clone)]
pub struct SvgRenderer<'a> {
    config: SvgConfig,
    ids: &'a IdGenerator,
}

impl Default for SvgRenderer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer<'static> {
    /// Renderer with default config using the process-wide id generator
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::global())
    }
}

impl<'a> SvgRenderer<'a> {
    /// Renderer drawing ids from `ids`
    pub fn with_ids(ids: &'a IdGenerator) -> Self {
        Self {
            config: SvgConfig::default(),
            ids,
        }
    }

    /// Set the SVG configuration
    pub fn with_config(mut self, config: SvgConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SvgConfig {
        &self.config
    }

    /// Compute attributes, body and style for an icon
    pub fn attributes(&self, icon: &NormalizedIcon, options: &RenderOptions) -> RenderResult {
        let inline = options.inline;
        let bbox = IconBox::from_icon(icon, inline);
        let transform = IconTransform::from_icon(icon).with_options(options);
        let (bbox, ops) = apply_transform(bbox, &transform);

        tracing::debug!(
            rotate = transform.rotate,
            h_flip = transform.h_flip,
            v_flip = transform.v_flip,
            ops = ops.len(),
            "resolved icon transform"
        );

        let (width, height) = resolve_dimensions(
            &options.width,
            &options.height,
            &bbox,
            &self.config.default_size,
            self.config.precision,
        );

        tracing::debug!(
            width = ?width,
            height = ?height,
            view_box = %bbox.view_box(),
            "computed icon dimensions"
        );

        let mut style = IndexMap::new();
        if inline && icon.vertical_align != 0.0 {
            style.insert(
                "vertical-align".to_string(),
                format!("{}em", fmt_number(icon.vertical_align)),
            );
        }

        let align = options
            .align
            .as_deref()
            .map(Alignment::parse)
            .unwrap_or_default();

        let attributes = SvgAttributes {
            width,
            height,
            preserve_aspect_ratio: align.preserve_aspect_ratio(),
            view_box: bbox.view_box(),
        };

        let mut body = self.ids.replace_ids(&icon.body);
        if let Some(color) = &options.color {
            body = body.replace("currentColor", color);
        }
        if !ops.is_empty() {
            body = format!(r#"<g transform="{}">{}</g>"#, transform_attribute(&ops), body);
        }
        if options.bounding_box {
            body.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="rgba(0, 0, 0, 0)" />"#,
                fmt_number(bbox.left),
                fmt_number(bbox.top),
                fmt_number(bbox.width),
                fmt_number(bbox.height)
            ));
        }

        RenderResult {
            attributes,
            body,
            style,
        }
    }

    /// Render an icon to an SVG string
    pub fn svg(&self, icon: &NormalizedIcon, options: &RenderOptions) -> String {
        self.attributes(icon, options).to_svg(&self.config)
    }
}

/// Compute attributes, body and style with default config and global ids
pub fn get_attributes(icon: &NormalizedIcon, options: &RenderOptions) -> RenderResult {
    SvgRenderer::new().attributes(icon, options)
}

/// Render an icon to SVG with default config and global ids
pub fn get_svg(icon: &NormalizedIcon, options: &RenderOptions) -> String {
    SvgRenderer::new().svg(icon, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{normalize, IconData};
    use crate::options::Dimension;
    use crate::renderer::AttrValue;
    use pretty_assertions::assert_eq;

    fn icon(body: &str, width: f64, height: f64) -> NormalizedIcon {
        normalize(&IconData::new(body).with_size(width, height))
    }

    #[test]
    fn test_default_attributes() {
        let ids = IdGenerator::with_prefix("t-");
        let result = SvgRenderer::with_ids(&ids).attributes(&icon("<path/>", 16.0, 16.0), &RenderOptions::new());

        assert_eq!(result.attributes.width, Some(AttrValue::from("1em")));
        assert_eq!(result.attributes.height, Some(AttrValue::from("1em")));
        assert_eq!(result.attributes.preserve_aspect_ratio, "xMidYMid meet");
        assert_eq!(result.attributes.view_box, "0 0 16 16");
        assert_eq!(result.body, "<path/>");
        assert!(result.style.is_empty());
    }

    #[test]
    fn test_color_replaces_current_color_only() {
        let ids = IdGenerator::with_prefix("t-");
        let body = r#"<path fill="currentColor" stroke="currentcolor"/>"#;
        let result = SvgRenderer::with_ids(&ids)
            .attributes(&icon(body, 16.0, 16.0), &RenderOptions::new().with_color("red"));
        assert_eq!(result.body, r#"<path fill="red" stroke="currentcolor"/>"#);
    }

    #[test]
    fn test_transform_wraps_body() {
        let ids = IdGenerator::with_prefix("t-");
        let result = SvgRenderer::with_ids(&ids)
            .attributes(&icon("<path/>", 24.0, 16.0), &RenderOptions::new().with_rotate(1));
        assert_eq!(result.body, r#"<g transform="rotate(90 8 8)"><path/></g>"#);
        assert_eq!(result.attributes.view_box, "0 0 16 24");
        assert_eq!(result.attributes.width, Some(AttrValue::from("0.67em")));
    }

    #[test]
    fn test_bounding_box_appended() {
        let ids = IdGenerator::with_prefix("t-");
        let result = SvgRenderer::with_ids(&ids)
            .attributes(&icon("<path/>", 24.0, 24.0), &RenderOptions::new().with_box("1"));
        assert_eq!(
            result.body,
            r#"<path/><rect x="0" y="0" width="24" height="24" fill="rgba(0, 0, 0, 0)" />"#
        );
    }

    #[test]
    fn test_inline_uses_inline_box_and_style() {
        let ids = IdGenerator::with_prefix("t-");
        let data = IconData::new("<path/>")
            .with_size(24.0, 24.0)
            .with_inline_box(-2.0, 28.0);
        let result = SvgRenderer::with_ids(&ids)
            .attributes(&normalize(&data), &RenderOptions::new().with_inline("true"));

        assert_eq!(result.attributes.view_box, "0 -2 24 28");
        assert_eq!(
            result.style.get("vertical-align").map(String::as_str),
            Some("-0.125em")
        );
    }

    #[test]
    fn test_zero_vertical_align_adds_no_style() {
        let ids = IdGenerator::with_prefix("t-");
        let data = IconData::new("").with_vertical_align(0.0);
        let result = SvgRenderer::with_ids(&ids)
            .attributes(&normalize(&data), &RenderOptions::new().with_inline(true));
        assert!(result.style.is_empty());
    }

    #[test]
    fn test_suppressed_width() {
        let ids = IdGenerator::with_prefix("t-");
        let options = RenderOptions::new().with_width(Dimension::Suppressed);
        let svg = SvgRenderer::with_ids(&ids).svg(&icon("", 16.0, 16.0), &options);
        assert!(!svg.contains(" width="));
        assert!(svg.contains(r#" height="1em""#));
    }

    #[test]
    fn test_to_svg_serialization() {
        let ids = IdGenerator::with_prefix("t-");
        let svg = SvgRenderer::with_ids(&ids)
            .svg(&icon("<path/>", 16.0, 16.0), &RenderOptions::new().with_inline(true));
        assert_eq!(
            svg,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink""#,
                r#" width="1em" height="1em" preserveAspectRatio="xMidYMid meet" viewBox="0 0 16 16""#,
                r#" style="-ms-transform: rotate(360deg); -webkit-transform: rotate(360deg); transform: rotate(360deg); vertical-align: -0.125em;">"#,
                "<path/></svg>"
            )
        );
    }

    #[test]
    fn test_without_rotation_workaround() {
        let ids = IdGenerator::with_prefix("t-");
        let renderer = SvgRenderer::with_ids(&ids)
            .with_config(SvgConfig::new().with_rotation_workaround(false));
        let svg = renderer.svg(&icon("", 16.0, 16.0), &RenderOptions::new());
        assert!(!svg.contains("style="));
    }

    #[test]
    fn test_data_uri() {
        let ids = IdGenerator::with_prefix("t-");
        let renderer = SvgRenderer::with_ids(&ids);
        let result = renderer.attributes(&icon("", 16.0, 16.0), &RenderOptions::new());
        let uri = result.to_data_uri(renderer.config());
        let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), result.to_svg(renderer.config()));
    }
}

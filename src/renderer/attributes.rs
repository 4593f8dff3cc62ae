//! Attribute values and number formatting for SVG output

use std::fmt;

/// Format a number the way JavaScript stringifies it (`16`, `0.5`, `NaN`)
pub fn fmt_number(value: f64) -> String {
    let mut buf = ryu_js::Buffer::new();
    buf.format(value).to_string()
}

/// A numeric or textual attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => f.write_str(&fmt_number(*n)),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

/// Attributes of the root `<svg>` element
#[derive(Debug, Clone, PartialEq)]
pub struct SvgAttributes {
    /// Omitted when suppressed by the caller
    pub width: Option<AttrValue>,
    /// Omitted when suppressed by the caller
    pub height: Option<AttrValue>,
    pub preserve_aspect_ratio: String,
    pub view_box: String,
}

impl SvgAttributes {
    /// Attribute names and serialized values in output order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::with_capacity(4);
        if let Some(width) = &self.width {
            entries.push(("width", width.to_string()));
        }
        if let Some(height) = &self.height {
            entries.push(("height", height.to_string()));
        }
        entries.push(("preserveAspectRatio", self.preserve_aspect_ratio.clone()));
        entries.push(("viewBox", self.view_box.clone()));
        entries
    }
}

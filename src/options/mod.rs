//! Render options and the parsing boundary for loosely typed option values
//!
//! Option values arrive from markup attributes, config files and the CLI in
//! several shapes (`true`, `"true"`, `"1"`, `"auto"`, `false`, `"90deg"`...).
//! They are turned into typed values here, once, so the renderer only deals
//! with [`RenderOptions`].

pub mod lexer;

use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::renderer::AttrValue;

pub use lexer::{keywords, Keyword};

/// A boolean option as written by the caller
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoolLike {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for BoolLike {
    fn from(value: bool) -> Self {
        BoolLike::Bool(value)
    }
}

impl From<&str> for BoolLike {
    fn from(value: &str) -> Self {
        BoolLike::Text(value.to_string())
    }
}

/// Coerce a bool-like value: only `true`, `"true"` and `"1"` are truthy
pub fn coerce_bool_like(value: Option<&BoolLike>) -> bool {
    match value {
        Some(BoolLike::Bool(b)) => *b,
        Some(BoolLike::Text(s)) => s == "true" || s == "1",
        Some(BoolLike::Number(_)) | None => false,
    }
}

/// Requested width or height of the rendered icon
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dimension {
    /// Not given; computed from the other dimension or the default size
    #[default]
    Unset,
    /// Use the icon's own size in viewBox units
    Auto,
    /// Do not emit the attribute
    Suppressed,
    /// Use this value as-is
    Explicit(AttrValue),
}

/// A width or height as written by the caller
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDimension {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<RawDimension> for Dimension {
    fn from(raw: RawDimension) -> Self {
        match raw {
            RawDimension::Bool(false) => Dimension::Suppressed,
            RawDimension::Bool(true) => Dimension::Unset,
            RawDimension::Number(n) => Dimension::from(n),
            RawDimension::Text(s) => Dimension::from(s.as_str()),
        }
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        if value == 0.0 || value.is_nan() {
            Dimension::Unset
        } else {
            Dimension::Explicit(AttrValue::Number(value))
        }
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        match value {
            "" => Dimension::Unset,
            "auto" => Dimension::Auto,
            other => Dimension::Explicit(AttrValue::Text(other.to_string())),
        }
    }
}

/// Extra rotation requested by the caller
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Rotation {
    /// Quarter turns
    Turns(i64),
    /// Quarter turns given as a float; fractional values are ignored
    Number(f64),
    /// Quarter turns, or a value with a `%` or `deg` suffix
    Text(String),
}

impl Rotation {
    /// Number of quarter turns to add to the icon's own rotation
    ///
    /// Unparseable values contribute nothing.
    pub fn quarter_turns(&self) -> i64 {
        match self {
            Rotation::Turns(turns) => *turns,
            Rotation::Number(n) if n.is_finite() && n.fract() == 0.0 => *n as i64,
            Rotation::Number(_) => 0,
            Rotation::Text(text) => parse_rotation(text),
        }
    }
}

impl From<i64> for Rotation {
    fn from(turns: i64) -> Self {
        Rotation::Turns(turns)
    }
}

impl From<i32> for Rotation {
    fn from(turns: i32) -> Self {
        Rotation::Turns(i64::from(turns))
    }
}

impl From<&str> for Rotation {
    fn from(text: &str) -> Self {
        Rotation::Text(text.to_string())
    }
}

/// Parse a rotation string into quarter turns
///
/// `"1"` is one turn, `"25%"` is one turn and `"90deg"` is one turn. Values
/// are rounded to the nearest turn, halves rounding up.
pub fn parse_rotation(value: &str) -> i64 {
    let (prefix, units) = lexer::numeric_prefix(value);
    if units.is_empty() {
        return lexer::parse_int_prefix(value).unwrap_or(0);
    }
    if prefix.is_empty() {
        return 0;
    }
    let per_turn = match units {
        "%" => 25.0,
        "deg" => 90.0,
        _ => return 0,
    };
    lexer::parse_int_prefix(prefix)
        .map(|n| js_round(n as f64 / per_turn) as i64)
        .unwrap_or(0)
}

/// Round half toward positive infinity
fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Options for a single render call
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawRenderOptions")]
pub struct RenderOptions {
    pub width: Dimension,
    pub height: Dimension,
    /// Replaces `currentColor` in the icon body
    pub color: Option<String>,
    /// Render for inline text layout
    pub inline: bool,
    /// Append a transparent rectangle covering the viewBox
    pub bounding_box: bool,
    /// Alignment keywords
    pub align: Option<String>,
    /// Toggle the icon's horizontal flip
    pub h_flip: bool,
    /// Toggle the icon's vertical flip
    pub v_flip: bool,
    /// Flip keywords (`horizontal`, `vertical`)
    pub flip: Option<String>,
    pub rotate: Option<Rotation>,
}

/// Render options as found in a TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawRenderOptions {
    size: Option<RawDimension>,
    width: Option<RawDimension>,
    height: Option<RawDimension>,
    color: Option<String>,
    inline: Option<BoolLike>,
    #[serde(rename = "box")]
    bounding_box: Option<BoolLike>,
    align: Option<String>,
    h_flip: Option<BoolLike>,
    v_flip: Option<BoolLike>,
    flip: Option<String>,
    rotate: Option<Rotation>,
}

impl From<RawRenderOptions> for RenderOptions {
    fn from(raw: RawRenderOptions) -> Self {
        // A usable `size` wins over the individual dimensions
        let size = raw
            .size
            .map(Dimension::from)
            .filter(|size| !matches!(size, Dimension::Unset | Dimension::Suppressed));
        let width = size.clone().or_else(|| raw.width.map(Dimension::from));
        let height = size.or_else(|| raw.height.map(Dimension::from));

        RenderOptions {
            width: width.unwrap_or_default(),
            height: height.unwrap_or_default(),
            color: raw.color,
            inline: coerce_bool_like(raw.inline.as_ref()),
            bounding_box: coerce_bool_like(raw.bounding_box.as_ref()),
            align: raw.align,
            h_flip: coerce_bool_like(raw.h_flip.as_ref()),
            v_flip: coerce_bool_like(raw.v_flip.as_ref()),
            flip: raw.flip,
            rotate: raw.rotate,
        }
    }
}

impl RenderOptions {
    /// Create options with every value unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load options from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the width
    pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the height
    pub fn with_height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Set width and height to the same value
    pub fn with_size(mut self, size: impl Into<Dimension>) -> Self {
        let size = size.into();
        self.width = size.clone();
        self.height = size;
        self
    }

    /// Set the color substituted for `currentColor`
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set inline mode
    pub fn with_inline(mut self, inline: impl Into<BoolLike>) -> Self {
        self.inline = coerce_bool_like(Some(&inline.into()));
        self
    }

    /// Set whether a transparent bounding rectangle is appended
    pub fn with_box(mut self, bounding_box: impl Into<BoolLike>) -> Self {
        self.bounding_box = coerce_bool_like(Some(&bounding_box.into()));
        self
    }

    /// Set alignment keywords, e.g. `"left top crop"`
    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    /// Set whether the icon's horizontal flip is toggled
    pub fn with_h_flip(mut self, h_flip: impl Into<BoolLike>) -> Self {
        self.h_flip = coerce_bool_like(Some(&h_flip.into()));
        self
    }

    /// Set whether the icon's vertical flip is toggled
    pub fn with_v_flip(mut self, v_flip: impl Into<BoolLike>) -> Self {
        self.v_flip = coerce_bool_like(Some(&v_flip.into()));
        self
    }

    /// Set flip keywords, e.g. `"horizontal,vertical"`
    pub fn with_flip(mut self, flip: impl Into<String>) -> Self {
        self.flip = Some(flip.into());
        self
    }

    /// Set the extra rotation
    pub fn with_rotate(mut self, rotate: impl Into<Rotation>) -> Self {
        self.rotate = Some(rotate.into());
        self
    }
}

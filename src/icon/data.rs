//! Raw icon data as supplied by icon sets and callers

use serde::Deserialize;

/// Icon description before normalization
///
/// Every field except `body` may be missing; [`normalize`](super::normalize)
/// fills the gaps with defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconData {
    /// SVG markup placed inside the `<svg>` element
    pub body: String,
    pub left: Option<f64>,
    pub top: Option<f64>,
    /// Natural grid width
    pub width: Option<f64>,
    /// Natural grid height
    pub height: Option<f64>,
    /// Rotation in quarter turns
    pub rotate: Option<i64>,
    pub h_flip: Option<bool>,
    pub v_flip: Option<bool>,
    /// Origin used instead of `top` when rendered inline
    pub inline_top: Option<f64>,
    /// Height used instead of `height` when rendered inline
    pub inline_height: Option<f64>,
    /// Baseline offset in em for inline rendering
    pub vertical_align: Option<f64>,
}

impl IconData {
    /// Create icon data with only a body set
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// Set the natural grid size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the origin offset
    pub fn with_origin(mut self, left: f64, top: f64) -> Self {
        self.left = Some(left);
        self.top = Some(top);
        self
    }

    /// Set the default rotation in quarter turns
    pub fn with_rotate(mut self, rotate: i64) -> Self {
        self.rotate = Some(rotate);
        self
    }

    /// Set the default flips
    pub fn with_flip(mut self, h_flip: bool, v_flip: bool) -> Self {
        self.h_flip = Some(h_flip);
        self.v_flip = Some(v_flip);
        self
    }

    /// Set the inline box overrides
    pub fn with_inline_box(mut self, inline_top: f64, inline_height: f64) -> Self {
        self.inline_top = Some(inline_top);
        self.inline_height = Some(inline_height);
        self
    }

    /// Set an explicit vertical alignment
    pub fn with_vertical_align(mut self, vertical_align: f64) -> Self {
        self.vertical_align = Some(vertical_align);
        self
    }
}

//! Width/height arithmetic

use crate::options::lexer::{parse_float_prefix, split_numeric, Segment};
use crate::options::Dimension;

use super::attributes::fmt_number;
use super::transform::IconBox;
use super::AttrValue;

/// Scale a size by `ratio`, rounding up to `1 / precision`
///
/// Strings like `"2.5em"` have every number scaled and their units kept.
/// A ratio of exactly 1 returns the size unchanged.
pub fn calculate_dimension(size: &AttrValue, ratio: f64, precision: f64) -> AttrValue {
    if ratio == 1.0 {
        return size.clone();
    }
    match size {
        AttrValue::Number(n) => AttrValue::Number(scale(*n, ratio, precision)),
        AttrValue::Text(text) => {
            let scaled: String = split_numeric(text)
                .into_iter()
                .map(|segment| match segment {
                    Segment::Text(s) => s.to_string(),
                    Segment::Number(s) => match parse_float_prefix(s) {
                        Some(n) => fmt_number(scale(n, ratio, precision)),
                        None => s.to_string(),
                    },
                })
                .collect();
            AttrValue::Text(scaled)
        }
    }
}

fn scale(value: f64, ratio: f64, precision: f64) -> f64 {
    (value * ratio * precision).ceil() / precision
}

/// A requested dimension that takes part in size computation
#[derive(Debug, Clone, PartialEq)]
enum Resolved {
    Auto,
    Value(AttrValue),
}

impl Resolved {
    fn from_dimension(dimension: &Dimension) -> Option<Self> {
        match dimension {
            Dimension::Unset | Dimension::Suppressed => None,
            Dimension::Auto => Some(Resolved::Auto),
            Dimension::Explicit(value) => Some(Resolved::Value(value.clone())),
        }
    }

    fn scaled(&self, ratio: f64, precision: f64) -> Self {
        match self {
            Resolved::Auto => Resolved::Auto,
            Resolved::Value(value) => {
                Resolved::Value(calculate_dimension(value, ratio, precision))
            }
        }
    }

    fn into_attribute(self, natural: f64) -> AttrValue {
        match self {
            Resolved::Auto => AttrValue::Number(natural),
            Resolved::Value(value) => value,
        }
    }
}

/// Compute the `width` and `height` attributes for the final box
///
/// With nothing requested the height defaults to `default_size`. When only one
/// side is requested the other keeps the box's aspect ratio. Suppressed sides
/// take part in the computation as if unset but are not emitted.
pub fn resolve_dimensions(
    width: &Dimension,
    height: &Dimension,
    bbox: &IconBox,
    default_size: &str,
    precision: f64,
) -> (Option<AttrValue>, Option<AttrValue>) {
    let custom_width = Resolved::from_dimension(width);
    let custom_height = Resolved::from_dimension(height);

    let (resolved_width, resolved_height) = match (custom_width, custom_height) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => {
            let h = w.scaled(bbox.height / bbox.width, precision);
            (w, h)
        }
        (None, h) => {
            let h = h.unwrap_or_else(|| Resolved::Value(AttrValue::from(default_size)));
            let w = h.scaled(bbox.width / bbox.height, precision);
            (w, h)
        }
    };

    let width_attr = (*width != Dimension::Suppressed)
        .then(|| resolved_width.into_attribute(bbox.width));
    let height_attr = (*height != Dimension::Suppressed)
        .then(|| resolved_height.into_attribute(bbox.height));
    (width_attr, height_attr)
}

//! Flip and rotation composition against the icon's bounding box
//!
//! Icons carry a default rotation and flips; render options toggle the flips
//! and add quarter turns. The combined transform is applied to the viewBox
//! and expressed as SVG transform operations on a wrapping `<g>`.
//!
//! ## Order
//!
//! Flips are resolved first. Flipping both axes is the same as a half turn, so
//! it becomes `rotate += 2` with no scale operations. A single flip translates
//! and mirrors the body, moving the box origin to zero. Rotation is applied
//! last but its operation is placed first in the transform list.

use std::fmt;

use crate::icon::NormalizedIcon;
use crate::options::{keywords, Keyword, RenderOptions};

use super::attributes::fmt_number;

/// The visible region of the icon grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl IconBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Select the box for block or inline layout
    pub fn from_icon(icon: &NormalizedIcon, inline: bool) -> Self {
        Self {
            left: icon.left,
            top: if inline { icon.inline_top } else { icon.top },
            width: icon.width,
            height: if inline {
                icon.inline_height
            } else {
                icon.height
            },
        }
    }

    /// `viewBox` attribute value
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            fmt_number(self.left),
            fmt_number(self.top),
            fmt_number(self.width),
            fmt_number(self.height)
        )
    }

    fn swap_axes(&mut self) {
        if self.left != 0.0 || self.top != 0.0 {
            std::mem::swap(&mut self.left, &mut self.top);
        }
        if self.width != self.height {
            std::mem::swap(&mut self.width, &mut self.height);
        }
    }
}

/// Rotation and flips to apply to an icon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IconTransform {
    /// Quarter turns, clockwise
    pub rotate: i64,
    pub h_flip: bool,
    pub v_flip: bool,
}

impl IconTransform {
    /// The icon's own transform
    pub fn from_icon(icon: &NormalizedIcon) -> Self {
        Self {
            rotate: icon.rotate,
            h_flip: icon.h_flip,
            v_flip: icon.v_flip,
        }
    }

    /// Combine with the flips and rotation requested in render options
    ///
    /// Flip options toggle rather than set, so flipping an already flipped
    /// icon restores it. Keywords in `flip` toggle once per occurrence.
    pub fn with_options(mut self, options: &RenderOptions) -> Self {
        if options.h_flip {
            self.h_flip = !self.h_flip;
        }
        if options.v_flip {
            self.v_flip = !self.v_flip;
        }
        if let Some(flip) = &options.flip {
            for keyword in keywords(flip) {
                match keyword {
                    Keyword::Horizontal => self.h_flip = !self.h_flip,
                    Keyword::Vertical => self.v_flip = !self.v_flip,
                    _ => {}
                }
            }
        }
        if let Some(rotate) = &options.rotate {
            self.rotate = self.rotate.wrapping_add(rotate.quarter_turns());
        }
        self
    }
}

/// A single SVG transform operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translate { x: f64, y: f64 },
    Scale { x: f64, y: f64 },
    /// Angle in degrees around `(cx, cy)`
    Rotate { angle: i32, cx: f64, cy: f64 },
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOp::Translate { x, y } => {
                write!(f, "translate({} {})", fmt_number(*x), fmt_number(*y))
            }
            TransformOp::Scale { x, y } => {
                write!(f, "scale({} {})", fmt_number(*x), fmt_number(*y))
            }
            TransformOp::Rotate { angle, cx, cy } => {
                write!(f, "rotate({} {} {})", angle, fmt_number(*cx), fmt_number(*cy))
            }
        }
    }
}

/// Join operations into a `transform` attribute value
pub fn transform_attribute(ops: &[TransformOp]) -> String {
    ops.iter()
        .map(|op| op.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply a transform to a box
///
/// Returns the box as seen after the transform together with the operations
/// that map the original body onto it.
pub fn apply_transform(
    mut bbox: IconBox,
    transform: &IconTransform,
) -> (IconBox, Vec<TransformOp>) {
    let mut ops = Vec::new();
    let mut rotate = transform.rotate;

    match (transform.h_flip, transform.v_flip) {
        (true, true) => rotate = rotate.wrapping_add(2),
        (true, false) => {
            ops.push(TransformOp::Translate {
                x: bbox.width + bbox.left,
                y: 0.0 - bbox.top,
            });
            ops.push(TransformOp::Scale { x: -1.0, y: 1.0 });
            bbox.left = 0.0;
            bbox.top = 0.0;
        }
        (false, true) => {
            ops.push(TransformOp::Translate {
                x: 0.0 - bbox.left,
                y: bbox.height + bbox.top,
            });
            ops.push(TransformOp::Scale { x: 1.0, y: -1.0 });
            bbox.left = 0.0;
            bbox.top = 0.0;
        }
        (false, false) => {}
    }

    match rotate.rem_euclid(4) {
        1 => {
            let center = bbox.height / 2.0 + bbox.top;
            ops.insert(
                0,
                TransformOp::Rotate {
                    angle: 90,
                    cx: center,
                    cy: center,
                },
            );
            bbox.swap_axes();
        }
        2 => {
            ops.insert(
                0,
                TransformOp::Rotate {
                    angle: 180,
                    cx: bbox.width / 2.0 + bbox.left,
                    cy: bbox.height / 2.0 + bbox.top,
                },
            );
        }
        3 => {
            let center = bbox.width / 2.0 + bbox.left;
            ops.insert(
                0,
                TransformOp::Rotate {
                    angle: -90,
                    cx: center,
                    cy: center,
                },
            );
            bbox.swap_axes();
        }
        _ => {}
    }

    (bbox, ops)
}

//! `preserveAspectRatio` from alignment keywords

use crate::options::{keywords, Keyword};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// How the viewBox is fitted into the element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    /// Crop to fill instead of fitting inside
    pub slice: bool,
}

impl Alignment {
    /// Parse alignment keywords on top of the centered default
    ///
    /// Unknown words are ignored and later keywords override earlier ones.
    pub fn parse(input: &str) -> Self {
        keywords(input).fold(Self::default(), |mut align, keyword| {
            match keyword {
                Keyword::Left => align.horizontal = HorizontalAlign::Left,
                Keyword::Right => align.horizontal = HorizontalAlign::Right,
                Keyword::Center => align.horizontal = HorizontalAlign::Center,
                Keyword::Top => align.vertical = VerticalAlign::Top,
                Keyword::Bottom => align.vertical = VerticalAlign::Bottom,
                Keyword::Middle => align.vertical = VerticalAlign::Middle,
                Keyword::Crop => align.slice = true,
                Keyword::Meet => align.slice = false,
                Keyword::Horizontal | Keyword::Vertical | Keyword::Other => {}
            }
            align
        })
    }

    /// `preserveAspectRatio` attribute value
    pub fn preserve_aspect_ratio(&self) -> String {
        let x = match self.horizontal {
            HorizontalAlign::Left => "xMin",
            HorizontalAlign::Center => "xMid",
            HorizontalAlign::Right => "xMax",
        };
        let y = match self.vertical {
            VerticalAlign::Top => "YMin",
            VerticalAlign::Middle => "YMid",
            VerticalAlign::Bottom => "YMax",
        };
        let mode = if self.slice { "slice" } else { "meet" };
        format!("{x}{y} {mode}")
    }
}

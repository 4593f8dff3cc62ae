//! Default filling for icon data

use super::IconData;

/// Default origin offset
pub const DEFAULT_LEFT: f64 = 0.0;
pub const DEFAULT_TOP: f64 = 0.0;
/// Default grid size
pub const DEFAULT_WIDTH: f64 = 16.0;
pub const DEFAULT_HEIGHT: f64 = 16.0;

/// Baseline offset for icons designed on a 14px grid
const VERTICAL_ALIGN_14: f64 = -0.143;
/// Baseline offset for icons designed on a 16px grid
const VERTICAL_ALIGN_16: f64 = -0.125;

/// Icon data with every field required by the renderer present
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedIcon {
    pub body: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub rotate: i64,
    pub h_flip: bool,
    pub v_flip: bool,
    pub inline_top: f64,
    pub inline_height: f64,
    pub vertical_align: f64,
}

/// Fill missing icon attributes with defaults and derive the inline layout fields
///
/// Explicit values always win. Non-finite numbers are carried over untouched.
pub fn normalize(icon: &IconData) -> NormalizedIcon {
    let top = icon.top.unwrap_or(DEFAULT_TOP);
    let height = icon.height.unwrap_or(DEFAULT_HEIGHT);

    NormalizedIcon {
        body: icon.body.clone(),
        left: icon.left.unwrap_or(DEFAULT_LEFT),
        top,
        width: icon.width.unwrap_or(DEFAULT_WIDTH),
        height,
        rotate: icon.rotate.unwrap_or(0),
        h_flip: icon.h_flip.unwrap_or(false),
        v_flip: icon.v_flip.unwrap_or(false),
        inline_top: icon.inline_top.unwrap_or(top),
        inline_height: icon.inline_height.unwrap_or(height),
        vertical_align: icon
            .vertical_align
            .unwrap_or_else(|| default_vertical_align(height)),
    }
}

/// Baseline offset for an icon of the given height
///
/// Heights divisible by 7 but not by 8 are treated as 14px-grid icons.
pub fn default_vertical_align(height: f64) -> f64 {
    if height % 7.0 == 0.0 && height % 8.0 != 0.0 {
        VERTICAL_ALIGN_14
    } else {
        VERTICAL_ALIGN_16
    }
}

impl From<IconData> for NormalizedIcon {
    fn from(icon: IconData) -> Self {
        normalize(&icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let icon = normalize(&IconData::new("<path/>"));
        assert_eq!(icon.left, 0.0);
        assert_eq!(icon.top, 0.0);
        assert_eq!(icon.width, 16.0);
        assert_eq!(icon.height, 16.0);
        assert_eq!(icon.rotate, 0);
        assert!(!icon.h_flip);
        assert!(!icon.v_flip);
        assert_eq!(icon.inline_top, 0.0);
        assert_eq!(icon.inline_height, 16.0);
        assert_eq!(icon.vertical_align, -0.125);
    }

    #[test]
    fn test_inline_fields_follow_top_and_height() {
        let icon = normalize(&IconData::new("").with_size(24.0, 20.0).with_origin(1.0, 2.0));
        assert_eq!(icon.inline_top, 2.0);
        assert_eq!(icon.inline_height, 20.0);
    }

    #[test]
    fn test_explicit_inline_fields_kept() {
        let icon = normalize(
            &IconData::new("")
                .with_size(24.0, 24.0)
                .with_inline_box(-2.0, 28.0)
                .with_vertical_align(0.0),
        );
        assert_eq!(icon.inline_top, -2.0);
        assert_eq!(icon.inline_height, 28.0);
        assert_eq!(icon.vertical_align, 0.0);
    }

    #[test]
    fn test_vertical_align_rule() {
        assert_eq!(default_vertical_align(14.0), -0.143);
        assert_eq!(default_vertical_align(16.0), -0.125);
        assert_eq!(default_vertical_align(21.0), -0.143);
        assert_eq!(default_vertical_align(56.0), -0.125);
        assert_eq!(default_vertical_align(f64::NAN), -0.125);
    }

    #[test]
    fn test_nan_propagates() {
        let mut data = IconData::new("");
        data.width = Some(f64::NAN);
        let icon = normalize(&data);
        assert!(icon.width.is_nan());
    }
}

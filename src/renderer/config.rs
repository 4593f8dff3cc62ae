//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Scaled dimensions are rounded up to `1 / precision`; must be positive
    pub precision: f64,

    /// Height used when neither width nor height is requested
    pub default_size: String,

    /// Whether to add the `rotate(360deg)` style that avoids subpixel
    /// rendering glitches in some browsers
    pub rotation_workaround: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            precision: 100.0,
            default_size: "1em".to_string(),
            rotation_workaround: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rounding precision for scaled dimensions
    ///
    /// Values that are not positive and finite are ignored.
    pub fn with_precision(mut self, precision: f64) -> Self {
        if precision.is_finite() && precision > 0.0 {
            self.precision = precision;
        }
        self
    }

    /// Set the default size
    pub fn with_default_size(mut self, size: impl Into<String>) -> Self {
        self.default_size = size.into();
        self
    }

    /// Set whether the rotation workaround style is emitted
    pub fn with_rotation_workaround(mut self, enabled: bool) -> Self {
        self.rotation_workaround = enabled;
        self
    }
}

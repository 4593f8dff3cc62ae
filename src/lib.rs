//! Icon Render - presentational SVG markup for vector icons
//!
//! This library normalizes icon data, composes flips and rotations against the
//! icon's bounding box, sizes the output and generates unique element ids so
//! many icon instances can live on one page.
//!
//! # Example
//!
//! ```rust
//! use icon_render::{normalize, get_svg, IconData, RenderOptions};
//!
//! let icon = normalize(&IconData::new(r#"<path id="a"/>"#).with_size(16.0, 16.0));
//! let svg = get_svg(&icon, &RenderOptions::new());
//! assert!(svg.contains(r#"viewBox="0 0 16 16""#));
//! assert!(!svg.contains(r#"id="a""#));
//! ```

pub mod error;
pub mod icon;
pub mod options;
pub mod registry;
pub mod renderer;

pub use error::{IconError, LoadError};
pub use icon::{normalize, IconData, NormalizedIcon};
pub use options::{coerce_bool_like, BoolLike, Dimension, RenderOptions, Rotation};
pub use registry::{resolve_icon, IconInput, IconRegistry};
pub use renderer::{
    calculate_dimension, get_attributes, get_svg, AttrValue, IdGenerator, RenderResult,
    SvgConfig, SvgRenderer,
};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The icon could not be resolved
    #[error("icon error: {0}")]
    Icon(#[from] IconError),

    /// An icon set or options file could not be loaded
    #[error("load error: {0}")]
    Load(#[from] LoadError),
}

/// Resolve, normalize and render an icon with the default renderer
///
/// # Example
///
/// ```rust
/// use icon_render::{render_icon, IconData, IconInput, IconRegistry, RenderOptions};
///
/// let mut registry = IconRegistry::new();
/// registry.register("dot", IconData::new("<circle cx=\"8\" cy=\"8\" r=\"4\"/>"));
///
/// let svg = render_icon(Some(&IconInput::from("dot")), &registry, &RenderOptions::new()).unwrap();
/// assert!(svg.contains("<circle"));
///
/// assert!(render_icon(None, &registry, &RenderOptions::new()).is_err());
/// ```
pub fn render_icon(
    input: Option<&IconInput>,
    registry: &IconRegistry,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    render_icon_with(&SvgRenderer::new(), input, registry, options)
}

/// Resolve, normalize and render an icon with a custom renderer
pub fn render_icon_with(
    renderer: &SvgRenderer<'_>,
    input: Option<&IconInput>,
    registry: &IconRegistry,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let data = resolve_icon(input, registry)?;
    let icon = normalize(&data);
    Ok(renderer.svg(&icon, options))
}

//! SVG renderer for normalized icons
//!
//! This module turns a [`NormalizedIcon`](crate::icon::NormalizedIcon) and
//! [`RenderOptions`](crate::options::RenderOptions) into `<svg>` markup.

pub mod align;
pub mod attributes;
pub mod config;
pub mod dimension;
pub mod ids;
pub mod svg;
pub mod transform;

pub use align::Alignment;
pub use attributes::{AttrValue, SvgAttributes};
pub use config::SvgConfig;
pub use dimension::calculate_dimension;
pub use ids::IdGenerator;
pub use svg::{get_attributes, get_svg, RenderResult, SvgRenderer};
pub use transform::{IconBox, IconTransform, TransformOp};

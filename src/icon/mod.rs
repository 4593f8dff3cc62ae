//! Icon data model and normalization

pub mod data;
pub mod normalize;

pub use data::IconData;
pub use normalize::{normalize, NormalizedIcon};

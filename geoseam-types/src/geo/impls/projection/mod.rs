//! Projection implementations.

mod dimensions;
#[cfg(feature = "geodesy")]
mod geodesy;
mod identity;
mod web_mercator;

pub use dimensions::AddDimensionProjection;
#[cfg(feature = "geodesy")]
pub use geodesy::GeodesyProjection;
pub use identity::IdentityProjection;
pub use web_mercator::WebMercator;

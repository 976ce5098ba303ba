//! Geometries in geographic coordinates (latitude and longitude) and
//! conversion between coordinate reference systems: spatial reference
//! identifiers, projections, batch coordinate transformation and envelope
//! reprojection.

mod crs;
mod datum;
mod distance;
mod feature;
pub mod impls;
mod reproject;
mod srid;
mod traits;
mod transform;

pub use crs::{Crs, ProjectionType};
pub use datum::Datum;
pub use distance::great_circle_distance;
pub use feature::{Feature, Value, CRS_PROPERTY_KEY};
pub use reproject::{project_rect, DEFAULT_SAMPLES_PER_EDGE};
pub use srid::{Authority, AuthorityResolver, Srid, SRID_ENCODING_VERSION};
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::{ChainProjection, InvertedProjection, Projection};
pub use transform::{transform_in_place, CoordTransform, ProjectionTransform, TransformError};

//! Geometry model and coordinate reference system interop algorithms.
//!
//! This crate defines the vector geometry types used across the Geoseam
//! workspace together with the algorithms that move geometries between
//! coordinate reference systems:
//!
//! * [`cartesian`] — points, contours, polygons and rectangles in planar
//!   coordinates, including ring winding normalization;
//! * [`geo`] — geographic points, [`Crs`](geo::Crs) and [`Srid`](geo::Srid)
//!   identifiers, projections, batch coordinate transformation and envelope
//!   reprojection;
//! * [`geometry`] — the [`Geom`](geometry::Geom) sum type over all geometry
//!   variants.
//!
//! The projection math itself is not implemented here. Transforms are
//! supplied by the caller through the [`Projection`](geo::Projection) trait
//! or the [`CoordTransform`](geo::CoordTransform) interface.

pub mod cartesian;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use geometry::Geom;

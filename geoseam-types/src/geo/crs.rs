use serde::{Deserialize, Serialize};

use crate::cartesian::NewCartesianPoint2d;
use crate::geo::datum::Datum;
use crate::geo::impls::projection::WebMercator;
use crate::geo::srid::{Authority, Srid};
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

/// Coordinate reference system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crs {
    datum: Datum,
    projection_type: ProjectionType,
    srid: Option<Srid>,
}

/// Type of the projection a CRS uses to convert geographic coordinates into
/// planar ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ProjectionType {
    /// The projection is not known to this crate.
    Unknown,
    /// Unprojected geographic coordinates.
    None,
    /// Spherical web mercator.
    WebMercator,
    /// A projection identified by an external definition string.
    Other(String),
}

impl Crs {
    /// Geographic WGS84 coordinates (EPSG:4326).
    pub const WGS84: Crs = Crs {
        datum: Datum::WGS84,
        projection_type: ProjectionType::None,
        srid: Some(Srid::WGS84),
    };

    /// Web mercator projection over the WGS84 datum (EPSG:3857).
    pub const EPSG3857: Crs = Crs {
        datum: Datum::WGS84,
        projection_type: ProjectionType::WebMercator,
        srid: Some(Srid::WEB_MERCATOR),
    };

    /// Creates a new CRS without a spatial reference identifier.
    pub fn new(datum: Datum, projection_type: ProjectionType) -> Self {
        Self {
            datum,
            projection_type,
            srid: None,
        }
    }

    /// Attaches a spatial reference identifier to the CRS.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    /// Datum of the CRS.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Projection type of the CRS.
    pub fn projection_type(&self) -> &ProjectionType {
        &self.projection_type
    }

    /// Spatial reference identifier of the CRS, if one is attached.
    pub fn srid(&self) -> Option<Srid> {
        self.srid
    }

    /// Derives a CRS from a spatial reference identifier.
    ///
    /// Well-known codes resolve to fully described systems. Any other code
    /// produces a CRS with [`ProjectionType::Unknown`] that preserves the
    /// identifier; resolving such a code to a full description is the job of
    /// an external registry.
    pub fn from_srid(srid: Srid) -> Self {
        match (srid.authority(), srid.code()) {
            (Authority::Epsg, 4326) | (Authority::Crs, 84) => Self {
                datum: Datum::WGS84,
                projection_type: ProjectionType::None,
                srid: Some(srid),
            },
            (Authority::Epsg, 3857) => Self {
                datum: Datum::WGS84,
                projection_type: ProjectionType::WebMercator,
                srid: Some(srid),
            },
            _ => Self {
                datum: Datum::WGS84,
                projection_type: ProjectionType::Unknown,
                srid: Some(srid),
            },
        }
    }

    /// Returns the projection used by the CRS, or `None` if the projection is
    /// unknown to this crate.
    pub fn get_projection<In, Out>(
        &self,
    ) -> Option<Box<dyn Projection<InPoint = In, OutPoint = Out>>>
    where
        In: NewGeoPoint<f64> + 'static,
        Out: NewCartesianPoint2d<f64> + 'static,
    {
        match self.projection_type {
            ProjectionType::WebMercator => Some(Box::new(WebMercator::new(self.datum))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::impls::GeoPoint2d;

    #[test]
    fn from_srid_resolves_well_known_codes() {
        assert_eq!(Crs::from_srid(Srid::WGS84), Crs::WGS84);
        assert_eq!(Crs::from_srid(Srid::WEB_MERCATOR), Crs::EPSG3857);

        let crs84 = Srid::new(Authority::Crs, 84).unwrap();
        assert_eq!(
            *Crs::from_srid(crs84).projection_type(),
            ProjectionType::None
        );
    }

    #[test]
    fn from_srid_preserves_unknown_codes() {
        let srid = Srid::new(Authority::Epsg, 32633).unwrap();
        let crs = Crs::from_srid(srid);
        assert_eq!(*crs.projection_type(), ProjectionType::Unknown);
        assert_eq!(crs.srid(), Some(srid));
    }

    #[test]
    fn get_projection() {
        let projection = Crs::EPSG3857
            .get_projection::<GeoPoint2d, Point2d>()
            .unwrap();
        assert!(projection.project(&GeoPoint2d::latlon(0.0, 0.0)).is_some());

        assert!(Crs::WGS84
            .get_projection::<GeoPoint2d, Point2d>()
            .is_none());
    }
}

//! Geometries with out-of-band CRS metadata attached.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Winding};
use crate::geo::crs::Crs;
use crate::geo::srid::Srid;
use crate::geometry::Geom;

/// Key under which a CRS reference is looked up in a feature's property map.
pub const CRS_PROPERTY_KEY: &str = "crs";

/// Property value attached to a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// String value.
    String(String),
    /// Floating point value.
    F64(f64),
    /// Integer value.
    I64(i64),
    /// Boolean value.
    Bool(bool),
    /// A coordinate reference system.
    Crs(Crs),
}

/// A geometry with metadata attached.
///
/// The CRS of a feature is out-of-band metadata: it is never inferred from
/// the coordinate values themselves. It is set once when the feature is
/// produced or reprojected and read through [`Feature::crs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<P> {
    geometry: Geom<P>,
    crs: Option<Crs>,
    srid: Option<Srid>,
    properties: HashMap<String, Value>,
}

impl<P> Feature<P> {
    /// Creates a new feature without metadata.
    pub fn new(geometry: Geom<P>) -> Self {
        Self {
            geometry,
            crs: None,
            srid: None,
            properties: HashMap::new(),
        }
    }

    /// Attaches a direct CRS reference to the feature.
    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    /// Attaches a spatial reference identifier to the feature.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    /// Sets a property value.
    pub fn set_property(&mut self, key: impl Into<String>, value: Value) {
        self.properties.insert(key.into(), value);
    }

    /// Returns a property value.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Geometry of the feature.
    pub fn geometry(&self) -> &Geom<P> {
        &self.geometry
    }

    /// Consumes the feature and returns its geometry.
    pub fn into_geometry(self) -> Geom<P> {
        self.geometry
    }

    /// Resolves the CRS of the feature.
    ///
    /// The sources are checked in priority order:
    ///
    /// 1. a direct CRS reference attached with [`Feature::with_crs`];
    /// 2. a [`Value::Crs`] property stored under [`CRS_PROPERTY_KEY`];
    /// 3. the spatial reference identifier attached with
    ///    [`Feature::with_srid`], decoded through [`Crs::from_srid`].
    ///
    /// If none of the sources is present the CRS of the feature is undefined
    /// and `None` is returned. Callers performing cross-CRS operations must
    /// treat that as "unknown": no default (such as WGS84) is assumed.
    pub fn crs(&self) -> Option<Crs> {
        if let Some(crs) = &self.crs {
            return Some(crs.clone());
        }

        if let Some(Value::Crs(crs)) = self.properties.get(CRS_PROPERTY_KEY) {
            return Some(crs.clone());
        }

        self.srid.map(Crs::from_srid)
    }
}

impl<P: CartesianPoint2d + Clone> Feature<P> {
    /// Returns a copy of the feature with normalized ring winding.
    ///
    /// The CRS metadata of the feature is preserved on the result.
    pub fn wound(&self, shell: Winding) -> Self {
        Self {
            geometry: self.geometry.wound(shell),
            crs: self.crs.clone(),
            srid: self.srid,
            properties: self.properties.clone(),
        }
    }
}

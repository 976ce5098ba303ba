use serde::{Deserialize, Serialize};

use crate::cartesian::impls::polygon::Polygon;
use crate::cartesian::orient::Winding;
use crate::cartesian::traits::CartesianPoint2d;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon<P> {
    /// Inner polygons.
    pub parts: Vec<Polygon<P>>,
}

impl<P> MultiPolygon<P> {
    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }

    /// Iterates over the inner polygons.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon<P>> {
        self.parts.iter()
    }
}

impl<P: CartesianPoint2d + Clone> MultiPolygon<P> {
    /// Returns a copy with every member polygon normalized independently:
    /// shells wound in the `shell` direction, holes in the opposite one.
    pub fn wound(&self, shell: Winding) -> Self {
        Self {
            parts: self.parts.iter().map(|p| p.wound(shell)).collect(),
        }
    }
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

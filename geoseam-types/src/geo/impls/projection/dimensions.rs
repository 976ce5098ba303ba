use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::cartesian::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d,
};
use crate::geo::traits::projection::Projection;

/// Projection that adds a default z-value to a 2d point. Reversed projecting
/// drops the z-value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Hash, Deserialize, Serialize)]
pub struct AddDimensionProjection<Num, In, Out> {
    z: Num,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<Num, In, Out> AddDimensionProjection<Num, In, Out> {
    /// Creates a new instance, that will set the specified `z` value when
    /// projecting.
    pub fn new(z: Num) -> Self {
        Self {
            z,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<Num: Copy, In: NewCartesianPoint2d<Num>, Out: NewCartesianPoint3d<Num>> Projection
    for AddDimensionProjection<Num, In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        Some(Out::new(input.x(), input.y(), self.z))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        Some(In::new(input.x(), input.y()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Point2d, Point3d};

    #[test]
    fn adds_and_drops_the_z_value() {
        let projection = AddDimensionProjection::<f64, Point2d, Point3d>::new(5.0);

        let projected = projection.project(&Point2d::new(1.0, 2.0)).unwrap();
        assert_eq!(projected, Point3d::new(1.0, 2.0, 5.0));

        let restored = projection.unproject(&projected).unwrap();
        assert_eq!(restored, Point2d::new(1.0, 2.0));
    }
}

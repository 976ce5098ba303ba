use std::marker::PhantomData;

use geodesy::prelude::*;

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;

/// Projection backed by an operation of the [`geodesy`] crate.
pub struct GeodesyProjection<In, Out> {
    context: Minimal,
    op: OpHandle,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> GeodesyProjection<In, Out> {
    /// Creates a new projection from the given operation definition, e.g.
    /// `"utm zone=32"`.
    ///
    /// Returns `None` if the definition is not understood by the `geodesy`
    /// crate.
    pub fn new(definition: &str) -> Option<Self> {
        let mut context = Minimal::new();
        let op = context.op(definition).ok()?;
        Some(Self {
            context,
            op,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        })
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for GeodesyProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let mut data = [Coor2D::geo(input.lat(), input.lon())];
        self.context.apply(self.op, Fwd, &mut data).ok()?;

        if !data[0].0[0].is_finite() || !data[0].0[1].is_finite() {
            return None;
        }

        Some(Out::new(data[0].0[0], data[0].0[1]))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let mut data = [Coor2D([input.x(), input.y()])];
        self.context.apply(self.op, Inv, &mut data).ok()?;

        Some(In::latlon(
            data[0].0[1].to_degrees(),
            data[0].0[0].to_degrees(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::impls::GeoPoint2d;

    #[test]
    fn utm_round_trip() {
        let projection: GeodesyProjection<GeoPoint2d, Point2d> =
            GeodesyProjection::new("utm zone=32").unwrap();

        let original = GeoPoint2d::latlon(55.0, 12.0);
        let projected = projection.project(&original).unwrap();
        let restored = projection.unproject(&projected).unwrap();

        assert_abs_diff_eq!(restored.lat(), original.lat(), epsilon = 1e-6);
        assert_abs_diff_eq!(restored.lon(), original.lon(), epsilon = 1e-6);
    }

    #[test]
    fn invalid_definition() {
        assert!(GeodesyProjection::<GeoPoint2d, Point2d>::new("no such projection").is_none());
    }
}

/// Converts points from one coordinate system into another.
pub trait Projection {
    /// Type of the input points.
    type InPoint;
    /// Type of the output points.
    type OutPoint;

    /// Converts a point from the input coordinate system into the output one.
    ///
    /// Returns `None` if the point cannot be represented in the output
    /// coordinate system.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;

    /// Converts a point from the output coordinate system back into the input
    /// one.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Projection that applies the inner projection in the reverse direction.
pub struct InvertedProjection<P>(P);

impl<P> InvertedProjection<P> {
    /// Creates a new instance.
    pub fn new(inner: P) -> Self {
        Self(inner)
    }
}

impl<P: Projection> Projection for InvertedProjection<P> {
    type InPoint = P::OutPoint;
    type OutPoint = P::InPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.0.unproject(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.0.project(input)
    }
}

/// Applies two projections in sequence.
pub struct ChainProjection<A, B> {
    first: A,
    second: B,
}

impl<A, B> ChainProjection<A, B> {
    /// Creates a new instance.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Projection for ChainProjection<A, B>
where
    A: Projection,
    B: Projection<InPoint = A::OutPoint>,
{
    type InPoint = A::InPoint;
    type OutPoint = B::OutPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.second.project(&self.first.project(input)?)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.first.unproject(&self.second.unproject(input)?)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::impls::projection::WebMercator;
    use crate::geo::impls::GeoPoint2d;
    use crate::geo::{GeoPoint, NewGeoPoint};

    #[test]
    fn inverted_projection_swaps_directions() {
        let projection = WebMercator::<GeoPoint2d, Point2d>::default();
        let inverted = InvertedProjection::new(WebMercator::<GeoPoint2d, Point2d>::default());

        let point = GeoPoint2d::latlon(45.0, 30.0);
        let projected = projection.project(&point).unwrap();
        let restored = inverted.project(&projected).unwrap();

        assert_abs_diff_eq!(restored.lat(), point.lat(), epsilon = 1e-9);
        assert_abs_diff_eq!(restored.lon(), point.lon(), epsilon = 1e-9);
    }

    #[test]
    fn chain_projection_applies_in_sequence() {
        let chain = ChainProjection::new(
            WebMercator::<GeoPoint2d, Point2d>::default(),
            InvertedProjection::new(WebMercator::<GeoPoint2d, Point2d>::default()),
        );

        let point = GeoPoint2d::latlon(45.0, 30.0);
        let round_tripped = chain.project(&point).unwrap();

        assert_abs_diff_eq!(round_tripped.lat(), point.lat(), epsilon = 1e-9);
        assert_abs_diff_eq!(round_tripped.lon(), point.lon(), epsilon = 1e-9);
    }
}

//! Sum type over the geometry variants.

use serde::{Deserialize, Serialize};

use crate::cartesian::{
    CartesianPoint2d, ClosedContour, Contour, MultiContour, MultiPoint, MultiPolygon, Polygon,
    Rect, Winding,
};
use crate::geo::Projection;

/// A geometry of one of the supported variants.
///
/// This is a closed set: code dispatching over geometries matches on the
/// variants exhaustively. The explicit empty geometry is represented as
/// `Geom::Collection(vec![])`; it is a value of its own, distinct from the
/// absence of a geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geom<P> {
    /// A single point.
    Point(P),
    /// A set of points.
    MultiPoint(MultiPoint<P>),
    /// A polyline.
    Contour(Contour<P>),
    /// A set of polylines.
    MultiContour(MultiContour<P>),
    /// A polygon.
    Polygon(Polygon<P>),
    /// A set of polygons.
    MultiPolygon(MultiPolygon<P>),
    /// A heterogeneous set of geometries.
    Collection(Vec<Geom<P>>),
}

impl<P> Geom<P> {
    /// Projects the geometry with the given projection.
    ///
    /// Returns `None` if any point of the geometry cannot be projected.
    pub fn project<Proj>(&self, projection: &Proj) -> Option<Geom<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        match self {
            Geom::Point(v) => Some(Geom::Point(projection.project(v)?)),
            Geom::MultiPoint(v) => Some(Geom::MultiPoint(
                v.iter_points()
                    .map(|p| projection.project(p))
                    .collect::<Option<Vec<_>>>()?
                    .into(),
            )),
            Geom::Contour(v) => Some(Geom::Contour(v.project_points(projection)?)),
            Geom::MultiContour(v) => Some(Geom::MultiContour(
                v.contours()
                    .map(|c| c.project_points(projection))
                    .collect::<Option<Vec<_>>>()?
                    .into(),
            )),
            Geom::Polygon(v) => Some(Geom::Polygon(v.project_points(projection)?)),
            Geom::MultiPolygon(v) => Some(Geom::MultiPolygon(
                v.polygons()
                    .map(|p| p.project_points(projection))
                    .collect::<Option<Vec<_>>>()?
                    .into(),
            )),
            Geom::Collection(v) => Some(Geom::Collection(
                v.iter()
                    .map(|g| g.project(projection))
                    .collect::<Option<Vec<_>>>()?,
            )),
        }
    }

    /// Returns true if the geometry contains no coordinates.
    pub fn is_empty(&self) -> bool {
        match self {
            Geom::Point(_) => false,
            Geom::MultiPoint(v) => v.is_empty(),
            Geom::Contour(v) => v.points().is_empty(),
            Geom::MultiContour(v) => v.is_empty(),
            Geom::Polygon(v) => v.outer_contour.points().is_empty(),
            Geom::MultiPolygon(v) => v.parts().is_empty(),
            Geom::Collection(v) => v.is_empty(),
        }
    }
}

impl<P: CartesianPoint2d> Geom<P> {
    /// Bounding rectangle of the geometry, or `None` if the geometry is
    /// empty.
    pub fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        match self {
            Geom::Point(v) => Some(Rect::from_point(v)),
            Geom::MultiPoint(v) => Rect::from_points(v.iter_points()),
            Geom::Contour(v) => Rect::from_points(v.iter_points()),
            Geom::MultiContour(v) => v
                .contours()
                .filter_map(|c| Rect::from_points(c.iter_points()))
                .reduce(|a, b| a.merge(b)),
            Geom::Polygon(v) => Rect::from_points(v.outer_contour.iter_points()),
            Geom::MultiPolygon(v) => v
                .polygons()
                .filter_map(|p| Rect::from_points(p.outer_contour.iter_points()))
                .reduce(|a, b| a.merge(b)),
            Geom::Collection(v) => v
                .iter()
                .filter_map(|g| g.bounding_rectangle())
                .reduce(|a, b| a.merge(b)),
        }
    }
}

impl<P: CartesianPoint2d + Clone> Geom<P> {
    /// Returns a copy of the geometry with normalized ring winding: polygon
    /// shells wound in the `shell` direction and holes in the opposite one.
    ///
    /// Variants without rings are returned unchanged.
    pub fn wound(&self, shell: Winding) -> Self {
        match self {
            Geom::Polygon(v) => Geom::Polygon(v.wound(shell)),
            Geom::MultiPolygon(v) => Geom::MultiPolygon(v.wound(shell)),
            Geom::Collection(v) => {
                Geom::Collection(v.iter().map(|g| g.wound(shell)).collect())
            }
            other => other.clone(),
        }
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<ClosedContour<P>> for Geom<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self::Polygon(value.into())
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}

impl<P> From<MultiPoint<P>> for Geom<P> {
    fn from(value: MultiPoint<P>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<P> From<MultiContour<P>> for Geom<P> {
    fn from(value: MultiContour<P>) -> Self {
        Self::MultiContour(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::impls::projection::IdentityProjection;

    fn square() -> Polygon<Point2d> {
        Polygon::from(ClosedContour::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(2.0, 0.0),
            Point2d::new(2.0, 2.0),
            Point2d::new(0.0, 2.0),
        ]))
    }

    #[test]
    fn bounding_rectangle() {
        let geom = Geom::from(square());
        assert_eq!(geom.bounding_rectangle(), Some(Rect::new(0.0, 0.0, 2.0, 2.0)));

        let collection = Geom::Collection(vec![
            Geom::Point(Point2d::new(-1.0, -1.0)),
            Geom::from(square()),
        ]);
        assert_eq!(
            collection.bounding_rectangle(),
            Some(Rect::new(-1.0, -1.0, 2.0, 2.0))
        );
    }

    #[test]
    fn empty_collection_is_the_empty_geometry() {
        let geom: Geom<Point2d> = Geom::Collection(vec![]);
        assert!(geom.is_empty());
        assert_eq!(geom.bounding_rectangle(), None);

        assert!(!Geom::Point(Point2d::new(0.0, 0.0)).is_empty());
    }

    #[test]
    fn project_dispatches_over_variants() {
        let projection = IdentityProjection::<Point2d, Point2d>::new();
        let geom = Geom::Collection(vec![
            Geom::Point(Point2d::new(1.0, 2.0)),
            Geom::from(square()),
        ]);

        let projected = geom.project(&projection).unwrap();
        assert_eq!(projected, geom);
    }

    #[test]
    fn wound_normalizes_polygons_only() {
        let geom = Geom::from(square()).wound(Winding::Clockwise);
        let Geom::Polygon(polygon) = &geom else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.outer_contour.winding(), Winding::Clockwise);

        let point = Geom::Point(Point2d::new(1.0, 1.0));
        assert_eq!(point.wound(Winding::Clockwise), point);
    }
}

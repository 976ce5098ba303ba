use geo_types::{Coord, CoordNum, LineString};
use nalgebra::{Point2, Scalar};
use num_traits::{Bounded, FromPrimitive};

use crate::cartesian::{ClosedContour, MultiPolygon, Polygon};

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> From<&ClosedContour<Point2<T>>>
    for LineString<T>
{
    fn from(value: &ClosedContour<Point2<T>>) -> Self {
        LineString::new(
            value
                .points()
                .iter()
                .map(|p| Coord { x: p.x, y: p.y })
                .collect(),
        )
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> From<LineString<T>>
    for ClosedContour<Point2<T>>
{
    fn from(value: LineString<T>) -> Self {
        ClosedContour::new(
            value
                .into_inner()
                .into_iter()
                .map(|c| Point2::new(c.x, c.y))
                .collect(),
        )
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> From<&Polygon<Point2<T>>>
    for geo_types::Polygon<T>
{
    fn from(value: &Polygon<Point2<T>>) -> Self {
        geo_types::Polygon::new(
            (&value.outer_contour).into(),
            value.inner_contours.iter().map(Into::into).collect(),
        )
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> From<geo_types::Polygon<T>>
    for Polygon<Point2<T>>
{
    fn from(value: geo_types::Polygon<T>) -> Self {
        let (exterior, interiors) = value.into_inner();
        Polygon::new(
            exterior.into(),
            interiors.into_iter().map(Into::into).collect(),
        )
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> From<&MultiPolygon<Point2<T>>>
    for geo_types::MultiPolygon<T>
{
    fn from(value: &MultiPolygon<Point2<T>>) -> Self {
        geo_types::MultiPolygon::new(value.polygons().map(Into::into).collect())
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> From<geo_types::MultiPolygon<T>>
    for MultiPolygon<Point2<T>>
{
    fn from(value: geo_types::MultiPolygon<T>) -> Self {
        value
            .into_iter()
            .map(Into::into)
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    #[test]
    fn polygon_round_trip() {
        let polygon = Polygon::new(
            ClosedContour::new(vec![
                Point2d::new(0.0, 0.0),
                Point2d::new(4.0, 0.0),
                Point2d::new(4.0, 4.0),
                Point2d::new(0.0, 4.0),
            ]),
            vec![ClosedContour::new(vec![
                Point2d::new(1.0, 1.0),
                Point2d::new(2.0, 1.0),
                Point2d::new(2.0, 2.0),
            ])],
        );

        let converted: geo_types::Polygon<f64> = (&polygon).into();
        let restored: Polygon<Point2d> = converted.into();
        assert_eq!(restored, polygon);
    }
}

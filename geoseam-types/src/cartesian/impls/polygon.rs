use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::cartesian::impls::contour::ClosedContour;
use crate::cartesian::orient::Winding;
use crate::cartesian::traits::CartesianPoint2d;
use crate::geo::Projection;
use crate::segment::Segment;

/// Polygon geometry: one outer ring and zero or more inner rings (holes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon<P> {
    /// Outer ring.
    pub outer_contour: ClosedContour<P>,
    /// Inner rings.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Iterates over all rings of the polygon starting with the outer one.
    pub fn iter_contours(&self) -> impl Iterator<Item = &ClosedContour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }

    /// Projects all the points of the polygon with the given projection.
    ///
    /// Returns `None` if any point cannot be projected.
    pub fn project_points<T, Proj>(&self, projection: &Proj) -> Option<Polygon<T>>
    where
        Proj: Projection<InPoint = P, OutPoint = T> + ?Sized,
    {
        let outer_contour = self.outer_contour.project_points(projection)?;
        let inner_contours = self
            .inner_contours
            .iter()
            .map(|c| c.project_points(projection))
            .collect::<Option<Vec<_>>>()?;
        Some(Polygon {
            outer_contour,
            inner_contours,
        })
    }
}

impl<P: CartesianPoint2d> Polygon<P> {
    /// Iterates over all segments of the polygon's rings.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, P>> {
        self.iter_contours()
            .flat_map(|c| c.points().windows(2))
            .map(|pair| Segment(&pair[0], &pair[1]))
    }

    /// Returns true if the `point` lies inside the polygon or on one of its
    /// rings.
    pub fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        let mut wn = 0i64;
        let x = point.x();
        let y = point.y();

        for segment in self.iter_segments() {
            if segment.0.x() < x && segment.1.x() < x {
                continue;
            }

            let is_to_right = segment.0.x() > x && segment.1.x() > x || {
                let x_max = if segment.0.x() > segment.1.x() {
                    segment.0.x()
                } else {
                    segment.1.x()
                };
                let ray_p1 = Point2::new(x, y);
                let ray_p2 = Point2::new(x_max, y);
                let ray = Segment(&ray_p1, &ray_p2);

                segment.intersects(&ray)
            };

            if is_to_right {
                if segment.0.y() < y && segment.1.y() >= y {
                    wn += 1;
                } else if segment.0.y() > y && segment.1.y() <= y {
                    wn -= 1;
                }
            }
        }

        wn != 0
    }
}

impl<P: CartesianPoint2d + Clone> Polygon<P> {
    /// Returns a copy of the polygon with the outer ring wound in the `shell`
    /// direction and every hole wound in the opposite direction.
    pub fn wound(&self, shell: Winding) -> Self {
        Self {
            outer_contour: self.outer_contour.wound(shell),
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| c.wound(shell.opposite()))
                .collect(),
        }
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    fn polygon_with_hole() -> Polygon<Point2d> {
        Polygon::new(
            ClosedContour::new(vec![
                Point2d::new(0.0, 0.0),
                Point2d::new(4.0, 0.0),
                Point2d::new(4.0, 4.0),
                Point2d::new(0.0, 4.0),
            ]),
            vec![ClosedContour::new(vec![
                Point2d::new(1.0, 1.0),
                Point2d::new(1.0, 3.0),
                Point2d::new(3.0, 3.0),
                Point2d::new(3.0, 1.0),
            ])],
        )
    }

    #[test]
    fn contains_point() {
        let polygon = Polygon::from(ClosedContour::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(1.0, 0.0),
        ]));

        assert!(polygon.contains_point(&Point2d::new(0.0, 0.0)));
        assert!(polygon.contains_point(&Point2d::new(1.0, 1.0)));
        assert!(polygon.contains_point(&Point2d::new(0.5, 0.0)));
        assert!(polygon.contains_point(&Point2d::new(0.2, 0.1)));
        assert!(!polygon.contains_point(&Point2d::new(0.2, 0.3)));
        assert!(!polygon.contains_point(&Point2d::new(0.2, -0.3)));
        assert!(!polygon.contains_point(&Point2d::new(1.1, 0.0)));
    }

    #[test]
    fn wound_orients_shell_and_holes_oppositely() {
        let polygon = polygon_with_hole().wound(Winding::CounterClockwise);
        assert_eq!(
            polygon.outer_contour.winding(),
            Winding::CounterClockwise
        );
        assert!(polygon
            .inner_contours
            .iter()
            .all(|c| c.winding() == Winding::Clockwise));

        let reversed = polygon.wound(Winding::Clockwise);
        assert_eq!(reversed.outer_contour.winding(), Winding::Clockwise);
        assert!(reversed
            .inner_contours
            .iter()
            .all(|c| c.winding() == Winding::CounterClockwise));
    }

    #[test]
    fn wound_is_idempotent() {
        let polygon = polygon_with_hole();
        let once = polygon.wound(Winding::Clockwise);
        assert_eq!(once, once.wound(Winding::Clockwise));
    }
}

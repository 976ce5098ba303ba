//! Straight line segments between two points.

use num_traits::{One, Zero};

use crate::cartesian::{CartesianPoint2d, Orientation};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Shortest euclidean distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment,
    ///   the returned value is the squared length of the normal
    /// * otherwise the returned value is the smaller of the squared distances
    ///   between the point and the segment's endpoints
    pub fn distance_to_point_sq<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Point,
    ) -> P::Num {
        if self.0.equal(self.1) {
            return self.0.distance_sq(point);
        }

        let ds = self.1.sub(self.0);
        let dp = point.sub(self.0);
        let ds_len = ds.x * ds.x + ds.y * ds.y;

        let r = (dp.x * ds.x + dp.y * ds.y) / ds_len;
        if r <= P::Num::zero() {
            self.0.distance_sq(point)
        } else if r >= P::Num::one() {
            self.1.distance_sq(point)
        } else {
            let s = (dp.y * ds.x - dp.x * ds.y) / ds_len;
            (s * s) * ds_len
        }
    }

    /// Returns true if the segment has at least one common point with the
    /// `other` segment.
    pub fn intersects<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &Segment<Point>,
    ) -> bool {
        fn on_segment<Num: num_traits::Num + PartialOrd>(
            p: &impl CartesianPoint2d<Num = Num>,
            q: &impl CartesianPoint2d<Num = Num>,
            r: &impl CartesianPoint2d<Num = Num>,
        ) -> bool {
            let x_max = if p.x() >= r.x() { p.x() } else { r.x() };
            let x_min = if p.x() <= r.x() { p.x() } else { r.x() };
            let y_max = if p.y() >= r.y() { p.y() } else { r.y() };
            let y_min = if p.y() <= r.y() { p.y() } else { r.y() };

            q.x() <= x_max && q.x() >= x_min && q.y() <= y_max && q.y() >= y_min
        }

        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        o1 == Orientation::Collinear && on_segment(self.0, other.0, self.1)
            || o2 == Orientation::Collinear && on_segment(self.0, other.1, self.1)
            || o3 == Orientation::Collinear && on_segment(other.0, self.0, other.1)
            || o4 == Orientation::Collinear && on_segment(other.0, self.1, other.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    #[test]
    fn distance_to_point() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(2.0, 0.0);
        let segment = Segment(&a, &b);

        assert_eq!(segment.distance_to_point_sq(&Point2d::new(1.0, 0.0)), 0.0);
        assert_eq!(segment.distance_to_point_sq(&Point2d::new(1.0, 1.0)), 1.0);
        assert_eq!(segment.distance_to_point_sq(&Point2d::new(-1.0, 0.0)), 1.0);
        assert_eq!(segment.distance_to_point_sq(&Point2d::new(3.0, 1.0)), 2.0);
    }

    #[test]
    fn distance_to_point_degenerate_segment() {
        let a = Point2d::new(1.0, 1.0);
        let segment = Segment(&a, &a);
        assert_eq!(segment.distance_to_point_sq(&Point2d::new(1.0, 3.0)), 4.0);
    }

    #[test]
    fn intersects() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(2.0, 2.0);
        let c = Point2d::new(0.0, 2.0);
        let d = Point2d::new(2.0, 0.0);
        assert!(Segment(&a, &b).intersects(&Segment(&c, &d)));

        let e = Point2d::new(3.0, 0.0);
        let f = Point2d::new(3.0, 2.0);
        assert!(!Segment(&a, &b).intersects(&Segment(&e, &f)));

        // collinear overlapping segments
        let g = Point2d::new(1.0, 1.0);
        let h = Point2d::new(3.0, 3.0);
        assert!(Segment(&a, &b).intersects(&Segment(&g, &h)));
    }
}

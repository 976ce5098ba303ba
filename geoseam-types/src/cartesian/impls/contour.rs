//! Contours are sequences of points.
//!
//! An open contour represents a polyline: the first and the last points are
//! not connected. A [`ClosedContour`] is a ring bounding a polygon's shell or
//! hole. Rings are stored *explicitly closed*: the last point repeats the
//! first one (compared by 2d coordinate equality), and a ring always contains
//! at least 4 points. [`ClosedContour::new`] establishes both invariants,
//! padding degenerate input by repeating the start point.

use serde::{Deserialize, Serialize};

use crate::cartesian::orient::Winding;
use crate::cartesian::traits::CartesianPoint2d;
use crate::geo::Projection;

/// A sequence of points, open or closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour<Point> {
    points: Vec<Point>,
    is_closed: bool,
}

impl<Point> Contour<Point> {
    /// Creates a new contour.
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Creates a new open contour.
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: false,
        }
    }

    /// Whether the contour is closed.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Points of the contour.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points of the contour.
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Projects all the points of the contour with the given projection.
    ///
    /// Returns `None` if any point cannot be projected.
    pub fn project_points<P, Proj>(&self, projection: &Proj) -> Option<Contour<P>>
    where
        Proj: Projection<InPoint = Point, OutPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<P>>>()?;
        Some(Contour {
            points,
            is_closed: self.is_closed,
        })
    }
}

impl<Point: CartesianPoint2d + Clone> Contour<Point> {
    /// Converts the contour into a ring if it is closed.
    pub fn into_closed(self) -> Option<ClosedContour<Point>> {
        if self.is_closed {
            Some(ClosedContour::new(self.points))
        } else {
            None
        }
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            points: value.points,
            is_closed: true,
        }
    }
}

/// A ring: an explicitly closed contour.
///
/// The last point of a ring equals the first one, and a non-empty ring
/// contains at least 4 points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosedContour<Point> {
    points: Vec<Point>,
}

impl<Point: CartesianPoint2d + Clone> ClosedContour<Point> {
    /// Creates a new ring from the given points.
    ///
    /// If the last point does not repeat the first one, the start point is
    /// appended. Input with fewer than 4 points after closing is padded by
    /// repeating the start point. Empty input produces an empty ring.
    pub fn new(mut points: Vec<Point>) -> Self {
        let Some(first) = points.first().cloned() else {
            return Self { points };
        };

        let closed = points
            .last()
            .map(|last| last.equal(&first))
            .unwrap_or(false);
        if !closed || points.len() == 1 {
            points.push(first.clone());
        }

        while points.len() < 4 {
            points.push(first.clone());
        }

        Self { points }
    }

    /// Signed area of the ring computed by the shoelace formula.
    ///
    /// The sign follows the mathematical axes convention: positive area means
    /// counterclockwise vertex order.
    pub fn area_signed(&self) -> Point::Num {
        use num_traits::{One, Zero};

        let mut aggr = Point::Num::zero();
        for pair in self.points.windows(2) {
            aggr = aggr + pair[0].x() * pair[1].y() - pair[1].x() * pair[0].y();
        }

        aggr / (Point::Num::one() + Point::Num::one())
    }

    /// Vertex traversal direction of the ring.
    pub fn winding(&self) -> Winding {
        use num_traits::Zero;

        if self.area_signed() <= Point::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Returns a copy of the ring with the given vertex traversal direction.
    ///
    /// If the ring is already wound in the `target` direction, an unchanged
    /// copy is returned. Otherwise the coordinate order is reversed exactly,
    /// so the result is still explicitly closed. Degenerate rings (all
    /// vertices collinear, signed area 0) have no defined orientation and are
    /// returned unchanged.
    pub fn wound(&self, target: Winding) -> Self {
        use num_traits::Zero;

        if self.area_signed() == Point::Num::zero() || self.winding() == target {
            return self.clone();
        }

        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }
}

impl<Point> ClosedContour<Point> {
    /// Points of the ring, including the closing point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points of the ring.
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Consumes the ring and returns its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Projects all the points of the ring with the given projection.
    ///
    /// Returns `None` if any point cannot be projected.
    pub fn project_points<P, Proj>(&self, projection: &Proj) -> Option<ClosedContour<P>>
    where
        Proj: Projection<InPoint = Point, OutPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<P>>>()?;
        Some(ClosedContour { points })
    }
}

/// A set of contours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiContour<P>(Vec<Contour<P>>);

impl<P> MultiContour<P> {
    /// Iterates over the contours.
    pub fn contours(&self) -> impl Iterator<Item = &Contour<P>> {
        self.0.iter()
    }

    /// Number of contours in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set contains no contours.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P> From<Vec<Contour<P>>> for MultiContour<P> {
    fn from(value: Vec<Contour<P>>) -> Self {
        Self(value)
    }
}

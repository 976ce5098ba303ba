//! Reader that reconstructs vector geometries from a generic planar shape
//! given as a stream of drawing commands.
//!
//! A shape is described by [`PathCommand`] values: `MoveTo` starts a new
//! path, `LineTo` extends the current one, `Close` turns the current path
//! into a ring. Any generator of such streams can feed the reader; how the
//! stream is produced (e.g. by flattening curved input) is outside the scope
//! of this crate.
//!
//! [`read_path`] consumes a whole stream and reassembles the collected
//! pieces into a single geometry: same-typed pieces combine into the
//! matching multi-geometry, mixed pieces into a collection, and an empty
//! stream into the explicit empty geometry `Geom::Collection(vec![])`.
//!
//! ```
//! use geoseam_path::{read_path, PathCommand, Point};
//! use geoseam_types::Geom;
//!
//! let commands = [
//!     PathCommand::MoveTo(Point::new(0.0, 0.0)),
//!     PathCommand::LineTo(Point::new(1.0, 0.0)),
//!     PathCommand::LineTo(Point::new(1.0, 1.0)),
//!     PathCommand::Close,
//! ];
//!
//! let Geom::Polygon(polygon) = read_path(commands).unwrap() else {
//!     panic!("a closed path produces a polygon");
//! };
//! assert_eq!(polygon.outer_contour.points().len(), 4);
//! ```

use geoseam_types::cartesian::{ClosedContour, Contour, Point2d, Polygon, Winding};
use geoseam_types::Geom;
use serde::{Deserialize, Serialize};

use crate::assemble::assemble;
pub use crate::error::GeoseamPathError;

mod assemble;
pub mod error;

/// Point type consumed by the reader.
pub type Point = Point2d;

/// A single drawing command of a planar shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Terminates the current path, if any, and starts a new one at the
    /// given point.
    MoveTo(Point),
    /// Extends the current path with a straight segment to the given point.
    LineTo(Point),
    /// Closes the current path into a ring and terminates it.
    Close,
}

/// State machine reconstructing geometries from a drawing command stream.
///
/// The reader is idle until a `MoveTo` opens a path. While a path is open,
/// `LineTo` appends vertices; the path terminates on `Close` (producing a
/// ring), on the next `MoveTo` or at the end of the stream (producing an
/// open line, or a point if only one vertex was accumulated). `LineTo` or
/// `Close` without an open path violate the protocol and fail with
/// [`GeoseamPathError::InvalidSequence`].
#[derive(Debug, Default)]
pub struct PathReader {
    current: Vec<Point>,
    parts: Vec<PathPart>,
}

#[derive(Debug, Clone)]
pub(crate) enum PathPart {
    Point(Point),
    Line(Contour<Point>),
    Ring(Polygon<Point>),
}

impl PathReader {
    /// Creates a new reader with no open path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next command into the reader.
    pub fn push(&mut self, command: PathCommand) -> Result<(), GeoseamPathError> {
        match command {
            PathCommand::MoveTo(point) => {
                self.flush_open_path();
                self.current.push(point);
            }
            PathCommand::LineTo(point) => {
                if self.current.is_empty() {
                    return Err(GeoseamPathError::InvalidSequence(
                        "line command with no open path".into(),
                    ));
                }

                self.current.push(point);
            }
            PathCommand::Close => {
                if self.current.is_empty() {
                    return Err(GeoseamPathError::InvalidSequence(
                        "close command with no open path".into(),
                    ));
                }

                // the ring constructor duplicates the start point if the path
                // is not closed yet and pads degenerate rings
                let ring = ClosedContour::new(std::mem::take(&mut self.current));
                let polygon = Polygon::from(ring).wound(Winding::CounterClockwise);
                self.parts.push(PathPart::Ring(polygon));
            }
        }

        Ok(())
    }

    /// Terminates the pending path, if any, and assembles the collected
    /// pieces into a single geometry.
    pub fn finish(mut self) -> Geom<Point> {
        self.flush_open_path();
        assemble(self.parts)
    }

    fn flush_open_path(&mut self) {
        let mut points = std::mem::take(&mut self.current);
        match points.len() {
            0 => {}
            1 => self.parts.push(PathPart::Point(points.remove(0))),
            _ => self.parts.push(PathPart::Line(Contour::open(points))),
        }
    }
}

/// Reads a whole drawing command stream into a single geometry.
pub fn read_path<I>(commands: I) -> Result<Geom<Point>, GeoseamPathError>
where
    I: IntoIterator<Item = PathCommand>,
{
    let mut reader = PathReader::new();
    for command in commands {
        reader.push(command)?;
    }

    Ok(reader.finish())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geoseam_types::cartesian::Rect;

    use super::*;

    fn square(x: f64, y: f64, size: f64) -> [PathCommand; 5] {
        [
            PathCommand::MoveTo(Point::new(x, y)),
            PathCommand::LineTo(Point::new(x + size, y)),
            PathCommand::LineTo(Point::new(x + size, y + size)),
            PathCommand::LineTo(Point::new(x, y + size)),
            PathCommand::Close,
        ]
    }

    #[test]
    fn closed_path_produces_polygon() {
        let geom = read_path(square(0.0, 0.0, 1.0)).unwrap();

        let Geom::Polygon(polygon) = geom else {
            panic!("expected a polygon, got {geom:?}");
        };

        let points = polygon.outer_contour.points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], points[4]);
        assert!(polygon.inner_contours.is_empty());
    }

    #[test]
    fn emitted_rings_are_wound_counterclockwise() {
        // drawn clockwise
        let commands = [
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(0.0, 1.0)),
            PathCommand::LineTo(Point::new(1.0, 1.0)),
            PathCommand::LineTo(Point::new(1.0, 0.0)),
            PathCommand::Close,
        ];

        let Geom::Polygon(polygon) = read_path(commands).unwrap() else {
            panic!("expected a polygon");
        };
        assert_eq!(
            polygon.outer_contour.winding(),
            Winding::CounterClockwise
        );
    }

    #[test]
    fn unclosed_path_produces_line() {
        let commands = [
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(1.0, 1.0)),
        ];

        let Geom::Contour(contour) = read_path(commands).unwrap() else {
            panic!("expected a contour");
        };
        assert!(!contour.is_closed());
        assert_eq!(contour.points().len(), 2);
    }

    #[test]
    fn single_vertex_path_produces_point() {
        let commands = [PathCommand::MoveTo(Point::new(3.0, 4.0))];

        let geom = read_path(commands).unwrap();
        assert_eq!(geom, Geom::Point(Point::new(3.0, 4.0)));
    }

    #[test]
    fn move_to_terminates_the_previous_path() {
        let commands = [
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(1.0, 0.0)),
            PathCommand::MoveTo(Point::new(0.0, 1.0)),
            PathCommand::LineTo(Point::new(1.0, 1.0)),
        ];

        let Geom::MultiContour(contours) = read_path(commands).unwrap() else {
            panic!("expected a multi contour");
        };
        assert_eq!(contours.len(), 2);
        assert!(contours.contours().all(|c| !c.is_closed()));
    }

    #[test]
    fn line_without_open_path_is_a_protocol_violation() {
        let commands = [PathCommand::LineTo(Point::new(1.0, 1.0))];
        assert_matches!(
            read_path(commands),
            Err(GeoseamPathError::InvalidSequence(_))
        );
    }

    #[test]
    fn close_without_open_path_is_a_protocol_violation() {
        let commands = [PathCommand::Close];
        assert_matches!(
            read_path(commands),
            Err(GeoseamPathError::InvalidSequence(_))
        );

        // a close consumes the path, so a second close has nothing to close
        let commands = [
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::Close,
            PathCommand::Close,
        ];
        assert_matches!(
            read_path(commands),
            Err(GeoseamPathError::InvalidSequence(_))
        );
    }

    #[test]
    fn empty_stream_produces_the_explicit_empty_geometry() {
        let geom = read_path([]).unwrap();
        assert_eq!(geom, Geom::Collection(vec![]));
        assert!(geom.is_empty());
    }

    #[test]
    fn degenerate_ring_is_padded() {
        let commands = [
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(1.0, 0.0)),
            PathCommand::Close,
        ];

        let Geom::Polygon(polygon) = read_path(commands).unwrap() else {
            panic!("expected a polygon");
        };

        let points = polygon.outer_contour.points();
        assert!(points.len() >= 4);
        assert_eq!(points[0], points[points.len() - 1]);
    }

    #[test]
    fn points_assemble_into_multi_point() {
        let commands = [
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::MoveTo(Point::new(1.0, 1.0)),
            PathCommand::MoveTo(Point::new(2.0, 2.0)),
        ];

        let Geom::MultiPoint(points) = read_path(commands).unwrap() else {
            panic!("expected a multi point");
        };
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn disjoint_squares_produce_multi_polygon() {
        let commands = square(0.0, 0.0, 1.0)
            .into_iter()
            .chain(square(2.0, 0.0, 1.0));

        let geom = read_path(commands).unwrap();
        let Geom::MultiPolygon(multi_polygon) = &geom else {
            panic!("expected a multi polygon, got {geom:?}");
        };
        assert_eq!(multi_polygon.parts().len(), 2);
        assert_eq!(
            geom.bounding_rectangle(),
            Some(Rect::new(0.0, 0.0, 3.0, 1.0))
        );
    }

    #[test]
    fn overlapping_squares_combine_by_symmetric_difference() {
        // the combined shape approximates even-odd fill: the overlap of the
        // two squares is carved out, the union's total extent is preserved
        let commands = square(0.0, 0.0, 2.0)
            .into_iter()
            .chain(square(1.0, 1.0, 2.0));

        let geom = read_path(commands).unwrap();
        assert_eq!(
            geom.bounding_rectangle(),
            Some(Rect::new(0.0, 0.0, 3.0, 3.0))
        );

        match &geom {
            Geom::Polygon(_) | Geom::MultiPolygon(_) => {}
            other => panic!("expected an areal geometry, got {other:?}"),
        }
    }

    #[test]
    fn mixed_pieces_produce_collection() {
        let commands = [
            PathCommand::MoveTo(Point::new(5.0, 5.0)),
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(1.0, 0.0)),
        ];

        let Geom::Collection(parts) = read_path(commands).unwrap() else {
            panic!("expected a collection");
        };
        assert_eq!(parts.len(), 2);
        assert_matches!(parts[0], Geom::Point(_));
        assert_matches!(parts[1], Geom::Contour(_));
    }

    #[test]
    fn streaming_reader_matches_read_path() {
        let mut reader = PathReader::new();
        for command in square(0.0, 0.0, 1.0) {
            reader.push(command).unwrap();
        }

        assert_eq!(
            reader.finish(),
            read_path(square(0.0, 0.0, 1.0)).unwrap()
        );
    }
}

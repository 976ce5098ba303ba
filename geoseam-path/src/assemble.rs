//! Reassembly of collected path pieces into a single geometry.

use geo::BooleanOps;
use geo_types::MultiPolygon as GeoMultiPolygon;
use geoseam_types::cartesian::{Contour, MultiPolygon, Polygon, Winding};
use geoseam_types::Geom;

use crate::{PathPart, Point};

/// Combines the pieces collected from a command stream into one geometry.
///
/// Same-typed pieces produce the matching multi-geometry (a single piece
/// stays a simple geometry), mixed pieces a collection in stream order, and
/// zero pieces the explicit empty geometry.
pub(crate) fn assemble(parts: Vec<PathPart>) -> Geom<Point> {
    if parts.is_empty() {
        return Geom::Collection(vec![]);
    }

    if parts.iter().all(|p| matches!(p, PathPart::Point(_))) {
        let points: Vec<Point> = parts
            .into_iter()
            .filter_map(|p| match p {
                PathPart::Point(v) => Some(v),
                _ => None,
            })
            .collect();
        return if points.len() == 1 {
            Geom::Point(points[0])
        } else {
            Geom::MultiPoint(points.into())
        };
    }

    if parts.iter().all(|p| matches!(p, PathPart::Line(_))) {
        let mut lines: Vec<Contour<Point>> = parts
            .into_iter()
            .filter_map(|p| match p {
                PathPart::Line(v) => Some(v),
                _ => None,
            })
            .collect();
        return match lines.len() {
            1 => Geom::Contour(lines.remove(0)),
            _ => Geom::MultiContour(lines.into()),
        };
    }

    if parts.iter().all(|p| matches!(p, PathPart::Ring(_))) {
        let polygons: Vec<Polygon<Point>> = parts
            .into_iter()
            .filter_map(|p| match p {
                PathPart::Ring(v) => Some(v),
                _ => None,
            })
            .collect();
        return combine_polygons(polygons);
    }

    Geom::Collection(parts.into_iter().map(part_to_geom).collect())
}

fn part_to_geom(part: PathPart) -> Geom<Point> {
    match part {
        PathPart::Point(v) => Geom::Point(v),
        PathPart::Line(v) => Geom::Contour(v),
        PathPart::Ring(v) => Geom::Polygon(v),
    }
}

/// Combines closed paths by iteratively computing the symmetric difference
/// of consecutive polygons.
///
/// This matches even-odd fill semantics for simple non-nested shapes: a path
/// drawn inside another one carves a hole. It is an approximation, not an
/// exact emulation of the general even-odd or non-zero fill rules, and is
/// known to be inexact for overlapping-and-nested inputs.
fn combine_polygons(mut polygons: Vec<Polygon<Point>>) -> Geom<Point> {
    if polygons.len() == 1 {
        return Geom::Polygon(polygons.remove(0));
    }

    log::debug!(
        "combining {} closed paths by iterated symmetric difference",
        polygons.len()
    );

    let mut iter = polygons.into_iter();
    let Some(first) = iter.next() else {
        return Geom::Collection(vec![]);
    };

    let mut combined = GeoMultiPolygon::new(vec![(&first).into()]);
    for polygon in iter {
        let next = GeoMultiPolygon::new(vec![(&polygon).into()]);
        combined = combined.xor(&next);
    }

    let result: MultiPolygon<Point> = combined.into();
    let mut result = result.wound(Winding::CounterClockwise);
    if result.parts().len() == 1 {
        return Geom::Polygon(result.parts.remove(0));
    }

    Geom::MultiPolygon(result)
}

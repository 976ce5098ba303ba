//! Reprojection of envelopes by boundary densification.

use crate::cartesian::Rect;
use crate::error::GeoseamTypesError;
use crate::geo::transform::{transform_in_place, CoordTransform};

/// Default number of additional sample points per envelope edge used by
/// [`project_rect`].
pub const DEFAULT_SAMPLES_PER_EDGE: usize = 5;

/// Reprojects an envelope by transforming a densified sample of its boundary.
///
/// A non-linear transform can bow the image of a straight edge outward or
/// inward, so transforming only the 4 corners of an envelope under-estimates
/// its true reprojected extent. Instead, every edge is sampled at
/// `samples_per_edge + 1` positions, the resulting `4 * (samples_per_edge + 1)`
/// boundary points are transformed in a single batch, and the output envelope
/// is the bounding rectangle of the transformed points. Partial transform
/// failures are recovered the way [`transform_in_place`] recovers them.
///
/// If `accumulate` is supplied, the result expands the given envelope instead
/// of replacing it. The unbounded sentinel envelope is returned unchanged.
/// The `transform` must convert 2-dimensional points into 2-dimensional
/// points; anything else fails with `DimensionMismatch` before any point is
/// transformed.
///
/// # Limitation
///
/// Boundary sampling is invalid when the source envelope contains a pole or
/// straddles the ±180° discontinuity of a longitude-wrapping CRS: the extreme
/// coordinates of the image are then not reached on the boundary. Callers
/// with such envelopes need a specialized algorithm; this function makes no
/// attempt to detect the case.
pub fn project_rect<T>(
    rect: &Rect<f64>,
    transform: &T,
    samples_per_edge: usize,
    accumulate: Option<Rect<f64>>,
) -> Result<Rect<f64>, GeoseamTypesError>
where
    T: CoordTransform + ?Sized,
{
    if rect.is_unbounded() {
        return Ok(*rect);
    }

    if transform.source_dimensions() != 2 || transform.target_dimensions() != 2 {
        return Err(GeoseamTypesError::DimensionMismatch(format!(
            "envelope reprojection requires a 2d transform, got {}d to {}d",
            transform.source_dimensions(),
            transform.target_dimensions()
        )));
    }

    let steps = samples_per_edge + 1;
    let width = rect.width();
    let height = rect.height();

    // walk the perimeter: left edge bottom to top, top edge left to right,
    // right edge top to bottom, bottom edge right to left
    let mut coords = Vec::with_capacity(steps * 8);
    for i in 0..steps {
        let f = i as f64 / steps as f64;
        coords.push(rect.x_min());
        coords.push(rect.y_min() + height * f);
    }
    for i in 0..steps {
        let f = i as f64 / steps as f64;
        coords.push(rect.x_min() + width * f);
        coords.push(rect.y_max());
    }
    for i in 0..steps {
        let f = i as f64 / steps as f64;
        coords.push(rect.x_max());
        coords.push(rect.y_max() - height * f);
    }
    for i in 0..steps {
        let f = i as f64 / steps as f64;
        coords.push(rect.x_max() - width * f);
        coords.push(rect.y_min());
    }

    transform_in_place(transform, &mut coords)?;

    let mut projected = Rect::new(coords[0], coords[1], coords[0], coords[1]);
    for point in coords.chunks_exact(2) {
        if point[0] < projected.x_min {
            projected.x_min = point[0];
        }
        if point[0] > projected.x_max {
            projected.x_max = point[0];
        }
        if point[1] < projected.y_min {
            projected.y_min = point[1];
        }
        if point[1] > projected.y_max {
            projected.y_max = point[1];
        }
    }

    Ok(match accumulate {
        Some(acc) => acc.merge(projected),
        None => projected,
    })
}

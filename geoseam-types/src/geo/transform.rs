//! Batch transformation of flat coordinate buffers.

use thiserror::Error;

use crate::cartesian::Point2d;
use crate::error::GeoseamTypesError;
use crate::geo::traits::projection::Projection;

/// Error returned by a [`CoordTransform`] implementation for points it cannot
/// transform.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransformError(String);

impl TransformError {
    /// Creates a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A coordinate transform over flat coordinate buffers.
///
/// Buffers are interleaved: a point occupies `dimensions` consecutive slots
/// starting at `offset + index * dimensions`. Implementations advertise fixed
/// source and target dimensionality up front; callers must check the two
/// agree before transforming a buffer in place.
///
/// This is the seam for external projection engines. The transform math
/// itself is not defined by this crate.
pub trait CoordTransform {
    /// Number of ordinates per input point.
    fn source_dimensions(&self) -> usize;

    /// Number of ordinates per output point.
    fn target_dimensions(&self) -> usize;

    /// Transforms `count` points read from `src` starting at `src_offset`
    /// into `dst` starting at `dst_offset`.
    fn transform(
        &self,
        src: &[f64],
        src_offset: usize,
        dst: &mut [f64],
        dst_offset: usize,
        count: usize,
    ) -> Result<(), TransformError>;
}

/// Transforms every point of the buffer in place, recovering from per-point
/// failures where possible.
///
/// Points the transform fails for are substituted with the nearest
/// successfully transformed value: a failure after at least one success takes
/// the value of the preceding point, and a run of failures at the start of
/// the buffer takes the value of the first point that succeeds. After a
/// successful call every slot therefore holds either its true transformed
/// value or a neighbour's one, never a partially transformed value. The
/// number of substituted points is logged.
///
/// If no point succeeds at all, the first recorded error is returned and the
/// buffer is left in an unspecified state: points the transform was attempted
/// for may hold either their original or a partially written value.
pub fn transform_in_place<T>(
    transform: &T,
    coords: &mut [f64],
) -> Result<(), GeoseamTypesError>
where
    T: CoordTransform + ?Sized,
{
    let dim = transform.source_dimensions();
    if dim != transform.target_dimensions() {
        return Err(GeoseamTypesError::DimensionMismatch(format!(
            "in-place transform requires equal dimensions, got {} and {}",
            dim,
            transform.target_dimensions()
        )));
    }

    if dim == 0 || !coords.len().is_multiple_of(dim) {
        return Err(GeoseamTypesError::DimensionMismatch(format!(
            "buffer of {} ordinates does not hold whole {dim}-dimensional points",
            coords.len()
        )));
    }

    let count = coords.len() / dim;
    let mut src = vec![0.0; dim];
    let mut dst = vec![0.0; dim];

    let mut first_error: Option<TransformError> = None;
    let mut any_transformed = false;
    let mut substituted = 0usize;

    for i in 0..count {
        let offset = i * dim;
        src.copy_from_slice(&coords[offset..offset + dim]);

        match transform.transform(&src, 0, &mut dst, 0, 1) {
            Ok(()) => {
                coords[offset..offset + dim].copy_from_slice(&dst);

                if !any_transformed {
                    any_transformed = true;
                    // a failure run at the start of the buffer takes the
                    // value of the first point that succeeded
                    for j in 0..i {
                        let slot = j * dim;
                        coords[slot..slot + dim].copy_from_slice(&dst);
                    }
                }
            }
            Err(e) => {
                substituted += 1;
                if first_error.is_none() {
                    first_error = Some(e);
                }

                if any_transformed {
                    coords.copy_within(offset - dim..offset, offset);
                }
            }
        }
    }

    if !any_transformed {
        if let Some(e) = first_error {
            return Err(e.into());
        }
    } else if substituted > 0 {
        log::debug!(
            "{substituted} of {count} points could not be transformed; nearest transformed values were substituted"
        );
    }

    Ok(())
}

/// Adapter exposing a point-wise [`Projection`] as a 2-dimensional
/// [`CoordTransform`].
pub struct ProjectionTransform<Proj> {
    projection: Proj,
}

impl<Proj> ProjectionTransform<Proj> {
    /// Creates a new adapter.
    pub fn new(projection: Proj) -> Self {
        Self { projection }
    }
}

impl<Proj> CoordTransform for ProjectionTransform<Proj>
where
    Proj: Projection<InPoint = Point2d, OutPoint = Point2d>,
{
    fn source_dimensions(&self) -> usize {
        2
    }

    fn target_dimensions(&self) -> usize {
        2
    }

    fn transform(
        &self,
        src: &[f64],
        src_offset: usize,
        dst: &mut [f64],
        dst_offset: usize,
        count: usize,
    ) -> Result<(), TransformError> {
        if src.len() < src_offset + count * 2 || dst.len() < dst_offset + count * 2 {
            return Err(TransformError::new("coordinate buffer is too short"));
        }

        for i in 0..count {
            let input = Point2d::new(src[src_offset + i * 2], src[src_offset + i * 2 + 1]);
            let output = self.projection.project(&input).ok_or_else(|| {
                TransformError::new(format!(
                    "point ({}, {}) cannot be projected",
                    input.x, input.y
                ))
            })?;
            dst[dst_offset + i * 2] = output.x;
            dst[dst_offset + i * 2 + 1] = output.y;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    /// Offsets points by (10, 10), failing for points with a negative x.
    struct OffsetTransform;

    impl CoordTransform for OffsetTransform {
        fn source_dimensions(&self) -> usize {
            2
        }

        fn target_dimensions(&self) -> usize {
            2
        }

        fn transform(
            &self,
            src: &[f64],
            src_offset: usize,
            dst: &mut [f64],
            dst_offset: usize,
            count: usize,
        ) -> Result<(), TransformError> {
            for i in 0..count {
                let x = src[src_offset + i * 2];
                let y = src[src_offset + i * 2 + 1];
                if x < 0.0 {
                    return Err(TransformError::new(format!("cannot transform ({x}, {y})")));
                }

                dst[dst_offset + i * 2] = x + 10.0;
                dst[dst_offset + i * 2 + 1] = y + 10.0;
            }

            Ok(())
        }
    }

    struct MismatchedTransform;

    impl CoordTransform for MismatchedTransform {
        fn source_dimensions(&self) -> usize {
            2
        }

        fn target_dimensions(&self) -> usize {
            3
        }

        fn transform(
            &self,
            _src: &[f64],
            _src_offset: usize,
            _dst: &mut [f64],
            _dst_offset: usize,
            _count: usize,
        ) -> Result<(), TransformError> {
            Err(TransformError::new("not expected to be called"))
        }
    }

    #[test]
    fn transforms_all_points() {
        let mut coords = vec![0.0, 0.0, 1.0, 2.0, 3.0, 4.0];
        transform_in_place(&OffsetTransform, &mut coords).unwrap();
        assert_eq!(coords, vec![10.0, 10.0, 11.0, 12.0, 13.0, 14.0]);
    }

    #[test]
    fn leading_failures_take_first_successful_value() {
        let mut coords = vec![-1.0, 0.0, -2.0, 0.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0];
        transform_in_place(&OffsetTransform, &mut coords).unwrap();
        assert_eq!(
            coords,
            vec![12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 13.0, 13.0, 14.0, 14.0]
        );
    }

    #[test]
    fn trailing_failures_hold_last_good_value() {
        let mut coords = vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0, -3.0, 3.0, -4.0, 4.0];
        transform_in_place(&OffsetTransform, &mut coords).unwrap();
        assert_eq!(
            coords,
            vec![10.0, 10.0, 11.0, 11.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0]
        );
    }

    #[test]
    fn failure_in_the_middle_holds_last_good_value() {
        let mut coords = vec![0.0, 0.0, -1.0, 1.0, 2.0, 2.0];
        transform_in_place(&OffsetTransform, &mut coords).unwrap();
        assert_eq!(coords, vec![10.0, 10.0, 10.0, 10.0, 12.0, 12.0]);
    }

    #[test]
    fn total_failure_propagates_first_error() {
        let mut coords = vec![-1.0, 0.0, -2.0, 0.0];
        let result = transform_in_place(&OffsetTransform, &mut coords);
        assert_matches!(result, Err(GeoseamTypesError::Transform(e)) if e.to_string().contains("(-1, 0)"));
    }

    #[test]
    fn dimension_mismatch_is_rejected_up_front() {
        let mut coords = vec![0.0, 0.0];
        assert_matches!(
            transform_in_place(&MismatchedTransform, &mut coords),
            Err(GeoseamTypesError::DimensionMismatch(_))
        );
    }

    #[test]
    fn misaligned_buffer_is_rejected() {
        let mut coords = vec![0.0, 0.0, 1.0];
        assert_matches!(
            transform_in_place(&OffsetTransform, &mut coords),
            Err(GeoseamTypesError::DimensionMismatch(_))
        );
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut coords: Vec<f64> = vec![];
        transform_in_place(&OffsetTransform, &mut coords).unwrap();
        assert!(coords.is_empty());
    }

    #[test]
    fn projection_transform_adapts_a_projection() {
        use crate::geo::impls::projection::IdentityProjection;

        let transform =
            ProjectionTransform::new(IdentityProjection::<Point2d, Point2d>::new());
        let mut coords = vec![1.0, 2.0, 3.0, 4.0];
        transform_in_place(&transform, &mut coords).unwrap();
        assert_eq!(coords, vec![1.0, 2.0, 3.0, 4.0]);
    }
}

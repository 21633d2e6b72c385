use crate::error::SpatialError;

/// Number of spatial axes: 0 = x (width), 1 = y (depth), 2 = z (height).
pub const AXES: usize = 3;

/// Validates the axes named by a multi-axis edit.
///
/// Every axis must be 0, 1 or 2 and may appear at most once. Returns a mask
/// of the axes that were named.
///
/// # Errors
///
/// Returns [`SpatialError::InvalidAxis`] or [`SpatialError::DuplicateAxis`].
pub fn check_axes<I>(operation: &'static str, axes: I) -> Result<[bool; AXES], SpatialError>
where
    I: IntoIterator<Item = usize>,
{
    let mut seen = [false; AXES];
    for axis in axes {
        if axis >= AXES {
            return Err(SpatialError::InvalidAxis { operation, axis });
        }
        if seen[axis] {
            return Err(SpatialError::DuplicateAxis { operation, axis });
        }
        seen[axis] = true;
    }
    Ok(seen)
}

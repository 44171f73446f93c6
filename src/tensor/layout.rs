//! The bijection between coordinate tuples and flat buffer offsets.
//!
//! All tensors use the same dense layout: dimension `0` varies fastest. For sizes `[s0, s1, .., sn]` the strides are
//! `[1, s0, s0 * s1, .., s0 * .. * s(n-1)]`, and the coordinate `c` is stored at offset `Σ c[i] * stride[i]`.
//! [`increment_coordinate`] walks coordinates in exactly this offset order.

use crate::alloc::{vec, Vec};
use crate::log;
use crate::{Error, Result};

use super::{SizesType, StridesType};

/// Compute the number of elements of a shape, rejecting negative sizes and overflowing products.
fn checked_numel(sizes: &[SizesType]) -> Result<usize> {
    let mut numel = 1usize;
    for &size in sizes {
        let Ok(size) = usize::try_from(size) else {
            log::error!("Negative dimension size in shape {:?}", sizes);
            return Err(Error::InvalidShape);
        };
        numel = match numel.checked_mul(size) {
            Some(numel) => numel,
            None => {
                log::error!("Number of elements of shape {:?} overflows usize", sizes);
                return Err(Error::InvalidShape);
            }
        };
    }
    Ok(numel)
}

/// Validate a shape and return its normalized form together with its number of elements.
///
/// An empty shape is normalized to a single dimension of size zero.
pub(crate) fn checked_shape(sizes: &[SizesType]) -> Result<(Vec<SizesType>, usize)> {
    if sizes.is_empty() {
        return Ok((vec![0], 0));
    }
    let numel = checked_numel(sizes)?;
    Ok((sizes.to_vec(), numel))
}

/// Strides of a shape already accepted by [`checked_shape`].
///
/// Every partial product of a valid shape fits in `usize`, so no multiplication here overflows.
pub(crate) fn dense_strides(sizes: &[SizesType]) -> Vec<StridesType> {
    let mut strides = Vec::with_capacity(sizes.len());
    let mut stride: StridesType = 1;
    for &size in sizes {
        strides.push(stride);
        stride *= size as StridesType;
    }
    strides
}

/// Compute the strides of a dense tensor with the given sizes, dimension `0` being the fastest.
///
/// Strides are in units of elements, not bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidShape`] if a size is negative or if the number of elements overflows `usize`.
pub fn strides_of(sizes: &[SizesType]) -> Result<Vec<StridesType>> {
    checked_numel(sizes)?;
    Ok(dense_strides(sizes))
}

/// Map a coordinate tuple to its offset in the flat buffer.
///
/// # Errors
///
/// Returns [`Error::InvalidShape`] if a size is negative or if the number of elements overflows `usize`, and
/// [`Error::OutOfRange`] if the coordinate does not have one component per dimension, or if any component is not
/// smaller than the size of its dimension.
pub fn coordinate_to_index(sizes: &[SizesType], coordinate: &[usize]) -> Result<usize> {
    checked_numel(sizes)?;
    if coordinate.len() != sizes.len() {
        log::error!(
            "Coordinate {:?} has {} components, expected {} for sizes {:?}",
            coordinate,
            coordinate.len(),
            sizes.len(),
            sizes
        );
        return Err(Error::OutOfRange);
    }
    let mut index = 0usize;
    let mut stride = 1usize;
    for (dim, (&c, &size)) in coordinate.iter().zip(sizes).enumerate() {
        let size = size as usize;
        if c >= size {
            log::error!(
                "Coordinate {:?} is out of range in dimension {} of sizes {:?}",
                coordinate,
                dim,
                sizes
            );
            return Err(Error::OutOfRange);
        }
        index += c * stride;
        // Bounded by the validated number of elements
        stride *= size;
    }
    Ok(index)
}

/// Map an offset in the flat buffer back to its coordinate tuple.
///
/// The inverse of [`coordinate_to_index`]: `coordinate_to_index(sizes, &index_to_coordinate(sizes, i)?)? == i` for
/// every `i` in `0..numel`.
///
/// # Errors
///
/// Returns [`Error::InvalidShape`] if a size is negative or if the number of elements overflows `usize`, and
/// [`Error::OutOfRange`] if `index` is not smaller than the number of elements of `sizes`.
pub fn index_to_coordinate(sizes: &[SizesType], index: usize) -> Result<Vec<usize>> {
    let numel = checked_numel(sizes)?;
    if index >= numel {
        log::error!(
            "Index {} is out of range for sizes {:?} with {} elements",
            index,
            sizes,
            numel
        );
        return Err(Error::OutOfRange);
    }
    // Every slot is written by position, so the buffer is sized up front
    let mut coordinate = vec![0usize; sizes.len()];
    let mut remainder = index;
    for (c, &size) in coordinate.iter_mut().zip(sizes) {
        let size = size as usize;
        *c = remainder % size;
        remainder /= size;
    }
    Ok(coordinate)
}

/// Advance a coordinate tuple to the coordinate of the next flat offset.
///
/// Dimension `0` is incremented first, and a dimension that reaches its size wraps to zero and carries into the next
/// dimension. Returns `false` when the coordinate wrapped around past the last element (it is then all zeros again),
/// and `true` otherwise.
///
/// ```rust
/// use ndtensor::tensor::increment_coordinate;
///
/// let mut coordinate = [1, 0];
/// assert!(increment_coordinate(&mut coordinate, &[2, 3]));
/// assert_eq!(coordinate, [0, 1]);
///
/// let mut coordinate = [1, 2];
/// assert!(!increment_coordinate(&mut coordinate, &[2, 3]));
/// assert_eq!(coordinate, [0, 0]);
/// ```
///
/// # Panics
///
/// If `coordinate` and `sizes` have different lengths.
#[track_caller]
pub fn increment_coordinate(coordinate: &mut [usize], sizes: &[SizesType]) -> bool {
    assert_eq!(
        coordinate.len(),
        sizes.len(),
        "Coordinate and sizes have different lengths"
    );
    for (c, &size) in coordinate.iter_mut().zip(sizes) {
        *c += 1;
        if *c < size as usize {
            return true;
        }
        *c = 0;
    }
    false
}

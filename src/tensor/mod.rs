//! Dense N-dimensional tensors.
//!
//! The core struct is [`Tensor`], a container that owns both its shape and its elements:
//! - The shape is a list of [`SizesType`] sizes, fixed at construction. A tensor always has at least one dimension.
//! - The elements live in a single contiguous buffer, dimension `0` varying fastest. The free functions
//!     [`coordinate_to_index`], [`index_to_coordinate`], [`increment_coordinate`] and [`strides_of`] define this
//!     layout and are shared by every tensor.
//!
//! Arithmetic and textual rendering require the element type to implement [`Scalar`], and the [`ScalarType`] enum
//! names the element type of such tensors. All other operations work for any element type with the minimal std
//! bounds, so tensors of tensors are possible.
//!
//! If the number of dimensions is known at compile time, a [`TensorAccessor`] or [`TensorAccessorMut`] provides
//! element access with fixed size indices.

mod accessor;
#[cfg(feature = "ndarray")]
mod array;
mod dense;
mod fmt;
mod layout;
mod ops;
mod scalar;

pub use accessor::{TensorAccessor, TensorAccessorMut};
pub use dense::{IndexedIter, Tensor};
pub use layout::{coordinate_to_index, increment_coordinate, index_to_coordinate, strides_of};
pub use scalar::{Scalar, ScalarType};

/// A type that represents the sizes (dimensions) of a tensor.
///
/// Sizes are signed so that a negative size can be reported as [`Error::InvalidShape`](crate::Error::InvalidShape)
/// instead of wrapping around.
pub type SizesType = i32;
/// A type that represents the strides of a tensor, in units of elements.
pub type StridesType = usize;

#![cfg_attr(deny_warnings, deny(warnings))]
// some new clippy::lint annotations are supported in latest Rust but not recognized by older versions
#![cfg_attr(deny_warnings, allow(unknown_lints))]
#![cfg_attr(deny_warnings, deny(missing_docs))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Dense N-dimensional tensors with a fixed shape and value semantics.
//!
//! A [`Tensor<T>`](tensor::Tensor) owns a single contiguous buffer of `numel = ∏ sizes` elements and maps
//! coordinate tuples to offsets in that buffer. Dimension `0` is the fastest varying axis: the element at
//! coordinate `c` lives at offset `Σ c[i] * stride[i]` with `stride[0] = 1` and
//! `stride[i] = stride[i - 1] * sizes[i - 1]`.
//!
//! ```rust
//! use ndtensor::tensor::Tensor;
//!
//! let mut tensor = Tensor::<f64>::new(&[2, 3]).unwrap();
//! tensor.set_items([5.0, 0.55, 0.0, -2.0, 4.5, 7.0]);
//! assert_eq!(tensor[&[1, 0]], 0.55);
//! assert_eq!(tensor[&[0, 2]], 4.5);
//!
//! let transposed = tensor.t().unwrap();
//! assert_eq!(transposed.sizes(), &[3, 2]);
//! assert_eq!(transposed[&[2, 0]], 4.5);
//!
//! let doubled = tensor.add(&tensor).unwrap();
//! assert_eq!(doubled.to_string(), "{{10, 1.1}, {0, -4}, {9, 14}}");
//! ```
//!
//! Shapes are given as slices of [`SizesType`](tensor::SizesType). A negative size is rejected with
//! [`Error::InvalidShape`], an empty shape is normalized to a single dimension of size zero.
//! Element access by coordinate fails with [`Error::OutOfRange`], and elementwise addition of tensors whose shapes
//! differ fails with [`Error::ShapeMismatch`]. Every failing operation is rejected before anything is mutated.
//!
//! Arithmetic and rendering go through the [`Scalar`](tensor::Scalar) trait, implemented for the primitive numeric
//! types and `bool` (for which addition is a logical or). Container operations such as construction, indexing,
//! equality and transposition only require the minimal std traits, so any `Default + Clone` type, including another
//! tensor or a shared handle to one, can be stored. Cloning such a tensor clones the handles, not what they point to.
//!
//! ## Cargo Features
//! - `std`:
//!   Enable the standard library. This feature is enabled by default, but can be disabled to build
//!   [`ndtensor`](crate) in a `no_std` environment. The crate always requires the
//!   [`alloc`](https://doc.rust-lang.org/alloc/) crate, as a tensor owns a heap buffer.
//! - `ndarray`:
//!   Zero-copy views of tensors as `ndarray` arrays and conversions from `ndarray` arrays.
//!   Adds a dependency to the `ndarray` crate.
//! - `half`:
//!   Adds a dependency to the `half` crate, and allows `f16` and `bf16` elements in arithmetic tensors.
//! - `num-complex`:
//!   Adds a dependency to the `num-complex` crate, and allows `Complex<f32>` and `Complex<f64>` elements in
//!   arithmetic tensors.
//!
//! By default only the `std` feature is enabled.
//!
//! ## Logging
//! Rejected operations are reported through the [`log`](https://docs.rs/log) facade under the `ndtensor` target
//! before the error is returned. The crate never installs a logger itself.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "std")]
    pub mod alloc {
        pub use std::format;
        pub use std::string::{String, ToString};
        pub use std::vec;
        pub use std::vec::Vec;
    }
    #[cfg(not(feature = "std"))]
    pub mod alloc {
        extern crate alloc;
        pub use alloc::format;
        pub use alloc::string::{String, ToString};
        pub use alloc::vec;
        pub use alloc::vec::Vec;
    }
}

#[allow(unused_imports)]
use crate::__private::alloc;

mod error;
mod log;
pub mod scalar;
pub mod tensor;

pub(crate) use error::Result;
pub use error::Error;

#[cfg(feature = "ndarray")]
pub use ndarray;

#[cfg(feature = "half")]
pub use half;

#[cfg(feature = "num-complex")]
pub use num_complex;

#[cfg(test)]
mod tests;

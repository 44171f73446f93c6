use std::fmt;

use super::layout::dense_strides;
use super::{Scalar, SizesType, StridesType, Tensor};

/// Renders the elements as nested braces.
///
/// The outermost braces iterate over the last dimension and the innermost braces over dimension `0`, so the elements
/// inside a pair of innermost braces are adjacent in the flat buffer. Elements and nested groups are separated by
/// `", "`, and each element is written with [`Scalar::fmt_scalar`]. A dimension of size zero renders as `{}`.
///
/// ```rust
/// use ndtensor::tensor::Tensor;
///
/// let tensor = Tensor::from_vec(&[1, 2, 2], vec![5.1, 0.0, -0.000001, 500000.0]).unwrap();
/// assert_eq!(tensor.to_string(), "{{{5.1}, {0}}, {{-1e-06}, {500000}}}");
/// ```
impl<T: Scalar> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let strides = dense_strides(self.sizes());
        let nested = Nested {
            data: self.as_slice(),
            sizes: self.sizes(),
            strides: &strides,
        };
        nested.fmt_dim(f, self.dim() - 1, 0)
    }
}

struct Nested<'a, T> {
    data: &'a [T],
    sizes: &'a [SizesType],
    strides: &'a [StridesType],
}
impl<T: Scalar> Nested<'_, T> {
    fn fmt_dim(&self, f: &mut fmt::Formatter, dim: usize, offset: usize) -> fmt::Result {
        f.write_str("{")?;
        for i in 0..self.sizes[dim] as usize {
            if i > 0 {
                f.write_str(", ")?;
            }
            let offset = offset + i * self.strides[dim];
            if dim == 0 {
                self.data[offset].fmt_scalar(f)?;
            } else {
                self.fmt_dim(f, dim - 1, offset)?;
            }
        }
        f.write_str("}")
    }
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("sizes", &self.sizes())
            .field("data", &self.as_slice())
            .finish()
    }
}

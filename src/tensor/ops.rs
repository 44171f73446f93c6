use std::ops::{Add, AddAssign};

use crate::alloc::{vec, Vec};
use crate::log;
use crate::{Error, Result};

use super::layout::{dense_strides, increment_coordinate};
use super::{Scalar, Tensor};

impl<T> Tensor<T> {
    /// Create a new tensor with the dimensions `dim1` and `dim2` swapped.
    ///
    /// The element at coordinate `c` of `self` is found in the result at the coordinate `c'` with `c'[dim1] = c[dim2]`,
    /// `c'[dim2] = c[dim1]`, and all other components equal to those of `c`. Swapping a dimension with itself returns
    /// a copy of the tensor. The tensor itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `dim1` or `dim2` is not smaller than [`dim()`](Self::dim). In particular, a
    /// one dimensional tensor can not be transposed with [`t()`](Self::t).
    pub fn transpose(&self, dim1: usize, dim2: usize) -> Result<Tensor<T>>
    where
        T: Clone,
    {
        let ndim = self.dim();
        if dim1 >= ndim || dim2 >= ndim {
            log::error!(
                "Can not transpose dimensions {} and {} of a tensor with {} dimensions",
                dim1,
                dim2,
                ndim
            );
            return Err(Error::OutOfRange);
        }
        log::trace!(
            "Transposing dimensions {} and {} of sizes {:?}",
            dim1,
            dim2,
            self.sizes()
        );

        let mut sizes = self.sizes().to_vec();
        sizes.swap(dim1, dim2);
        // Strides of the source, indexed by the dimensions of the result
        let mut strides = dense_strides(self.sizes());
        strides.swap(dim1, dim2);

        let src = self.as_slice();
        let mut data = Vec::with_capacity(src.len());
        let mut coordinate = vec![0usize; ndim];
        for _ in 0..src.len() {
            let offset: usize = coordinate
                .iter()
                .zip(&strides)
                .map(|(&c, &stride)| c * stride)
                .sum();
            data.push(src[offset].clone());
            increment_coordinate(&mut coordinate, &sizes);
        }
        Ok(Tensor::from_parts_unchecked(sizes, data))
    }

    /// Swap the first two dimensions, a shorthand for [`transpose(0, 1)`](Self::transpose).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the tensor has a single dimension.
    pub fn t(&self) -> Result<Tensor<T>>
    where
        T: Clone,
    {
        self.transpose(0, 1)
    }

    fn check_same_sizes(&self, other: &Tensor<T>) -> Result<()> {
        if self.sizes() != other.sizes() {
            log::error!(
                "Can not add tensors of sizes {:?} and {:?}",
                self.sizes(),
                other.sizes()
            );
            return Err(Error::ShapeMismatch);
        }
        Ok(())
    }
}

impl<T: Scalar> Tensor<T> {
    /// Create a new tensor holding the elementwise sum of `self` and `other`.
    ///
    /// Elements are added with [`Scalar::add`]. Neither operand is modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the sizes of the two tensors differ.
    pub fn add(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.check_same_sizes(other)?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| Scalar::add(a, b))
            .collect();
        Ok(Tensor::from_parts_unchecked(self.sizes().to_vec(), data))
    }

    /// Add `other` to `self` elementwise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the sizes of the two tensors differ, in which case `self` is left
    /// unchanged.
    pub fn add_assign(&mut self, other: &Tensor<T>) -> Result<()> {
        self.check_same_sizes(other)?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = Scalar::add(&*a, b);
        }
        Ok(())
    }
}

impl<T: Scalar> Add<&Tensor<T>> for &Tensor<T> {
    type Output = Tensor<T>;

    /// # Panics
    ///
    /// If the sizes of the two tensors differ.
    #[track_caller]
    fn add(self, rhs: &Tensor<T>) -> Self::Output {
        Tensor::add(self, rhs).unwrap()
    }
}
impl<T: Scalar> AddAssign<&Tensor<T>> for Tensor<T> {
    /// # Panics
    ///
    /// If the sizes of the two tensors differ.
    #[track_caller]
    fn add_assign(&mut self, rhs: &Tensor<T>) {
        Tensor::add_assign(self, rhs).unwrap()
    }
}

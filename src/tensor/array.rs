use ndarray::{ArrayBase, ArrayView, ArrayViewMut, Dimension, IxDyn, ShapeBuilder};

use crate::alloc::{vec, Vec};
use crate::log;
use crate::{Error, Result};

use super::{SizesType, Tensor};

impl<T> Tensor<T> {
    fn array_dim<Dim: Dimension>(&self) -> Dim {
        if let Some(arr_ndim) = Dim::NDIM {
            let tensor_ndim = self.dim();
            assert_eq!(
                tensor_ndim, arr_ndim,
                "Dimension mismatch: {tensor_ndim} != {arr_ndim}",
            );
        }
        let mut dim = Dim::zeros(self.dim());
        for (i, d) in self.sizes().iter().enumerate() {
            dim[i] = *d as usize;
        }
        dim
    }

    /// Get an array view of the tensor.
    ///
    /// The view borrows the tensor's buffer, no element is copied. Its axes are the tensor's dimensions, and as the
    /// buffer stores dimension `0` fastest, the view has a column major (Fortran) layout.
    ///
    /// # Panics
    ///
    /// If the number of dimensions of the tensor does not match the number of dimensions of the type `Dim`.
    #[track_caller]
    pub fn as_array<Dim: Dimension>(&self) -> ArrayView<'_, T, Dim> {
        let dim = self.array_dim::<Dim>();
        ArrayView::from_shape(dim.f(), self.as_slice()).expect("tensor buffer matches its sizes")
    }

    /// Get an array view of the tensor with dynamic number of dimensions.
    pub fn as_array_dyn(&self) -> ArrayView<'_, T, IxDyn> {
        self.as_array()
    }

    /// Get a mutable array view of the tensor.
    ///
    /// # Panics
    ///
    /// If the number of dimensions of the tensor does not match the number of dimensions of the type `Dim`.
    #[track_caller]
    pub fn as_array_mut<Dim: Dimension>(&mut self) -> ArrayViewMut<'_, T, Dim> {
        let dim = self.array_dim::<Dim>();
        ArrayViewMut::from_shape(dim.f(), self.as_mut_slice())
            .expect("tensor buffer matches its sizes")
    }

    /// Get a mutable array view of the tensor with dynamic number of dimensions.
    pub fn as_array_mut_dyn(&mut self) -> ArrayViewMut<'_, T, IxDyn> {
        self.as_array_mut()
    }

    /// Create a new tensor by copying the elements of an ndarray.
    ///
    /// The array may have any memory layout, its elements are copied into the dimension `0` fastest order of the
    /// tensor. A zero dimensional array becomes a tensor of sizes `[1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if a dimension of the array does not fit in [`SizesType`].
    pub fn from_array<S, D>(array: &ArrayBase<S, D>) -> Result<Self>
    where
        S: ndarray::Data<Elem = T>,
        D: Dimension,
        T: Clone,
    {
        let sizes = if array.ndim() == 0 {
            vec![1]
        } else {
            array
                .shape()
                .iter()
                .map(|&d| SizesType::try_from(d))
                .collect::<core::result::Result<Vec<_>, _>>()
                .map_err(|_| {
                    log::error!("Array shape {:?} does not fit in tensor sizes", array.shape());
                    Error::InvalidShape
                })?
        };
        // Iterating the reversed axes in logical order visits dimension 0 fastest
        let data = array.t().iter().cloned().collect();
        Tensor::from_vec(&sizes, data)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{arr0, arr2, Array3, Ix1, Ix2, ShapeBuilder};

    use crate::alloc::{vec, Vec};
    use crate::tensor::Tensor;

    #[test]
    fn as_array() {
        let tensor = Tensor::from_vec(&[2, 3], vec![5.0, 0.55, 0.0, -2.0, 4.5, 7.0]).unwrap();
        let array = tensor.as_array::<Ix2>();
        assert_eq!(array.shape(), &[2, 3]);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(array[[i, j]], tensor[&[i, j]]);
            }
        }
        assert_eq!(array.as_ptr(), tensor.as_slice().as_ptr());

        let array = tensor.as_array_dyn();
        assert_eq!(array.ndim(), 2);
        assert_eq!(array[[1, 2]], 7.0);
    }

    #[test]
    #[should_panic]
    fn as_array_wrong_dim() {
        let tensor = Tensor::<i32>::new(&[2, 3]).unwrap();
        let _ = tensor.as_array::<Ix1>();
    }

    #[test]
    fn as_array_mut() {
        let mut tensor = Tensor::<i32>::new(&[2, 2]).unwrap();
        let mut array = tensor.as_array_mut::<Ix2>();
        array[[1, 0]] = 3;
        array[[0, 1]] = 4;
        assert_eq!(tensor.as_slice(), &[0, 3, 4, 0]);

        tensor.as_array_mut_dyn().fill(9);
        assert!(tensor.iter().all(|&x| x == 9));
    }

    #[test]
    fn from_array() {
        let array = arr2(&[[1, 2, 3], [4, 5, 6]]);
        let tensor = Tensor::from_array(&array).unwrap();
        assert_eq!(tensor.sizes(), &[2, 3]);
        assert_eq!(tensor.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(tensor.as_array::<Ix2>(), array);

        let tensor = Tensor::from_array(&array.t()).unwrap();
        assert_eq!(tensor.sizes(), &[3, 2]);
        assert_eq!(tensor.as_slice(), &[1, 2, 3, 4, 5, 6]);

        let array = Array3::from_shape_vec((2, 2, 2).f(), (0..8).collect::<Vec<u8>>()).unwrap();
        let tensor = Tensor::from_array(&array).unwrap();
        assert_eq!(tensor.as_slice(), array.as_slice_memory_order().unwrap());

        let tensor = Tensor::from_array(&arr0(2.5)).unwrap();
        assert_eq!(tensor.sizes(), &[1]);
        assert_eq!(tensor[&[0]], 2.5);
    }
}

use std::ops::{Index, IndexMut};

use crate::alloc::{vec, Vec};
use crate::log;
use crate::{Error, Result};

use super::layout::{self, checked_shape};
use super::{Scalar, ScalarType, SizesType, StridesType, TensorAccessor, TensorAccessorMut};

/// A dense N-dimensional tensor that owns its elements.
///
/// The shape is fixed at construction and the tensor always has at least one dimension. Elements are stored in a
/// single contiguous buffer with dimension `0` varying fastest, see the [`layout`](super) functions for the exact
/// mapping.
///
/// A tensor is a value: [`Clone`] duplicates both the shape and the buffer, and mutating the clone never affects
/// the original. When the element type is itself a handle (an `Rc`, a reference, ...) only the handles are cloned.
/// Moving a tensor moves its buffer without copying it; [`core::mem::take`] leaves a [`Default`] tensor behind.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tensor<T> {
    sizes: Vec<SizesType>,
    data: Vec<T>,
}

impl<T> Tensor<T> {
    /// Create a new tensor with the given sizes, every element set to its default value.
    ///
    /// An empty `sizes` slice creates a tensor with a single dimension of size zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if a size is negative or if the number of elements overflows `usize`.
    pub fn new(sizes: &[SizesType]) -> Result<Self>
    where
        T: Default + Clone,
    {
        Self::full(sizes, T::default())
    }

    /// Create a new tensor with the given sizes, every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if a size is negative or if the number of elements overflows `usize`.
    pub fn full(sizes: &[SizesType], value: T) -> Result<Self>
    where
        T: Clone,
    {
        let (sizes, numel) = checked_shape(sizes)?;
        log::trace!("Creating tensor with sizes {:?}", sizes);
        Ok(Self {
            sizes,
            data: vec![value; numel],
        })
    }

    /// Create a new tensor with the given sizes from its elements in flat order (dimension `0` fastest).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if a size is negative or if the number of elements overflows `usize`, and
    /// [`Error::ShapeMismatch`] if the length of `data` is not the number of elements implied by `sizes`.
    pub fn from_vec(sizes: &[SizesType], data: Vec<T>) -> Result<Self> {
        let (sizes, numel) = checked_shape(sizes)?;
        if data.len() != numel {
            log::error!(
                "Data of length {} does not match sizes {:?} with {} elements",
                data.len(),
                sizes,
                numel
            );
            return Err(Error::ShapeMismatch);
        }
        Ok(Self { sizes, data })
    }

    /// Returns the tensor's number of dimensions, always at least one.
    pub fn dim(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the sizes of the tensor at each dimension.
    pub fn sizes(&self) -> &[SizesType] {
        &self.sizes
    }

    /// Returns the size of the tensor at the given dimension.
    ///
    /// # Panics
    ///
    /// If `dim` is not smaller than [`dim()`](Self::dim).
    #[track_caller]
    pub fn size(&self, dim: usize) -> usize {
        self.sizes[dim] as usize
    }

    /// Returns the strides of the tensor at each dimension.
    ///
    /// Strides are in units of elements, not in bytes. The stride of dimension `0` is always one.
    pub fn strides(&self) -> Vec<StridesType> {
        layout::dense_strides(&self.sizes)
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the tensor has no elements, i.e. one of its sizes is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the type of the elements in the tensor (int32, float, bool, etc).
    pub fn scalar_type(&self) -> ScalarType
    where
        T: Scalar,
    {
        T::TYPE
    }

    /// Returns `true` if all the dimensions of the tensor have the same size.
    ///
    /// A one dimensional tensor is always equilateral.
    pub fn is_equilateral(&self) -> bool {
        self.sizes.windows(2).all(|w| w[0] == w[1])
    }

    /// Map a coordinate tuple to the offset of its element in the flat buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate does not have one component per dimension, or if any
    /// component is not smaller than the size of its dimension.
    pub fn coordinate_to_index(&self, coordinate: &[usize]) -> Result<usize> {
        layout::coordinate_to_index(&self.sizes, coordinate)
    }

    /// Map an offset in the flat buffer to the coordinate tuple of its element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not smaller than [`numel()`](Self::numel).
    pub fn index_to_coordinate(&self, index: usize) -> Result<Vec<usize>> {
        layout::index_to_coordinate(&self.sizes, index)
    }

    /// Get a reference to the element at `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is invalid, see
    /// [`coordinate_to_index`](Self::coordinate_to_index).
    pub fn get(&self, coordinate: &[usize]) -> Result<&T> {
        let index = self.coordinate_to_index(coordinate)?;
        Ok(&self.data[index])
    }

    /// Get a mutable reference to the element at `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is invalid, see
    /// [`coordinate_to_index`](Self::coordinate_to_index).
    pub fn get_mut(&mut self, coordinate: &[usize]) -> Result<&mut T> {
        let index = self.coordinate_to_index(coordinate)?;
        Ok(&mut self.data[index])
    }

    /// Get a copy of the element at `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is invalid.
    pub fn get_item(&self, coordinate: &[usize]) -> Result<T>
    where
        T: Clone,
    {
        self.get(coordinate).cloned()
    }

    /// Set the element at `coordinate` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is invalid, in which case the tensor is left unchanged.
    pub fn set_item(&mut self, value: T, coordinate: &[usize]) -> Result<()> {
        *self.get_mut(coordinate)? = value;
        Ok(())
    }

    /// Assign elements in flat order (dimension `0` fastest) from `values`.
    ///
    /// The first `min(values.len(), numel)` elements are overwritten. If `values` is shorter than the tensor the
    /// remaining elements keep their value, and if it is longer the extra values are ignored. Neither case is an
    /// error. Returns the number of elements written.
    pub fn set_items<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut written = 0;
        for (slot, value) in self.data.iter_mut().zip(values) {
            *slot = value;
            written += 1;
        }
        written
    }

    /// Set every element of the tensor to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Returns the elements in flat order (dimension `0` fastest).
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements in flat order (dimension `0` fastest) as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor and return its elements in flat order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over the elements in flat order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements in flat order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterate over `(coordinate, element)` pairs in flat order.
    pub fn indexed_iter(&self) -> IndexedIter<'_, T> {
        IndexedIter {
            sizes: &self.sizes,
            coordinate: vec![0; self.sizes.len()],
            elements: self.data.iter(),
        }
    }

    /// Create a tensor of the same sizes by applying `f` to every element.
    pub fn map<U, F>(&self, f: F) -> Tensor<U>
    where
        F: FnMut(&T) -> U,
    {
        Tensor {
            sizes: self.sizes.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Get an immutable accessor for the tensor.
    ///
    /// An accessor is a utility struct, templated over the number of dimensions, which makes it efficient to access
    /// tensor elements by a fixed size index. See the [`TensorAccessor`] for more details.
    ///
    /// Returns `None` if the number of dimensions of the tensor is not `N`.
    pub fn accessor<const N: usize>(&self) -> Option<TensorAccessor<'_, T, N>> {
        TensorAccessor::new(&self.data, &self.sizes)
    }

    /// Get a mutable accessor for the tensor.
    ///
    /// See [`accessor`](Self::accessor) and the [`TensorAccessorMut`] for more details.
    ///
    /// Returns `None` if the number of dimensions of the tensor is not `N`.
    pub fn accessor_mut<const N: usize>(&mut self) -> Option<TensorAccessorMut<'_, T, N>> {
        TensorAccessorMut::new(&mut self.data, &self.sizes)
    }

    pub(super) fn from_parts_unchecked(sizes: Vec<SizesType>, data: Vec<T>) -> Self {
        debug_assert_eq!(
            sizes.iter().map(|&s| s as usize).product::<usize>(),
            data.len()
        );
        Self { sizes, data }
    }
}

impl<T> Default for Tensor<T> {
    /// A tensor with a single dimension of size zero.
    ///
    /// Useful only as a placeholder to assign or move another tensor into.
    fn default() -> Self {
        Self {
            sizes: vec![0],
            data: Vec::new(),
        }
    }
}

impl<T> Index<&[usize]> for Tensor<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, coordinate: &[usize]) -> &Self::Output {
        self.get(coordinate).unwrap()
    }
}
impl<T> IndexMut<&[usize]> for Tensor<T> {
    #[track_caller]
    fn index_mut(&mut self, coordinate: &[usize]) -> &mut Self::Output {
        self.get_mut(coordinate).unwrap()
    }
}
impl<T, const N: usize> Index<&[usize; N]> for Tensor<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, coordinate: &[usize; N]) -> &Self::Output {
        self.get(coordinate).unwrap()
    }
}
impl<T, const N: usize> IndexMut<&[usize; N]> for Tensor<T> {
    #[track_caller]
    fn index_mut(&mut self, coordinate: &[usize; N]) -> &mut Self::Output {
        self.get_mut(coordinate).unwrap()
    }
}

impl<'a, T> IntoIterator for &'a Tensor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut Tensor<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator over the `(coordinate, element)` pairs of a tensor in flat order.
///
/// Created by [`Tensor::indexed_iter`]. The coordinate is advanced with
/// [`increment_coordinate`](super::increment_coordinate) rather than recomputed from the offset.
pub struct IndexedIter<'a, T> {
    sizes: &'a [SizesType],
    coordinate: Vec<usize>,
    elements: std::slice::Iter<'a, T>,
}
impl<'a, T> Iterator for IndexedIter<'a, T> {
    type Item = (Vec<usize>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.next()?;
        let coordinate = self.coordinate.clone();
        layout::increment_coordinate(&mut self.coordinate, self.sizes);
        Some((coordinate, element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}
impl<T> ExactSizeIterator for IndexedIter<'_, T> {}

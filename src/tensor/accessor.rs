use std::ops::{Index, IndexMut};

use super::SizesType;

struct AccessorLayout<const N: usize> {
    sizes: [usize; N],
    strides: [usize; N],
}

impl<const N: usize> AccessorLayout<N> {
    fn new(sizes: &[SizesType]) -> Option<Self> {
        let sizes: &[SizesType; N] = sizes.try_into().ok()?;
        let sizes = sizes.map(|s| s as usize);
        let mut strides = [0; N];
        let mut stride = 1;
        for (s, &size) in strides.iter_mut().zip(&sizes) {
            *s = stride;
            stride *= size;
        }
        Some(Self { sizes, strides })
    }

    fn offset_of(&self, index: [usize; N]) -> Option<usize> {
        let valid_index = index
            .iter()
            .zip(self.sizes)
            .all(|(&idx, size)| idx < size);
        valid_index.then(|| {
            index
                .iter()
                .zip(self.strides)
                .map(|(&idx, stride)| idx * stride)
                .sum()
        })
    }
}

/// A fast accessor for a tensor.
///
/// The accessor is a utility struct, templated over the type of the tensor elements and the number
/// of dimensions, which make it efficient to access tensor elements by index.
/// A regular [`Tensor`](super::Tensor) stores its number of dimensions dynamically, and every
/// access goes through a slice of coordinates. If you know the rank (number of dimensions) of the
/// tensor at compile time, you can use this accessor to access the elements with a fixed size index.
pub struct TensorAccessor<'a, T, const N: usize> {
    data: &'a [T],
    layout: AccessorLayout<N>,
}
impl<'a, T, const N: usize> TensorAccessor<'a, T, N> {
    pub(crate) fn new(data: &'a [T], sizes: &[SizesType]) -> Option<Self> {
        let layout = AccessorLayout::new(sizes)?;
        Some(Self { data, layout })
    }

    /// Get a reference to the tensor element at the given index.
    ///
    /// Returns the element at the given index, or `None` if the index is out of bounds.
    pub fn get(&self, index: [usize; N]) -> Option<&'a T> {
        let offset = self.layout.offset_of(index)?;
        self.data.get(offset)
    }
}
impl<T> Index<usize> for TensorAccessor<'_, T, 1> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get([index]).unwrap()
    }
}
impl<T, const N: usize> Index<[usize; N]> for TensorAccessor<'_, T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: [usize; N]) -> &Self::Output {
        self.get(index).unwrap()
    }
}

/// A mutable accessor for a tensor.
///
/// This is similar to [TensorAccessor], but allows for mutable access to the tensor elements.
/// See the immutable accessor for more details.
pub struct TensorAccessorMut<'a, T, const N: usize> {
    data: &'a mut [T],
    layout: AccessorLayout<N>,
}
impl<'a, T, const N: usize> TensorAccessorMut<'a, T, N> {
    pub(crate) fn new(data: &'a mut [T], sizes: &[SizesType]) -> Option<Self> {
        let layout = AccessorLayout::new(sizes)?;
        Some(Self { data, layout })
    }

    /// Get a reference to the tensor element at the given index.
    ///
    /// Returns the element at the given index, or `None` if the index is out of bounds.
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        let offset = self.layout.offset_of(index)?;
        self.data.get(offset)
    }

    /// Get a mutable reference to the tensor element at the given index.
    ///
    /// Returns the element at the given index, or `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: [usize; N]) -> Option<&mut T> {
        let offset = self.layout.offset_of(index)?;
        self.data.get_mut(offset)
    }
}
impl<T> Index<usize> for TensorAccessorMut<'_, T, 1> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get([index]).unwrap()
    }
}
impl<T, const N: usize> Index<[usize; N]> for TensorAccessorMut<'_, T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: [usize; N]) -> &Self::Output {
        self.get(index).unwrap()
    }
}
impl<T> IndexMut<usize> for TensorAccessorMut<'_, T, 1> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut([index]).unwrap()
    }
}
impl<T, const N: usize> IndexMut<[usize; N]> for TensorAccessorMut<'_, T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: [usize; N]) -> &mut Self::Output {
        self.get_mut(index).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::alloc::Vec;
    use crate::tensor::Tensor;

    #[test]
    fn accessor_matches_coordinates() {
        let tensor = Tensor::from_vec(&[4, 5, 3], (0..60).collect::<Vec<u32>>()).unwrap();
        let accessor = tensor.accessor::<3>().unwrap();
        for x in 0..4 {
            for y in 0..5 {
                for z in 0..3 {
                    assert_eq!(accessor[[x, y, z]], tensor[&[x, y, z]]);
                }
            }
        }
        assert!(accessor.get([4, 0, 0]).is_none());
        assert!(accessor.get([0, 5, 0]).is_none());
        assert!(accessor.get([0, 0, 3]).is_none());
    }

    #[test]
    fn one_dimensional_accessor() {
        let mut tensor = Tensor::from_vec(&[3], [1.0, 2.0, 3.0].to_vec()).unwrap();
        assert_eq!(tensor.accessor::<1>().unwrap()[2], 3.0);

        let mut accessor = tensor.accessor_mut::<1>().unwrap();
        accessor[0] = -1.0;
        assert_eq!(accessor[0], -1.0);
        assert!(accessor.get_mut([3]).is_none());
        assert_eq!(tensor.as_slice(), &[-1.0, 2.0, 3.0]);
    }

    #[test]
    fn rank_mismatch() {
        let mut tensor = Tensor::<i8>::new(&[2, 2]).unwrap();
        assert!(tensor.accessor::<1>().is_none());
        assert!(tensor.accessor_mut::<3>().is_none());
    }
}

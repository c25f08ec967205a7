//! Fixed-size, inline, bounds-checked arrays.

use std::ops::{Index, IndexMut};

use gx_core::Container;

use crate::check;

/// Exactly `N` elements of `T`, stored inline.
///
/// Indexing is checked against `N`: an out-of-range index reports
/// `array index out of bounds` and terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    elems: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Number of elements, a compile-time constant.
    pub const LEN: usize = N;

    /// An array with every element set to `T::default()`.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self {
            elems: std::array::from_fn(|_| T::default()),
        }
    }

    /// Number of elements. Always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        check::elem(Container::Array, &self.elems, index)
    }

    /// Mutable reference to the element at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        check::elem_mut(Container::Array, &mut self.elems, index)
    }

    /// The elements as a standard slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// The elements as a mutable standard slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    /// Iterate over the elements in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// Mutably iterate over the elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elems.iter_mut()
    }

    /// Unwrap into the underlying array.
    pub fn into_inner(self) -> [T; N] {
        self.elems
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(elems: [T; N]) -> Self {
        Self { elems }
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

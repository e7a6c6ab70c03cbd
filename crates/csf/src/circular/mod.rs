//! Cyclically indexed sequences.
//!
//! Purpose
//! - Store a closed loop of samples (curve vertices, per-vertex scalars) where
//!   index `len` is index `0` again and `-1` is the last element.
//! - Let per-vertex rules be written against a `Neighborhood` ("me, my left and
//!   right neighbours") without knowing absolute indices or wrap-around.
//!
//! Invariants
//! - Indices are reduced by congruence modulo `len` into `[0, len)`, so negative
//!   indices count back from the end.
//! - An empty sequence is valid; element access on it panics, so callers check
//!   `len()` first.
//! - `map` and `filter` build a new sequence and evaluate every closure against the
//!   untouched source, so neighbour lookups never observe partial results.

use std::ops::Index;

/// Mutable ordered sequence with wrap-around indexing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircularSeq<T> {
    data: Vec<T>,
}

/// View of a sequence anchored at one element; `at(k)` reads the element `k`
/// steps away (negative `k` walks backwards).
#[derive(Debug)]
pub struct Neighborhood<'a, T> {
    seq: &'a CircularSeq<T>,
    anchor: usize,
}

// Manual impls: a derive would require `T: Copy`.
impl<T> Clone for Neighborhood<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Neighborhood<'_, T> {}

impl<'a, T> Neighborhood<'a, T> {
    #[inline]
    pub fn at(&self, offset: isize) -> &'a T {
        self.seq.get(self.anchor as isize + offset)
    }

    /// Absolute index of the anchor element.
    #[inline]
    pub fn anchor(&self) -> usize {
        self.anchor
    }
}

impl<T: Copy> Neighborhood<'_, T> {
    /// `(left, me, right)`, i.e. offsets `-1, 0, +1`.
    #[inline]
    pub fn triple(&self) -> (T, T, T) {
        (*self.at(-1), *self.at(0), *self.at(1))
    }
}

/// The unique integer congruent to `k` mod `n` in `[0, n)`.
#[inline]
fn wrap(k: isize, n: usize) -> usize {
    k.rem_euclid(n as isize) as usize
}

impl<T> CircularSeq<T> {
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[inline]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index` mod `len`. Panics on an empty sequence.
    #[inline]
    pub fn get(&self, index: isize) -> &T {
        &self.data[wrap(index, self.data.len())]
    }

    /// Overwrite the element at `index` mod `len`. Panics on an empty sequence.
    #[inline]
    pub fn set(&mut self, index: isize, value: T) {
        let k = wrap(index, self.data.len());
        self.data[k] = value;
    }

    /// Remove `count` cyclically consecutive elements starting at `index` and insert
    /// `values` in their place.
    ///
    /// - `count >= len` clears the sequence and drops `values`.
    /// - `index == len` addresses the gap after the last element; other indices are
    ///   reduced modulo `len`.
    /// - A run that wraps past the physical end is done as two linear splices: the
    ///   tail part takes as many leading `values` as it removes, the head part takes
    ///   the rest. The result is the same cycle a rotate-splice-rotate would give.
    pub fn splice<I>(&mut self, index: isize, count: usize, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.data.len();
        if count >= len {
            self.data.clear();
            return;
        }
        let start = if index == len as isize {
            len
        } else {
            wrap(index, len)
        };
        if start + count <= len {
            self.data.splice(start..start + count, values);
            return;
        }
        let tail_len = len - start;
        let head_len = count - tail_len;
        let mut tail_values: Vec<T> = values.into_iter().collect();
        let head_values = tail_values.split_off(tail_len.min(tail_values.len()));
        self.data.splice(start.., tail_values);
        self.data.splice(..head_len, head_values);
    }

    #[inline]
    pub fn neighborhood(&self, index: usize) -> Neighborhood<'_, T> {
        Neighborhood {
            seq: self,
            anchor: index,
        }
    }

    /// One neighbourhood per element, in index order.
    pub fn neighborhoods(&self) -> impl Iterator<Item = Neighborhood<'_, T>> + '_ {
        (0..self.data.len()).map(move |i| self.neighborhood(i))
    }

    /// New sequence with element `i = f(&x_i, i, neighborhood(i))`.
    pub fn map<V, F>(&self, mut f: F) -> CircularSeq<V>
    where
        F: FnMut(&T, usize, Neighborhood<'_, T>) -> V,
    {
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, x)| f(x, i, self.neighborhood(i)))
            .collect();
        CircularSeq { data }
    }

    /// New sequence of the elements for which `f(&x_i, i, neighborhood(i))` holds.
    pub fn filter<F>(&self, mut f: F) -> CircularSeq<T>
    where
        T: Clone,
        F: FnMut(&T, usize, Neighborhood<'_, T>) -> bool,
    {
        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|&(i, x)| f(x, i, self.neighborhood(i)))
            .map(|(_, x)| x.clone())
            .collect();
        CircularSeq { data }
    }

    /// Elements in index order starting at 0.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for CircularSeq<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Clone> From<&[T]> for CircularSeq<T> {
    fn from(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl<T> FromIterator<T> for CircularSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a CircularSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for CircularSeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T> Index<isize> for CircularSeq<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: isize) -> &T {
        self.get(index)
    }
}

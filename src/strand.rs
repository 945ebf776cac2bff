//! An exactly-sized owned element sequence.
//!
//! `Strand<T>` owns a contiguous buffer holding precisely as many elements
//! as its length: no spare capacity, no sentinel terminator. An empty
//! strand owns no buffer at all. Every structural operation (concatenation,
//! repetition, subsequencing) produces a fresh, independent strand.
//!
//! ## Examples
//!
//! Building strands and combining them:
//!
//! ```
//! use strand::Strand;
//!
//! let a = Strand::from(&[1u8, 2, 3][..]);
//! let b = Strand::filled(2, 0u8);
//! assert_eq!((&a + &b).as_slice(), &[1, 2, 3, 0, 0]);
//! assert_eq!((&a * 2).len(), 6);
//! ```
//!
//! Checked access never clamps and never mutates on failure:
//!
//! ```
//! use strand::{Strand, StrandError};
//!
//! let s = Strand::from(&[7u8][..]);
//! assert_eq!(s.get(0), Ok(&7));
//! assert_eq!(s.get(1), Err(StrandError::OutOfRange { index: 1, len: 1 }));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::iter::FromIterator;
use core::iter::IntoIterator;
use core::mem;
use core::ops::Add;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::ops::Mul;

use crate::transform::Transform;

/// Error type for the checked `Strand` operations.
///
/// All violations are detected before any mutation takes place, so a
/// failed operation leaves every strand involved exactly as it was.
///
/// # Example
///
/// ```rust
/// # use strand::{Strand, StrandError};
/// let s = Strand::from("hi");
/// let err = s.substrand(5, 1).unwrap_err();
/// assert_eq!(err, StrandError::OutOfRange { index: 5, len: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StrandError {
  /// An index or subsequence bound fell outside the strand.
  #[error("index {index} out of range for strand of length {len}")]
  OutOfRange {
    /// The offending index or start position.
    index: usize,
    /// The length of the strand (or source slice) at the time of the call.
    len:   usize,
  },
  /// A half-open range had its start past its end.
  #[error("invalid range: start {start} is past end {end}")]
  InvalidRange {
    /// Start of the rejected range.
    start: usize,
    /// End of the rejected range.
    end:   usize,
  },
}

/// A heap-backed, exactly-sized owned sequence of `T`.
///
/// The buffer always holds `len()` elements and nothing more; an empty
/// strand performs no allocation. Clones are deep and independent. Moving
/// a strand transfers buffer ownership, and [`Strand::take`] moves the
/// contents out of place, leaving the source empty.
///
/// # Example
///
/// ```rust
/// use strand::Strand;
///
/// let mut a = Strand::from(&[1i32, 2, 3][..]);
/// let b = a.take();
/// assert!(a.is_empty());
/// assert_eq!(b.as_slice(), &[1, 2, 3]);
/// ```
#[cfg_attr(feature = "from", derive(derive_more::From))]
pub struct Strand<T> {
  /// Exactly-sized storage. The boxed slice length is the strand length;
  /// a zero-length boxed slice holds no allocation.
  data: Box<[T]>,
}

impl<T> Strand<T> {
  /// Creates a new empty strand. Does not allocate.
  pub fn new() -> Self {
    Self {
      data: Box::default(),
    }
  }

  /// Creates a strand of `n` copies of `value`. `n == 0` produces an
  /// empty strand.
  pub fn filled(n: usize, value: T) -> Self
  where
    T: Clone,
  {
    Self {
      data: alloc::vec![value; n].into_boxed_slice(),
    }
  }

  /// Copies `source` into a new strand.
  pub fn from_slice(source: &[T]) -> Self
  where
    T: Clone,
  {
    Self {
      data: source.to_vec().into_boxed_slice(),
    }
  }

  /// Copies elements from `source` up to, but not including, the first
  /// element equal to `T::default()`, which acts as a terminator. If no
  /// terminator occurs, the whole slice is taken; the slice length bounds
  /// the scan, so no out-of-bounds read is possible.
  pub fn from_terminated(source: &[T]) -> Self
  where
    T: Clone + Default + PartialEq,
  {
    let terminator = T::default();
    let len = source
      .iter()
      .position(|elem| *elem == terminator)
      .unwrap_or(source.len());
    Self::from_slice(&source[..len])
  }

  /// Copies the half-open range `[start, end)` of `source` into a new
  /// strand. Zero-length ranges are valid and produce an empty strand.
  ///
  /// # Errors
  ///
  /// Returns [`StrandError::InvalidRange`] when `start > end`, and
  /// [`StrandError::OutOfRange`] when `end` lies past the end of
  /// `source`.
  pub fn try_from_range(
    source: &[T],
    start: usize,
    end: usize,
  ) -> Result<Self, StrandError>
  where
    T: Clone,
  {
    if start > end {
      return Err(StrandError::InvalidRange { start, end });
    }
    if end > source.len() {
      return Err(StrandError::OutOfRange {
        index: end,
        len:   source.len(),
      });
    }
    Ok(Self::from_slice(&source[start..end]))
  }

  /// Returns the number of elements in the strand.
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Returns `true` if the strand contains no elements.
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Provides an immutable slice of all elements.
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  /// Provides a mutable slice of all elements.
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data
  }

  /// Returns an iterator over the elements.
  pub fn iter(&self) -> core::slice::Iter<'_, T> {
    self.data.iter()
  }

  /// Returns a mutable iterator over the elements.
  pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
    self.data.iter_mut()
  }

  /// Returns a reference to the element at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`StrandError::OutOfRange`] when `index >= len()`.
  pub fn get(&self, index: usize) -> Result<&T, StrandError> {
    let len = self.data.len();
    self
      .data
      .get(index)
      .ok_or(StrandError::OutOfRange { index, len })
  }

  /// Returns a mutable reference to the element at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`StrandError::OutOfRange`] when `index >= len()`.
  pub fn get_mut(&mut self, index: usize) -> Result<&mut T, StrandError> {
    let len = self.data.len();
    self
      .data
      .get_mut(index)
      .ok_or(StrandError::OutOfRange { index, len })
  }

  /// Releases the buffer and resets the strand to the empty state. Safe
  /// to call on an already-empty strand.
  pub fn clear(&mut self) {
    self.data = Box::default();
  }

  /// Moves the contents out of the strand, leaving it empty.
  pub fn take(&mut self) -> Self {
    mem::take(self)
  }

  /// Copies `count` elements starting at `start` into a new strand.
  ///
  /// The bound is strict on both ends: `start` must lie inside the strand
  /// even when `count == 0`, so the empty tail subsequence at
  /// `start == len()` is rejected.
  ///
  /// # Errors
  ///
  /// Returns [`StrandError::OutOfRange`] when `start >= len()` or
  /// `start + count > len()` (including arithmetic overflow of the sum).
  pub fn substrand(&self, start: usize, count: usize) -> Result<Self, StrandError>
  where
    T: Clone,
  {
    let len = self.data.len();
    match start.checked_add(count) {
      Some(end) if start < len && end <= len => {
        Ok(Self::from_slice(&self.data[start..end]))
      }
      _ => Err(StrandError::OutOfRange { index: start, len }),
    }
  }

  /// Returns a new strand holding `self`'s elements followed by
  /// `other`'s.
  pub fn concat(&self, other: &Self) -> Self
  where
    T: Clone,
  {
    let mut data = Vec::with_capacity(self.len() + other.len());
    data.extend_from_slice(&self.data);
    data.extend_from_slice(&other.data);
    Self {
      data: data.into_boxed_slice(),
    }
  }

  /// Returns a new strand holding `self`'s elements with `value`
  /// appended.
  pub fn appended(&self, value: T) -> Self
  where
    T: Clone,
  {
    let mut data = Vec::with_capacity(self.len() + 1);
    data.extend_from_slice(&self.data);
    data.push(value);
    Self {
      data: data.into_boxed_slice(),
    }
  }

  /// Returns a new strand holding `self`'s elements repeated `n` times.
  /// `n == 0` produces an empty strand regardless of contents.
  pub fn repeat(&self, n: usize) -> Self
  where
    T: Clone,
  {
    let mut data = Vec::with_capacity(self.len() * n);
    for _ in 0..n {
      data.extend_from_slice(&self.data);
    }
    Self {
      data: data.into_boxed_slice(),
    }
  }

  /// Converts every element into `U`, in index order, producing a new
  /// strand of the target element type.
  pub fn convert<U>(&self) -> Strand<U>
  where
    T: Clone + Into<U>,
  {
    self.iter().map(|elem| elem.clone().into()).collect()
  }

  /// Maps every element through `f`, in index order, producing a new
  /// strand of the target element type. Unlike [`Strand::convert`], this
  /// covers conversions `Into` cannot express, such as narrowing ones.
  pub fn map<U, F>(&self, f: F) -> Strand<U>
  where
    F: Fn(&T) -> U,
  {
    self.iter().map(f).collect()
  }

  /// Rewrites every element in place through a dynamically dispatched
  /// transformer, one call per element, in index order.
  pub fn apply(&mut self, transformer: &dyn Transform<T>) {
    for slot in self.data.iter_mut() {
      *slot = transformer.transform(slot);
    }
  }

  /// Non-mutating counterpart of [`Strand::apply`]: copies the strand,
  /// then rewrites the copy.
  pub fn applied(&self, transformer: &dyn Transform<T>) -> Self
  where
    T: Clone,
  {
    let mut out = self.clone();
    out.apply(transformer);
    out
  }

  /// Rewrites every element in place through a statically dispatched
  /// callable, one call per element, in index order. Same semantics as
  /// [`Strand::apply`], but resolved at compile time.
  pub fn modify<F>(&mut self, f: F)
  where
    F: Fn(&T) -> T,
  {
    for slot in self.data.iter_mut() {
      *slot = f(slot);
    }
  }

  /// Non-mutating counterpart of [`Strand::modify`]: copies the strand,
  /// then rewrites the copy.
  pub fn modified<F>(&self, f: F) -> Self
  where
    T: Clone,
    F: Fn(&T) -> T,
  {
    let mut out = self.clone();
    out.modify(f);
    out
  }
}

impl<T> Default for Strand<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for Strand<T> {
  fn clone(&self) -> Self {
    Self {
      data: self.data.clone(),
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for Strand<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Strand{s:?}", s = self.as_slice())
  }
}

impl<T: PartialEq> PartialEq for Strand<T> {
  fn eq(&self, other: &Self) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T: Eq> Eq for Strand<T> {}

impl<T: PartialOrd> PartialOrd for Strand<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.as_slice().partial_cmp(other.as_slice())
  }
}

impl<T: Ord> Ord for Strand<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_slice().cmp(other.as_slice())
  }
}

impl<T: Hash> Hash for Strand<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_slice().hash(state)
  }
}

impl<T> Index<usize> for Strand<T> {
  type Output = T;
  fn index(&self, index: usize) -> &Self::Output {
    assert!(index < self.data.len(), "index out of bounds");
    &self.data[index]
  }
}

impl<T> IndexMut<usize> for Strand<T> {
  fn index_mut(&mut self, index: usize) -> &mut Self::Output {
    assert!(index < self.data.len(), "index out of bounds");
    &mut self.data[index]
  }
}

impl<T> Deref for Strand<T> {
  type Target = [T];
  fn deref(&self) -> &Self::Target {
    self.as_slice()
  }
}

impl<T> DerefMut for Strand<T> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    self.as_mut_slice()
  }
}

impl<T> AsRef<[T]> for Strand<T> {
  fn as_ref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T: Clone> Add for &Strand<T> {
  type Output = Strand<T>;
  fn add(self, rhs: Self) -> Strand<T> {
    self.concat(rhs)
  }
}

impl<T: Clone> Add for Strand<T> {
  type Output = Strand<T>;
  fn add(self, rhs: Self) -> Strand<T> {
    self.concat(&rhs)
  }
}

impl<T: Clone> Add<T> for &Strand<T> {
  type Output = Strand<T>;
  fn add(self, rhs: T) -> Strand<T> {
    self.appended(rhs)
  }
}

impl<T: Clone> Add<T> for Strand<T> {
  type Output = Strand<T>;
  fn add(self, rhs: T) -> Strand<T> {
    self.appended(rhs)
  }
}

impl<T: Clone> Mul<usize> for &Strand<T> {
  type Output = Strand<T>;
  fn mul(self, n: usize) -> Strand<T> {
    self.repeat(n)
  }
}

impl<T: Clone> Mul<usize> for Strand<T> {
  type Output = Strand<T>;
  fn mul(self, n: usize) -> Strand<T> {
    self.repeat(n)
  }
}

impl<T: Clone> From<&[T]> for Strand<T> {
  fn from(source: &[T]) -> Self {
    Self::from_slice(source)
  }
}

impl<T> From<Vec<T>> for Strand<T> {
  fn from(source: Vec<T>) -> Self {
    Self {
      data: source.into_boxed_slice(),
    }
  }
}

impl<T> From<Strand<T>> for Vec<T> {
  fn from(strand: Strand<T>) -> Self {
    strand.data.into_vec()
  }
}

impl<T> FromIterator<T> for Strand<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self {
      data: iter.into_iter().collect(),
    }
  }
}

impl<T> IntoIterator for Strand<T> {
  type Item = T;
  type IntoIter = alloc::vec::IntoIter<T>;
  fn into_iter(self) -> Self::IntoIter {
    self.data.into_vec().into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Strand<T> {
  type Item = &'a T;
  type IntoIter = core::slice::Iter<'a, T>;
  fn into_iter(self) -> Self::IntoIter {
    self.as_slice().iter()
  }
}

impl<'a, T> IntoIterator for &'a mut Strand<T> {
  type Item = &'a mut T;
  type IntoIter = core::slice::IterMut<'a, T>;
  fn into_iter(self) -> Self::IntoIter {
    self.as_mut_slice().iter_mut()
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use super::*;

  impl<T> serde::Serialize for Strand<T>
  where
    T: serde::Serialize,
  {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: serde::Serializer,
    {
      use serde::ser::SerializeSeq;
      let mut seq = serializer.serialize_seq(Some(self.len()))?;
      for elem in self.as_slice() {
        seq.serialize_element(elem)?;
      }
      seq.end()
    }
  }

  impl<'de, T> serde::Deserialize<'de> for Strand<T>
  where
    T: serde::Deserialize<'de>,
  {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: serde::Deserializer<'de>,
    {
      let data = Vec::<T>::deserialize(deserializer)?;
      Ok(Strand::from(data))
    }
  }
}

//! Supplemental sequence operations.
//!
//! [`SequenceExt`] adds a handful of helpers to every [`Iterator`] that the
//! standard library either lacks or only offers in a panicking form:
//!
//! - [`index_of`](SequenceExt::index_of) / [`index_of_with`](SequenceExt::index_of_with):
//!   position of the first element equal to a value
//! - [`take_range`](SequenceExt::take_range): `length` elements starting at `index`
//! - [`count_checked`](SequenceExt::count_checked) / [`count_as`](SequenceExt::count_as):
//!   element count with overflow reported as an error
//! - [`sum_durations`](SequenceExt::sum_durations) / [`sum_durations_by`](SequenceExt::sum_durations_by):
//!   checked [`Duration`] totals
//!
//! Random-access input gets [`SliceExt::take_range`], which borrows the
//! range directly instead of skipping through an iterator.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_extensions::{SequenceExt, SliceExt};
//! use std::time::Duration;
//!
//! assert_eq!((0..10).index_of(&5), Some(5));
//! assert_eq!((0..10).take_range(3, 3).collect::<Vec<_>>(), vec![3, 4, 5]);
//!
//! let items: Vec<i32> = (0..10).collect();
//! assert_eq!(items.take_range(3, 3), Some(&[3, 4, 5][..]));
//!
//! let total = [Duration::from_millis(10), Duration::from_millis(5)]
//!     .into_iter()
//!     .sum_durations()
//!     .unwrap();
//! assert_eq!(total, Duration::from_millis(15));
//! ```

use std::borrow::Borrow;
use std::iter::{Skip, Take};
use std::time::Duration;

use crate::error::{require, ExtensionError, Result};

/// Decides whether two values are equal.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparer.
pub trait EqualityComparer<T: ?Sized> {
    /// Whether `left` and `right` are equal.
    fn equals(&self, left: &T, right: &T) -> bool;
}

/// Compares with [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEqualityComparer;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultEqualityComparer {
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> EqualityComparer<T> for F {
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// Extension methods for iterators.
pub trait SequenceExt: Iterator + Sized {
    /// Zero-based index of the first element equal to `value`.
    ///
    /// Returns `None` if no element matches. Consumes the iterator up to and
    /// including the match.
    fn index_of<Q>(self, value: &Q) -> Option<usize>
    where
        Self::Item: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.index_of_with(value, &DefaultEqualityComparer)
    }

    /// Zero-based index of the first element that `comparer` considers equal
    /// to `value`.
    fn index_of_with<Q, C>(mut self, value: &Q, comparer: &C) -> Option<usize>
    where
        Self::Item: Borrow<Q>,
        Q: ?Sized,
        C: EqualityComparer<Q> + ?Sized,
    {
        self.position(|item| comparer.equals(item.borrow(), value))
    }

    /// `length` elements starting at `index`, lazily.
    ///
    /// The result is shorter than `length` if the sequence runs out. For
    /// slices, [`SliceExt::take_range`] borrows the range directly.
    fn take_range(self, index: usize, length: usize) -> Take<Skip<Self>> {
        self.skip(index).take(length)
    }

    /// Count the elements, reporting overflow instead of panicking.
    ///
    /// When the iterator's [`size_hint`](Iterator::size_hint) is exact, the
    /// count is taken from it without advancing the iterator. Otherwise the
    /// iterator is enumerated once.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError::Overflow`] if the count exceeds `usize::MAX`.
    fn count_checked(mut self) -> Result<usize> {
        if let (lower, Some(upper)) = self.size_hint()
            && lower == upper
        {
            return Ok(lower);
        }

        self.try_fold(0usize, |count, _| count.checked_add(1))
            .ok_or(ExtensionError::overflow("count"))
    }

    /// Count the elements into a narrower integer type.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError::Overflow`] if the count does not fit in `N`.
    fn count_as<N: TryFrom<usize>>(self) -> Result<N> {
        let count = self.count_checked()?;
        N::try_from(count).map_err(|_| ExtensionError::overflow("count"))
    }

    /// Total of a sequence of durations, starting at zero.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError::Overflow`] if the total exceeds [`Duration::MAX`].
    fn sum_durations(mut self) -> Result<Duration>
    where
        Self: Iterator<Item = Duration>,
    {
        self.try_fold(Duration::ZERO, Duration::checked_add)
            .ok_or(ExtensionError::overflow("sum"))
    }

    /// Total of the durations `selector` projects from each element, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError::Overflow`] if the total exceeds [`Duration::MAX`].
    fn sum_durations_by<F>(self, selector: F) -> Result<Duration>
    where
        F: FnMut(Self::Item) -> Duration,
    {
        self.map(selector).sum_durations()
    }
}

impl<I: Iterator> SequenceExt for I {}

/// Range extraction on random-access sequences.
pub trait SliceExt<T> {
    /// Borrow `length` elements starting at `index`.
    ///
    /// The range is not clamped: `None` is returned when it does not lie
    /// entirely within the slice, exactly as [`slice::get`] does.
    fn take_range(&self, index: usize, length: usize) -> Option<&[T]>;
}

impl<T> SliceExt<T> for [T] {
    fn take_range(&self, index: usize, length: usize) -> Option<&[T]> {
        let end = index.checked_add(length)?;
        self.get(index..end)
    }
}

/// Index of `value` using a comparer that may be missing.
///
/// # Errors
///
/// Returns [`ExtensionError::InvalidArgument`] naming `comparer` if it is
/// `None`. The sequence is not touched in that case.
pub fn index_of_by<I, Q, C>(sequence: I, value: &Q, comparer: Option<&C>) -> Result<Option<usize>>
where
    I: IntoIterator,
    I::Item: Borrow<Q>,
    Q: ?Sized,
    C: EqualityComparer<Q> + ?Sized,
{
    let comparer = require(comparer, "comparer")?;
    Ok(sequence.into_iter().index_of_with(value, comparer))
}

/// `true` if `sequence` is absent or yields no elements.
///
/// At most one element is pulled from the sequence.
pub fn is_none_or_empty<I: IntoIterator>(sequence: Option<I>) -> bool {
    sequence.is_none_or(|sequence| sequence.into_iter().next().is_none())
}

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Range Algebra
//!
//! Overlap tests and merging of closed ranges `[start, end]` over any
//! [`Real`]. Touching endpoints count as overlapping.
//!
//! The free functions take raw endpoints and do no validation.
//! [`ClosedInterval`] wraps the same logic in a value type that keeps
//! `start <= end`.

use crate::math::scalar::{max, min};
use crate::num::kind::Real;
use std::ops::{BitAnd, BitOr};

/// Returns `true` if the closed ranges `[start_a, end_a]` and
/// `[start_b, end_b]` share at least one point.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::range::ranges_overlap;
/// assert!(ranges_overlap(0, 5, 5, 10)); // touching
/// assert!(!ranges_overlap(0, 4, 5, 10));
/// ```
#[inline]
pub fn ranges_overlap<T: Real>(start_a: T, end_a: T, start_b: T, end_b: T) -> bool {
    start_a <= end_b && start_b <= end_a
}

/// Merges two closed ranges into their envelope if they overlap.
///
/// Returns `None` if the ranges are disjoint and otherwise the smallest
/// range covering both. This is the union, not the intersection.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::range::combine_ranges_if_overlap;
/// assert_eq!(combine_ranges_if_overlap(0, 5, 3, 10), Some((0, 10)));
/// assert_eq!(combine_ranges_if_overlap(0, 2, 5, 10), None);
/// ```
#[inline]
pub fn combine_ranges_if_overlap<T: Real>(
    start_a: T,
    end_a: T,
    start_b: T,
    end_b: T,
) -> Option<(T, T)> {
    if ranges_overlap(start_a, end_a, start_b, end_b) {
        Some((min(start_a, start_b), max(end_a, end_b)))
    } else {
        None
    }
}

/// A closed interval `[start, end]` containing both of its endpoints.
///
/// # Invariants
/// `start` must always be less than or equal to `end`. An interval with
/// `start == end` is degenerate (a single point), not empty.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct ClosedInterval<T>
where
    T: Real,
{
    start: T,
    end: T,
}

impl<T> ClosedInterval<T>
where
    T: Real,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or if the endpoints are unordered (NaN).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalarkit::math::range::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0.0, 2.5);
    /// assert_eq!(iv.len(), 2.5);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `ClosedInterval` if `start <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalarkit::math::range::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// assert!(ClosedInterval::try_new(0.0, f64::NAN).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking the invariant in
    /// release builds.
    ///
    /// The caller must ensure `start <= end`. A `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if the intervals share at least one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalarkit::math::range::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.overlaps(ClosedInterval::new(10, 20))); // Touching
    /// assert!(!a.overlaps(ClosedInterval::new(11, 20)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        ranges_overlap(self.start, self.end, other.start, other.end)
    }

    /// Returns `true` if `value` lies in `[start, end]`.
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns the length of the interval (`end - start`).
    #[inline]
    pub fn len(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if the interval is a single point (`start == end`).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns the midpoint, computed as `start + len / 2` so that it does not
    /// overflow for integers. Integer midpoints truncate toward `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalarkit::math::range::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(250_u8, 254).midpoint(), 252);
    /// assert_eq!(ClosedInterval::new(0.0, 3.0).midpoint(), 1.5);
    /// ```
    #[inline]
    pub fn midpoint(&self) -> T {
        self.start + self.len() / (T::one() + T::one())
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Touching intervals intersect in a degenerate interval. Returns `None`
    /// if the intervals are disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalarkit::math::range::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert_eq!(a.intersection(ClosedInterval::new(5, 15)), Some(ClosedInterval::new(5, 10)));
    /// assert_eq!(a.intersection(ClosedInterval::new(10, 15)), Some(ClosedInterval::new(10, 10)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        if self.overlaps(other) {
            Some(Self::new_unchecked(
                max(self.start, other.start),
                min(self.end, other.end),
            ))
        } else {
            None
        }
    }

    /// Merges two overlapping intervals into their envelope.
    ///
    /// Returns `None` if the intervals are disjoint. This is
    /// [`combine_ranges_if_overlap`] on interval values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalarkit::math::range::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 5);
    /// assert_eq!(a.envelope(ClosedInterval::new(3, 10)), Some(ClosedInterval::new(0, 10)));
    /// assert_eq!(a.envelope(ClosedInterval::new(6, 10)), None);
    /// ```
    #[inline]
    pub fn envelope(&self, other: Self) -> Option<Self> {
        combine_ranges_if_overlap(self.start, self.end, other.start, other.end)
            .map(|(start, end)| Self::new_unchecked(start, end))
    }

    /// Returns the open gap between two disjoint intervals as the closed
    /// interval spanning its endpoints.
    ///
    /// Returns `None` if the intervals overlap or touch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalarkit::math::range::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 5);
    /// let b = ClosedInterval::new(10, 15);
    /// assert_eq!(a.gap(b), Some(ClosedInterval::new(5, 10)));
    /// assert_eq!(b.gap(a), Some(ClosedInterval::new(5, 10)));
    /// ```
    #[inline]
    pub fn gap(&self, other: Self) -> Option<Self> {
        if self.end < other.start {
            Some(Self::new_unchecked(self.end, other.start))
        } else if other.end < self.start {
            Some(Self::new_unchecked(other.end, self.start))
        } else {
            None
        }
    }

    /// Splits the interval at `value` into two intervals sharing that point.
    ///
    /// Returns `None` unless `start < value < end`.
    #[inline]
    pub fn split_at(&self, value: T) -> Option<(Self, Self)> {
        if self.start < value && value < self.end {
            Some((
                Self::new_unchecked(self.start, value),
                Self::new_unchecked(value, self.end),
            ))
        } else {
            None
        }
    }
}

impl<T> BitAnd for ClosedInterval<T>
where
    T: Real,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for ClosedInterval<T>
where
    T: Real,
{
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.envelope(rhs)
    }
}

impl<T> Default for ClosedInterval<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
        }
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T>
where
    T: Real,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for ClosedInterval<T>
where
    T: Real,
{
    /// # Panics
    ///
    /// Panics if the range is reversed.
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<ClosedInterval<T>> for std::ops::RangeInclusive<T>
where
    T: Real,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.start..=iv.end
    }
}

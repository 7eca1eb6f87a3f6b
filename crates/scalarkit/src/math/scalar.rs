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

//! # Elementary Scalar Operations
//!
//! Generic `abs`/`min`/`max`/`clamp`/`sign`, rounding, powers, logarithms and
//! interpolation over any [`Real`]. Operations without an integer meaning
//! (rounding, powers, logarithms) take a detour through `f64` and convert back
//! with `as`-cast semantics, so integer results truncate toward zero.

use crate::num::kind::{Float, Real};

/// Returns the magnitude of `val`.
///
/// For signed integers `abs(MIN)` wraps back to `MIN`.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::scalar::abs;
/// assert_eq!(abs(-4_i32), 4);
/// assert_eq!(abs(2.5_f64), 2.5);
/// ```
#[inline]
pub fn abs<T: Real>(val: T) -> T {
    if val < T::zero() {
        val.negate()
    } else {
        val
    }
}

/// Returns the smaller of `a` and `b`, preferring `b` when they compare equal
/// or are unordered.
#[inline]
pub fn min<T: Real>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of `a` and `b`, preferring `b` when they compare equal
/// or are unordered.
#[inline]
pub fn max<T: Real>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Restricts `val` to `[min, max]`.
///
/// Unlike `f64::clamp` this never panics; with `min > max` the lower bound is
/// checked first and wins.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::scalar::clamp;
/// assert_eq!(clamp(0, 15, 10), 10);
/// assert_eq!(clamp(0, -3, 10), 0);
/// assert_eq!(clamp(0.0, 0.5, 1.0), 0.5);
/// ```
#[inline]
pub fn clamp<T: Real>(min: T, val: T, max: T) -> T {
    if val < min {
        return min;
    }
    if val > max {
        return max;
    }
    val
}

/// Returns `-1` for negative values and `1` otherwise, including zero.
#[inline]
pub fn sign<T: Real>(val: T) -> T {
    if val < T::zero() {
        T::one().negate()
    } else {
        T::one()
    }
}

/// Rounds toward positive infinity.
#[inline]
pub fn ceil<T: Real>(val: T) -> T {
    T::cast_from_f64(val.as_f64().ceil())
}

/// Rounds toward negative infinity.
#[inline]
pub fn floor<T: Real>(val: T) -> T {
    T::cast_from_f64(val.as_f64().floor())
}

/// Rounds to the nearest whole number, half-way cases away from zero.
#[inline]
pub fn round<T: Real>(val: T) -> T {
    T::cast_from_f64(val.as_f64().round())
}

/// Raises `val` to the power `exp`, computed in `f64`.
#[inline]
pub fn pow<T: Real>(val: T, exp: T) -> T {
    T::cast_from_f64(val.as_f64().powf(exp.as_f64()))
}

/// Takes the `root`-th root of `val` as `pow(val, 1 / root)`.
///
/// The reciprocal is computed in `T`, so integer roots above one collapse to
/// an exponent of zero and `root(val, 0)` divides by zero.
///
/// # Panics
///
/// Panics for integer `T` when `root` is zero.
#[inline]
pub fn root<T: Real>(val: T, root: T) -> T {
    pow(val, T::one() / root)
}

/// Logarithm of `val` in the given `base`.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::scalar::log;
/// assert!((log(2.0, 8.0_f64) - 3.0).abs() < 1e-12);
/// assert_eq!(log(10, 1000_u32), 2); // 2.9999999999999996 truncates
/// ```
#[inline]
pub fn log<T: Real>(base: T, val: T) -> T {
    T::cast_from_f64(val.as_f64().ln() / base.as_f64().ln())
}

/// Returns `val` if `condition` holds and zero otherwise.
#[inline]
pub fn zero_or_val<T: Real>(condition: bool, val: T) -> T {
    if condition {
        val
    } else {
        T::zero()
    }
}

/// Moves from `start` toward `end` by the fraction `amount`.
///
/// The offset `(end - start) * amount` is computed in `f64` and converted to
/// `T` before it is applied, so integer results truncate the offset rather
/// than the final position. Descending unsigned ranges are handled without
/// underflow. An offset too large for `T` (a signed range wider than
/// `T::MAX`) is applied in `f64` instead, and the position is converted.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::scalar::lerp;
/// assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
/// assert_eq!(lerp(10_u8, 0, 0.25), 8);
/// ```
#[inline]
pub fn lerp<T: Real>(start: T, end: T, amount: f64) -> T {
    let offset = (end.as_f64() - start.as_f64()) * amount;
    if offset.abs() > T::max_value().as_f64() {
        T::cast_from_f64(start.as_f64() + offset)
    } else if offset < 0.0 {
        start - T::cast_from_f64(-offset)
    } else {
        start + T::cast_from_f64(offset)
    }
}

/// Returns where `val` sits between `start` and `end` as a fraction, the
/// inverse of [`lerp`]. Values outside the range give fractions outside
/// `[0, 1]`; an empty range divides by zero.
#[inline]
pub fn inverse_lerp<T: Real>(start: T, end: T, val: T) -> f64 {
    (val.as_f64() - start.as_f64()) / (end.as_f64() - start.as_f64())
}

/// Splits `val` into its integer part and its fractional part, both carrying
/// the sign of `val`.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::scalar::int_frac;
/// assert_eq!(int_frac(3.75_f64), (3.0, 0.75));
/// assert_eq!(int_frac(-1.5_f32), (-1.0, -0.5));
/// ```
#[inline]
pub fn int_frac<T: Float>(val: T) -> (T, T) {
    let whole = val.trunc();
    (whole, val - whole)
}

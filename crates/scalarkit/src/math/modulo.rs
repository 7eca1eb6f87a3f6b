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

//! # Sign-Aware Modulo and Decomposition
//!
//! Truncating remainders that behave the same for every [`Real`] type, and
//! the whole/remainder splits built on top of division.
//!
//! Both remainder functions work on magnitudes and then restore the sign of
//! the dividend, which reproduces truncating (toward zero) division:
//!
//! | `val` | `div` | result |
//! |-------|-------|--------|
//! | `7`   | `3`   | `1`    |
//! | `-7`  | `3`   | `-1`   |
//! | `7`   | `-3`  | `1`    |
//! | `-7`  | `-3`  | `-1`   |
//!
//! The result always takes the sign of the dividend; a variant that negates
//! whenever exactly one operand is negative (`imod(7, -3) == -1`) is not what
//! these functions compute. This is not floor or Euclidean modulo either; use
//! `rem_euclid` for that.
//!
//! Division by zero is deliberately left unguarded. [`imod`] panics like any
//! integer division by zero, [`fmod`] produces NaN like any float division.

use crate::math::scalar::int_frac;
use crate::num::kind::{Float, Integer, Real};

/// Truncating remainder computed on the `u64` magnitudes of the operands.
///
/// Works for float inputs too: their magnitudes are truncated to whole
/// numbers before the remainder is taken.
///
/// # Limitations
///
/// Magnitudes are converted with `as u64`. For `i128`/`u128` values beyond
/// `u64::MAX` the high bits are silently dropped, and floats beyond that range
/// saturate. The result is then meaningless; no error is reported.
///
/// # Panics
///
/// Panics if the magnitude of `div` converts to zero, which includes any
/// float divisor with `|div| < 1`.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::modulo::imod;
/// assert_eq!(imod(-7, 3), -1);
/// assert_eq!(imod(7, -3), 1);
/// assert_eq!(imod(-7, -3), -1);
/// assert_eq!(imod(i64::MIN, 10), -8);
/// ```
#[inline]
pub fn imod<T: Real>(val: T, div: T) -> T {
    let negative = val < T::zero();
    let magnitude = if negative { val.negate() } else { val };
    let divisor = if div < T::zero() { div.negate() } else { div };

    let remainder = T::cast_from_u64(magnitude.as_u64() % divisor.as_u64());
    if negative {
        remainder.negate()
    } else {
        remainder
    }
}

/// Truncating remainder computed in `f64`.
///
/// A zero divisor yields NaN, which converts to NaN for float `T` and to zero
/// for integer `T`.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::modulo::fmod;
/// assert_eq!(fmod(-7.0, 3.0), -1.0);
/// assert_eq!(fmod(7.5, -2.0), 1.5);
/// assert!(fmod(1.0_f64, 0.0).is_nan());
/// ```
#[inline]
pub fn fmod<T: Real>(val: T, div: T) -> T {
    let negative = val < T::zero();
    // Magnitudes are taken in f64, where MIN of a signed integer has a
    // positive counterpart.
    let magnitude = val.as_f64().abs();
    let divisor = div.as_f64().abs();

    let remainder = magnitude % divisor;
    T::cast_from_f64(if negative { -remainder } else { remainder })
}

/// Splits an integer into `(whole, rem)` with `whole = value / modulus`.
///
/// Note that `rem` is `value - whole`, not `value - whole * modulus`: `whole`
/// is the quotient and is *not* scaled back by `modulus`. This differs from
/// [`fwhole_rem`] and is relied upon as-is.
///
/// # Panics
///
/// Panics if `modulus` is zero.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::modulo::iwhole_rem;
/// assert_eq!(iwhole_rem(17, 5), (3, 14));
/// ```
#[inline]
pub fn iwhole_rem<T: Integer>(value: T, modulus: T) -> (T, T) {
    let whole = value / modulus;
    (whole, value - whole)
}

/// Splits a float into `(whole, rem)` where `whole` is the largest multiple
/// of `modulus` toward zero and `whole + rem ≈ value`.
///
/// The quotient `value / modulus` is split into integer and fractional parts
/// and each part is scaled back by `modulus`, so both results carry rounding
/// error from the division.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::modulo::fwhole_rem;
/// let (whole, rem) = fwhole_rem(17.0_f64, 5.0);
/// assert_eq!(whole, 15.0);
/// assert!((rem - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn fwhole_rem<T: Float>(value: T, modulus: T) -> (T, T) {
    let (whole, frac) = int_frac(value / modulus);
    (whole * modulus, frac * modulus)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_imod_sign_table() {
        assert_eq!(imod(7, 3), 1);
        assert_eq!(imod(-7, 3), -1);
        assert_eq!(imod(7, -3), 1);
        assert_eq!(imod(-7, -3), -1);
    }

    #[test]
    fn test_imod_matches_native_remainder() {
        for val in -20_i32..=20 {
            for div in [-7, -3, -1, 1, 2, 5, 9] {
                assert_eq!(imod(val, div), val % div, "imod({val}, {div})");
            }
        }
    }

    #[test]
    fn test_imod_unsigned() {
        assert_eq!(imod(17_u8, 5), 2);
        assert_eq!(imod(u64::MAX, 10), 5);
        assert_eq!(imod(3_u32, 7), 3);
    }

    #[test]
    fn test_imod_extreme_signed() {
        // MIN has no positive counterpart; the u64 magnitude still fits
        assert_eq!(imod(i64::MIN, 7), i64::MIN % 7);
        assert_eq!(imod(i32::MIN, 7), i32::MIN % 7);
        assert_eq!(imod(i8::MIN, 3), -2);
        assert_eq!(imod(i8::MIN, 5), -3);
    }

    #[test]
    fn test_imod_truncates_wide_magnitudes() {
        // 2^64 + 5 loses its high bit on the way through u64
        let val: u128 = (1_u128 << 64) + 5;
        assert_eq!(imod(val, 3_u128), 2);
        assert_ne!(imod(val, 3_u128), val % 3);
    }

    #[test]
    fn test_imod_float_operands_truncate() {
        assert_eq!(imod(7.9_f64, 3.0), 1.0);
        assert_eq!(imod(-7.9_f64, 3.0), -1.0);
    }

    #[test]
    #[should_panic]
    fn test_imod_zero_divisor_panics() {
        imod(5_i32, 0);
    }

    #[test]
    fn test_fmod_sign_table() {
        assert_eq!(fmod(7.0, 3.0), 1.0);
        assert_eq!(fmod(-7.0, 3.0), -1.0);
        assert_eq!(fmod(7.0, -3.0), 1.0);
        assert_eq!(fmod(-7.0, -3.0), -1.0);
    }

    #[test]
    fn test_fmod_fractional() {
        assert!((fmod(5.5_f64, 2.0) - 1.5).abs() < 1e-12);
        assert!((fmod(-5.5_f32, 2.0) + 1.5).abs() < 1e-6);
        assert!((fmod(1.0_f64, 0.3) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_fmod_integers_agree_with_imod() {
        for val in -12_i64..=12 {
            for div in [-5, -2, 3, 4] {
                assert_eq!(fmod(val, div), imod(val, div));
            }
        }
    }

    #[test]
    fn test_fmod_signed_min_keeps_dividend_sign() {
        assert_eq!(fmod(i32::MIN, 7), imod(i32::MIN, 7));
        assert_eq!(fmod(i32::MIN, 7), i32::MIN % 7);
        assert_eq!(fmod(i8::MIN, 3_i8), -2);
        assert_eq!(fmod(i8::MIN, 3_i8), imod(i8::MIN, 3_i8));
        assert_eq!(fmod(i8::MIN, -5_i8), i8::MIN % -5);
        assert_eq!(fmod(i64::MIN, 10), -8);
    }

    #[test]
    fn test_fmod_zero_divisor_propagates() {
        assert!(fmod(3.0_f64, 0.0).is_nan());
        assert!(fmod(3.0_f32, -0.0).is_nan());
        // NaN converts to zero for integers
        assert_eq!(fmod(3_i32, 0), 0);
    }

    #[test]
    fn test_iwhole_rem_keeps_quotient_unscaled() {
        // rem is value - quotient, not value - quotient * modulus
        assert_eq!(iwhole_rem(17, 5), (3, 14));
        assert_eq!(iwhole_rem(-17, 5), (-3, -14));
        assert_eq!(iwhole_rem(4_u32, 8), (0, 4));
        assert_eq!(iwhole_rem(10, 1), (10, 0));
    }

    #[test]
    #[should_panic]
    fn test_iwhole_rem_zero_modulus_panics() {
        iwhole_rem(1_i32, 0);
    }

    #[test]
    fn test_fwhole_rem() {
        let (whole, rem) = fwhole_rem(17.0_f64, 5.0);
        assert_eq!(whole, 15.0);
        assert!((rem - 2.0).abs() < 1e-12);

        let (whole, rem) = fwhole_rem(-7.5_f64, 2.0);
        assert_eq!(whole, -6.0);
        assert_eq!(rem, -1.5);

        let (whole, rem) = fwhole_rem(0.75_f32, 0.25);
        assert_eq!(whole, 0.75);
        assert_eq!(rem, 0.0);
    }

    #[test]
    fn test_fwhole_rem_sums_to_value() {
        for &(value, modulus) in &[(10.3_f64, 0.7), (-4.2, 1.1), (123.456, 10.0)] {
            let (whole, rem) = fwhole_rem(value, modulus);
            assert!((whole + rem - value).abs() < 1e-9);
            let multiple = whole / modulus;
            assert!((multiple - multiple.round()).abs() < 1e-9);
        }
    }
}

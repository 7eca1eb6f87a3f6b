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

//! # Numeric Kinds
//!
//! Compile-time capability sets that classify the primitive numeric types.
//! Every generic function in this crate is bounded by the narrowest kind that
//! makes it well-defined.
//!
//! ```text
//! Number
//!   ├── Real
//!   │     ├── Integer
//!   │     ├── Float
//!   │     ├── Signed    (signed integers, f32, f64)
//!   │     └── Unsigned  (unsigned integers)
//!   └── Complex         (num_complex::Complex<f32 | f64>, `complex` feature)
//! ```
//!
//! `Signed` and `Unsigned` cut across `Integer` and `Float`: floats are always
//! `Signed`, unsigned integers never are.

use num_traits::{Bounded, Num, NumCast, PrimInt};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Neg;

/// The widest numeric union: anything with the basic arithmetic operators.
///
/// This kind is used for classification only; none of the algorithms in this
/// crate are generic over plain `Number`.
pub trait Number: Copy + PartialEq + Num + Debug + Display + Send + Sync + 'static {}

/// Orderable, non-complex numbers: the union of [`Integer`] and [`Float`].
///
/// Besides ordering and arithmetic, `Real` exposes the explicit lossy
/// conversions the generic kernels need. All of them follow `as`-cast
/// semantics: integer narrowing truncates, float to integer saturates and maps
/// NaN to zero. The one exception is [`Real::as_u64`] on signed integers,
/// which zero-extends instead of sign-extending.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::num::kind::Real;
/// assert_eq!(Real::as_f64(3_u8), 3.0);
/// assert_eq!(<i32 as Real>::cast_from_f64(-2.9), -2);
/// assert_eq!(Real::negate(5_i8), -5);
/// ```
pub trait Real: Number + PartialOrd + NumCast + Bounded {
    /// `true` if the type can represent negative values.
    const IS_SIGNED: bool;

    /// `true` if the type is an integer type.
    const IS_INTEGER: bool;

    /// Arithmetic negation. Wraps for integers, so `MIN.negate() == MIN` and
    /// unsigned values wrap modulo `2^BITS`.
    fn negate(self) -> Self;

    /// Converts to `f64` as if by `self as f64`.
    fn as_f64(self) -> f64;

    /// Converts from `f64` as if by `value as Self`.
    fn cast_from_f64(value: f64) -> Self;

    /// Converts to `u64` as if by `self as u64`, except that signed integers
    /// are first reinterpreted as their unsigned counterpart of the same width.
    /// This keeps `MIN.negate().as_u64()` equal to the magnitude of `MIN` for
    /// every width.
    fn as_u64(self) -> u64;

    /// Converts from `u64` as if by `value as Self`.
    fn cast_from_u64(value: u64) -> Self;
}

/// Fixed-width whole numbers, signed or unsigned.
pub trait Integer: Real + PrimInt + Ord + Hash {}

/// IEEE-754 binary floating-point numbers (`f32`, `f64`).
pub trait Float: Real + num_traits::Float {}

/// Real numbers that can be negative: the signed integers and both floats.
pub trait Signed: Real + Neg<Output = Self> {}

/// Real numbers that are never negative: the unsigned integers.
pub trait Unsigned: Real + num_traits::Unsigned {}

/// Real/imaginary pairs.
///
/// Implemented for `num_complex::Complex<f32>` and `num_complex::Complex<f64>`
/// when the `complex` feature is enabled.
pub trait Complex: Number {
    /// The type of the real and imaginary components.
    type Part: Float;

    /// The real component.
    fn re(self) -> Self::Part;

    /// The imaginary component.
    fn im(self) -> Self::Part;
}

macro_rules! impl_real_int_for {
    ($t:ty, $u:ty, $signed:expr) => {
        impl Number for $t {}

        impl Real for $t {
            const IS_SIGNED: bool = $signed;
            const IS_INTEGER: bool = true;

            #[inline(always)]
            fn negate(self) -> Self {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn cast_from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn as_u64(self) -> u64 {
                self as $u as u64
            }

            #[inline(always)]
            fn cast_from_u64(value: u64) -> Self {
                value as $t
            }
        }

        impl Integer for $t {}
    };
}

macro_rules! impl_signed_int_for {
    ($($t:ty => $u:ty),*) => {
        $(
            impl_real_int_for!($t, $u, true);
            impl Signed for $t {}
        )*
    };
}

macro_rules! impl_unsigned_int_for {
    ($($t:ty),*) => {
        $(
            impl_real_int_for!($t, $t, false);
            impl Unsigned for $t {}
        )*
    };
}

macro_rules! impl_float_for {
    ($($t:ty),*) => {
        $(
            impl Number for $t {}

            impl Real for $t {
                const IS_SIGNED: bool = true;
                const IS_INTEGER: bool = false;

                #[inline(always)]
                fn negate(self) -> Self {
                    -self
                }

                #[inline(always)]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline(always)]
                fn cast_from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn as_u64(self) -> u64 {
                    self as u64
                }

                #[inline(always)]
                fn cast_from_u64(value: u64) -> Self {
                    value as $t
                }
            }

            impl Float for $t {}
            impl Signed for $t {}
        )*
    };
}

impl_signed_int_for!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
impl_unsigned_int_for!(u8, u16, u32, u64, u128, usize);
impl_float_for!(f32, f64);

#[cfg(feature = "complex")]
macro_rules! impl_complex_for {
    ($($t:ty),*) => {
        $(
            impl Number for num_complex::Complex<$t> {}

            impl Complex for num_complex::Complex<$t> {
                type Part = $t;

                #[inline(always)]
                fn re(self) -> $t {
                    self.re
                }

                #[inline(always)]
                fn im(self) -> $t {
                    self.im
                }
            }
        )*
    };
}

#[cfg(feature = "complex")]
impl_complex_for!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn is_number<T: Number>() -> bool {
        true
    }

    fn is_signed<T: Signed>() -> bool {
        true
    }

    fn is_unsigned<T: Unsigned>() -> bool {
        true
    }

    fn is_integer<T: Integer>() -> bool {
        true
    }

    fn is_float<T: Float>() -> bool {
        true
    }

    #[test]
    fn test_kind_membership() {
        assert!(is_integer::<u8>() && is_unsigned::<u8>());
        assert!(is_integer::<i128>() && is_signed::<i128>());
        assert!(is_integer::<usize>() && is_unsigned::<usize>());
        assert!(is_float::<f32>() && is_signed::<f32>());
        assert!(is_float::<f64>() && is_signed::<f64>());
        assert!(is_number::<i16>());
    }

    #[test]
    fn test_kind_flags() {
        assert!(!<u32 as Real>::IS_SIGNED);
        assert!(<u32 as Real>::IS_INTEGER);
        assert!(<i64 as Real>::IS_SIGNED);
        assert!(<f32 as Real>::IS_SIGNED);
        assert!(!<f64 as Real>::IS_INTEGER);
    }

    #[test]
    fn test_negate_wraps_for_integers() {
        assert_eq!(Real::negate(7_i32), -7);
        assert_eq!(Real::negate(i8::MIN), i8::MIN);
        assert_eq!(Real::negate(1_u8), u8::MAX);
        assert_eq!(Real::negate(2.5_f64), -2.5);
    }

    #[test]
    fn test_casts_follow_as_semantics() {
        assert_eq!(<u8 as Real>::cast_from_f64(300.0), u8::MAX);
        assert_eq!(<i32 as Real>::cast_from_f64(f64::NAN), 0);
        assert_eq!(<u8 as Real>::cast_from_u64(258), 2);
        assert_eq!(Real::as_u64(i64::MIN.negate()), 1_u64 << 63);
        assert_eq!(Real::as_u64(i8::MIN.negate()), 128);
        assert_eq!(Real::as_u64(-1_i16), 0xFFFF);
        assert_eq!(Real::as_u64(u128::MAX), u64::MAX);
        assert_eq!(Real::as_u64(7.9_f32), 7);
    }

    #[cfg(feature = "complex")]
    #[test]
    fn test_complex_parts() {
        let z = num_complex::Complex::new(1.5_f64, -2.0);
        assert!(is_number::<num_complex::Complex<f32>>());
        assert_eq!(Complex::re(z), 1.5);
        assert_eq!(Complex::im(z), -2.0);
    }
}

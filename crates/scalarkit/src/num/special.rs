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

//! # Special Floating-Point Values
//!
//! NaN and infinity values assembled from explicit IEEE-754 bit patterns.
//! The payloads are fixed: a quiet NaN here is `0xFFC0_0001`, not whatever
//! `f32::NAN` happens to be on the host. All values are built with
//! `from_bits`, which reinterprets the bits without arithmetic.
//!
//! | Value          | 32-bit        | 64-bit                  |
//! |----------------|---------------|-------------------------|
//! | quiet NaN      | `0xFFC0_0001` | `0xFFF8_0000_0000_0001` |
//! | signalling NaN | `0xFF80_0001` | `0xFFF0_0000_0000_0001` |
//! | +infinity      | `0x7F80_0000` | `0x7FF0_0000_0000_0000` |
//! | -infinity      | `0xFF80_0000` | `0xFFF0_0000_0000_0000` |
//!
//! The NaNs carry the sign bit and a payload of one; the quiet bit (the top
//! mantissa bit) is the only difference between the two kinds.

/// Bit pattern of the single-precision quiet NaN.
pub const QNAN32_BITS: u32 = 0xFFC0_0001;
/// Bit pattern of the single-precision signalling NaN.
pub const SNAN32_BITS: u32 = 0xFF80_0001;
/// Bit pattern of single-precision positive infinity.
pub const PINF32_BITS: u32 = 0x7F80_0000;
/// Bit pattern of single-precision negative infinity.
pub const NINF32_BITS: u32 = 0xFF80_0000;

/// Bit pattern of the double-precision quiet NaN.
pub const QNAN64_BITS: u64 = 0xFFF8_0000_0000_0001;
/// Bit pattern of the double-precision signalling NaN.
pub const SNAN64_BITS: u64 = 0xFFF0_0000_0000_0001;
/// Bit pattern of double-precision positive infinity.
pub const PINF64_BITS: u64 = 0x7FF0_0000_0000_0000;
/// Bit pattern of double-precision negative infinity.
pub const NINF64_BITS: u64 = 0xFFF0_0000_0000_0000;

/// A trait for float types that have a fixed-payload quiet NaN.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::num::special::QuietNan;
/// assert_eq!(<f32 as QuietNan>::QUIET_NAN.to_bits(), 0xFFC0_0001);
/// ```
pub trait QuietNan {
    /// The quiet NaN for the implementing type.
    const QUIET_NAN: Self;
}

/// A trait for float types that have a fixed-payload signalling NaN.
pub trait SignallingNan {
    /// The signalling NaN for the implementing type.
    const SIGNALLING_NAN: Self;
}

/// A trait for float types that have a positive infinity.
pub trait PosInfinity {
    /// Positive infinity for the implementing type.
    const POS_INFINITY: Self;
}

/// A trait for float types that have a negative infinity.
pub trait NegInfinity {
    /// Negative infinity for the implementing type.
    const NEG_INFINITY: Self;
}

macro_rules! impl_bits_const_for {
    ($trait_name:ident, $const_name:ident, $t:ty, $bits:expr) => {
        impl $trait_name for $t {
            const $const_name: Self = <$t>::from_bits($bits);
        }
    };
}

impl_bits_const_for!(QuietNan, QUIET_NAN, f32, QNAN32_BITS);
impl_bits_const_for!(SignallingNan, SIGNALLING_NAN, f32, SNAN32_BITS);
impl_bits_const_for!(PosInfinity, POS_INFINITY, f32, PINF32_BITS);
impl_bits_const_for!(NegInfinity, NEG_INFINITY, f32, NINF32_BITS);

impl_bits_const_for!(QuietNan, QUIET_NAN, f64, QNAN64_BITS);
impl_bits_const_for!(SignallingNan, SIGNALLING_NAN, f64, SNAN64_BITS);
impl_bits_const_for!(PosInfinity, POS_INFINITY, f64, PINF64_BITS);
impl_bits_const_for!(NegInfinity, NEG_INFINITY, f64, NINF64_BITS);

/// Quiet NaN, single precision (`0xFFC0_0001`).
#[inline]
pub fn qnan32() -> f32 {
    f32::from_bits(QNAN32_BITS)
}

/// Signalling NaN, single precision (`0xFF80_0001`).
#[inline]
pub fn snan32() -> f32 {
    f32::from_bits(SNAN32_BITS)
}

/// Positive infinity, single precision.
#[inline]
pub fn pinf32() -> f32 {
    f32::from_bits(PINF32_BITS)
}

/// Negative infinity, single precision.
#[inline]
pub fn ninf32() -> f32 {
    f32::from_bits(NINF32_BITS)
}

/// Quiet NaN, double precision (`0xFFF8_0000_0000_0001`).
#[inline]
pub fn qnan64() -> f64 {
    f64::from_bits(QNAN64_BITS)
}

/// Signalling NaN, double precision (`0xFFF0_0000_0000_0001`).
///
/// Passing the value through arithmetic quiets it on most targets; only the
/// returned value itself is guaranteed to carry these exact bits.
#[inline]
pub fn snan64() -> f64 {
    f64::from_bits(SNAN64_BITS)
}

/// Positive infinity, double precision.
#[inline]
pub fn pinf64() -> f64 {
    f64::from_bits(PINF64_BITS)
}

/// Negative infinity, double precision.
#[inline]
pub fn ninf64() -> f64 {
    f64::from_bits(NINF64_BITS)
}

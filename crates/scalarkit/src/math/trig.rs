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

//! # Trigonometry
//!
//! Sine, cosine, tangent and their inverses for any [`Real`], evaluated in
//! `f64`. The `*_deg` variants take or return degrees.

use crate::num::constants::{DEG_TO_RAD, RAD_TO_DEG};
use crate::num::kind::Real;

/// Sine of an angle in radians.
#[inline]
pub fn sin<T: Real>(radians: T) -> T {
    T::cast_from_f64(radians.as_f64().sin())
}

/// Cosine of an angle in radians.
#[inline]
pub fn cos<T: Real>(radians: T) -> T {
    T::cast_from_f64(radians.as_f64().cos())
}

/// Tangent of an angle in radians.
#[inline]
pub fn tan<T: Real>(radians: T) -> T {
    T::cast_from_f64(radians.as_f64().tan())
}

/// Inverse sine in radians. NaN (or zero for integer `T`) outside `[-1, 1]`.
#[inline]
pub fn asin<T: Real>(sin: T) -> T {
    T::cast_from_f64(sin.as_f64().asin())
}

/// Inverse cosine in radians. NaN (or zero for integer `T`) outside `[-1, 1]`.
#[inline]
pub fn acos<T: Real>(cos: T) -> T {
    T::cast_from_f64(cos.as_f64().acos())
}

/// Inverse tangent in radians.
#[inline]
pub fn atan<T: Real>(tan: T) -> T {
    T::cast_from_f64(tan.as_f64().atan())
}

/// Sine of an angle in degrees.
#[inline]
pub fn sin_deg<T: Real>(degrees: T) -> T {
    T::cast_from_f64((degrees.as_f64() * DEG_TO_RAD).sin())
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cos_deg<T: Real>(degrees: T) -> T {
    T::cast_from_f64((degrees.as_f64() * DEG_TO_RAD).cos())
}

/// Tangent of an angle in degrees.
#[inline]
pub fn tan_deg<T: Real>(degrees: T) -> T {
    T::cast_from_f64((degrees.as_f64() * DEG_TO_RAD).tan())
}

/// Inverse sine in degrees.
#[inline]
pub fn asin_deg<T: Real>(sin: T) -> T {
    T::cast_from_f64(sin.as_f64().asin() * RAD_TO_DEG)
}

/// Inverse cosine in degrees.
#[inline]
pub fn acos_deg<T: Real>(cos: T) -> T {
    T::cast_from_f64(cos.as_f64().acos() * RAD_TO_DEG)
}

/// Inverse tangent in degrees.
#[inline]
pub fn atan_deg<T: Real>(tan: T) -> T {
    T::cast_from_f64(tan.as_f64().atan() * RAD_TO_DEG)
}

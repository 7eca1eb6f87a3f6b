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

//! # Approximation Kernels
//!
//! Quick numerical derivative and integral estimates of a caller-supplied
//! function. Both kernels favour speed and a fixed sampling pattern over
//! accuracy, and both reproduce their sampling rules exactly (see the notes
//! on each function) because downstream results depend on them.
//!
//! The supplied `formula` must be pure and defined over every sampled point;
//! neither kernel checks this.

use crate::num::kind::Real;

/// Estimates the slope of `formula` around `at` from two samples, one
/// `resolution` on either side.
///
/// The rise `f(at + resolution) - f(at - resolution)` is divided by the
/// *ratio* `(at + resolution) / (at - resolution)` of the sample positions,
/// not by their distance. Far from the origin the ratio tends to one and the
/// result to the sample rise; at `at == 0` the ratio is `-1`. For `f(x) = x`,
/// `at = 5`, `resolution = 1` this gives `2 / 1.5 ≈ 1.333`.
///
/// # Panics
///
/// For integer `T`, panics if `at - resolution` is zero (the ratio divides by
/// it) or underflows an unsigned type in debug builds.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::approx::quick_derivative;
/// let slope = quick_derivative(5.0_f64, 1.0, |x| x);
/// assert!((slope - 4.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn quick_derivative<T, F>(at: T, resolution: T, formula: F) -> T
where
    T: Real,
    F: Fn(T) -> T,
{
    let x_hi = at + resolution;
    let x_lo = at - resolution;
    let y_hi = formula(x_hi);
    let y_lo = formula(x_lo);
    (y_hi - y_lo) / (x_hi / x_lo)
}

/// Integrates `formula` over `[from, to]` with the composite trapezoidal rule
/// and step `resolution`.
///
/// - The bounds are swapped if `from > to`, so reversing them does not flip
///   the sign of the result.
/// - Every trapezoid uses the full `resolution` as its width, including the
///   last one whose right edge is clamped to `to`. When `resolution` does not
///   divide the interval the tail is over-counted.
/// - An empty interval (`from == to`) integrates to zero without sampling.
///
/// # Non-termination
///
/// `resolution` is not validated. A zero or negative resolution never reaches
/// `to` and the loop does not terminate. A NaN resolution ends the loop after
/// the first step and yields a NaN area.
///
/// # Examples
///
/// ```rust
/// # use scalarkit::math::approx::quick_integral;
/// assert_eq!(quick_integral(0.0, 10.0, 1.0, |_| 1.0), 10.0);
/// assert_eq!(quick_integral(10.0, 0.0, 1.0, |_| 1.0), 10.0);
/// // The last step covers [2.0, 2.5] but is weighted as a full step
/// assert_eq!(quick_integral(0.0, 2.5, 1.0, |_| 1.0), 3.0);
/// ```
pub fn quick_integral<T, F>(from: T, to: T, resolution: T, formula: F) -> T
where
    T: Real,
    F: Fn(T) -> T,
{
    let (from, to) = if from > to { (to, from) } else { (from, to) };
    let two = T::one() + T::one();

    let mut area = T::zero();
    let mut x_lo = from;
    let mut y_lo = formula(x_lo);
    while x_lo < to {
        let mut x_hi = x_lo + resolution;
        if x_hi > to {
            x_hi = to;
        }
        let y_hi = formula(x_hi);
        area = area + resolution * (y_lo + y_hi) / two;
        x_lo = x_hi;
        y_lo = y_hi;
    }
    area
}

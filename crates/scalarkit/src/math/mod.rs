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

//! # Math Primitives
//!
//! Generic scalar math over the numeric kinds in `crate::num::kind`.
//!
//! ## Submodules
//!
//! - `scalar`: `abs`, `min`, `max`, `clamp`, `sign`, rounding, `pow`, `root`,
//!   `log`, `lerp`/`inverse_lerp`, and the float `int_frac` split.
//! - `trig`: Sine, cosine, tangent and their inverses in radians and degrees.
//! - `modulo`: Truncating remainders (`imod`, `fmod`) that keep the sign of
//!   the dividend for every numeric type, and whole/remainder splits
//!   (`iwhole_rem`, `fwhole_rem`).
//! - `approx`: Quick derivative and trapezoidal integral estimates of a
//!   caller-supplied function.
//! - `range`: Overlap tests and envelope merging of closed ranges, plus the
//!   `ClosedInterval<T>` value type.
//!
//! Everything here is a pure function of its arguments. Division by zero and
//! out-of-range conversions are never intercepted: integers panic, floats
//! produce NaN or infinity, exactly as the primitive operations do.

pub mod approx;
pub mod modulo;
pub mod range;
pub mod scalar;
pub mod trig;

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

//! # Scalarkit
//!
//! Generic numeric kinds and precision-aware scalar math. A foundation layer
//! for simulation, graphics, and physics code that wants one consistent set
//! of numeric semantics across `i8`..`i128`, `u8`..`u128`, `f32`, and `f64`
//! without per-type implementations.
//!
//! ## Modules
//!
//! - `num`: The numeric-kind trait hierarchy (`Number`, `Real`, `Integer`,
//!   `Float`, `Signed`, `Unsigned`, `Complex`), named mathematical constants
//!   and numeric limits, and bit-exact NaN/infinity values.
//! - `math`: Elementary scalar operations, trigonometry, sign-aware modulo and
//!   whole/remainder decomposition, derivative/integral approximation, and
//!   closed-range algebra.
//!
//! ## Semantics
//!
//! The library holds no state, allocates nothing, and performs no I/O. Edge
//! cases follow the primitive operations instead of being validated: integer
//! division by zero panics, float division by zero yields NaN or infinity.
//!
//! ## Features
//!
//! - `complex` (default): implements the `Complex` kind for
//!   `num_complex::Complex<f32>` and `num_complex::Complex<f64>`.
//!
//! ```rust
//! use scalarkit::math::{modulo::imod, range::combine_ranges_if_overlap};
//! use scalarkit::num::special::qnan32;
//!
//! assert_eq!(imod(-7, 3), -1);
//! assert_eq!(combine_ranges_if_overlap(0, 5, 3, 10), Some((0, 10)));
//! assert_eq!(qnan32().to_bits(), 0xFFC0_0001);
//! ```

pub mod math;
pub mod num;

/// Items intended for glob-import: `use scalarkit::prelude::*;`
pub mod prelude {
    pub use crate::math::approx::{quick_derivative, quick_integral};
    pub use crate::math::modulo::{fmod, fwhole_rem, imod, iwhole_rem};
    pub use crate::math::range::{combine_ranges_if_overlap, ranges_overlap, ClosedInterval};
    pub use crate::num::kind::{Complex, Float, Integer, Number, Real, Signed, Unsigned};
}

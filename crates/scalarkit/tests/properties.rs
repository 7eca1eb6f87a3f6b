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

//! Property-based tests for the generic scalar kernels.
//!
//! Uses proptest to check the algebraic contracts over arbitrary inputs.

use proptest::prelude::*;
use scalarkit::math::approx::quick_integral;
use scalarkit::math::modulo::{fmod, fwhole_rem, imod, iwhole_rem};
use scalarkit::math::range::{combine_ranges_if_overlap, ranges_overlap, ClosedInterval};
use scalarkit::math::scalar::{clamp, int_frac};

// =============================================================================
// Clamp
// =============================================================================

proptest! {
    /// clamp(a, x, b) always lands in [a, b]
    #[test]
    fn prop_clamp_in_bounds(a in -1000_i64..1000, span in 0_i64..1000, x: i64) {
        let b = a + span;
        let c = clamp(a, x, b);
        prop_assert!(a <= c && c <= b);
    }

    /// clamp is the identity inside [a, b]
    #[test]
    fn prop_clamp_identity_inside(
        a in -1.0e6_f64..1.0e6,
        span in 0.0_f64..1.0e6,
        t in 0.0_f64..=1.0,
    ) {
        let b = a + span;
        let x = a + span * t;
        prop_assume!(x <= b);
        prop_assert_eq!(clamp(a, x, b), x);
    }
}

// =============================================================================
// Modulo
// =============================================================================

proptest! {
    /// imod agrees with the native truncating remainder
    #[test]
    fn prop_imod_matches_native(
        val: i64,
        div in any::<i64>().prop_filter("non-zero", |d| *d != 0),
    ) {
        prop_assume!(!(val == i64::MIN && div == -1));
        prop_assert_eq!(imod(val, div), val % div);
    }

    /// imod keeps the sign of the dividend and stays below the divisor
    #[test]
    fn prop_imod_sign_and_magnitude(val: i32, div in 1_i32..10_000, flip: bool) {
        let div = if flip { -div } else { div };
        let m = imod(val, div);
        prop_assert!(m == 0 || (m < 0) == (val < 0));
        prop_assert!(m.unsigned_abs() < div.unsigned_abs());
    }

    /// fmod on integral floats matches imod
    #[test]
    fn prop_fmod_matches_imod_on_integral_floats(
        val in -100_000_i32..100_000,
        div in 1_i32..1000,
        flip: bool,
    ) {
        let div = if flip { -div } else { div };
        prop_assert_eq!(fmod(val as f64, div as f64), imod(val, div) as f64);
    }

    /// iwhole_rem reconstructs the value from quotient and remainder
    #[test]
    fn prop_iwhole_rem_sums_to_value(val in -1_000_000_i64..1_000_000, modulus in 1_i64..1000) {
        let (whole, rem) = iwhole_rem(val, modulus);
        prop_assert_eq!(whole, val / modulus);
        prop_assert_eq!(whole + rem, val);
    }

    /// fwhole_rem reconstructs the value up to rounding
    #[test]
    fn prop_fwhole_rem_sums_to_value(val in -1.0e6_f64..1.0e6, modulus in 0.01_f64..100.0) {
        let (whole, rem) = fwhole_rem(val, modulus);
        prop_assert!((whole + rem - val).abs() <= 1e-9 * val.abs().max(1.0));
        prop_assert!(rem.abs() <= modulus * (1.0 + 1e-12));
    }

    /// int_frac splits exactly
    #[test]
    fn prop_int_frac_exact(val in -1.0e9_f64..1.0e9) {
        let (whole, frac) = int_frac(val);
        prop_assert_eq!(whole.fract(), 0.0);
        prop_assert!(frac.abs() < 1.0);
        prop_assert_eq!(whole + frac, val);
    }
}

// =============================================================================
// Ranges
// =============================================================================

proptest! {
    /// overlap is symmetric
    #[test]
    fn prop_overlap_symmetric(a: (i16, i16), b: (i16, i16)) {
        prop_assert_eq!(
            ranges_overlap(a.0, a.1, b.0, b.1),
            ranges_overlap(b.0, b.1, a.0, a.1)
        );
    }

    /// the merged envelope covers both inputs
    #[test]
    fn prop_envelope_covers_both(
        s1 in -500_i32..500,
        l1 in 0_i32..500,
        s2 in -500_i32..500,
        l2 in 0_i32..500,
    ) {
        let a = ClosedInterval::new(s1, s1 + l1);
        let b = ClosedInterval::new(s2, s2 + l2);
        match a.envelope(b) {
            Some(env) => {
                prop_assert!(a.overlaps(b));
                prop_assert!(env.contains_interval(a));
                prop_assert!(env.contains_interval(b));
                prop_assert_eq!(
                    combine_ranges_if_overlap(a.start(), a.end(), b.start(), b.end()),
                    Some((env.start(), env.end()))
                );
            }
            None => prop_assert!(a.gap(b).is_some()),
        }
    }
}

// =============================================================================
// Approximation
// =============================================================================

proptest! {
    /// integrating a constant over a whole number of steps is exact
    #[test]
    fn prop_integral_constant(from in -100_i64..100, steps in 0_i64..200, c in -50_i64..50) {
        let to = from + steps;
        prop_assert_eq!(quick_integral(from, to, 1, |_| c), c * steps);
        prop_assert_eq!(quick_integral(to, from, 1, |_| c), c * steps);
    }
}

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

//! # Numeric Foundations
//!
//! The type-level vocabulary the rest of the crate is written against.
//!
//! ## Submodules
//!
//! - `kind`: Capability traits (`Number`, `Real`, `Integer`, `Float`,
//!   `Signed`, `Unsigned`, `Complex`) implemented for the primitive numeric
//!   types, with explicit `as`-style conversions for generic kernels.
//! - `constants`: Mathematical constants (`PI`, `TAU`, `PHI`, logarithms,
//!   square roots) and per-width numeric limits as typed literals.
//! - `special`: Quiet/signalling NaN and signed infinities assembled from
//!   exact IEEE-754 bit patterns, both as functions and as associated
//!   constants.

pub mod constants;
pub mod kind;
pub mod special;

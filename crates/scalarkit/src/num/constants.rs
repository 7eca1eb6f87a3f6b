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

//! # Named Constants
//!
//! Mathematical constants as `f64` literals and the representable range of
//! every primitive numeric width. The mathematical constants are written out
//! with more digits than `f64` can hold; the compiler rounds them to the
//! nearest representable value.

#![allow(clippy::excessive_precision)]

/// Degrees to radians (`TAU / 360`).
pub const DEG_TO_RAD: f64 = 0.01745329251994329576923690768488612713442871888541725456097191;
/// Radians to degrees (`360 / TAU`).
pub const RAD_TO_DEG: f64 = 57.2957795130823208767981548141051703324054724665643215491602439;
/// Circumference over diameter.
pub const PI: f64 = 3.14159265358979323846264338327950288419716939937510582097494459;
/// `2 * PI`.
pub const TAU: f64 = 6.28318530717958647692528676655900576839433879875021164194988918;
/// Euler's number.
pub const E: f64 = 2.71828182845904523536028747135266249775724709369995957496696763;
/// The golden ratio.
pub const PHI: f64 = 1.61803398874989484820458683436563811772030917980576286213544862;
/// `ln(2)`.
pub const LN_2: f64 = 0.69314718055994530941723212145817656807550013436025525412068001;
/// `log2(e)`.
pub const LOG2_E: f64 = 1.44269504088896340735992468100189213742664595415298593413544941;
/// `log2(10)`.
pub const LOG2_10: f64 = 3.32192809488736234787031942948939017586483139302458061205475640;
/// `log10(2)`.
pub const LOG10_2: f64 = 0.30102999566398119521373889472449302676818988146210854131042746;
/// `ln(10)`.
pub const LN_10: f64 = 2.30258509299404568401799145468436420760110148862877297603332790;
/// `log10(e)`.
pub const LOG10_E: f64 = 0.43429448190325182765112891891660508229439700580366656611445378;
/// `sqrt(2)`.
pub const SQRT_2: f64 = 1.41421356237309504880168872420969807856967187537694807317667974;
/// `sqrt(e)`.
pub const SQRT_E: f64 = 1.64872127070012814684865078781416357165377610071014801157507931;
/// `sqrt(PHI)`.
pub const SQRT_PHI: f64 = 1.27201964951406896425242246173749149171560804184009624861664038;
/// `sqrt(PI)`.
pub const SQRT_PI: f64 = 1.77245385090551602729816748334114518279754945612238712821380779;
/// `sqrt(TAU)`.
pub const SQRT_TAU: f64 = 2.50662827463100050241576528481104525300698674060993831662992358;

/// Largest `u8`.
pub const MAX_U8: u8 = u8::MAX;
/// Largest `i8`.
pub const MAX_I8: i8 = i8::MAX;
/// Smallest `i8`.
pub const MIN_I8: i8 = i8::MIN;
/// Largest `u16`.
pub const MAX_U16: u16 = u16::MAX;
/// Largest `i16`.
pub const MAX_I16: i16 = i16::MAX;
/// Smallest `i16`.
pub const MIN_I16: i16 = i16::MIN;
/// Largest `u32`.
pub const MAX_U32: u32 = u32::MAX;
/// Largest `i32`.
pub const MAX_I32: i32 = i32::MAX;
/// Smallest `i32`.
pub const MIN_I32: i32 = i32::MIN;
/// Largest `u64`.
pub const MAX_U64: u64 = u64::MAX;
/// Largest `i64`.
pub const MAX_I64: i64 = i64::MAX;
/// Smallest `i64`.
pub const MIN_I64: i64 = i64::MIN;

/// Largest finite `f32`.
pub const MAX_F32: f32 = f32::MAX;
/// Smallest positive `f32`, a subnormal (`2^-149`).
pub const SMALL_F32: f32 = f32::from_bits(0x0000_0001);
/// Largest finite `f64`.
pub const MAX_F64: f64 = f64::MAX;
/// Smallest positive `f64`, a subnormal (`2^-1074`).
pub const SMALL_F64: f64 = f64::from_bits(0x0000_0000_0000_0001);

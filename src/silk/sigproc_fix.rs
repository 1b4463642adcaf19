//! Fixed-point multiply/accumulate and saturation primitives from `SigProc_FIX.h`.
//!
//! Only the handful of macros the ARMA4 stage relies on are exposed here. They use
//! wrapping 32-bit arithmetic so that intermediate overflow behaves exactly like the
//! reference codec's `int` math instead of panicking in debug builds.

/// `(a * (i16)b) >> 16`, computed at full 48-bit precision before the arithmetic shift.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn smulwb(a: i32, b: i32) -> i32 {
    let product = i64::from(a) * i64::from(b as i16);
    (product >> 16) as i32
}

/// `a + ((b * (i16)c) >> 16)`.
///
/// Only the low 16 bits of `c` take part in the product, sign-extended, so a Q16 value
/// above `i16::MAX` aliases to its 16-bit truncation.
#[inline]
pub fn smlawb(a: i32, b: i32, c: i32) -> i32 {
    a.wrapping_add(smulwb(b, c))
}

/// Clamps `value` into the signed 16-bit range.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn sat16(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

#[inline]
pub fn lshift(value: i32, shift: u32) -> i32 {
    value.wrapping_shl(shift)
}

/// `a + (b << shift)`.
#[inline]
pub fn add_lshift32(a: i32, b: i32, shift: u32) -> i32 {
    a.wrapping_add(lshift(b, shift))
}

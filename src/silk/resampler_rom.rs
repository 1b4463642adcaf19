//! Layout constants for the packed ARMA4 coefficient and state vectors.
//!
//! The SILK resampler stores each fourth-order ARMA filter as seven 16-bit values:
//!
//! ```text
//! { B1_Q14[1], B2_Q14[1], -A1_Q14[1], -A1_Q14[2], -A2_Q14[1], -A2_Q14[2], gain_Q16 }
//! ```
//!
//! where `B*_Q14[0]`, `B*_Q14[2]` and `A*_Q14[0]` are all 16384 and therefore omitted.

/// Number of Q6 delay elements carried between calls (two per biquad section).
pub const ARMA4_STATE_LEN: usize = 4;

/// Number of packed 16-bit coefficients.
pub const ARMA4_COEFS_LEN: usize = 7;

/// Value of the taps that are implied by the packed layout (1.0 in Q14).
pub const ARMA4_UNITY_Q14: i16 = 16_384;

/// Middle numerator tap of the first section.
pub const ARMA4_B1_Q14: usize = 0;
/// Middle numerator tap of the second section.
pub const ARMA4_B2_Q14: usize = 1;
/// Negated first denominator tap of the first section.
pub const ARMA4_A1_1_Q14: usize = 2;
/// Negated second denominator tap of the first section.
pub const ARMA4_A1_2_Q14: usize = 3;
/// Negated first denominator tap of the second section.
pub const ARMA4_A2_1_Q14: usize = 4;
/// Negated second denominator tap of the second section.
pub const ARMA4_A2_2_Q14: usize = 5;
/// Overall output gain.
pub const ARMA4_GAIN_Q16: usize = 6;

//! Packed coefficient vector for the SILK fourth-order ARMA filter.
//!
//! The filter is two biquad sections in cascade. Each section is
//!
//! ```text
//!          1 + b z^-1 + z^-2
//! H(z) = ---------------------
//!         1 - a0 z^-1 - a1 z^-2
//! ```
//!
//! with `b`, `a0` and `a1` in Q14. Only those three taps per section are stored, the
//! unit taps being implied, and the denominator taps are kept with their sign flipped so
//! that the recurrence adds them. A Q16 gain scales the cascade output.

use libm::{cos, fabs, hypot, sin};

use super::errors::Arma4Error;
use super::resampler_rom::{
    ARMA4_A1_1_Q14, ARMA4_A1_2_Q14, ARMA4_A2_1_Q14, ARMA4_A2_2_Q14, ARMA4_B1_Q14,
    ARMA4_B2_Q14, ARMA4_COEFS_LEN, ARMA4_GAIN_Q16, ARMA4_UNITY_Q14,
};

const Q14_SCALE: f64 = ARMA4_UNITY_Q14 as f64;
const Q16_SCALE: f64 = 65_536.0;

/// Seven packed coefficients `[b1, b2, a1[0], a1[1], a2[0], a2[1], gain]`.
///
/// Indices 0-5 are Q14, index 6 is Q16. The section-1 taps sit at 0, 2 and 3, the
/// section-2 taps at 1, 4 and 5; see [`resampler_rom`](super::resampler_rom) for the
/// named slot constants. Coefficients may be swapped between blocks without resetting
/// the filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Arma4Coefs([i16; ARMA4_COEFS_LEN]);

impl Arma4Coefs {
    /// Wraps an already packed coefficient array.
    pub const fn new(packed: [i16; ARMA4_COEFS_LEN]) -> Self {
        Self(packed)
    }

    /// Packs the per-section taps. `a1` and `a2` are given in stored (negated) form.
    pub const fn from_sections(
        b1: i16,
        a1: [i16; 2],
        b2: i16,
        a2: [i16; 2],
        gain_q16: i16,
    ) -> Self {
        Self([b1, b2, a1[0], a1[1], a2[0], a2[1], gain_q16])
    }

    /// Reads seven packed values from a caller buffer, e.g. `&table[offset..offset + 7]`.
    pub fn from_slice(packed: &[i16]) -> Result<Self, Arma4Error> {
        let packed: [i16; ARMA4_COEFS_LEN] = packed
            .try_into()
            .map_err(|_| Arma4Error::CoefficientCount(packed.len()))?;
        Ok(Self(packed))
    }

    pub const fn packed(&self) -> &[i16; ARMA4_COEFS_LEN] {
        &self.0
    }

    pub const fn b1_q14(&self) -> i16 {
        self.0[ARMA4_B1_Q14]
    }

    pub const fn b2_q14(&self) -> i16 {
        self.0[ARMA4_B2_Q14]
    }

    /// Stored (negated) denominator taps of the first section.
    pub const fn a1_q14(&self) -> [i16; 2] {
        [self.0[ARMA4_A1_1_Q14], self.0[ARMA4_A1_2_Q14]]
    }

    /// Stored (negated) denominator taps of the second section.
    pub const fn a2_q14(&self) -> [i16; 2] {
        [self.0[ARMA4_A2_1_Q14], self.0[ARMA4_A2_2_Q14]]
    }

    pub const fn gain_q16(&self) -> i16 {
        self.0[ARMA4_GAIN_Q16]
    }

    /// Magnitude of the cascade's frequency response at `omega` radians per sample.
    ///
    /// This is an analysis helper evaluated in floating point; it ignores the fixed-point
    /// truncation of the real filter and the half-LSB rounding offset on the output.
    pub fn magnitude_response(&self, omega: f64) -> f64 {
        let gain = f64::from(self.gain_q16()) / Q16_SCALE;
        let first = section_magnitude(self.b1_q14(), self.a1_q14(), omega);
        let second = section_magnitude(self.b2_q14(), self.a2_q14(), omega);
        fabs(gain * first * second)
    }

    pub fn dc_gain(&self) -> f64 {
        self.magnitude_response(0.0)
    }

    /// Returns `true` when both sections have their poles strictly inside the unit circle.
    pub fn is_stable(&self) -> bool {
        section_is_stable(self.a1_q14()) && section_is_stable(self.a2_q14())
    }
}

impl From<[i16; ARMA4_COEFS_LEN]> for Arma4Coefs {
    fn from(packed: [i16; ARMA4_COEFS_LEN]) -> Self {
        Self(packed)
    }
}

impl TryFrom<&[i16]> for Arma4Coefs {
    type Error = Arma4Error;

    fn try_from(packed: &[i16]) -> Result<Self, Self::Error> {
        Self::from_slice(packed)
    }
}

fn section_magnitude(b_q14: i16, a_q14: [i16; 2], omega: f64) -> f64 {
    let b = f64::from(b_q14) / Q14_SCALE;
    let a0 = f64::from(a_q14[0]) / Q14_SCALE;
    let a1 = f64::from(a_q14[1]) / Q14_SCALE;
    let (c1, s1) = (cos(omega), sin(omega));
    let (c2, s2) = (cos(2.0 * omega), sin(2.0 * omega));

    let num = hypot(1.0 + b * c1 + c2, b * s1 + s2);
    let den = hypot(1.0 - a0 * c1 - a1 * c2, a0 * s1 + a1 * s2);
    num / den
}

// Stability triangle for z^2 - a0 z - a1.
fn section_is_stable(a_q14: [i16; 2]) -> bool {
    let a0 = f64::from(a_q14[0]) / Q14_SCALE;
    let a1 = f64::from(a_q14[1]) / Q14_SCALE;
    fabs(a1) < 1.0 && fabs(a0) < 1.0 - a1
}

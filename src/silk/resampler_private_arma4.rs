//! Port of the fourth-order ARMA filter helper from the SILK resampler.
//!
//! This mirrors `SKP_Silk_resampler_private_ARMA4`, which runs 16-bit samples through two
//! cascaded biquad sections sharing a single four-element Q6 state vector. State slots 0
//! and 1 belong to the first section, 2 and 3 to the second. Coefficients use the packed
//! layout documented on [`Arma4Coefs`]. The recurrence is bit-exact with the reference
//! fixed-point code, including its wrapping 32-bit intermediate arithmetic.

use log::{debug, trace};

use super::arma4_coefs::Arma4Coefs;
use super::errors::Arma4Error;
use super::resampler_rom::{
    ARMA4_A1_1_Q14, ARMA4_A1_2_Q14, ARMA4_A2_1_Q14, ARMA4_A2_2_Q14, ARMA4_B1_Q14,
    ARMA4_B2_Q14, ARMA4_COEFS_LEN, ARMA4_GAIN_Q16, ARMA4_STATE_LEN,
};
use super::sigproc_fix::{add_lshift32, sat16, smlawb};

/// Runs the SILK fourth-order ARMA filter on `input`, writing one output sample per input
/// sample and updating `state` in-place.
///
/// A block at an offset inside a larger buffer is passed as a sub-slice. Output entries past
/// `input.len()` are left untouched.
///
/// # Panics
///
/// * If `output.len()` is smaller than `input.len()`.
pub fn resampler_private_arma4(
    state: &mut [i32; ARMA4_STATE_LEN],
    output: &mut [i16],
    input: &[i16],
    coefs: &[i16; ARMA4_COEFS_LEN],
) {
    assert!(
        output.len() >= input.len(),
        "output buffer too small: need {} samples",
        input.len()
    );

    for (&sample, out) in input.iter().zip(output.iter_mut()) {
        *out = arma4_step(state, sample, coefs);
    }
}

/// Same filter as [`resampler_private_arma4`] with input and output sharing `buf`.
///
/// Each input sample is consumed before its output slot is written, so the result is
/// identical to filtering into a separate buffer.
pub fn resampler_private_arma4_in_place(
    state: &mut [i32; ARMA4_STATE_LEN],
    buf: &mut [i16],
    coefs: &[i16; ARMA4_COEFS_LEN],
) {
    for sample in buf.iter_mut() {
        *sample = arma4_step(state, *sample, coefs);
    }
}

#[inline(always)]
fn arma4_step(
    state: &mut [i32; ARMA4_STATE_LEN],
    sample: i16,
    coefs: &[i16; ARMA4_COEFS_LEN],
) -> i16 {
    let coef = |slot: usize| i32::from(coefs[slot]);
    let in_q8 = i32::from(sample) << 8;

    // Outputs of the first and second biquad.
    let out1_q8 = add_lshift32(in_q8, state[0], 2);
    let out2_q8 = add_lshift32(out1_q8, state[2], 2);

    // States are Q6, coefficients Q14.
    let x = smlawb(state[1], in_q8, coef(ARMA4_B1_Q14));
    state[0] = smlawb(x, out1_q8, coef(ARMA4_A1_1_Q14));

    let x = smlawb(state[3], out1_q8, coef(ARMA4_B2_Q14));
    state[2] = smlawb(x, out2_q8, coef(ARMA4_A2_1_Q14));

    state[1] = smlawb(in_q8 >> 2, out1_q8, coef(ARMA4_A1_2_Q14));
    state[3] = smlawb(out1_q8 >> 2, out2_q8, coef(ARMA4_A2_2_Q14));

    // Q16 gain; the 128 offset rounds the Q8 result to the nearest integer.
    sat16(smlawb(128, out2_q8, coef(ARMA4_GAIN_Q16)) >> 8)
}

/// Per-channel ARMA4 filter state carried across blocks of a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResamplerStateArma4 {
    /// Q6 delay elements, interleaved as `[s1_0, s1_1, s2_0, s2_1]`.
    s: [i32; ARMA4_STATE_LEN],
    coefs: Arma4Coefs,
}

impl ResamplerStateArma4 {
    /// Creates a filter at stream start, with zeroed delay elements.
    pub fn new(coefs: Arma4Coefs) -> Self {
        Self::with_state([0; ARMA4_STATE_LEN], coefs)
    }

    /// Resumes a stream from previously saved delay elements.
    pub fn with_state(state: [i32; ARMA4_STATE_LEN], coefs: Arma4Coefs) -> Self {
        Self { s: state, coefs }
    }

    /// Checked variant of [`with_state`](Self::with_state) for state kept in a caller buffer.
    pub fn try_from_slice(state: &[i32], coefs: Arma4Coefs) -> Result<Self, Arma4Error> {
        let state: [i32; ARMA4_STATE_LEN] = state
            .try_into()
            .map_err(|_| Arma4Error::StateLength(state.len()))?;
        Ok(Self::with_state(state, coefs))
    }

    pub fn state(&self) -> &[i32; ARMA4_STATE_LEN] {
        &self.s
    }

    pub fn coefs(&self) -> &Arma4Coefs {
        &self.coefs
    }

    /// Replaces the coefficients without touching the delay elements.
    pub fn set_coefs(&mut self, coefs: Arma4Coefs) {
        if coefs != self.coefs {
            trace!(
                "arma4: coefficients {:?} -> {:?}, keeping state {:?}",
                self.coefs.packed(),
                coefs.packed(),
                self.s
            );
        }
        self.coefs = coefs;
    }

    /// Clears the delay elements, e.g. when the channel restarts.
    pub fn reset(&mut self) {
        trace!("arma4: reset state {:?}", self.s);
        self.s = [0; ARMA4_STATE_LEN];
    }

    /// Filters `input` into `output` and returns the number of samples written.
    ///
    /// # Panics
    ///
    /// * If `output.len()` is smaller than `input.len()`.
    pub fn process(&mut self, output: &mut [i16], input: &[i16]) -> usize {
        resampler_private_arma4(&mut self.s, output, input, self.coefs.packed());
        input.len()
    }

    /// Like [`process`](Self::process) but reports a short output buffer instead of
    /// panicking. The state is left unchanged on error.
    pub fn try_process(
        &mut self,
        output: &mut [i16],
        input: &[i16],
    ) -> Result<usize, Arma4Error> {
        if output.len() < input.len() {
            debug!(
                "arma4: rejecting block of {} samples, output holds {}",
                input.len(),
                output.len()
            );
            return Err(Arma4Error::OutputTooSmall {
                needed: input.len(),
                available: output.len(),
            });
        }
        Ok(self.process(output, input))
    }

    /// Filters `buf` in place.
    pub fn process_in_place(&mut self, buf: &mut [i16]) {
        resampler_private_arma4_in_place(&mut self.s, buf, self.coefs.packed());
    }
}

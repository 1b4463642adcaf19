//! Errors reported by the checked ARMA4 entry points.
//!
//! The fixed-point kernel itself cannot fail. These variants only describe caller
//! buffers that do not fit the packed layouts, so the checked constructors and
//! [`ResamplerStateArma4::try_process`](super::resampler_private_arma4::ResamplerStateArma4::try_process)
//! can reject them without panicking.

use core::fmt;

use super::resampler_rom::{ARMA4_COEFS_LEN, ARMA4_STATE_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arma4Error {
    /// The output buffer holds fewer samples than the input block.
    OutputTooSmall { needed: usize, available: usize },

    /// A packed coefficient slice did not contain exactly seven values.
    CoefficientCount(usize),

    /// A persisted state slice did not contain exactly four values.
    StateLength(usize),
}

impl fmt::Display for Arma4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputTooSmall { needed, available } => write!(
                f,
                "output buffer too small: need {needed} samples, have {available}"
            ),
            Self::CoefficientCount(len) => write!(
                f,
                "expected {ARMA4_COEFS_LEN} packed coefficients, got {len}"
            ),
            Self::StateLength(len) => {
                write!(f, "expected {ARMA4_STATE_LEN} state values, got {len}")
            }
        }
    }
}

impl core::error::Error for Arma4Error {}

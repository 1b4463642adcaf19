//! Fixed-point SILK resampler building blocks.

pub mod arma4_coefs;
pub mod errors;
pub mod resampler_private_arma4;
pub mod resampler_rom;
pub mod sigproc_fix;

pub use arma4_coefs::Arma4Coefs;
pub use errors::Arma4Error;
pub use resampler_private_arma4::ResamplerStateArma4;

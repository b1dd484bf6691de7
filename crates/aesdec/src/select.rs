//! Build-time binding of the public decrypt entry points.
//!
//! | features                     | backend                      |
//! |------------------------------|------------------------------|
//! | none                         | [`SoftwareBackend`]          |
//! | `decrypt-alt`                | [`UnsupportedBackend`]       |
//! | `decrypt-alt` + `alt-arith`  | [`ArithBackend`]             |
//!
//! [`SoftwareBackend`]: crate::SoftwareBackend
//! [`UnsupportedBackend`]: crate::alt::UnsupportedBackend
//! [`ArithBackend`]: crate::alt::ArithBackend

use aesdec_core::{Block, CipherContext, Result};

use crate::backend::DecryptBackend;

cfg_if::cfg_if! {
    if #[cfg(feature = "alt-arith")] {
        /// Backend bound by this build.
        pub type ActiveBackend = crate::alt::ArithBackend;
    } else if #[cfg(feature = "decrypt-alt")] {
        /// Backend bound by this build.
        pub type ActiveBackend = crate::alt::UnsupportedBackend;
    } else {
        /// Backend bound by this build.
        pub type ActiveBackend = crate::backend::SoftwareBackend;
    }
}

/// Name of the backend this build bound.
pub const fn active_backend() -> &'static str {
    <ActiveBackend as DecryptBackend>::NAME
}

/// Decrypts one block with the bound backend.
#[inline]
pub fn decrypt_block(ctx: &CipherContext, input: &Block) -> Result<Block> {
    ActiveBackend::decrypt(ctx, input)
}

/// Decrypts `input` into `output`. On failure `output` is left exactly as the
/// caller passed it.
#[inline]
pub fn decrypt_block_into(ctx: &CipherContext, input: &Block, output: &mut Block) -> Result<()> {
    *output = ActiveBackend::decrypt(ctx, input)?;
    Ok(())
}

/// Decrypts `block` in place. Input and output may be the same buffer; on
/// failure the ciphertext is left in place.
#[inline]
pub fn decrypt_block_in_place(ctx: &CipherContext, block: &mut Block) -> Result<()> {
    ActiveBackend::decrypt_in_place(ctx, block)
}

/// Decrypts one block with an explicitly chosen backend, bypassing the
/// build-time binding.
#[inline]
pub fn decrypt_block_with<B: DecryptBackend>(ctx: &CipherContext, input: &Block) -> Result<Block> {
    B::decrypt(ctx, input)
}

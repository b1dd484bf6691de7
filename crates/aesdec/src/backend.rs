//! The decrypt backend contract and the software backend.

use aesdec_core::{Block, CipherContext, Result, BLOCK_SIZE};

/// A single-block AES decrypt implementation.
///
/// Backends are zero-sized marker types with associated functions only, so a
/// call through a backend is a direct static call. Whichever backend the build
/// binds is reached through [`crate::ActiveBackend`]; there is no runtime
/// switching between implementations.
///
/// Contract for [`DecryptBackend::decrypt_block`]: given a well-formed context,
/// either write all 16 plaintext bytes to `output` and return `Ok(())`, or
/// leave `output` untouched and return
/// [`CryptoError::FeatureUnsupported`](aesdec_core::CryptoError::FeatureUnsupported).
///
/// Platforms with their own engine implement this trait on a local type and
/// call it with [`crate::decrypt_block_with`].
pub trait DecryptBackend {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Decrypts `input` into `output`.
    fn decrypt_block(ctx: &CipherContext, input: &Block, output: &mut Block) -> Result<()>;

    /// Decrypts `input` and returns the plaintext.
    ///
    /// The backend writes into a scratch block, so nothing escapes on failure
    /// even from a backend that scribbles before failing.
    #[inline]
    fn decrypt(ctx: &CipherContext, input: &Block) -> Result<Block> {
        let mut scratch = [0u8; BLOCK_SIZE];
        Self::decrypt_block(ctx, input, &mut scratch)?;
        Ok(scratch)
    }

    /// Decrypts `block` in place; on failure `block` keeps its ciphertext.
    #[inline]
    fn decrypt_in_place(ctx: &CipherContext, block: &mut Block) -> Result<()> {
        *block = Self::decrypt(ctx, block)?;
        Ok(())
    }
}

/// Reference backend: the constant-time table-driven inverse cipher from
/// `aesdec-core`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SoftwareBackend;

impl DecryptBackend for SoftwareBackend {
    const NAME: &'static str = "software";

    #[inline]
    fn decrypt_block(ctx: &CipherContext, input: &Block, output: &mut Block) -> Result<()> {
        aesdec_core::decrypt_block_into(ctx, input, output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aesdec_core::CryptoError;

    const KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    /// Breaks the contract on purpose: writes junk, then fails.
    struct Scribbler;

    impl DecryptBackend for Scribbler {
        const NAME: &'static str = "scribbler";

        fn decrypt_block(_: &CipherContext, _: &Block, output: &mut Block) -> Result<()> {
            output[..8].fill(0xaa);
            Err(CryptoError::FeatureUnsupported)
        }
    }

    #[test]
    fn software_backend_decrypts_fips197_vector() {
        let ctx = CipherContext::new(&KEY).unwrap();
        let mut out = [0u8; 16];
        SoftwareBackend::decrypt_block(&ctx, &CIPHER, &mut out).unwrap();
        assert_eq!(out, PLAIN);
        assert_eq!(SoftwareBackend::decrypt(&ctx, &CIPHER).unwrap(), PLAIN);

        let mut block = CIPHER;
        SoftwareBackend::decrypt_in_place(&ctx, &mut block).unwrap();
        assert_eq!(block, PLAIN);
    }

    #[test]
    fn provided_methods_hide_partial_writes() {
        let ctx = CipherContext::new(&KEY).unwrap();
        assert_eq!(
            Scribbler::decrypt(&ctx, &CIPHER),
            Err(CryptoError::FeatureUnsupported)
        );

        let mut block = CIPHER;
        assert_eq!(
            Scribbler::decrypt_in_place(&ctx, &mut block),
            Err(CryptoError::FeatureUnsupported)
        );
        assert_eq!(block, CIPHER);
    }
}

use aesdec_core::{Block, CipherContext, CryptoError, Result};

use crate::backend::DecryptBackend;

/// Placeholder for an alternate backend the platform declared but never
/// supplied.
///
/// Every call fails with [`CryptoError::FeatureUnsupported`] and touches
/// neither the context nor the output, whatever the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnsupportedBackend;

impl DecryptBackend for UnsupportedBackend {
    const NAME: &'static str = "alternate (unsupported)";

    #[inline]
    fn decrypt_block(_ctx: &CipherContext, _input: &Block, _output: &mut Block) -> Result<()> {
        Err(CryptoError::FeatureUnsupported)
    }
}

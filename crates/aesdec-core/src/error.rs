//! Error and result types shared by every decrypt backend.

use thiserror::Error;

/// Result alias used throughout aesdec.
pub type Result<T> = core::result::Result<T, CryptoError>;

/// Errors surfaced by the decrypt entry points and the key-schedule helpers.
///
/// Decryption itself never validates a context: a context that reaches a
/// backend is assumed to be fully expanded.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The build bound the decrypt entry point to an alternate backend that has
    /// no real implementation. Not retryable: rebuild with another backend.
    #[error("feature unsupported: the selected decrypt backend is not implemented")]
    FeatureUnsupported,
    /// A raw key was not one of the accepted AES key lengths.
    #[error("invalid AES key length: {actual} bytes")]
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        actual: usize,
    },
    /// An externally expanded schedule had the wrong number of round keys.
    #[error("invalid key schedule: expected {expected} round keys, got {actual}")]
    InvalidScheduleLength {
        /// Round keys required by the key size (rounds + 1).
        expected: usize,
        /// Round keys supplied.
        actual: usize,
    },
}

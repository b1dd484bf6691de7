//! AES single-block decryption with a build-time selectable backend.
//!
//! The public entry points ([`decrypt_block`], [`decrypt_block_into`],
//! [`decrypt_block_in_place`]) are bound to exactly one [`DecryptBackend`]
//! when the crate is compiled:
//!
//! - by default, the constant-time software inverse cipher from `aesdec-core`;
//! - with `decrypt-alt`, the platform's alternate backend. A build that
//!   declares `decrypt-alt` but supplies no implementation gets
//!   [`alt::UnsupportedBackend`], and every call fails with
//!   [`CryptoError::FeatureUnsupported`] instead of producing output;
//! - with `alt-arith` (implies `decrypt-alt`), the table-free
//!   [`alt::ArithBackend`].
//!
//! A call either writes the full 16-byte plaintext or leaves the caller's
//! buffer untouched.
//!
//! ```
//! use aesdec::{decrypt_block, CipherContext};
//!
//! let key: Vec<u8> = (0u8..16).collect();
//! let ctx = CipherContext::new(&key).unwrap();
//! let ct = [
//!     0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30,
//!     0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a,
//! ];
//! # #[cfg(not(all(feature = "decrypt-alt", not(feature = "alt-arith"))))]
//! assert_eq!(
//!     decrypt_block(&ctx, &ct).unwrap(),
//!     [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
//!      0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff],
//! );
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alt;
mod backend;
mod select;

pub use aesdec_core::{Block, CipherContext, CryptoError, KeySize, Result, BLOCK_SIZE};

pub use crate::backend::{DecryptBackend, SoftwareBackend};
pub use crate::select::{
    active_backend, decrypt_block, decrypt_block_in_place, decrypt_block_into,
    decrypt_block_with, ActiveBackend,
};

//! Software AES inverse cipher used as the reference decrypt backend.
//!
//! This crate mirrors FIPS-197 and provides:
//! - Compile-time inverse S-box and GF(2^8) multiplication tables, read only
//!   through constant-time full-table scans.
//! - The cipher context (expanded key schedule) and a key schedule for
//!   128/192/256-bit keys.
//! - Single-block decryption.
//! - The error type shared by every decrypt backend.
//!
//! Encryption is deliberately absent.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
pub mod round;
pub mod tables;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, decrypt_block_in_place, decrypt_block_into};
pub use crate::error::{CryptoError, Result};
pub use crate::key::{CipherContext, KeySize, MAX_ROUNDS};

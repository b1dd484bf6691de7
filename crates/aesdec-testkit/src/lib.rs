//! Test-only helpers for the aesdec workspace.
//!
//! Holds the forward cipher (the library itself never encrypts), known-answer
//! vectors, seeded RNGs and the sentinel pattern used to prove that failed
//! calls leave output buffers alone.

#![forbid(unsafe_code)]

pub mod forward;
pub mod timing;
pub mod vectors;

use aesdec_core::{Block, KeySize};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub use forward::encrypt_block;
pub use vectors::{KnownAnswer, KNOWN_ANSWERS};

/// Fill pattern for output buffers that must come back unmodified.
pub const SENTINEL: Block = [
    0xde, 0xad, 0xbe, 0xef, 0xa5, 0x5a, 0xc3, 0x3c, 0x01, 0x80, 0x7f, 0xfe, 0x13, 0x37, 0x42,
    0x99,
];

/// Deterministic RNG for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
    ChaCha20Rng::from_seed(seed_bytes)
}

/// Uniformly random block.
pub fn random_block(rng: &mut impl RngCore) -> Block {
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    block
}

/// Uniformly random raw key of the given size.
pub fn random_key(rng: &mut impl RngCore, key_size: KeySize) -> Vec<u8> {
    let mut key = vec![0u8; key_size.key_len()];
    rng.fill_bytes(&mut key);
    key
}

/// Key sizes this build of `aesdec-core` supports.
pub fn supported_key_sizes() -> Vec<KeySize> {
    [16usize, 24, 32]
        .into_iter()
        .filter_map(|len| KeySize::from_key_len(len).ok())
        .collect()
}

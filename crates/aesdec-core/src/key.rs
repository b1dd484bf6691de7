//! Cipher context: the expanded round-key schedule handed to every backend.
//!
//! Producing the schedule is the key-schedule collaborator's job. This module
//! carries a FIPS-197 `KeyExpansion` so that contexts can be built from raw
//! keys, and [`CipherContext::from_round_keys`] for schedules expanded
//! elsewhere (a hardware engine, a certified module, ...).

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{CryptoError, Result};
use crate::tables::sbox;

/// Largest round count this build supports.
pub const MAX_ROUNDS: usize = if cfg!(feature = "only-128-bit-keys") {
    10
} else {
    14
};

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Key length selector; fixes the number of rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    #[cfg(not(feature = "only-128-bit-keys"))]
    Aes192,
    /// 256-bit key, 14 rounds.
    #[cfg(not(feature = "only-128-bit-keys"))]
    Aes256,
}

impl KeySize {
    /// Maps a raw key length in bytes to a key size.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            #[cfg(not(feature = "only-128-bit-keys"))]
            24 => Ok(Self::Aes192),
            #[cfg(not(feature = "only-128-bit-keys"))]
            32 => Ok(Self::Aes256),
            actual => Err(CryptoError::InvalidKeyLength { actual }),
        }
    }

    /// Raw key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            #[cfg(not(feature = "only-128-bit-keys"))]
            Self::Aes192 => 24,
            #[cfg(not(feature = "only-128-bit-keys"))]
            Self::Aes256 => 32,
        }
    }

    /// Number of cipher rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            #[cfg(not(feature = "only-128-bit-keys"))]
            Self::Aes192 => 12,
            #[cfg(not(feature = "only-128-bit-keys"))]
            Self::Aes256 => 14,
        }
    }

    /// Number of round keys in the schedule (`Nr + 1`).
    pub const fn round_key_count(self) -> usize {
        self.rounds() + 1
    }
}

/// Expanded key schedule plus its key size.
///
/// Decrypt backends only ever read a context, so one context may be shared by
/// any number of threads. Round keys are wiped when the context is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherContext {
    round_keys: [Block; MAX_ROUNDS + 1],
    #[zeroize(skip)]
    key_size: KeySize,
}

impl CipherContext {
    /// Runs the key schedule over a raw 16, 24 or 32 byte key.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key_size = KeySize::from_key_len(key.len())?;
        Ok(Self {
            round_keys: expand_key(key, key_size),
            key_size,
        })
    }

    /// Wraps a schedule that was expanded elsewhere.
    ///
    /// `round_keys` must hold exactly `key_size.round_key_count()` keys, in
    /// encryption order (round 0 first).
    pub fn from_round_keys(key_size: KeySize, round_keys: &[Block]) -> Result<Self> {
        let expected = key_size.round_key_count();
        if round_keys.len() != expected {
            return Err(CryptoError::InvalidScheduleLength {
                expected,
                actual: round_keys.len(),
            });
        }
        let mut storage = [[0u8; BLOCK_SIZE]; MAX_ROUNDS + 1];
        storage[..expected].copy_from_slice(round_keys);
        Ok(Self {
            round_keys: storage,
            key_size,
        })
    }

    /// Key size the schedule was expanded for.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Number of cipher rounds.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.key_size.rounds()
    }

    /// The active part of the schedule, round 0 first.
    #[inline]
    pub fn round_keys(&self) -> &[Block] {
        &self.round_keys[..self.key_size.round_key_count()]
    }

    /// Returns the round key for `round` (`0..=rounds()`).
    ///
    /// # Panics
    ///
    /// Panics if `round > self.rounds()`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.round_keys()[round]
    }
}

impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// FIPS-197 `KeyExpansion`. `key.len()` must equal `key_size.key_len()`.
fn expand_key(key: &[u8], key_size: KeySize) -> [Block; MAX_ROUNDS + 1] {
    let nk = key_size.key_len() / 4;
    let total_words = 4 * key_size.round_key_count();

    let mut w = [0u32; 4 * (MAX_ROUNDS + 1)];
    for (slot, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; MAX_ROUNDS + 1];
    for (idx, word) in w[..total_words].iter().enumerate() {
        let offset = (idx % 4) * 4;
        round_keys[idx / 4][offset..offset + 4].copy_from_slice(&word.to_be_bytes());
    }
    w.zeroize();

    round_keys
}

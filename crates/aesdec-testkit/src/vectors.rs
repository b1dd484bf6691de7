//! Known-answer vectors.
//!
//! FIPS-197 Appendix C, NIST SP 800-38A F.1 (ECB) and the all-zero
//! key/plaintext pairs, for all three key sizes.

use aesdec_core::{Block, CipherContext, KeySize};

/// One (key, plaintext, ciphertext) triple, hex encoded.
#[derive(Clone, Copy, Debug)]
pub struct KnownAnswer {
    /// Where the vector comes from.
    pub name: &'static str,
    /// Raw key.
    pub key: &'static str,
    /// Expected plaintext.
    pub plaintext: &'static str,
    /// Ciphertext to decrypt.
    pub ciphertext: &'static str,
}

fn decode_block(field: &str, hex_str: &str) -> Block {
    hex::decode(hex_str)
        .unwrap_or_else(|e| panic!("{field}: bad hex: {e}"))
        .try_into()
        .unwrap_or_else(|v: Vec<u8>| panic!("{field}: expected 16 bytes, got {}", v.len()))
}

impl KnownAnswer {
    /// Decoded key bytes.
    pub fn key_bytes(&self) -> Vec<u8> {
        hex::decode(self.key).unwrap_or_else(|e| panic!("{}: bad key hex: {e}", self.name))
    }

    /// Key size of the vector, or `None` if this build cannot use it.
    pub fn key_size(&self) -> Option<KeySize> {
        KeySize::from_key_len(self.key_bytes().len()).ok()
    }

    /// Expanded context for the vector's key.
    ///
    /// # Panics
    ///
    /// Panics if the build does not support the key size; filter with
    /// [`supported`] first.
    pub fn context(&self) -> CipherContext {
        CipherContext::new(&self.key_bytes())
            .unwrap_or_else(|e| panic!("{}: cannot expand key: {e}", self.name))
    }

    /// Expected plaintext block.
    pub fn plaintext_block(&self) -> Block {
        decode_block(self.name, self.plaintext)
    }

    /// Ciphertext block.
    pub fn ciphertext_block(&self) -> Block {
        decode_block(self.name, self.ciphertext)
    }
}

const KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const KEY_192: &str = "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b";
const KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

const SP800_38A_PLAIN: [&str; 4] = [
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
];

/// Every vector, regardless of what the build supports.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "FIPS-197 C.1 AES-128",
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    KnownAnswer {
        name: "FIPS-197 C.2 AES-192",
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    KnownAnswer {
        name: "FIPS-197 C.3 AES-256",
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.2 ECB-AES128 block 1",
        key: KEY_128,
        plaintext: SP800_38A_PLAIN[0],
        ciphertext: "3ad77bb40d7a3660a89ecaf32466ef97",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.2 ECB-AES128 block 2",
        key: KEY_128,
        plaintext: SP800_38A_PLAIN[1],
        ciphertext: "f5d3d58503b9699de785895a96fdbaaf",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.2 ECB-AES128 block 3",
        key: KEY_128,
        plaintext: SP800_38A_PLAIN[2],
        ciphertext: "43b1cd7f598ece23881b00e3ed030688",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.2 ECB-AES128 block 4",
        key: KEY_128,
        plaintext: SP800_38A_PLAIN[3],
        ciphertext: "7b0c785e27e8ad3f8223207104725dd4",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.4 ECB-AES192 block 1",
        key: KEY_192,
        plaintext: SP800_38A_PLAIN[0],
        ciphertext: "bd334f1d6e45f25ff712a214571fa5cc",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.4 ECB-AES192 block 2",
        key: KEY_192,
        plaintext: SP800_38A_PLAIN[1],
        ciphertext: "974104846d0ad3ad7734ecb3ecee4eef",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.4 ECB-AES192 block 3",
        key: KEY_192,
        plaintext: SP800_38A_PLAIN[2],
        ciphertext: "ef7afd2270e2e60adce0ba2face6444e",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.4 ECB-AES192 block 4",
        key: KEY_192,
        plaintext: SP800_38A_PLAIN[3],
        ciphertext: "9a4b41ba738d6c72fb16691603c18e0e",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.6 ECB-AES256 block 1",
        key: KEY_256,
        plaintext: SP800_38A_PLAIN[0],
        ciphertext: "f3eed1bdb5d2a03c064b5a7e3db181f8",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.6 ECB-AES256 block 2",
        key: KEY_256,
        plaintext: SP800_38A_PLAIN[1],
        ciphertext: "591ccb10d410ed26dc5ba74a31362870",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.6 ECB-AES256 block 3",
        key: KEY_256,
        plaintext: SP800_38A_PLAIN[2],
        ciphertext: "b6ed21b99ca6f4f9f153e7b1beafed1d",
    },
    KnownAnswer {
        name: "SP 800-38A F.1.6 ECB-AES256 block 4",
        key: KEY_256,
        plaintext: SP800_38A_PLAIN[3],
        ciphertext: "23304b7a39f9f3ff067d8d8f9e24ecc7",
    },
    KnownAnswer {
        name: "zero key AES-128",
        key: "00000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "66e94bd4ef8a2c3b884cfa59ca342b2e",
    },
    KnownAnswer {
        name: "zero key AES-192",
        key: "000000000000000000000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "aae06992acbf52a3e8f4a96ec9300bd7",
    },
    KnownAnswer {
        name: "zero key AES-256",
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "dc95c078a2408989ad48a21492842087",
    },
];

/// Vectors whose key size this build supports.
pub fn supported() -> impl Iterator<Item = &'static KnownAnswer> {
    KNOWN_ANSWERS.iter().filter(|v| v.key_size().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vector_is_well_formed() {
        for v in KNOWN_ANSWERS {
            assert!(matches!(v.key_bytes().len(), 16 | 24 | 32), "{}", v.name);
            let _ = v.plaintext_block();
            let _ = v.ciphertext_block();
        }
    }

    #[test]
    fn supported_always_includes_aes128() {
        assert!(supported().any(|v| v.key_size() == Some(KeySize::Aes128)));
    }
}

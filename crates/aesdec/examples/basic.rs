//! Decrypts the FIPS-197 AES-128 example block with whichever backend the
//! build bound.

use aesdec::{active_backend, decrypt_block, CipherContext, CryptoError};

fn main() {
    let key: Vec<u8> = (0u8..16).collect();
    let ctx = CipherContext::new(&key).expect("16-byte key");

    let mut ciphertext = [0u8; 16];
    hex::decode_to_slice("69c4e0d86a7b0430d8cdb78070b4c55a", &mut ciphertext)
        .expect("valid hex");

    println!("backend: {}", active_backend());
    match decrypt_block(&ctx, &ciphertext) {
        Ok(plaintext) => {
            assert_eq!(hex::encode(plaintext), "00112233445566778899aabbccddeeff");
            println!("plaintext: {}", hex::encode(plaintext));
        }
        Err(CryptoError::FeatureUnsupported) => {
            println!("this build declares an alternate backend without an implementation");
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
}

//! FIPS-197 inverse cipher over a pre-expanded key schedule.

use zeroize::Zeroizing;

use crate::block::Block;
use crate::key::CipherContext;
use crate::round::{add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes};

/// Runs `InvCipher` on `state` using `Nr = ctx.rounds()`.
fn inv_cipher(ctx: &CipherContext, state: &mut Block) {
    let rounds = ctx.rounds();

    add_round_key(state, ctx.round_key(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, ctx.round_key(round));
        inv_mix_columns(state);
    }
    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, ctx.round_key(0));
}

/// Decrypts a single 16-byte block with the software inverse cipher.
///
/// Infallible for any context built by [`CipherContext`]. The working state
/// is wiped before returning.
pub fn decrypt_block(ctx: &CipherContext, input: &Block) -> Block {
    let mut state = Zeroizing::new(*input);
    inv_cipher(ctx, &mut state);
    *state
}

/// Decrypts `input` into `output`. `output` is written once, after the last
/// round.
pub fn decrypt_block_into(ctx: &CipherContext, input: &Block, output: &mut Block) {
    *output = decrypt_block(ctx, input);
}

/// Decrypts `block` in place. Same result as [`decrypt_block`].
pub fn decrypt_block_in_place(ctx: &CipherContext, block: &mut Block) {
    *block = decrypt_block(ctx, block);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER_128: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    fn counting_key(len: usize) -> Vec<u8> {
        (0..len as u8).collect()
    }

    #[test]
    fn decrypt_matches_fips197_c1() {
        let ctx = CipherContext::new(&counting_key(16)).unwrap();
        assert_eq!(decrypt_block(&ctx, &NIST_CIPHER_128), NIST_PLAIN);
    }

    #[cfg(not(feature = "only-128-bit-keys"))]
    #[test]
    fn decrypt_matches_fips197_c2() {
        let ctx = CipherContext::new(&counting_key(24)).unwrap();
        let ct: Block = hex::decode("dda97ca4864cdfe06eaf70a0ec0d7191")
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(decrypt_block(&ctx, &ct), NIST_PLAIN);
    }

    #[cfg(not(feature = "only-128-bit-keys"))]
    #[test]
    fn decrypt_matches_fips197_c3() {
        let ctx = CipherContext::new(&counting_key(32)).unwrap();
        let ct: Block = hex::decode("8ea2b7ca516745bfeafc49904b496089")
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(decrypt_block(&ctx, &ct), NIST_PLAIN);
    }

    #[test]
    fn in_place_matches_out_of_place() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let mut key = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);
            let ctx = CipherContext::new(&key).unwrap();

            let expected = decrypt_block(&ctx, &block);
            let mut into = [0xeeu8; 16];
            decrypt_block_into(&ctx, &block, &mut into);
            decrypt_block_in_place(&ctx, &mut block);

            assert_eq!(into, expected);
            assert_eq!(block, expected);
        }
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let ctx = CipherContext::new(&counting_key(16)).unwrap();
        let first = decrypt_block(&ctx, &NIST_CIPHER_128);
        let _ = decrypt_block(&ctx, &[0xffu8; 16]);
        let second = decrypt_block(&ctx, &NIST_CIPHER_128);
        assert_eq!(first, second);
    }
}

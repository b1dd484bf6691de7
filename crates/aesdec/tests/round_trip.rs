//! Round-trip, aliasing and determinism properties of the bound backend.
#![cfg(not(all(feature = "decrypt-alt", not(feature = "alt-arith"))))]

use aesdec::{decrypt_block, decrypt_block_in_place, decrypt_block_into, CipherContext};
use aesdec_testkit::{
    encrypt_block, random_block, random_key, seeded_rng, supported_key_sizes, SENTINEL,
};
use proptest::prelude::*;

#[test]
fn random_round_trip_all_key_sizes() {
    let mut rng = seeded_rng(0x5eed);
    for key_size in supported_key_sizes() {
        for _ in 0..50 {
            let ctx = CipherContext::new(&random_key(&mut rng, key_size)).unwrap();
            let block = random_block(&mut rng);
            let ct = encrypt_block(&ctx, &block);
            assert_eq!(decrypt_block(&ctx, &ct).unwrap(), block, "{key_size:?}");
        }
    }
}

#[test]
fn in_place_equals_out_of_place() {
    let mut rng = seeded_rng(7);
    for key_size in supported_key_sizes() {
        let ctx = CipherContext::new(&random_key(&mut rng, key_size)).unwrap();
        for _ in 0..20 {
            let ct = random_block(&mut rng);
            let expected = decrypt_block(&ctx, &ct).unwrap();

            let mut aliased = ct;
            decrypt_block_in_place(&ctx, &mut aliased).unwrap();
            assert_eq!(aliased, expected);

            let mut output = SENTINEL;
            decrypt_block_into(&ctx, &ct, &mut output).unwrap();
            assert_eq!(output, expected);
        }
    }
}

#[test]
fn results_do_not_depend_on_call_order() {
    let mut rng = seeded_rng(99);
    let ctx = CipherContext::new(&random_key(&mut rng, aesdec::KeySize::Aes128)).unwrap();
    let blocks: Vec<_> = (0..8).map(|_| random_block(&mut rng)).collect();

    let forward: Vec<_> = blocks
        .iter()
        .map(|b| decrypt_block(&ctx, b).unwrap())
        .collect();
    let mut backward: Vec<_> = blocks
        .iter()
        .rev()
        .map(|b| decrypt_block(&ctx, b).unwrap())
        .collect();
    backward.reverse();

    assert_eq!(forward, backward);
}

#[test]
fn cloned_context_decrypts_identically() {
    let mut rng = seeded_rng(3);
    let ctx = CipherContext::new(&random_key(&mut rng, aesdec::KeySize::Aes128)).unwrap();
    let copy = ctx.clone();
    let ct = random_block(&mut rng);
    assert_eq!(
        decrypt_block(&ctx, &ct).unwrap(),
        decrypt_block(&copy, &ct).unwrap()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn aes128_round_trip(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let ctx = CipherContext::new(&key).unwrap();
        let ct = encrypt_block(&ctx, &block);
        prop_assert_eq!(decrypt_block(&ctx, &ct).unwrap(), block);
    }

    #[cfg(not(feature = "only-128-bit-keys"))]
    #[test]
    fn aes192_round_trip(key in any::<[u8; 24]>(), block in any::<[u8; 16]>()) {
        let ctx = CipherContext::new(&key).unwrap();
        let ct = encrypt_block(&ctx, &block);
        prop_assert_eq!(decrypt_block(&ctx, &ct).unwrap(), block);
    }

    #[cfg(not(feature = "only-128-bit-keys"))]
    #[test]
    fn aes256_round_trip(key in any::<[u8; 32]>(), block in any::<[u8; 16]>()) {
        let ctx = CipherContext::new(&key).unwrap();
        let ct = encrypt_block(&ctx, &block);
        prop_assert_eq!(decrypt_block(&ctx, &ct).unwrap(), block);
    }

    #[test]
    fn decrypt_is_deterministic(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let ctx = CipherContext::new(&key).unwrap();
        let first = decrypt_block(&ctx, &block).unwrap();
        let second = decrypt_block(&ctx, &block).unwrap();
        prop_assert_eq!(first, second);
    }
}

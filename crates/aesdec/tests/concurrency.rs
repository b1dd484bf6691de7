//! One context, many threads.
#![cfg(not(all(feature = "decrypt-alt", not(feature = "alt-arith"))))]

use std::sync::Arc;
use std::thread;

use aesdec::{decrypt_block, CipherContext};
use aesdec_testkit::{encrypt_block, random_block, seeded_rng};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn context_is_send_and_sync() {
    assert_send_sync::<CipherContext>();
}

#[test]
fn shared_context_decrypts_correctly_from_many_threads() {
    let ctx = Arc::new(CipherContext::new(&[0x5cu8; 16]).unwrap());

    let handles: Vec<_> = (0..8u64)
        .map(|worker| {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || {
                let mut rng = seeded_rng(worker);
                for _ in 0..16 {
                    let plain = random_block(&mut rng);
                    let ct = encrypt_block(&ctx, &plain);
                    assert_eq!(decrypt_block(&ctx, &ct).unwrap(), plain);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}

#[test]
fn scoped_threads_can_borrow_the_context() {
    let ctx = CipherContext::new(&[0x01u8; 16]).unwrap();
    let ct = [0x77u8; 16];
    let expected = decrypt_block(&ctx, &ct).unwrap();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(decrypt_block(&ctx, &ct).unwrap(), expected));
        }
    });
}

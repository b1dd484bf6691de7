//! Forward AES cipher, for building ciphertexts in tests.
//!
//! Plain table indexing; not constant-time and not meant to be.

use aesdec_core::tables::SBOX;
use aesdec_core::{xor_in_place, Block, CipherContext};

fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

fn shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    for col in 0..4 {
        for row in 0..4 {
            tmp[row + 4 * col] = state[row + 4 * ((col + row) % 4)];
        }
    }
    *state = tmp;
}

fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

fn mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        mix_single_column(column);
    }
}

/// Encrypts a single block with the context's schedule.
pub fn encrypt_block(ctx: &CipherContext, block: &Block) -> Block {
    let rounds = ctx.rounds();
    let mut state = *block;

    xor_in_place(&mut state, ctx.round_key(0));
    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        xor_in_place(&mut state, ctx.round_key(round));
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    xor_in_place(&mut state, ctx.round_key(rounds));

    state
}

//! AES inverse round transformations.
//!
//! The state is the 16-byte block in FIPS-197 column-major order: byte
//! `r + 4c` is row `r`, column `c`.

use crate::block::{xor_in_place, Block};
use crate::tables::{inv_mix_products, inv_sbox};

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    tmp[0] = state[0];
    tmp[1] = state[13];
    tmp[2] = state[10];
    tmp[3] = state[7];

    tmp[4] = state[4];
    tmp[5] = state[1];
    tmp[6] = state[14];
    tmp[7] = state[11];

    tmp[8] = state[8];
    tmp[9] = state[5];
    tmp[10] = state[2];
    tmp[11] = state[15];

    tmp[12] = state[12];
    tmp[13] = state[9];
    tmp[14] = state[6];
    tmp[15] = state[3];

    *state = tmp;
}

fn inv_mix_single_column(col: &mut [u8; 4]) {
    // Column j of the InvMixColumns matrix is [0e, 09, 0d, 0b] rotated down by j.
    let mut mixed = [0u8; 4];
    for (j, &byte) in col.iter().enumerate() {
        let mut products = inv_mix_products(byte);
        products.rotate_right(j);
        for (out, product) in mixed.iter_mut().zip(products) {
            *out ^= product;
        }
    }
    *col = mixed;
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        inv_mix_single_column(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

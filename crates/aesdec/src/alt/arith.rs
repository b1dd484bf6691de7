//! Table-free inverse cipher.
//!
//! InvSubBytes undoes the S-box affine map and then inverts in GF(2^8) by
//! raising to the 254th power; InvMixColumns multiplies with branch-free
//! `xtime` chains. No memory access depends on the state.

use aesdec_core::round::{add_round_key, inv_shift_rows};
use aesdec_core::{Block, CipherContext, Result};
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::backend::DecryptBackend;

/// Alternate backend computing every transformation arithmetically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArithBackend;

#[inline(always)]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ ((byte >> 7) * 0x1b)
}

#[inline(always)]
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        product ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// `x^254`, i.e. `x^-1` for non-zero `x`.
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);

    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    // the chain already maps 0 to 0; pin it explicitly
    u8::conditional_select(&y, &0, x.ct_eq(&0))
}

#[inline(always)]
fn inv_sbox(byte: u8) -> u8 {
    let y = byte ^ 0x63;
    gf_inv(y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6))
}

fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

#[inline(always)]
fn mul9(b: u8) -> u8 {
    xtime(xtime(xtime(b))) ^ b
}

#[inline(always)]
fn mul11(b: u8) -> u8 {
    xtime(xtime(xtime(b))) ^ xtime(b) ^ b
}

#[inline(always)]
fn mul13(b: u8) -> u8 {
    xtime(xtime(xtime(b))) ^ xtime(xtime(b)) ^ b
}

#[inline(always)]
fn mul14(b: u8) -> u8 {
    xtime(xtime(xtime(b))) ^ xtime(xtime(b)) ^ xtime(b)
}

fn inv_mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = mul14(s0) ^ mul11(s1) ^ mul13(s2) ^ mul9(s3);
        column[1] = mul9(s0) ^ mul14(s1) ^ mul11(s2) ^ mul13(s3);
        column[2] = mul13(s0) ^ mul9(s1) ^ mul14(s2) ^ mul11(s3);
        column[3] = mul11(s0) ^ mul13(s1) ^ mul9(s2) ^ mul14(s3);
    }
}

impl DecryptBackend for ArithBackend {
    const NAME: &'static str = "alternate (arithmetic)";

    fn decrypt_block(ctx: &CipherContext, input: &Block, output: &mut Block) -> Result<()> {
        let rounds = ctx.rounds();
        let mut state = Zeroizing::new(*input);

        add_round_key(&mut state, ctx.round_key(rounds));
        for round in (1..rounds).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, ctx.round_key(round));
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, ctx.round_key(0));

        *output = *state;
        Ok(())
    }
}

//! Static S-box and GF(2^8) multiplication tables.
//!
//! Every table is produced by a `const fn` and lives in read-only memory, so
//! there is no initialization step to race on. Runtime reads go through
//! [`ct_lookup`] / [`ct_lookup_many`], which touch every entry of the table and
//! pick the wanted one with a constant-time mask: neither the branch pattern
//! nor the sequence of addresses depends on the (secret) index.

use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Multiplies by `x` in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
const fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ (((byte >> 7) & 1) * 0x1b)
}

/// Full GF(2^8) multiplication. Only evaluated at compile time.
const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        product ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

const fn gen_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    // p walks the multiplicative group by powers of 3, q tracks p^-1.
    let mut p = 1u8;
    let mut q = 1u8;
    loop {
        p = p ^ xtime(p);

        q ^= q << 1;
        q ^= q << 2;
        q ^= q << 4;
        if q & 0x80 != 0 {
            q ^= 0x09;
        }

        sbox[p as usize] =
            q ^ q.rotate_left(1) ^ q.rotate_left(2) ^ q.rotate_left(3) ^ q.rotate_left(4) ^ 0x63;

        if p == 1 {
            break;
        }
    }
    // zero has no inverse
    sbox[0] = 0x63;
    sbox
}

const fn gen_inv_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[sbox[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

const fn gen_mul_table(constant: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = gf_mul(i as u8, constant);
        i += 1;
    }
    table
}

/// Forward S-box. Used by the key schedule only.
pub const SBOX: [u8; 256] = gen_sbox();

/// Inverse S-box.
pub const INV_SBOX: [u8; 256] = gen_inv_sbox(&SBOX);

/// `x * 0x09` in GF(2^8).
pub const MUL_9: [u8; 256] = gen_mul_table(0x09);
/// `x * 0x0b` in GF(2^8).
pub const MUL_11: [u8; 256] = gen_mul_table(0x0b);
/// `x * 0x0d` in GF(2^8).
pub const MUL_13: [u8; 256] = gen_mul_table(0x0d);
/// `x * 0x0e` in GF(2^8).
pub const MUL_14: [u8; 256] = gen_mul_table(0x0e);

/// Reads `table[index]` by scanning the whole table.
#[inline]
pub fn ct_lookup(table: &[u8; 256], index: u8) -> u8 {
    let [value] = ct_lookup_many([table], index);
    value
}

/// Reads `index` from several tables in a single constant-time pass.
#[inline]
pub fn ct_lookup_many<const N: usize>(tables: [&[u8; 256]; N], index: u8) -> [u8; N] {
    let mut out = [0u8; N];
    for position in 0..=u8::MAX {
        let hit = position.ct_eq(&index);
        for (slot, table) in out.iter_mut().zip(tables.iter()) {
            slot.conditional_assign(&table[position as usize], hit);
        }
    }
    out
}

/// Constant-time forward S-box lookup.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    ct_lookup(&SBOX, byte)
}

/// Constant-time inverse S-box lookup.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    ct_lookup(&INV_SBOX, byte)
}

/// Returns `[x*0x0e, x*0x09, x*0x0d, x*0x0b]`, the four products one state
/// byte contributes to an InvMixColumns column.
#[inline]
pub fn inv_mix_products(byte: u8) -> [u8; 4] {
    ct_lookup_many([&MUL_14, &MUL_9, &MUL_13, &MUL_11], byte)
}

use sha2::{Digest as _, Sha256};

pub(crate) type Digest32 = [u8; 32];

pub(crate) fn sha256(bytes: &[u8]) -> Digest32 {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(bytes));
    out
}

/// Reduces a digest, read as a big-endian unsigned integer, modulo `m`.
pub(crate) fn digest_mod(digest: &Digest32, m: u64) -> u64 {
    if m == 0 {
        return 0;
    }
    let m = u128::from(m);
    let mut acc: u128 = 0;
    for &b in digest {
        acc = ((acc << 8) | u128::from(b)) % m;
    }
    acc as u64
}

pub(crate) fn sha256_mod(text: &str, m: u64) -> u64 {
    digest_mod(&sha256(text.as_bytes()), m)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Truncating float to small-int conversion; inputs are already non-negative and bounded.
pub(crate) fn floor_usize(v: f64) -> usize {
    v.floor().max(0.0) as usize
}

/// Alpha in [0,255] from a float expression, truncating like an integer cast.
pub(crate) fn alpha_u8(v: f64) -> u8 {
    v.floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

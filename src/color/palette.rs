//! Hash-derived palette.
//!
//! The palette depends only on the verbatim source text. Rows index into it by
//! their own content hash, so the order of [`Palette::colors`] is part of the
//! output contract.

use crate::foundation::{
    core::Rgb8,
    math::{digest_mod, sha256, sha256_mod},
};

/// Hue offsets (degrees) of the five paint colors, relative to the base hue.
pub const PAINT_HUE_OFFSETS: [u32; 5] = [0, 20, 160, 200, 300];
pub const PAINT_SATURATION: f64 = 0.70;
pub const PAINT_LIGHTNESS: f64 = 0.55;

/// `(hue offset, saturation, lightness)` of the two accent colors.
pub const ACCENTS: [(u32, f64, f64); 2] = [(40, 0.55, 0.70), (220, 0.50, 0.75)];

pub const PALETTE_LEN: usize = PAINT_HUE_OFFSETS.len() + ACCENTS.len();

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    base_hue: u32,
    colors: [Rgb8; PALETTE_LEN],
}

impl Palette {
    pub fn from_source_text(text: &str) -> Self {
        let base_hue = sha256_mod(text, 360) as u32;
        Self::from_base_hue(base_hue)
    }

    pub fn from_base_hue(base_hue: u32) -> Self {
        let base_hue = base_hue % 360;
        let mut colors = [Rgb8::new(0, 0, 0); PALETTE_LEN];
        let paint = PAINT_HUE_OFFSETS
            .iter()
            .map(|off| (*off, PAINT_SATURATION, PAINT_LIGHTNESS));
        for (slot, (off, s, l)) in colors.iter_mut().zip(paint.chain(ACCENTS)) {
            *slot = hsl_to_rgb(f64::from((base_hue + off) % 360), s, l);
        }
        Self { base_hue, colors }
    }

    pub fn base_hue(&self) -> u32 {
        self.base_hue
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Color for a row, keyed by the row's canonical seed string.
    pub fn color_for(&self, seed: &str) -> Rgb8 {
        let idx = digest_mod(&sha256(seed.as_bytes()), PALETTE_LEN as u64);
        self.colors[idx as usize]
    }
}

/// Standard HSL to RGB conversion. `h` in degrees, `s` and `l` in [0,1].
/// Channels round half to even.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb8 {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round_ties_even().clamp(0.0, 255.0) as u8;
    Rgb8::new(to_u8(r1), to_u8(g1), to_u8(b1))
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;

use crate::foundation::{
    error::{DatapaintError, DatapaintResult},
    math::mul_div255_u8,
};

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Scales a premultiplied pixel by a coverage value in [0,255].
pub fn mask_px(px: PremulRgba8, m: u8) -> PremulRgba8 {
    let m = u16::from(m);
    [
        mul_div255_u8(u16::from(px[0]), m),
        mul_div255_u8(u16::from(px[1]), m),
        mul_div255_u8(u16::from(px[2]), m),
        mul_div255_u8(u16::from(px[3]), m),
    ]
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> DatapaintResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(DatapaintError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Restricts a premultiplied layer to a single-channel mask.
pub fn apply_mask_in_place(layer: &mut [u8], mask: &[u8]) -> DatapaintResult<()> {
    if layer.len() != mask.len() * 4 {
        return Err(DatapaintError::render(
            "apply_mask_in_place expects one mask byte per rgba8 pixel",
        ));
    }
    for (px, &m) in layer.chunks_exact_mut(4).zip(mask) {
        let out = mask_px([px[0], px[1], px[2], px[3]], m);
        px.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

use crate::foundation::error::{DatapaintError, DatapaintResult};

/// Kernel radius used for a given sigma: three standard deviations, rounded up.
pub fn kernel_radius_for_sigma(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (3.0 * sigma).ceil() as u32
}

/// Separable Gaussian blur over a single-channel 8-bit image, edges clamped.
pub fn blur_gray8(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> DatapaintResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| DatapaintError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(DatapaintError::render(
            "blur_gray8 expects src matching width*height",
        ));
    }
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

/// Normalized Gaussian taps in Q16 (`1 << 16` is 1.0), `2 * radius + 1` long.
///
/// The taps sum to exactly `1 << 16`, so a flat mask stays flat and the vignette
/// never gains or loses coverage away from the ellipse edge.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> DatapaintResult<Vec<u32>> {
    const ONE: i64 = 1 << 16;
    if radius == 0 {
        return Ok(vec![ONE as u32]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(DatapaintError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let two_sigma_sq = 2.0 * f64::from(sigma) * f64::from(sigma);
    let raw: Vec<f64> = (-r..=r)
        .map(|i| (-f64::from(i * i) / two_sigma_sq).exp())
        .collect();
    let total: f64 = raw.iter().sum();
    if total <= 0.0 {
        return Err(DatapaintError::render("gaussian kernel sum is zero"));
    }

    let mut taps: Vec<i64> = raw
        .iter()
        .map(|w| ((w / total) * ONE as f64).round() as i64)
        .collect();
    let drift = ONE - taps.iter().sum::<i64>();
    taps[radius as usize] = (taps[radius as usize] + drift).clamp(0, ONE);

    Ok(taps.into_iter().map(|t| t.clamp(0, ONE) as u32).collect())
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        let row = (y * w) as usize;
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                acc += u64::from(kw) * u64::from(src[row + sx as usize]);
            }
            dst[row + x as usize] = q16_to_u8(acc);
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                acc += u64::from(kw) * u64::from(src[(sy * w + x) as usize]);
            }
            dst[(y * w + x) as usize] = q16_to_u8(acc);
        }
    }
}

/// Rounds a Q16 accumulator back to a coverage byte.
fn q16_to_u8(acc: u64) -> u8 {
    ((acc + (1 << 15)) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;

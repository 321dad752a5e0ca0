use super::*;

#[test]
fn blur_radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6];
    let out = blur_gray8(&src, 3, 2, 0, 1.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (6u32, 5u32);
    let src = vec![200u8; (w * h) as usize];
    let out = blur_gray8(&src, w, h, 4, 2.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h) as usize];
    src[(4 * w + 4) as usize] = 255;

    let out = blur_gray8(&src, w, h, 3, 1.2).unwrap();

    assert!(out.iter().filter(|&&v| v != 0).count() > 1);
    assert!(out[(4 * w + 4) as usize] < 255);
    let sum: i32 = out.iter().map(|&v| i32::from(v)).sum();
    assert!((sum - 255).abs() <= 12, "sum={sum}");
}

#[test]
fn blur_rejects_mismatched_buffer() {
    assert!(blur_gray8(&[0u8; 5], 2, 2, 1, 1.0).is_err());
}

#[test]
fn blur_rejects_bad_sigma() {
    assert!(blur_gray8(&[0u8; 4], 2, 2, 1, 0.0).is_err());
    assert!(blur_gray8(&[0u8; 4], 2, 2, 1, f32::NAN).is_err());
}

#[test]
fn kernel_radius_is_three_sigma() {
    assert_eq!(kernel_radius_for_sigma(50.0), 150);
    assert_eq!(kernel_radius_for_sigma(1.2), 4);
    assert_eq!(kernel_radius_for_sigma(0.0), 0);
}

#[test]
fn kernel_sums_to_one_q16() {
    let k = gaussian_kernel_q16(150, 50.0).unwrap();
    assert_eq!(k.len(), 301);
    assert_eq!(k.iter().map(|&v| u64::from(v)).sum::<u64>(), 65536);
}

#[test]
fn kernel_is_symmetric_and_peaks_in_the_middle() {
    let k = gaussian_kernel_q16(6, 2.0).unwrap();
    assert_eq!(k.len(), 13);
    assert!(k.iter().eq(k.iter().rev()));
    assert!(k.iter().all(|&v| v <= k[6]));
}

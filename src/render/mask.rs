//! Soft elliptical vignette confining the paint layer.

use crate::{
    foundation::{
        core::CanvasSize,
        error::{DatapaintError, DatapaintResult},
    },
    render::{
        blur::{blur_gray8, kernel_radius_for_sigma},
        cpu::rasterize_ellipse,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VignetteSettings {
    /// Horizontal radius as a fraction of canvas width.
    pub radius_x_frac: f64,
    /// Vertical radius as a fraction of canvas height.
    pub radius_y_frac: f64,
    /// Fill intensity of the ellipse before blurring.
    pub intensity: u8,
    /// Gaussian standard deviation in pixels. `0` disables the blur.
    pub blur_sigma: f32,
}

impl Default for VignetteSettings {
    fn default() -> Self {
        Self {
            radius_x_frac: 0.46,
            radius_y_frac: 0.40,
            intensity: 200,
            blur_sigma: 50.0,
        }
    }
}

impl VignetteSettings {
    pub fn validate(&self) -> DatapaintResult<()> {
        let frac_ok = |v: f64| v.is_finite() && v > 0.0;
        if !frac_ok(self.radius_x_frac) || !frac_ok(self.radius_y_frac) {
            return Err(DatapaintError::validation(
                "vignette radius fractions must be finite and > 0",
            ));
        }
        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            return Err(DatapaintError::validation(
                "vignette blur_sigma must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Single-channel coverage mask, one byte per canvas pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Mask {
    pub fn vignette(size: CanvasSize, settings: &VignetteSettings) -> DatapaintResult<Self> {
        settings.validate()?;
        let radii = (
            f64::from(size.width) * settings.radius_x_frac,
            f64::from(size.height) * settings.radius_y_frac,
        );
        let rgba = rasterize_ellipse(size, size.center(), radii, settings.intensity)?;
        let coverage: Vec<u8> = rgba.chunks_exact(4).map(|px| px[3]).collect();

        let radius = kernel_radius_for_sigma(settings.blur_sigma);
        let data = blur_gray8(
            &coverage,
            size.width,
            size.height,
            radius,
            settings.blur_sigma,
        )?;

        Ok(Self {
            width: size.width,
            height: size.height,
            data,
        })
    }

    pub fn at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;

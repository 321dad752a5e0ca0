use crate::foundation::error::{DatapaintError, DatapaintResult};

pub use kurbo::{Point, Vec2};

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> DatapaintResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(self) -> DatapaintResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DatapaintError::validation(
                "canvas width and height must be > 0",
            ));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(DatapaintError::validation(
                "canvas width and height must fit in u16",
            ));
        }
        Ok(())
    }

    pub fn pixel_count(self) -> DatapaintResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(|| DatapaintError::render("canvas pixel count overflow"))
    }

    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 720,
        }
    }
}

/// Straight (non-premultiplied) RGB8 color. Alpha is applied per mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

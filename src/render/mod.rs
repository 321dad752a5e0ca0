//! Rasterization and compositing.

pub mod blur;
pub mod composite;
pub mod cpu;
pub mod mark;
pub mod mask;
pub mod pipeline;

/// Final canvas. Always opaque, so straight and premultiplied forms coincide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl CanvasRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

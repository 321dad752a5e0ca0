use crate::foundation::core::{Point, Rgb8};

/// A single translucent primitive emitted by a shape renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    /// Closed, filled polygon (non-zero fill).
    Polygon {
        points: Vec<Point>,
        color: Rgb8,
        alpha: u8,
    },
    /// Open polyline stroked at `width` pixels with round joins and caps.
    Polyline {
        points: Vec<Point>,
        width: f64,
        color: Rgb8,
        alpha: u8,
    },
    /// Filled disc.
    Dot {
        center: Point,
        radius: f64,
        color: Rgb8,
        alpha: u8,
    },
}

impl Mark {
    pub fn alpha(&self) -> u8 {
        match self {
            Self::Polygon { alpha, .. } | Self::Polyline { alpha, .. } | Self::Dot { alpha, .. } => {
                *alpha
            }
        }
    }

    pub fn color(&self) -> Rgb8 {
        match self {
            Self::Polygon { color, .. } | Self::Polyline { color, .. } | Self::Dot { color, .. } => {
                *color
            }
        }
    }
}

/// Destination for marks. Marks are applied strictly in push order.
pub trait MarkSink {
    fn push(&mut self, mark: Mark);
}

/// Recording sink; keeps the marks for inspection instead of rasterizing them.
impl MarkSink for Vec<Mark> {
    fn push(&mut self, mark: Mark) {
        Vec::push(self, mark);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mark.rs"]
mod tests;

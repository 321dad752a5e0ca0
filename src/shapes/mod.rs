//! The six mark algorithms and their dispatch.
//!
//! Every renderer takes the same inputs: a sink to paint into, the row's
//! [`MarkParams`], and the row's own [`SeededStream`]. Stream draws happen in a
//! fixed order per algorithm, which is what makes a row's mark reproducible.

mod blob;
mod cloud;
mod spiral;
mod splatter;
mod stroke;
mod wave;

pub use blob::render_blob;
pub use cloud::render_cloud;
pub use spiral::render_spiral;
pub use splatter::render_splatter;
pub use stroke::{BEZIER_STEPS, render_stroke};
pub use wave::{WAVE_SAMPLES, render_wave};

use crate::{
    data::normalize::NormalizedRow,
    foundation::core::{CanvasSize, Point, Rgb8},
    random::stream::SeededStream,
    render::mark::MarkSink,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Blob,
    Stroke,
    Splatter,
    Spiral,
    Wave,
    Cloud,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        Self::Blob,
        Self::Stroke,
        Self::Splatter,
        Self::Spiral,
        Self::Wave,
        Self::Cloud,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Stroke => "stroke",
            Self::Splatter => "splatter",
            Self::Spiral => "spiral",
            Self::Wave => "wave",
            Self::Cloud => "cloud",
        }
    }

    /// Exact match on an already-normalized tag.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }

    /// Trims and lowercases `raw`; anything unrecognized, empty, or missing is a stroke.
    pub fn from_tag(raw: Option<&str>) -> Self {
        raw.map(|s| s.trim().to_lowercase())
            .and_then(|s| Self::parse(&s))
            .unwrap_or(Self::Stroke)
    }

    pub fn index(self) -> usize {
        match self {
            Self::Blob => 0,
            Self::Stroke => 1,
            Self::Splatter => 2,
            Self::Spiral => 3,
            Self::Wave => 4,
            Self::Cloud => 5,
        }
    }

    pub fn render<S: MarkSink + ?Sized>(
        self,
        sink: &mut S,
        params: &MarkParams,
        rng: &mut SeededStream,
    ) {
        match self {
            Self::Blob => render_blob(sink, params, rng),
            Self::Stroke => render_stroke(sink, params, rng),
            Self::Splatter => render_splatter(sink, params, rng),
            Self::Spiral => render_spiral(sink, params, rng),
            Self::Wave => render_wave(sink, params, rng),
            Self::Cloud => render_cloud(sink, params, rng),
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry and color of one row's mark, derived from its normalized vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkParams {
    pub center: Point,
    pub size: f64,
    pub angle_deg: f64,
    /// Stroke width in whole pixels.
    pub width: f64,
    pub vigor: f64,
    /// Control-point offsets in [0,1]; 0.5 is centered.
    pub ctrl: (f64, f64),
    /// Spiral turn fraction in [0,1].
    pub turns: f64,
    pub color: Rgb8,
}

impl MarkParams {
    pub fn from_normalized(norm: &NormalizedRow, canvas: CanvasSize, color: Rgb8) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        Self {
            center: Point::new(
                w * 0.2 + norm.get(NormalizedRow::X) * (w * 0.6),
                h * 0.2 + norm.get(NormalizedRow::Y) * (h * 0.6),
            ),
            size: 30.0 + norm.get(NormalizedRow::SIZE) * 220.0,
            angle_deg: norm.get(NormalizedRow::ANGLE) * 360.0,
            width: 3.0 + (norm.get(NormalizedRow::WIDTH) * 20.0).floor(),
            vigor: norm.get(NormalizedRow::VIGOR),
            ctrl: (
                norm.get(NormalizedRow::CTRL_X),
                norm.get(NormalizedRow::CTRL_Y),
            ),
            turns: norm.get(NormalizedRow::TURNS),
            color,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/mod.rs"]
mod tests;
